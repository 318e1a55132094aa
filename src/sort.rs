//! Sort Engine
//!
//! Total ordering of the filtered set by at most one column.
//!
//! With no active sort column the input order is preserved (which is the
//! StorageAdapter order, i.e. insertion order unless a caller prepends).
//! The sort is stable: ties keep their relative order from the input.

use std::cmp::Ordering;

use crate::column::{find_column, ColumnDescriptor};

/// Sort direction
///
/// `Desc` is the inverse of the `Asc` ordering, not a separate comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Apply the direction to an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// The single active sort of one screen (no multi-column sort)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortState {
    /// Active sort column id, `None` = input order
    pub column: Option<String>,

    /// Direction applied to the column's natural ordering
    pub direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort ascending by a column
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: SortDirection::Asc,
        }
    }

    /// Sort descending by a column
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: SortDirection::Desc,
        }
    }
}

/// Order rows by the active sort column
///
/// No active column, an unknown column id, or a column marked unsortable all
/// leave the input order untouched. Otherwise rows sort stably by the
/// column's cell value — numerically for numbers, by timestamp for dates,
/// by code point for strings (see [`CellValue::compare`]).
///
/// [`CellValue::compare`]: crate::column::CellValue::compare
pub fn apply<E>(mut rows: Vec<E>, columns: &[ColumnDescriptor<E>], state: &SortState) -> Vec<E> {
    let Some(column_id) = &state.column else {
        return rows;
    };

    let Some(column) = find_column(columns, column_id) else {
        return rows;
    };

    if !column.sortable {
        return rows;
    }

    // Vec::sort_by is stable, which the tie-order contract depends on
    rows.sort_by(|a, b| {
        state
            .direction
            .apply(column.value_of(a).compare(&column.value_of(b)))
    });

    rows
}
