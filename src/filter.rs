//! Filter Engine
//!
//! Pure predicates deciding whether a record belongs to the visible set.
//!
//! A record is visible iff it passes the global free-text query AND every
//! active column filter (logical AND across all non-empty filters). Filters
//! never mutate records and never error: a value that cannot be interpreted
//! for a filter simply fails that filter.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::column::{find_column, CellValue, ColumnDescriptor};
use crate::entity::Entity;

/// Wildcard equality value meaning "no constraint"
const MATCH_ALL: &str = "all";

/// One column-scoped filter
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnFilter {
    /// Categorical equality against the cell's string form; empty or `"all"`
    /// imposes no constraint
    Equals(String),

    /// Inclusive day-granularity range; an absent bound imposes no
    /// constraint on that side
    DateRange {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl ColumnFilter {
    /// Whether the filter actually constrains anything
    pub fn is_active(&self) -> bool {
        match self {
            Self::Equals(v) => !v.is_empty() && v != MATCH_ALL,
            Self::DateRange { start, end } => start.is_some() || end.is_some(),
        }
    }
}

/// The full filter state of one screen
///
/// Held explicitly by the owning screen and passed into `view` — the engine
/// keeps no hidden filter state between calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free-text query matched case-insensitively against each record's
    /// searchable fields
    pub query: String,

    /// Column-scoped filters keyed by column id (keys unique, order
    /// irrelevant)
    pub columns: BTreeMap<String, ColumnFilter>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the global query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set or replace one column filter
    pub fn with_column(mut self, column_id: impl Into<String>, filter: ColumnFilter) -> Self {
        self.columns.insert(column_id.into(), filter);
        self
    }

    /// Drop one column filter
    pub fn clear_column(&mut self, column_id: &str) {
        self.columns.remove(column_id);
    }

    /// Whether any constraint is active at all
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.columns.values().any(ColumnFilter::is_active)
    }
}

/// Does the record match the global free-text query?
///
/// An empty query matches everything; otherwise any searchable field
/// containing the query case-insensitively matches.
pub fn matches_query<E: Entity>(record: &E, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    record
        .search_haystack()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Does a cell value satisfy one column filter?
pub fn matches_column(value: &CellValue, filter: &ColumnFilter) -> bool {
    if !filter.is_active() {
        return true;
    }

    match filter {
        ColumnFilter::Equals(expected) => value.render() == *expected,

        ColumnFilter::DateRange { start, end } => {
            // A bound is set but the record value is not a date → excluded
            let Some(day) = value.as_day() else {
                return false;
            };

            if let Some(start) = start {
                if day < *start {
                    return false;
                }
            }
            if let Some(end) = end {
                if day > *end {
                    return false;
                }
            }
            true
        }
    }
}

/// Does the record pass the full filter state?
///
/// A filter referencing a column id with no descriptor cannot be evaluated
/// and imposes no constraint.
pub fn matches<E: Entity>(
    record: &E,
    columns: &[ColumnDescriptor<E>],
    state: &FilterState,
) -> bool {
    if !matches_query(record, &state.query) {
        return false;
    }

    state.columns.iter().all(|(column_id, filter)| {
        match find_column(columns, column_id) {
            Some(column) => matches_column(&column.value_of(record), filter),
            None => true,
        }
    })
}

/// Produce the visible subset of a collection, order preserved
///
/// Pure: the input collection is not mutated and every included record is a
/// clone of the original, field for field.
pub fn apply<E: Entity>(
    collection: &[E],
    columns: &[ColumnDescriptor<E>],
    state: &FilterState,
) -> Vec<E> {
    collection
        .iter()
        .filter(|record| matches(*record, columns, state))
        .cloned()
        .collect()
}
