//! Column descriptors
//!
//! A column descriptor declares how to extract, label, and order one field of
//! an entity for tabular display. Descriptors are supplied per entity type and
//! are immutable for the lifetime of a screen.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

/// The value vocabulary a column accessor can produce
///
/// Every cell is one of these; comparisons and string rendering are defined
/// here so FilterEngine and SortEngine never inspect entity types directly.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

impl CellValue {
    /// Total ordering used by SortEngine
    ///
    /// Rules:
    /// - numeric values (Int/Float) compare numerically, cross-kind included
    /// - Date/Timestamp compare by timestamp (a Date is midnight UTC)
    /// - Text compares case-sensitively by code point
    /// - Null sorts before any value
    /// - remaining cross-kind pairs fall back to a fixed kind rank
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,

            (Bool(a), Bool(b)) => a.cmp(b),

            (Int(a), Int(b)) => a.cmp(b),
            (Int(a), Float(b)) => compare_f64(*a as f64, *b),
            (Float(a), Int(b)) => compare_f64(*a, *b as f64),
            (Float(a), Float(b)) => compare_f64(*a, *b),

            (Text(a), Text(b)) => a.cmp(b),

            (Date(a), Date(b)) => a.cmp(b),
            (Timestamp(a), Timestamp(b)) => a.cmp(b),
            (Date(a), Timestamp(b)) => day_start(*a).cmp(b),
            (Timestamp(a), Date(b)) => a.cmp(&day_start(*b)),

            // Mixed kinds within one column should not happen; rank by kind
            // so the sort stays total and deterministic
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    /// Day-granularity view of the value, used by date-range filters
    ///
    /// Text values are parsed as RFC 3339 or `%Y-%m-%d`; anything else that
    /// is not a date yields `None` (a range filter with a bound set then
    /// excludes the record rather than erroring).
    pub fn as_day(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            CellValue::Timestamp(ts) => Some(ts.date_naive()),
            CellValue::Text(s) => parse_day(s),
            _ => None,
        }
    }

    /// String form used by equality filters and plain rendering
    pub fn render(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(n) => n.to_string(),
            CellValue::Float(x) => x.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Timestamp(ts) => ts.to_rfc3339(),
        }
    }

    /// Fixed rank for cross-kind comparisons
    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) | CellValue::Float(_) => 2,
            CellValue::Text(_) => 3,
            CellValue::Date(_) | CellValue::Timestamp(_) => 4,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// NaN-safe float comparison (NaN compares equal to everything rather than
/// poisoning the sort)
fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn day_start(day: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(day.and_hms_opt(0, 0, 0).unwrap_or_default(), Utc)
}

/// Parse a day from text: RFC 3339 first, then plain `%Y-%m-%d`
pub(crate) fn parse_day(s: &str) -> Option<NaiveDate> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Describes one column of an entity grid
///
/// `accessor` extracts the cell value from a record — either a direct field
/// read or a derived computation. `sortable` gates SortEngine: a sort state
/// naming an unsortable column leaves the input order untouched.
#[derive(Clone)]
pub struct ColumnDescriptor<E> {
    /// Stable column id, referenced by filter and sort state
    pub id: String,

    /// Display label
    pub header: String,

    /// Field accessor (direct key or derived function)
    pub accessor: Arc<dyn Fn(&E) -> CellValue + Send + Sync>,

    /// Whether SortEngine may order by this column
    pub sortable: bool,
}

impl<E> ColumnDescriptor<E> {
    /// Create a sortable column
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&E) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: Arc::new(accessor),
            sortable: true,
        }
    }

    /// Mark the column as not sortable (render-only columns, action columns)
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Extract this column's value from a record
    pub fn value_of(&self, record: &E) -> CellValue {
        (self.accessor)(record)
    }
}

impl<E> fmt::Debug for ColumnDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .finish()
    }
}

/// Find a column by id in a descriptor list
pub(crate) fn find_column<'a, E>(
    columns: &'a [ColumnDescriptor<E>],
    id: &str,
) -> Option<&'a ColumnDescriptor<E>> {
    columns.iter().find(|c| c.id == id)
}
