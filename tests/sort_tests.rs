//! Tests for the SortEngine
//!
//! These tests verify:
//! - Numeric, string, and date comparators
//! - Stability on ties
//! - Direction inversion
//! - Pass-through on no/unknown/unsortable columns

use gridstore::sort::{self, SortState};
use gridstore::{CellValue, ColumnDescriptor};

// =============================================================================
// Helper Types and Functions
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: i64,
    name: String,
    views: i64,
    created: String,
}

fn row(id: i64, name: &str, views: i64, created: &str) -> Row {
    Row {
        id,
        name: name.to_string(),
        views,
        created: created.to_string(),
    }
}

fn columns() -> Vec<ColumnDescriptor<Row>> {
    vec![
        ColumnDescriptor::new("name", "Name", |r: &Row| CellValue::Text(r.name.clone())),
        ColumnDescriptor::new("views", "Views", |r: &Row| CellValue::Int(r.views)),
        ColumnDescriptor::new("created", "Created", |r: &Row| {
            match CellValue::Text(r.created.clone()).as_day() {
                Some(day) => CellValue::Date(day),
                None => CellValue::Null,
            }
        }),
        ColumnDescriptor::new("actions", "Actions", |_: &Row| CellValue::Null).unsortable(),
    ]
}

fn ids(rows: &[Row]) -> Vec<i64> {
    rows.iter().map(|r| r.id).collect()
}

// =============================================================================
// Comparators
// =============================================================================

#[test]
fn test_numeric_sort_descending() {
    // Views 5 and 9, descending: the 9-view row comes first
    let rows = vec![row(1, "a", 5, "2024-01-01"), row(2, "b", 9, "2024-01-02")];

    let sorted = sort::apply(rows, &columns(), &SortState::desc("views"));
    assert_eq!(ids(&sorted), vec![2, 1]);
}

#[test]
fn test_numeric_sort_ascending() {
    let rows = vec![row(1, "a", 9, ""), row(2, "b", 5, ""), row(3, "c", 7, "")];

    let sorted = sort::apply(rows, &columns(), &SortState::asc("views"));
    assert_eq!(ids(&sorted), vec![2, 3, 1]);
}

#[test]
fn test_string_sort_is_case_sensitive_code_point() {
    // Code-point order: uppercase letters sort before lowercase
    let rows = vec![row(1, "apple", 0, ""), row(2, "Banana", 0, ""), row(3, "cherry", 0, "")];

    let sorted = sort::apply(rows, &columns(), &SortState::asc("name"));
    assert_eq!(ids(&sorted), vec![2, 1, 3]);
}

#[test]
fn test_date_sort_by_timestamp() {
    let rows = vec![
        row(1, "a", 0, "2024-06-01"),
        row(2, "b", 0, "2023-12-31"),
        row(3, "c", 0, "2024-01-15"),
    ];

    let sorted = sort::apply(rows, &columns(), &SortState::asc("created"));
    assert_eq!(ids(&sorted), vec![2, 3, 1]);
}

#[test]
fn test_null_sorts_before_any_value() {
    let rows = vec![row(1, "a", 0, "2024-06-01"), row(2, "b", 0, "not-a-date")];

    let sorted = sort::apply(rows, &columns(), &SortState::asc("created"));
    assert_eq!(ids(&sorted), vec![2, 1]);
}

// =============================================================================
// Stability and Direction
// =============================================================================

#[test]
fn test_sort_is_stable_on_ties() {
    let rows = vec![
        row(10, "x", 5, ""),
        row(20, "y", 3, ""),
        row(30, "z", 5, ""),
        row(40, "w", 3, ""),
    ];

    let sorted = sort::apply(rows, &columns(), &SortState::asc("views"));
    // Equal keys keep their input order: 20 before 40, 10 before 30
    assert_eq!(ids(&sorted), vec![20, 40, 10, 30]);
}

#[test]
fn test_desc_is_the_reverse_ordering_not_a_reversed_vec() {
    let rows = vec![
        row(10, "x", 5, ""),
        row(20, "y", 3, ""),
        row(30, "z", 5, ""),
    ];

    let sorted = sort::apply(rows, &columns(), &SortState::desc("views"));
    // Ties still keep input order under desc (stable sort, reversed comparator)
    assert_eq!(ids(&sorted), vec![10, 30, 20]);
}

// =============================================================================
// Pass-Through Cases
// =============================================================================

#[test]
fn test_no_sort_column_preserves_input_order() {
    let rows = vec![row(3, "c", 1, ""), row(1, "a", 2, ""), row(2, "b", 3, "")];

    let sorted = sort::apply(rows.clone(), &columns(), &SortState::new());
    assert_eq!(sorted, rows);
}

#[test]
fn test_unknown_column_preserves_input_order() {
    let rows = vec![row(3, "c", 1, ""), row(1, "a", 2, "")];

    let sorted = sort::apply(rows.clone(), &columns(), &SortState::asc("missing"));
    assert_eq!(sorted, rows);
}

#[test]
fn test_unsortable_column_preserves_input_order() {
    let rows = vec![row(3, "c", 1, ""), row(1, "a", 2, "")];

    let sorted = sort::apply(rows.clone(), &columns(), &SortState::asc("actions"));
    assert_eq!(sorted, rows);
}
