//! Tests for the SelectionController
//!
//! These tests verify:
//! - Toggle semantics for single rows and visible sets
//! - Selections outside the visible set surviving a toggle-all
//! - Pruning against the surviving collection

use std::collections::BTreeSet;

use gridstore::{EntityId, SelectionController};

fn id(n: i64) -> EntityId {
    EntityId::Int(n)
}

// =============================================================================
// Toggle Semantics
// =============================================================================

#[test]
fn test_toggle_flips_membership() {
    let mut selection = SelectionController::new();

    selection.toggle(id(1));
    assert!(selection.is_selected(&id(1)));
    assert_eq!(selection.count(), 1);

    selection.toggle(id(1));
    assert!(!selection.is_selected(&id(1)));
    assert!(selection.is_empty());
}

#[test]
fn test_toggle_all_selects_exactly_the_visible_ids() {
    let mut selection = SelectionController::new();

    selection.toggle_all([id(1), id(2), id(3)], true);
    assert_eq!(selection.count(), 3);

    selection.toggle_all([id(2)], false);
    assert!(selection.is_selected(&id(1)));
    assert!(!selection.is_selected(&id(2)));
    assert!(selection.is_selected(&id(3)));
}

#[test]
fn test_toggle_all_leaves_hidden_selections_untouched() {
    let mut selection = SelectionController::new();

    // Row 7 was selected under an earlier filter and is hidden now
    selection.toggle(id(7));

    // Deselect-all over the currently visible rows 1..3
    selection.toggle_all([id(1), id(2), id(3)], false);
    assert!(selection.is_selected(&id(7)));

    // Select-all over the visible rows adds them without dropping 7
    selection.toggle_all([id(1), id(2)], true);
    assert_eq!(selection.count(), 3);
}

#[test]
fn test_clear_drops_everything() {
    let mut selection = SelectionController::new();
    selection.toggle_all([id(1), id(2)], true);

    selection.clear();
    assert!(selection.is_empty());
}

// =============================================================================
// Pruning
// =============================================================================

#[test]
fn test_retain_intersects_with_valid_ids() {
    let mut selection = SelectionController::new();
    selection.toggle_all([id(1), id(2), id(3)], true);

    // Rows 2 and 3 were deleted from the collection
    let remaining: BTreeSet<EntityId> = [id(1), id(4)].into_iter().collect();
    selection.retain(&remaining);

    let expected: BTreeSet<EntityId> = [id(1)].into_iter().collect();
    assert_eq!(selection.selected(), &expected);
}

#[test]
fn test_retain_against_empty_collection_empties_selection() {
    let mut selection = SelectionController::new();
    selection.toggle_all([id(1), id(2)], true);

    selection.retain(&BTreeSet::new());
    assert!(selection.is_empty());
}

#[test]
fn test_text_and_int_ids_coexist() {
    let mut selection = SelectionController::new();
    selection.toggle(EntityId::Int(1));
    selection.toggle(EntityId::Text("u-1".to_string()));

    assert_eq!(selection.count(), 2);
    assert!(selection.is_selected(&EntityId::Text("u-1".to_string())));
}
