//! Selection Controller
//!
//! Row-selection bookkeeping decoupled from the currently visible
//! (filtered/sorted/paginated) subset.
//!
//! Invariant: the selected set is always a subset of the ids present in the
//! unfiltered collection. The engine calls [`SelectionController::retain`]
//! after every collection mutation, so dangling selected ids never survive.

use std::collections::BTreeSet;

use crate::entity::EntityId;

/// Tracks which rows are marked, independent of pagination
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: BTreeSet<EntityId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one row's selection
    pub fn toggle(&mut self, id: EntityId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Select or deselect exactly the currently visible ids
    ///
    /// Selections outside the visible set are left untouched — a "select
    /// all" on a filtered view must not clear marks on rows the filter
    /// hides.
    pub fn toggle_all<I>(&mut self, visible_ids: I, value: bool)
    where
        I: IntoIterator<Item = EntityId>,
    {
        for id in visible_ids {
            if value {
                self.selected.insert(id);
            } else {
                self.selected.remove(&id);
            }
        }
    }

    /// Drop every selection
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Intersect the selection with the ids still present in the collection
    pub fn retain(&mut self, valid_ids: &BTreeSet<EntityId>) {
        self.selected.retain(|id| valid_ids.contains(id));
    }

    /// Whether a row is selected
    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.selected.contains(id)
    }

    /// The selected ids
    pub fn selected(&self) -> &BTreeSet<EntityId> {
        &self.selected
    }

    /// Number of selected rows
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
