//! Grid Engine
//!
//! The public contract every entity screen consumes.
//!
//! ## Responsibilities
//! - Coordinate StorageAdapter, FilterEngine, SortEngine, SelectionController
//! - Apply the per-entity lifecycle rule on mutation
//! - Run the staged-deletion state machine
//! - Write every mutation through to the store

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::column::ColumnDescriptor;
use crate::entity::{Entity, EntityId};
use crate::filter::{self, FilterState};
use crate::select::SelectionController;
use crate::sort::{self, SortState};
use crate::store::StorageAdapter;

/// A dependent-timestamp rule applied uniformly by `mutate`
///
/// Declares a boolean lifecycle flag and the timestamp field it drives
/// (publish flag → publish timestamp being the canonical case). On an update
/// that flips the flag false→true the timestamp is set to now; true→false
/// clears it; no change leaves it untouched.
pub struct LifecycleRule<E> {
    /// Read the lifecycle flag
    pub flag: fn(&E) -> bool,

    /// Write the dependent timestamp
    pub stamp: fn(&mut E, Option<DateTime<Utc>>),
}

/// Payload the engine emits for the delete-confirmation dialog
///
/// The engine never renders UI; the dialog layer shows this and calls
/// [`GridEngine::confirm_delete`] or [`GridEngine::cancel_delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub description: String,
    pub pending_count: usize,
}

/// Staged-deletion state machine
///
/// `Idle -> Staged(ids) -> {confirm -> Idle (post-removal), cancel -> Idle}`.
/// No transition removes data before confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    #[default]
    Idle,
    Staged(BTreeSet<EntityId>),
}

/// Orchestrates one entity collection's read/mutate/delete cycle
///
/// Generic over the entity type: each screen instantiates the engine with its
/// own record type and column list rather than dispatching on type tags.
/// Collections are passed in and returned by value — the engine holds
/// selection and delete-flow state, but the owning screen holds the records.
pub struct GridEngine<E: Entity> {
    /// Column descriptors, immutable for the lifetime of the screen
    columns: Vec<ColumnDescriptor<E>>,

    /// Persistence for this collection
    adapter: StorageAdapter<E>,

    /// Row-selection bookkeeping
    selection: SelectionController,

    /// Staged-deletion state
    delete_flow: DeleteFlow,

    /// Optional dependent-timestamp rule applied on mutation
    lifecycle: Option<LifecycleRule<E>>,
}

impl<E: Entity> GridEngine<E> {
    /// Create an engine over a column list and a storage adapter
    pub fn new(columns: Vec<ColumnDescriptor<E>>, adapter: StorageAdapter<E>) -> Self {
        Self {
            columns,
            adapter,
            selection: SelectionController::new(),
            delete_flow: DeleteFlow::Idle,
            lifecycle: None,
        }
    }

    /// Attach a dependent-timestamp rule
    pub fn with_lifecycle(mut self, rule: LifecycleRule<E>) -> Self {
        self.lifecycle = Some(rule);
        self
    }

    // =========================================================================
    // Read Path
    // =========================================================================

    /// Load the collection, seeding when the store is absent, empty, or stale
    ///
    /// Delegates to [`StorageAdapter::load`]; this is the only point at which
    /// the reseed-on-corruption policy applies.
    pub fn initialize(&self, seed: Vec<E>) -> Vec<E> {
        self.adapter.load(seed)
    }

    /// Compute the visible row set: filter, then sort
    ///
    /// Pure with respect to `collection` — no record is mutated and the
    /// result is always a subset of the input.
    pub fn view(&self, collection: &[E], filter: &FilterState, sort: &SortState) -> Vec<E> {
        let visible = filter::apply(collection, &self.columns, filter);
        sort::apply(visible, &self.columns, sort)
    }

    // =========================================================================
    // Mutation Path
    // =========================================================================

    /// Replace the record whose id matches `updated`, write through
    ///
    /// Applies the lifecycle rule: if the update flips the declared flag, the
    /// dependent timestamp is set (false→true) or cleared (true→false); an
    /// unchanged flag leaves it untouched. An id not present in the
    /// collection returns the collection unchanged with no write.
    pub fn mutate(&mut self, collection: Vec<E>, mut updated: E) -> Vec<E> {
        let id = updated.id();
        let Some(position) = collection.iter().position(|r| r.id() == id) else {
            debug!(id = %id, "mutate target not in collection, ignoring");
            return collection;
        };

        if let Some(rule) = &self.lifecycle {
            let flag_before = (rule.flag)(&collection[position]);
            let flag_after = (rule.flag)(&updated);
            match (flag_before, flag_after) {
                (false, true) => (rule.stamp)(&mut updated, Some(Utc::now())),
                (true, false) => (rule.stamp)(&mut updated, None),
                _ => {}
            }
        }

        let mut next = collection;
        next[position] = updated;

        self.adapter.save(&next);
        self.prune_selection(&next);
        next
    }

    /// Prepend a new record (new records sort first by convention)
    ///
    /// A record carrying the unassigned-id sentinel gets a generated id:
    /// current unix-millis, bumped past any collision. Writes through and
    /// returns the new collection.
    pub fn add(&mut self, collection: Vec<E>, mut record: E) -> Vec<E> {
        if record.id().is_unassigned() {
            record.set_id(generate_id(&collection));
        }

        let mut next = collection;
        next.insert(0, record);

        self.adapter.save(&next);
        next
    }

    /// Remove every record whose id is in `ids`, write through
    ///
    /// Idempotent on absent ids. The selection is pruned to the surviving
    /// collection.
    pub fn remove(&mut self, collection: Vec<E>, ids: &BTreeSet<EntityId>) -> Vec<E> {
        let before = collection.len();
        let next: Vec<E> = collection
            .into_iter()
            .filter(|record| !ids.contains(&record.id()))
            .collect();

        if next.len() != before {
            info!(removed = before - next.len(), remaining = next.len(), "records removed");
        }

        self.adapter.save(&next);
        self.prune_selection(&next);
        next
    }

    // =========================================================================
    // Staged Deletion
    // =========================================================================

    /// Stage ids for deletion and emit the confirmation payload
    ///
    /// Nothing is removed until [`confirm_delete`](Self::confirm_delete);
    /// restaging replaces any previously staged set.
    pub fn stage_delete(&mut self, ids: BTreeSet<EntityId>) -> ConfirmPrompt {
        let pending_count = ids.len();
        self.delete_flow = DeleteFlow::Staged(ids);

        ConfirmPrompt {
            title: "Are you sure?".to_string(),
            description: format!(
                "This will permanently remove {} record(s) from {}.",
                pending_count,
                E::collection_name()
            ),
            pending_count,
        }
    }

    /// Discard the staged ids without removing anything
    pub fn cancel_delete(&mut self) {
        self.delete_flow = DeleteFlow::Idle;
    }

    /// Remove the staged ids and return to idle
    ///
    /// With nothing staged this is a no-op returning the collection
    /// unchanged (and unwritten).
    pub fn confirm_delete(&mut self, collection: Vec<E>) -> Vec<E> {
        let DeleteFlow::Staged(ids) = std::mem::take(&mut self.delete_flow) else {
            return collection;
        };
        self.remove(collection, &ids)
    }

    /// The currently staged ids, if any
    pub fn staged(&self) -> Option<&BTreeSet<EntityId>> {
        match &self.delete_flow {
            DeleteFlow::Staged(ids) => Some(ids),
            DeleteFlow::Idle => None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Column descriptors this engine renders with
    pub fn columns(&self) -> &[ColumnDescriptor<E>] {
        &self.columns
    }

    /// Selection state (read)
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Selection state (the screen drives toggles through this)
    pub fn selection_mut(&mut self) -> &mut SelectionController {
        &mut self.selection
    }

    /// The storage adapter (for testing/debugging)
    pub fn adapter(&self) -> &StorageAdapter<E> {
        &self.adapter
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Intersect the selection with the ids present in `collection`
    fn prune_selection(&mut self, collection: &[E]) {
        let valid: BTreeSet<EntityId> = collection.iter().map(Entity::id).collect();
        self.selection.retain(&valid);
    }
}

/// Generate a unique integer id: current unix-millis, bumped past collisions
fn generate_id<E: Entity>(collection: &[E]) -> EntityId {
    let taken: BTreeSet<i64> = collection
        .iter()
        .filter_map(|record| match record.id() {
            EntityId::Int(n) => Some(n),
            EntityId::Text(_) => None,
        })
        .collect();

    let mut candidate = Utc::now().timestamp_millis();
    while taken.contains(&candidate) {
        candidate += 1;
    }

    EntityId::Int(candidate)
}
