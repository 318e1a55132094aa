//! Storage Adapter
//!
//! Versioned read/write of one entity collection under a namespaced key.
//!
//! ## Responsibilities
//! - Load a collection, seeding when the store is absent, empty, or stale
//! - Write the full collection through on every mutation
//! - Never let a storage failure escape to the caller

pub mod backend;
pub mod envelope;

use std::marker::PhantomData;

use tracing::{debug, warn};

use crate::config::Config;
use crate::entity::Entity;
use crate::error::GridError;

pub use backend::{FileBackend, MemoryBackend, NullBackend, StoreBackend};

/// Adapter between one entity collection and its persistent store
///
/// The adapter is the only component that touches bytes. Its contract to the
/// engine is deliberately infallible: `load` always produces a usable
/// collection and `save` never propagates an error — the in-memory state
/// stays the source of truth for the session, and an unsaved write may be
/// lost on next load. That limitation is accepted, not hidden: every
/// swallowed failure is logged.
pub struct StorageAdapter<E: Entity> {
    /// The backing store (file, memory, or absent)
    backend: Box<dyn StoreBackend>,

    /// Namespaced key this collection lives under
    key: String,

    /// Schema version stamped into envelopes and checked on load
    schema_version: u32,

    _entity: PhantomData<E>,
}

impl<E: Entity> StorageAdapter<E> {
    /// Create an adapter for `E`'s collection over the given backend
    pub fn new(backend: Box<dyn StoreBackend>, config: &Config) -> Self {
        Self {
            backend,
            key: format!("{}_{}", config.namespace, E::collection_name()),
            schema_version: config.schema_version,
            _entity: PhantomData,
        }
    }

    /// Load the collection, falling back to `seed`
    ///
    /// Decision ladder:
    /// 1. No persistent context → return `seed`, nothing written
    /// 2. Key absent → write `seed` through, return it
    /// 3. Stored envelope invalid (unreadable, bad magic/checksum, stale
    ///    schema version, or any record in a known legacy shape) → discard,
    ///    write `seed` through, return it
    /// 4. Otherwise → return the stored records verbatim, order preserved
    ///
    /// This is the only point at which the reseed-on-corruption policy
    /// applies; it self-heals silently apart from a warning log.
    pub fn load(&self, seed: Vec<E>) -> Vec<E> {
        // Step 1: Absent client runtime — serve the seed, never write
        if !self.backend.is_persistent() {
            debug!(key = %self.key, "no persistent store, serving seed");
            return seed;
        }

        // Step 2: Read whatever is stored under the key
        let stored = match self.backend.read(&self.key) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(key = %self.key, error = %e, "store read failed, reseeding");
                self.save(&seed);
                return seed;
            }
        };

        let Some(bytes) = stored else {
            // Step 3: First visit — seed the store
            debug!(key = %self.key, records = seed.len(), "empty store, seeding");
            self.save(&seed);
            return seed;
        };

        // Step 4: Decode and vet the stored collection
        match envelope::decode::<E>(self.schema_version, &bytes) {
            Ok(records) => {
                if records.iter().any(Entity::is_legacy_shape) {
                    warn!(key = %self.key, "legacy record shape detected, reseeding");
                    self.save(&seed);
                    return seed;
                }
                debug!(key = %self.key, records = records.len(), "loaded stored collection");
                records
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored collection invalid, reseeding");
                self.save(&seed);
                seed
            }
        }
    }

    /// Write the full collection through
    ///
    /// Always a complete overwrite — callers pass the entire desired
    /// collection, never a patch. Serialization and store failures are
    /// logged and swallowed; the caller's in-memory collection remains
    /// authoritative for the session.
    pub fn save(&self, records: &[E]) {
        if !self.backend.is_persistent() {
            return;
        }

        let bytes = match envelope::encode(self.schema_version, records) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(key = %self.key, error = %e, "collection serialization failed, write skipped");
                return;
            }
        };

        if let Err(e) = self.backend.write(&self.key, &bytes) {
            let e = GridError::WriteFailure(e.to_string());
            warn!(key = %self.key, error = %e, "store write failed, in-memory state unsaved");
        }
    }

    /// Drop the persisted value entirely (next load reseeds)
    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(&self.key) {
            warn!(key = %self.key, error = %e, "store clear failed");
        }
    }

    /// The namespaced key this collection persists under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a persistent context exists at all
    pub fn is_persistent(&self) -> bool {
        self.backend.is_persistent()
    }
}
