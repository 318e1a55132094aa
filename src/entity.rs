//! Entity contract
//!
//! Every collection managed by the grid is a sequence of records implementing
//! [`Entity`]. Identity is by `id` equality; records are otherwise plain value
//! objects.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Unique, stable record identifier
///
/// Generated ids are integer unix-millis (see
/// [`GridEngine::add`](crate::engine::GridEngine::add)); string ids exist for
/// collections whose records are keyed externally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl EntityId {
    /// Sentinel check: a record carrying `Int(0)` or an empty `Text` id has
    /// not been assigned an id yet and gets a generated one on `add`
    pub fn is_unassigned(&self) -> bool {
        match self {
            Self::Int(n) => *n == 0,
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Contract every grid-managed record type implements
///
/// ## Responsibilities of an implementation
/// - stable identity via `id`/`set_id`
/// - the searchable text fields for the global query
/// - an optional known-bad-shape check driving the reseed policy
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Name of the collection; becomes part of the persisted key
    /// (`{namespace}_{collection_name}.grid` for the file backend)
    fn collection_name() -> &'static str;

    /// The record's unique id
    fn id(&self) -> EntityId;

    /// Assign the record's id (used when `add` generates one)
    fn set_id(&mut self, id: EntityId);

    /// String form of the fields the global free-text query searches
    fn search_haystack(&self) -> Vec<String>;

    /// Detect a record persisted under a retired shape convention
    ///
    /// A stored collection containing any such record is discarded and
    /// reseeded on load, exactly like a schema-version mismatch. Default:
    /// no legacy shapes exist for this entity type.
    fn is_legacy_shape(&self) -> bool {
        false
    }

    /// Validate a user-entered record before it reaches the engine
    ///
    /// Forms surface the error synchronously; invalid records must not reach
    /// the storage layer. Default: every record is valid.
    fn validate(&self) -> crate::error::Result<()> {
        Ok(())
    }
}
