//! Store backends
//!
//! The grid persists to a client-scoped key-value store that may not exist at
//! all (server-side render, headless test). Backends hide that difference:
//! the adapter asks `is_persistent()` once and degrades to seed data when the
//! answer is no.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::Result;

/// Raw byte-level access to one persistent store
///
/// Keys are opaque namespaced strings; values are whole serialized envelopes.
/// Writes are full overwrites — a backend never sees partial updates.
pub trait StoreBackend: Send + Sync {
    /// Whether writes survive at all; `false` means load returns the seed
    /// untouched and save is a no-op
    fn is_persistent(&self) -> bool;

    /// Read the value under `key`, `None` if absent
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write the full value under `key`
    fn write(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Remove the value under `key` (absent key is not an error)
    fn remove(&self, key: &str) -> Result<()>;
}

// =============================================================================
// File Backend
// =============================================================================

/// File-per-collection backend
///
/// Layout: `{data_dir}/{key}.grid`, one envelope file per entity collection.
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    /// Open or create the backing directory
    pub fn open(path: &Path) -> Result<Self> {
        fs::create_dir_all(path)?;
        Ok(Self {
            data_dir: path.to_path_buf(),
        })
    }

    /// Generate the file path for a key
    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.grid", key))
    }

    /// Get the backing directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl StoreBackend for FileBackend {
    fn is_persistent(&self) -> bool {
        true
    }

    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.key_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        // Write to a sibling temp file, then rename: the envelope on disk is
        // always either the old or the new complete value
        let path = self.key_path(key);
        let tmp = path.with_extension("grid.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Memory Backend
// =============================================================================

/// In-memory backend (session-scoped persistence, tests)
///
/// Concurrency: the map sits behind a `parking_lot::RwLock`; reads are
/// concurrent, writes exclusive.
#[derive(Default)]
pub struct MemoryBackend {
    values: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys (for testing/debugging)
    pub fn key_count(&self) -> usize {
        self.values.read().len()
    }
}

impl StoreBackend for MemoryBackend {
    fn is_persistent(&self) -> bool {
        true
    }

    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.values.write().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.write().remove(key);
        Ok(())
    }
}

// =============================================================================
// Null Backend
// =============================================================================

/// The "no client runtime" backend
///
/// Models executing outside a browser-like environment: nothing is readable,
/// nothing is written, and the adapter serves the seed collection untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl StoreBackend for NullBackend {
    fn is_persistent(&self) -> bool {
        false
    }

    fn read(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn write(&self, _key: &str, _bytes: &[u8]) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}
