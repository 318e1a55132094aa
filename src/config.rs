//! Configuration for GridStore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::store::envelope::SCHEMA_VERSION;

/// Main configuration for a GridStore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for persisted collections (file backend only)
    /// Internal structure:
    ///   {data_dir}/
    ///     └── {namespace}_{collection}.grid   (one envelope per entity type)
    pub data_dir: PathBuf,

    /// Prefix for every persisted key, so unrelated applications sharing a
    /// store cannot collide
    pub namespace: String,

    // -------------------------------------------------------------------------
    // Envelope Configuration
    // -------------------------------------------------------------------------
    /// Schema version written into every envelope and compared on load.
    /// Bump this whenever the record shape changes incompatibly; stale
    /// envelopes are discarded and reseeded rather than migrated.
    pub schema_version: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./gridstore_data"),
            namespace: "gridstore".to_string(),
            schema_version: SCHEMA_VERSION,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for persisted collections)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the key namespace prefix
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    /// Set the schema version stamped into envelopes
    pub fn schema_version(mut self, version: u32) -> Self {
        self.config.schema_version = version;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
