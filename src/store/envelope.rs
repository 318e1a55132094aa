//! Persisted envelope codec
//!
//! Every collection is stored as one envelope:
//!
//! ```text
//! ┌──────────┬────────────────┬───────────┬──────────────────────┐
//! │ magic u32│ schema_ver u32 │ crc32 u32 │ bincode Vec<E> bytes │
//! └──────────┴────────────────┴───────────┴──────────────────────┘
//! ```
//!
//! All header fields little-endian. The CRC covers the payload bytes only.
//! Any header or payload defect decodes to `StorageCorrupt`, which the
//! adapter resolves by reseeding — envelopes are never migrated in place.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{GridError, Result};

/// Magic bytes "GRID" identifying an envelope
pub const MAGIC: u32 = 0x4752_4944;

/// Current envelope schema version
///
/// Bump whenever a persisted record shape changes incompatibly; old
/// envelopes then reseed instead of deserializing garbage.
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in bytes: magic + version + crc
pub const HEADER_SIZE: usize = 12;

/// Serialize a collection into an envelope
pub fn encode<E: Serialize>(schema_version: u32, records: &[E]) -> Result<Vec<u8>> {
    let payload =
        bincode::serialize(records).map_err(|e| GridError::Serialization(e.to_string()))?;

    let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
    bytes.extend_from_slice(&MAGIC.to_le_bytes());
    bytes.extend_from_slice(&schema_version.to_le_bytes());
    bytes.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
    bytes.extend_from_slice(&payload);

    Ok(bytes)
}

/// Deserialize an envelope, verifying magic, version, and checksum
///
/// Errors distinguish the defect (truncated, bad magic, version mismatch,
/// checksum mismatch, undecodable payload) so reseed events log a reason.
pub fn decode<E: DeserializeOwned>(expected_version: u32, bytes: &[u8]) -> Result<Vec<E>> {
    // Step 1: Header must be complete
    if bytes.len() < HEADER_SIZE {
        return Err(GridError::StorageCorrupt(format!(
            "envelope truncated: {} bytes, need at least {}",
            bytes.len(),
            HEADER_SIZE
        )));
    }

    let magic = u32::from_le_bytes(bytes[0..4].try_into().unwrap_or_default());
    let version = u32::from_le_bytes(bytes[4..8].try_into().unwrap_or_default());
    let stored_crc = u32::from_le_bytes(bytes[8..12].try_into().unwrap_or_default());
    let payload = &bytes[HEADER_SIZE..];

    // Step 2: Magic identifies the format
    if magic != MAGIC {
        return Err(GridError::StorageCorrupt(format!(
            "bad magic: 0x{:08x}",
            magic
        )));
    }

    // Step 3: Version mismatch = stale shape, reseed rather than migrate
    if version != expected_version {
        return Err(GridError::StorageCorrupt(format!(
            "schema version {} does not match expected {}",
            version, expected_version
        )));
    }

    // Step 4: Checksum guards against torn or bit-rotted payloads
    let actual_crc = crc32fast::hash(payload);
    if actual_crc != stored_crc {
        return Err(GridError::StorageCorrupt(format!(
            "checksum mismatch: stored 0x{:08x}, computed 0x{:08x}",
            stored_crc, actual_crc
        )));
    }

    // Step 5: Decode the record sequence
    bincode::deserialize(payload)
        .map_err(|e| GridError::StorageCorrupt(format!("payload undecodable: {}", e)))
}
