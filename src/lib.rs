//! # GridStore
//!
//! A generic data-grid engine with versioned client-side persistence:
//! - Typed entity collections with column descriptors
//! - Free-text search, column filters, date ranges
//! - Stable single-column sorting
//! - Row selection and staged batch deletion
//! - Write-through persistence with reseed-on-corruption
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Entity Screen                            │
//! │            (forms, dialogs, rendered rows)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    GridEngine                                │
//! │        (read / mutate / staged-delete cycle)                 │
//! └───────┬──────────────┬──────────────┬───────────────────────┘
//!         │              │              │
//!         ▼              ▼              ▼
//!  ┌─────────────┐ ┌───────────┐ ┌─────────────┐
//!  │ FilterEngine│ │ SortEngine│ │  Selection  │
//!  │   (pure)    │ │  (stable) │ │ Controller  │
//!  └─────────────┘ └───────────┘ └─────────────┘
//!         │
//!         ▼
//!  ┌──────────────────────────────┐
//!  │       StorageAdapter         │
//!  │ (versioned envelope + seed)  │
//!  └──────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod entity;
pub mod column;
pub mod store;
pub mod filter;
pub mod sort;
pub mod select;
pub mod engine;
pub mod sample;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GridError, Result};
pub use config::Config;
pub use entity::{Entity, EntityId};
pub use column::{CellValue, ColumnDescriptor};
pub use store::{FileBackend, MemoryBackend, NullBackend, StorageAdapter, StoreBackend};
pub use filter::{ColumnFilter, FilterState};
pub use sort::{SortDirection, SortState};
pub use select::SelectionController;
pub use engine::{ConfirmPrompt, DeleteFlow, GridEngine, LifecycleRule};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of GridStore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
