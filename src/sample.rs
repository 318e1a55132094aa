//! Sample entity wiring
//!
//! A complete reference wiring of one admin screen's data layer: an article
//! record, its column descriptors, seed collection, and lifecycle rule. The
//! demo binary, tests, and benches all run against this; library consumers
//! define their own entity types the same way.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::column::{CellValue, ColumnDescriptor};
use crate::engine::LifecycleRule;
use crate::entity::{Entity, EntityId};
use crate::error::{GridError, Result};

/// Retired static-asset prefix; stored collections still referencing it are
/// from a previous schema and trigger a reseed
const LEGACY_ASSET_PREFIX: &str = "/static/legacy/";

/// An article as managed by the articles screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub author: String,

    /// Foreign-key-like references; opaque to the storage layer, not
    /// validated against the categories collection
    pub category_ids: Vec<i64>,

    /// Cover image path or URL
    pub cover_image: String,

    pub views: u64,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Article {
    fn collection_name() -> &'static str {
        "articles"
    }

    fn id(&self) -> EntityId {
        EntityId::Int(self.id)
    }

    fn set_id(&mut self, id: EntityId) {
        if let EntityId::Int(n) = id {
            self.id = n;
        }
    }

    fn search_haystack(&self) -> Vec<String> {
        vec![self.title.clone(), self.author.clone()]
    }

    fn is_legacy_shape(&self) -> bool {
        self.cover_image.starts_with(LEGACY_ASSET_PREFIX)
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(GridError::Validation("title is required".to_string()));
        }
        if self.author.trim().is_empty() {
            return Err(GridError::Validation("author is required".to_string()));
        }
        Ok(())
    }
}

/// Column descriptors for the articles grid
pub fn article_columns() -> Vec<ColumnDescriptor<Article>> {
    vec![
        ColumnDescriptor::new("id", "ID", |a: &Article| CellValue::Int(a.id)),
        ColumnDescriptor::new("title", "Title", |a: &Article| {
            CellValue::Text(a.title.clone())
        }),
        ColumnDescriptor::new("author", "Author", |a: &Article| {
            CellValue::Text(a.author.clone())
        }),
        ColumnDescriptor::new("views", "Views", |a: &Article| CellValue::Int(a.views as i64)),
        ColumnDescriptor::new("published", "Published", |a: &Article| {
            CellValue::Bool(a.published)
        }),
        ColumnDescriptor::new("published_at", "Published At", |a: &Article| {
            a.published_at.map_or(CellValue::Null, CellValue::Timestamp)
        }),
        ColumnDescriptor::new("created_at", "Created At", |a: &Article| {
            CellValue::Timestamp(a.created_at)
        }),
        // Derived column: category count, display-only
        ColumnDescriptor::new("categories", "Categories", |a: &Article| {
            CellValue::Int(a.category_ids.len() as i64)
        })
        .unsortable(),
    ]
}

/// The publish flag drives `published_at`
pub fn article_lifecycle() -> LifecycleRule<Article> {
    LifecycleRule {
        flag: |a| a.published,
        stamp: |a, ts| a.published_at = ts,
    }
}

/// Static seed collection used when no valid persisted collection exists
pub fn article_seed() -> Vec<Article> {
    vec![
        Article {
            id: 1,
            title: "Grid engines in practice".to_string(),
            author: "Mara Voss".to_string(),
            category_ids: vec![1, 3],
            cover_image: "/media/covers/grid-engines.jpg".to_string(),
            views: 412,
            published: true,
            published_at: Some(ts(2024, 2, 10, 9, 30)),
            created_at: ts(2024, 2, 1, 8, 0),
            updated_at: ts(2024, 2, 10, 9, 30),
        },
        Article {
            id: 2,
            title: "Write-through persistence".to_string(),
            author: "Jon Arve".to_string(),
            category_ids: vec![2],
            cover_image: "/media/covers/write-through.jpg".to_string(),
            views: 958,
            published: true,
            published_at: Some(ts(2024, 3, 5, 14, 0)),
            created_at: ts(2024, 3, 1, 10, 15),
            updated_at: ts(2024, 3, 5, 14, 0),
        },
        Article {
            id: 3,
            title: "Draft: schema versioning notes".to_string(),
            author: "Mara Voss".to_string(),
            category_ids: vec![],
            cover_image: "/media/covers/versioning.jpg".to_string(),
            views: 37,
            published: false,
            published_at: None,
            created_at: ts(2024, 4, 20, 16, 45),
            updated_at: ts(2024, 4, 20, 16, 45),
        },
    ]
}

/// Fixed timestamp helper for the seed
fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}
