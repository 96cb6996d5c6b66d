//! # Domain Types
//!
//! Core domain types shared between the list store and any presentation layer.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ShoppingItem   │   │     ItemId      │   │  ListSummary    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ItemId)    │   │  opaque string  │   │  remaining      │       │
//! │  │  name           │   │  immutable      │   │  total          │       │
//! │  │  completed      │   │  never reused   │   │  (derived)      │       │
//! │  │  added_at       │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three are exported to TypeScript via `ts-rs`, so a mobile or web
//! front end renders exactly the shapes the store hands out.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Item Id
// =============================================================================

/// Opaque identifier of a shopping item.
///
/// Assigned once by the store when the item is created. Serializes as a bare
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemId(String);

impl ItemId {
    /// Wraps a raw identifier string.
    ///
    /// No validation happens here; use
    /// [`parse_item_id`](crate::validation::parse_item_id) for user input.
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Shopping Item
// =============================================================================

/// A single entry on the shopping list.
///
/// ## Invariants
/// - `id` never changes after creation
/// - `name` is trimmed and never blank; there is no rename
/// - `completed` starts out `false`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Unique identifier.
    pub id: ItemId,

    /// Display name, trimmed at creation.
    pub name: String,

    /// Whether the item has been picked up.
    pub completed: bool,

    /// When the item was added (display only, never used for identity).
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl ShoppingItem {
    /// Creates a fresh, not-yet-completed item.
    ///
    /// Callers are expected to pass an already normalized name; the store
    /// goes through [`normalize_item_name`](crate::validation::normalize_item_name)
    /// first.
    pub(crate) fn new(id: ItemId, name: String) -> Self {
        ShoppingItem {
            id,
            name,
            completed: false,
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// List Summary
// =============================================================================

/// Remaining/total counts shown under the list.
///
/// Derived on every read; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    /// Items not yet completed.
    pub remaining: usize,

    /// All items on the list.
    pub total: usize,
}

impl fmt::Display for ListSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} remaining", self.remaining, self.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
