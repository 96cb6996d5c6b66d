//! # List Store
//!
//! Owns the ordered list of [`ShoppingItem`]s and provides the only legal
//! mutation paths.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    List Store Operations                                │
//! │                                                                         │
//! │  User Action              Intent                  State Change          │
//! │  ───────────              ──────                  ────────────          │
//! │                                                                         │
//! │  Submit text ───────────► Add(name) ────────────► items.push(item)     │
//! │                           (blank? ignored)                             │
//! │                                                                         │
//! │  Tap item ──────────────► Toggle(id) ───────────► completed = !completed│
//! │                           (unknown? ignored)                           │
//! │                                                                         │
//! │  Confirm delete ────────► Delete(id) ───────────► items.remove(i)      │
//! │                           (unknown? ignored)                           │
//! │                                                                         │
//! │  Render ────────────────► items() / summary() ──► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use shoplist_core::{IdStrategy, ListStore, ListSummary};
//!
//! let mut store = ListStore::new(IdStrategy::Sequential);
//! let milk = store.add("Milk").unwrap().id.clone();
//! let eggs = store.add("Eggs").unwrap().id.clone();
//!
//! store.toggle(&eggs);
//! store.delete(&milk);
//!
//! assert_eq!(store.items()[0].name, "Eggs");
//! assert_eq!(store.summary(), ListSummary { remaining: 0, total: 1 });
//! ```

use serde::{Deserialize, Serialize};

use crate::ids::{IdGenerator, IdStrategy};
use crate::types::{ItemId, ListSummary, ShoppingItem};
use crate::validation::normalize_item_name;

// =============================================================================
// Intents & Outcomes
// =============================================================================

/// A user action forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Intent {
    /// Submit the input buffer as a new item.
    Add(String),
    /// Flip the completed flag of an item.
    Toggle(ItemId),
    /// Remove an item. Only dispatch after the user confirmed.
    Delete(ItemId),
}

/// Result of dispatching an [`Intent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new item was appended.
    Added(ItemId),
    /// An item's completed flag changed to `completed`.
    Toggled { id: ItemId, completed: bool },
    /// An item was removed.
    Deleted(ItemId),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl Outcome {
    /// True if the list changed.
    #[inline]
    pub fn is_applied(&self) -> bool {
        !matches!(self, Outcome::Ignored(_))
    }
}

/// Why an intent left the list untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The name was empty or whitespace only.
    BlankName,
    /// No item with this id (stale reference from the UI).
    UnknownId(ItemId),
}

// =============================================================================
// List Store
// =============================================================================

/// The in-memory shopping list.
///
/// ## Invariants
/// - Item ids are unique for the lifetime of the store
/// - Names are trimmed and never blank
/// - Insertion order is kept; deletion preserves the order of the rest
#[derive(Debug, Clone, Default)]
pub struct ListStore {
    items: Vec<ShoppingItem>,
    ids: IdGenerator,
}

impl ListStore {
    /// Creates an empty store handing out ids of the given kind.
    pub fn new(strategy: IdStrategy) -> Self {
        ListStore {
            items: Vec::new(),
            ids: IdGenerator::new(strategy),
        }
    }

    /// Applies an intent and reports what happened.
    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::Add(raw) => match self.add(&raw) {
                Some(item) => Outcome::Added(item.id.clone()),
                None => Outcome::Ignored(IgnoreReason::BlankName),
            },
            Intent::Toggle(id) => match self.toggle(&id) {
                Some(completed) => Outcome::Toggled { id, completed },
                None => Outcome::Ignored(IgnoreReason::UnknownId(id)),
            },
            Intent::Delete(id) => match self.delete(&id) {
                Some(removed) => Outcome::Deleted(removed.id),
                None => Outcome::Ignored(IgnoreReason::UnknownId(id)),
            },
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends a new item named after the trimmed input.
    ///
    /// Returns `None` (and changes nothing) if the input is blank.
    pub fn add(&mut self, raw_name: &str) -> Option<&ShoppingItem> {
        let name = normalize_item_name(raw_name)?;
        let id = self.fresh_id();

        self.items.push(ShoppingItem::new(id, name));
        self.items.last()
    }

    /// Flips `completed` on the matching item.
    ///
    /// Returns the new value, or `None` if no item has this id.
    pub fn toggle(&mut self, id: &ItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|i| &i.id == id)?;
        item.completed = !item.completed;
        Some(item.completed)
    }

    /// Removes the matching item, keeping the order of the others.
    ///
    /// Returns the removed item, or `None` if no item has this id.
    pub fn delete(&mut self, id: &ItemId) -> Option<ShoppingItem> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Items in display order.
    #[inline]
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Remaining/total counts, computed from the current items.
    pub fn summary(&self) -> ListSummary {
        ListSummary {
            remaining: self.items.iter().filter(|i| !i.completed).count(),
            total: self.items.len(),
        }
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Zero-based index of an item.
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == id)
    }

    /// Id of the item shown at a one-based position.
    pub fn id_at(&self, position: usize) -> Option<&ItemId> {
        position
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
            .map(|item| &item.id)
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the list has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draws ids until one is not in use.
    fn fresh_id(&mut self) -> ItemId {
        loop {
            let id = self.ids.next_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
