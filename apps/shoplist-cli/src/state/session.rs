//! # Session State
//!
//! The list store for one run of the app, plus the delete confirmation
//! that sits in front of it.
//!
//! ## Delete Confirmation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  > delete 2                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  request_delete(id) ──► pending = Some(id)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Delete this item? "Eggs" [y/N]                                        │
//! │       │                                                                 │
//! │       ├── y / yes ──► confirm_delete() ──► Intent::Delete(id)          │
//! │       │                                                                 │
//! │       └── anything else ──► pending = None (nothing removed)           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store deletes unconditionally; the second explicit answer lives here.
//!
//! ## Ownership
//! Input is processed one line at a time on a single thread, so the session
//! owns its store outright. No `Mutex`, no `Arc`.

use shoplist_core::{IdStrategy, Intent, ItemId, ListStore, Outcome, ShoppingItem};
use tracing::debug;

/// One interactive session.
#[derive(Debug, Default)]
pub struct Session {
    store: ListStore,
    pending_delete: Option<ItemId>,
}

impl Session {
    /// Creates a session with an empty list.
    pub fn new(strategy: IdStrategy) -> Self {
        Session {
            store: ListStore::new(strategy),
            pending_delete: None,
        }
    }

    /// Read access to the list.
    #[inline]
    pub fn store(&self) -> &ListStore {
        &self.store
    }

    /// Forwards an intent to the store and logs the outcome.
    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        let outcome = self.store.dispatch(intent);

        match &outcome {
            Outcome::Ignored(reason) => debug!(?reason, "Intent ignored"),
            applied => debug!(outcome = ?applied, "Intent applied"),
        }

        outcome
    }

    // =========================================================================
    // Delete Confirmation
    // =========================================================================

    /// Starts the confirmation step for deleting `id`.
    ///
    /// Returns the item to ask about, or `None` if it is not on the list
    /// (stale reference; nothing to confirm).
    pub fn request_delete(&mut self, id: ItemId) -> Option<&ShoppingItem> {
        if self.store.get(&id).is_none() {
            debug!(id = %id, "Delete requested for unknown item");
            self.pending_delete = None;
            return None;
        }

        self.pending_delete = Some(id);
        self.pending_item()
    }

    /// The item awaiting confirmation, if any.
    pub fn pending_item(&self) -> Option<&ShoppingItem> {
        self.pending_delete
            .as_ref()
            .and_then(|id| self.store.get(id))
    }

    /// True while a delete is waiting for an answer.
    #[inline]
    pub fn is_confirming(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Resolves the pending confirmation with the user's answer.
    ///
    /// Returns the delete outcome when confirmed, `None` when cancelled or
    /// when nothing was pending.
    pub fn answer_delete(&mut self, answer: &str) -> Option<Outcome> {
        let id = self.pending_delete.take()?;

        if is_affirmative(answer) {
            Some(self.dispatch(Intent::Delete(id)))
        } else {
            debug!(id = %id, "Delete cancelled");
            None
        }
    }
}

/// `y`/`yes`, case-insensitive.
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
