//! # shoplist-core: Pure Shopping-List Logic
//!
//! This crate holds the shopping-list state and the rules for changing it,
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shoplist Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation Layer (shoplist-cli, or a             │   │
//! │  │              TypeScript front end via ts-rs bindings)           │   │
//! │  │    Input box ──► List rows ──► Delete confirm ──► Summary       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Intent / items() / summary()          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shoplist-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   store   │  │    ids    │  │ validation│  │   │
//! │  │   │ShoppingItm│  │ ListStore │  │ Uuid/Seq  │  │  names    │  │   │
//! │  │   │ ListSummry│  │  Intent   │  │           │  │  links    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO LOCKS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ShoppingItem, ItemId, ListSummary)
//! - [`store`] - The list store and its intents
//! - [`ids`] - Item id generation
//! - [`validation`] - Input normalization and validation
//! - [`links`] - External link policy
//! - [`icons`] - Per-platform icon names
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Forgiving mutations**: blank names and stale ids are no-ops, not errors
//! 2. **No I/O**: terminals, files and browsers belong to the app
//! 3. **Clock-free ids**: identity never depends on timestamp resolution
//!
//! ## Example Usage
//!
//! ```rust
//! use shoplist_core::{IdStrategy, Intent, ListStore, Outcome};
//!
//! let mut store = ListStore::new(IdStrategy::Sequential);
//! assert!(matches!(store.dispatch(Intent::Add("Milk".into())), Outcome::Added(_)));
//! assert!(!store.dispatch(Intent::Add("   ".into())).is_applied());
//!
//! let summary = store.summary();
//! assert_eq!((summary.remaining, summary.total), (1, 1));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod icons;
pub mod ids;
pub mod links;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use icons::{icon_name, IconSymbol};
pub use ids::{IdGenerator, IdStrategy};
pub use store::{IgnoreReason, Intent, ListStore, Outcome};
pub use types::*;
