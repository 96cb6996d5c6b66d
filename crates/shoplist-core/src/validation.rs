//! # Validation Module
//!
//! Input normalization and validation for the shopping list.
//!
//! ## Two Kinds of Rejection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Policy                                  │
//! │                                                                         │
//! │  Item names (forgiving)                                                │
//! │  ├── "  Milk  " → Some("Milk")                                         │
//! │  └── "   "      → None  ──► add is a silent no-op                      │
//! │                                                                         │
//! │  Item references & links (strict)                                      │
//! │  ├── ""                 → ValidationError::Required                    │
//! │  ├── "not a url"        → ValidationError::InvalidFormat               │
//! │  └── "ftp://example"    → ValidationError::UnsupportedScheme           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shoplist_core::validation::{normalize_item_name, validate_link};
//!
//! assert_eq!(normalize_item_name("  Milk ").as_deref(), Some("Milk"));
//! assert_eq!(normalize_item_name("   "), None);
//!
//! assert!(validate_link("https://example.com").is_ok());
//! assert!(validate_link("javascript:alert(1)").is_err());
//! ```

use url::Url;

use crate::error::ValidationError;
use crate::types::ItemId;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Schemes an external link may use.
pub const ALLOWED_LINK_SCHEMES: &[&str] = &["http", "https"];

// =============================================================================
// Item Names
// =============================================================================

/// Normalizes a raw item name.
///
/// ## Rules
/// - Leading/trailing whitespace is trimmed
/// - Blank input yields `None` (the caller treats it as a no-op)
/// - Inner whitespace is kept as typed
pub fn normalize_item_name(raw: &str) -> Option<String> {
    let name = raw.trim();

    if name.is_empty() {
        return None;
    }

    Some(name.to_string())
}

// =============================================================================
// Item References
// =============================================================================

/// Parses an item id typed or passed in by the presentation layer.
///
/// Only blank ids are rejected here. Whether the id exists is the store's
/// business (unknown ids are no-ops there).
pub fn parse_item_id(raw: &str) -> ValidationResult<ItemId> {
    let id = raw.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(ItemId::new(id))
}

// =============================================================================
// External Links
// =============================================================================

/// Validates an external link before it is handed to a browser.
///
/// ## Rules
/// - Must not be blank
/// - Must parse as an absolute URL
/// - Scheme must be one of [`ALLOWED_LINK_SCHEMES`]
pub fn validate_link(raw: &str) -> ValidationResult<Url> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "link".to_string(),
        });
    }

    let url = Url::parse(raw).map_err(|e| ValidationError::InvalidFormat {
        field: "link".to_string(),
        reason: e.to_string(),
    })?;

    if !ALLOWED_LINK_SCHEMES.contains(&url.scheme()) {
        return Err(ValidationError::UnsupportedScheme {
            field: "link".to_string(),
            scheme: url.scheme().to_string(),
            allowed: ALLOWED_LINK_SCHEMES.iter().map(|s| s.to_string()).collect(),
        });
    }

    Ok(url)
}

// =============================================================================
// Unit Tests
// =============================================================================
