//! # Item Identifiers
//!
//! Generates [`ItemId`]s for new items.
//!
//! ## Why Not Timestamps?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Two adds inside the same clock tick                                    │
//! │                                                                         │
//! │    add("Milk") ──► id = now() = 1718000000123                           │
//! │    add("Eggs") ──► id = now() = 1718000000123   ❌ COLLISION            │
//! │                                                                         │
//! │  OUR SOLUTION: ids that do not depend on clock resolution               │
//! │    Uuid       ──► random v4, collision-resistant                        │
//! │    Sequential ──► monotonic counter, never reused                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::types::ItemId;

// =============================================================================
// Id Strategy
// =============================================================================

/// Which kind of identifiers a store hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Random UUID v4 strings.
    #[default]
    Uuid,
    /// `"1"`, `"2"`, `"3"`, ... Short and easy to type in a terminal.
    Sequential,
}

impl FromStr for IdStrategy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdStrategy::Uuid),
            "sequential" | "seq" => Ok(IdStrategy::Sequential),
            other => Err(ValidationError::InvalidFormat {
                field: "id_strategy".to_string(),
                reason: format!("expected 'uuid' or 'sequential', got '{}'", other),
            }),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Uuid => f.write_str("uuid"),
            IdStrategy::Sequential => f.write_str("sequential"),
        }
    }
}

// =============================================================================
// Id Generator
// =============================================================================

/// Stateful id source owned by a [`ListStore`](crate::store::ListStore).
///
/// The sequential counter only moves forward, so an id freed by a delete is
/// never handed out again.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    next_seq: u64,
}

impl IdGenerator {
    /// Creates a generator for the given strategy.
    pub fn new(strategy: IdStrategy) -> Self {
        IdGenerator {
            strategy,
            next_seq: 1,
        }
    }

    /// Produces the next identifier.
    pub fn next_id(&mut self) -> ItemId {
        match self.strategy {
            IdStrategy::Uuid => ItemId::new(Uuid::new_v4().to_string()),
            IdStrategy::Sequential => {
                let id = self.next_seq;
                self.next_seq += 1;
                ItemId::new(id.to_string())
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::new(IdStrategy::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
