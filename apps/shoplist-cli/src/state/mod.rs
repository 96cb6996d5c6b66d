//! # State Module
//!
//! Application state for the terminal app.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │          Session             │  │          AppConfig           │    │
//! │  │                              │  │                              │    │
//! │  │  ListStore (owned)           │  │  ui.title / empty_message    │    │
//! │  │  pending delete confirmation │  │  ui.output (text | json)     │    │
//! │  │                              │  │  store.id_strategy           │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  • Session: mutated once per input line, dropped at exit               │
//! │  • AppConfig: read-only after startup                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{AppConfig, ConfigError, ConfigResult, OutputFormat, StoreConfig, UiConfig};
pub use session::Session;
