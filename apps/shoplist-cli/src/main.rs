//! # Shoplist Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration
//! 3. Create an empty list session
//! 4. Read commands from stdin until EOF or `quit`
//!
//! Nothing is saved: the list is gone when the process exits.

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    shoplist_cli::run()
}
