//! # TalentDesk CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/talentdeskapp/`: the UI-agnostic desk library
//! - `crates/talentdesk/`: this CLI, a client of that library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/talentdesk/src/cli/)                     │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Session loop + tracing setup (commands.rs)               │
//! │  - Handlers calling the API (handlers.rs)                   │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/talentdeskapp/src/api.rs)                │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/talentdeskapp/src/commands/*)        │
//! │  - State transitions + notifications                        │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Commands layer**: heavy unit testing of the transitions.
//! - **CLI layer**: handler and render unit tests, plus `tests/cli.rs`, which
//!   drives the real binary through a session over stdin.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
