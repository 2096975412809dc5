//! # CLI Behavior
//!
//! This is **one possible UI client** for the desk library. The CLI is the
//! only place that knows about terminal I/O, exit codes and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Invocation
//!
//! - `talentdesk <group> <action> ...`: run one command against a freshly
//!   seeded store and exit.
//! - `talentdesk` or `talentdesk session`: read commands from stdin, one per
//!   line, against a single store. `quit`, `exit` or EOF ends the session.
//!
//! `--json` switches every command to JSON output, `--config` points at a
//! config file other than `./talentdesk.toml`.
//!
//! ## Module Structure
//!
//! - `commands`: entry point, tracing setup, the session loop
//! - `handlers`: per-command handlers that call the API
//! - `render`: output formatting (tables, colors, messages)
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styling

mod commands;
mod handlers;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
