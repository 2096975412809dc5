//! # CLI Layer
//!
//! This module is **one possible UI client** for the desk, not the desk itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Installs a `tracing` subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load configuration, seed the store, build the client
//! 3. **Dispatch**: One command per invocation, or a session of many
//! 4. **Error Handling**: Convert errors to user-friendly messages and exit codes
//!
//! ## Sessions
//!
//! The store lives only as long as the process, so a one-shot command always
//! starts from the seed data. A session (`talentdesk` with no command, or
//! `talentdesk session`) keeps one store for every line read from stdin, which
//! is how changes can be followed across commands. Errors on a line are
//! reported and the session continues.

use super::handlers::{user_error, AppState};
use super::setup::{Cli, Commands, SessionLine};
use clap::Parser;
use std::io::{BufRead, Write};
use talentdeskapp::analysis::AnalysisClient;
use talentdeskapp::api::TalentApi;
use talentdeskapp::config::TalentConfig;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.as_deref();
    let config = TalentConfig::load(config_path).map_err(user_error)?;
    init_tracing(&config, cli.verbose);
    debug!(api_base = %config.api_base(), "configuration loaded");

    let mut state = AppState::new(
        TalentApi::seeded(),
        AnalysisClient::from_config(&config),
        cli.json,
    )?;

    match cli.command {
        None | Some(Commands::Session) => run_session(&mut state),
        Some(command) => {
            print!("{}", state.handle(command)?);
            Ok(())
        }
    }
}

/// `RUST_LOG` wins; otherwise `--verbose`, then the configured filter.
fn init_tracing(config: &TalentConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log_filter.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A subscriber may already be installed when embedded in tests.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_session(state: &mut AppState) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }
        debug!(line, "session command");

        let words = match split_words(line) {
            Ok(words) => words,
            Err(msg) => {
                eprintln!("Error: {}", msg);
                continue;
            }
        };
        match SessionLine::try_parse_from(words) {
            Ok(parsed) => match state.handle(parsed.command) {
                Ok(output) => {
                    stdout.write_all(output.as_bytes())?;
                    stdout.flush()?;
                }
                Err(e) => eprintln!("Error: {}", e),
            },
            // Help goes to stdout, parse errors to stderr.
            Err(e) => e.print()?,
        }
    }
    Ok(())
}

/// Split a session line into words. Single or double quotes group words;
/// a backslash escapes the next character.
fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (_, '\\') => {
                let escaped = chars.next().ok_or("Dangling escape at end of line")?;
                current.push(escaped);
                in_word = true;
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if let Some(q) = quote {
        return Err(format!("Unclosed {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_words() {
        assert_eq!(
            split_words("videos review  V001 8.5").unwrap(),
            vec!["videos", "review", "V001", "8.5"]
        );
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            split_words(r#"templates add "Agility Run" --sport 'Track'"#).unwrap(),
            vec!["templates", "add", "Agility Run", "--sport", "Track"]
        );
        assert_eq!(split_words(r#"push """#).unwrap(), vec!["push", ""]);
    }

    #[test]
    fn escapes_and_errors() {
        assert_eq!(
            split_words(r"owner P1 O\'Neil").unwrap(),
            vec!["owner", "P1", "O'Neil"]
        );
        assert!(split_words("flag V001 \"blurry").is_err());
        assert!(split_words("flag V001 \\").is_err());
    }
}
