//! # Configuration
//!
//! Desk configuration is loaded with [`confique`] from layered sources.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `TALENTDESK_API_BASE`, `TALENTDESK_LOG_FILTER`.
//! 2. **Explicit file**: `--config <path>`, or `talentdesk.toml` in the working
//!    directory when no path is given.
//! 3. **Global Config**: `talentdesk.toml` in the OS config directory (via
//!    `directories`).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api_base` | `http://localhost:8000` | Base URL of the video-analysis service |
//! | `log_filter` | `warn` | `tracing` filter used when `RUST_LOG` is unset |

use crate::error::{Result, TalentError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "talentdesk.toml";
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for the desk, stored in `talentdesk.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TalentConfig {
    /// Base URL of the video-analysis service.
    #[config(env = "TALENTDESK_API_BASE", default = "http://localhost:8000")]
    pub api_base: String,

    /// Log filter directive, e.g. `debug` or `talentdeskapp=debug`.
    #[config(env = "TALENTDESK_LOG_FILTER", default = "warn")]
    pub log_filter: String,
}

impl Default for TalentConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TalentConfig {
    /// Load from every layer. `explicit` replaces the working-directory file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let local = explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        let mut builder = Self::builder().env().file(&local);
        if let Some(global) = global_config_path() {
            builder = builder.file(global);
        }
        builder
            .load()
            .map_err(|e| TalentError::Config(e.to_string()))
    }

    /// The API base without a trailing slash.
    pub fn api_base(&self) -> String {
        self.api_base.trim_end_matches('/').to_string()
    }
}

/// `talentdesk.toml` inside the OS config directory.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "talentdesk").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TalentConfig::default();
        assert_eq!(config.api_base(), "http://localhost:8000");
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_api_base_strips_trailing_slash() {
        let config = TalentConfig {
            api_base: "https://analysis.example.org/v1//".to_string(),
            ..Default::default()
        };
        assert_eq!(config.api_base(), "https://analysis.example.org/v1");
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.toml");
        std::fs::write(&path, "api_base = \"http://analysis.internal:9000/\"\n").unwrap();

        let config = TalentConfig::load(Some(&path)).unwrap();
        if std::env::var_os("TALENTDESK_API_BASE").is_none() {
            assert_eq!(config.api_base(), "http://analysis.internal:9000");
        }
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "api_base = [").unwrap();

        assert!(matches!(
            TalentConfig::load(Some(&path)),
            Err(TalentError::Config(_))
        ));
    }
}
