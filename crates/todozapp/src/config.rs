//! # Configuration
//!
//! Todoz configuration is managed by [`confique`], which layers TOML files,
//! environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `TODOZ_MALFORMED_CRITERIA`, `TODOZ_LOG`.
//! 2. **Files**, in the order given to [`TodozConfig::load`] (earlier wins).
//!    The CLI passes `--config <file>` first, then the global `todoz.toml`.
//! 3. **Compiled defaults**.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `malformed_criteria` | `reject` | `reject` fails malformed filters, `match-all` returns every todo |
//! | `log_level` | `warn` | `tracing` filter directive used by the CLI |

use confique::Config;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Result, TodozError};

/// What the store does with criteria it cannot interpret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedCriteria {
    /// Fail with a validation error.
    #[default]
    Reject,
    /// Log a warning and apply no filtering.
    MatchAll,
}

impl FromStr for MalformedCriteria {
    type Err = TodozError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(MalformedCriteria::Reject),
            "match-all" | "match_all" => Ok(MalformedCriteria::MatchAll),
            other => Err(TodozError::Config(format!(
                "malformed_criteria must be 'reject' or 'match-all' (got '{}')",
                other
            ))),
        }
    }
}

impl fmt::Display for MalformedCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedCriteria::Reject => f.write_str("reject"),
            MalformedCriteria::MatchAll => f.write_str("match-all"),
        }
    }
}

// Parsed through a plain string so that env values, TOML and defaults all
// go through the same FromStr path.
impl<'de> Deserialize<'de> for MalformedCriteria {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Configuration for todoz, stored in `todoz.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TodozConfig {
    /// Policy for filter criteria that cannot be interpreted
    #[config(default = "reject", env = "TODOZ_MALFORMED_CRITERIA")]
    pub malformed_criteria: MalformedCriteria,

    /// Log filter directive (e.g. "warn", "todozapp=debug")
    #[config(default = "warn", env = "TODOZ_LOG")]
    pub log_level: String,
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            malformed_criteria: MalformedCriteria::default(),
            log_level: "warn".to_string(),
        }
    }
}

impl TodozConfig {
    pub const FILE_NAME: &'static str = "todoz.toml";

    /// Load configuration from the environment and the given files.
    pub fn load(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file);
        }
        builder
            .load()
            .map_err(|e| TodozError::Config(e.to_string()))
    }
}
