//! Runtime configuration, read from a TOML file.
//!
//! Every field has a default, so an empty file (or no file) is a valid config.
//! The remote API key is never stored here; only the name of the environment
//! variable that holds it.

use interpretation_rules::{ContentError, GradingPolicy, Language};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the config file when no path argument is given.
pub const CONFIG_ENV: &str = "RADICAL_INTERPRETER_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid content pack: {0}")]
    Content(#[from] ContentError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Locale the session starts in.
    pub language: Language,

    /// Optional TOML content pack replacing one locale's levels.
    pub content_pack: Option<PathBuf>,

    pub pacing: PacingConfig,
    pub grading: GradingPolicy,
    pub oracle: OracleConfig,
}

impl InterpreterConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = read_file(path)?;
        Self::from_toml_str(&source)
    }
}

/// Artificial delays around loading and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub load_delay_ms: u64,
    pub evaluation_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: 800,
            evaluation_delay_ms: 1500,
        }
    }
}

impl PacingConfig {
    /// No delays at all.
    pub fn instant() -> Self {
        Self {
            load_delay_ms: 0,
            evaluation_delay_ms: 0,
        }
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn evaluation_delay(&self) -> Duration {
        Duration::from_millis(self.evaluation_delay_ms)
    }
}

/// Remote LLM settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Use the remote service for keyword-less scenarios.
    pub enabled: bool,

    /// Also ask it for fresh scenarios instead of the static levels.
    pub generate_scenarios: bool,

    pub endpoint: String,
    pub model: String,

    /// Environment variable holding the API key.
    pub api_key_env: String,

    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            generate_scenarios: false,
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key_env: "API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

impl OracleConfig {
    /// The API key from the environment, if set and non-blank.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
