//! Configuration loaded from the environment.

use flashcard_core::{SessionConfig, DEFAULT_PLACEHOLDER};
use thiserror::Error;

pub const PLACEHOLDER_VAR: &str = "FLASHCARDS_PLACEHOLDER";
pub const SEED_VAR: &str = "FLASHCARDS_SEED";
pub const LOG_VAR: &str = "RUST_LOG";

/// Keeps log output out of the prompt unless asked for.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    #[error("{var} must be a boolean, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub placeholder: String,
    pub seed_defaults: bool,
    pub log_filter: String,
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let placeholder = match lookup(PLACEHOLDER_VAR) {
            Some(value) if value.is_empty() => {
                return Err(ConfigError::Empty {
                    var: PLACEHOLDER_VAR,
                })
            }
            Some(value) => value,
            None => DEFAULT_PLACEHOLDER.to_string(),
        };

        let seed_defaults = match lookup(SEED_VAR) {
            Some(value) => parse_bool(SEED_VAR, &value)?,
            None => true,
        };

        let log_filter = lookup(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            placeholder,
            seed_defaults,
            log_filter,
        })
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            placeholder: self.placeholder.clone(),
            seed_defaults: self.seed_defaults,
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
