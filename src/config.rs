//! Configuration model for scryforge.
//!
//! This module defines the Config struct that represents `scryforge.yaml` in
//! the working directory. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), sensible defaults for optional fields, and
//! validation of config values. A missing config file means defaults.

use crate::error::{ForgeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "scryforge.yaml";

/// Configuration for scryforge.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // External generation settings
    // =========================================================================
    /// Whether to attempt the external generation call at all.
    /// When false, every generation uses the template filler directly.
    #[serde(default = "default_true")]
    pub live: bool,

    /// Model name sent with the chat-completions request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the chat-completions API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Name of the environment variable holding the API credential.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Hard timeout for the external call, in seconds. The interface must
    /// never block past this; on expiry the call is treated as a fallback.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Token cap for the external call.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Sampling temperature for the external call.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    // =========================================================================
    // Display settings
    // =========================================================================
    /// How many history records the interactive session renders per refresh.
    #[serde(default = "default_history_display_limit")]
    pub history_display_limit: usize,
}

// Default value functions for serde
fn default_true() -> bool {
    true
}
fn default_model() -> String {
    "gpt-4".to_string()
}
fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}
fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_max_tokens() -> usize {
    2000
}
fn default_temperature() -> f32 {
    0.3
}
fn default_history_display_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            live: true,
            model: default_model(),
            api_base: default_api_base(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            history_display_limit: default_history_display_limit(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ForgeError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ForgeError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load `scryforge.yaml` from the working directory if present,
    /// otherwise return defaults.
    pub fn discover() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `timeout_secs` must be positive
    /// - `history_display_limit` must be positive
    /// - `model` and `api_key_env` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ForgeError::UserError(
                "config validation failed: timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.history_display_limit == 0 {
            return Err(ForgeError::UserError(
                "config validation failed: history_display_limit must be greater than 0"
                    .to_string(),
            ));
        }

        if self.model.is_empty() {
            return Err(ForgeError::UserError(
                "config validation failed: model must be non-empty".to_string(),
            ));
        }

        if self.api_key_env.is_empty() {
            return Err(ForgeError::UserError(
                "config validation failed: api_key_env must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}
