//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence:
//! 1. Environment variables (`REVISE_*`)
//! 2. Config file (`~/.revise/config.toml`)
//! 3. Defaults

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Text-to-speech configuration.
    pub speech: SpeechConfig,

    /// Review session configuration.
    pub review: ReviewConfig,
}

/// Text-to-speech configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Whether words are spoken at all.
    pub enabled: bool,

    /// Speech program. Platform default when unset.
    pub command: Option<String>,

    /// Extra arguments passed before the text.
    pub args: Vec<String>,

    /// Pause after each announcement, in milliseconds.
    pub post_delay_ms: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            args: Vec::new(),
            post_delay_ms: 500,
        }
    }
}

/// Review session configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ReviewConfig {
    /// Fixed seed for the shuffle and draws. Random when unset.
    pub seed: Option<u64>,
}

/// Get the default revise home directory.
fn default_revise_home() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from(".revise"), |h| h.join(".revise"))
}

/// Load configuration with precedence: env vars → file → defaults.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
pub fn load_config() -> Result<Config> {
    let mut config = Config::default();

    let config_path = get_config_path();
    if config_path.exists() {
        let contents = fs::read_to_string(&config_path).map_err(Error::Storage)?;
        config = toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))?;
    }

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Get the path to the config file.
fn get_config_path() -> PathBuf {
    if let Ok(path) = env::var("REVISE_CONFIG") {
        return PathBuf::from(path);
    }

    if let Ok(home) = env::var("REVISE_HOME") {
        return PathBuf::from(home).join("config.toml");
    }

    default_revise_home().join("config.toml")
}

/// Apply environment variable overrides to config.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(val) = env::var("REVISE_SPEECH_ENABLED") {
        config.speech.enabled = parse_flag(&val).unwrap_or(config.speech.enabled);
    }

    if let Ok(command) = env::var("REVISE_SPEECH_COMMAND") {
        if !command.trim().is_empty() {
            config.speech.command = Some(command);
        }
    }

    if let Ok(val) = env::var("REVISE_POST_DELAY_MS") {
        if let Ok(ms) = val.parse() {
            config.speech.post_delay_ms = ms;
        }
    }

    if let Ok(val) = env::var("REVISE_SEED") {
        if let Ok(seed) = val.parse() {
            config.review.seed = Some(seed);
        }
    }
}

/// Parse a boolean-ish environment value.
fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
