//! Trainer configuration
//!
//! Loaded from a TOML file when given; every field has a default so a
//! missing or partial file is fine.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use cwtrainer_engine::history::DEFAULT_HISTORY_CAPACITY;
use cwtrainer_engine::session::SessionConfig;
use cwtrainer_output::timing::Timing;
use cwtrainer_output::volume::INITIAL_VOLUME;

/// On-disk trainer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub dot_ms: u64,
    pub dash_ms: u64,
    pub element_gap_ms: u64,
    pub char_gap_ms: u64,
    pub word_gap_ms: u64,
    pub decode_timeout_ms: u64,
    pub tone_hz: f32,
    pub initial_volume: f32,
    pub history_capacity: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        let timing = Timing::default();
        Self {
            dot_ms: timing.dot_ms,
            dash_ms: timing.dash_ms,
            element_gap_ms: timing.element_gap_ms,
            char_gap_ms: timing.char_gap_ms,
            word_gap_ms: timing.word_gap_ms,
            decode_timeout_ms: timing.decode_timeout_ms,
            tone_hz: timing.tone_hz,
            initial_volume: INITIAL_VOLUME,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl TrainerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Load from `path` when given, otherwise defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validated playback/decode timing
    pub fn timing(&self) -> Result<Timing> {
        Timing {
            dot_ms: self.dot_ms,
            dash_ms: self.dash_ms,
            element_gap_ms: self.element_gap_ms,
            char_gap_ms: self.char_gap_ms,
            word_gap_ms: self.word_gap_ms,
            decode_timeout_ms: self.decode_timeout_ms,
            tone_hz: self.tone_hz,
        }
        .validated()
        .context("Invalid timing configuration")
    }

    /// Session parameters derived from this configuration
    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            decode_timeout: Duration::from_millis(self.decode_timeout_ms),
            history_capacity: self.history_capacity,
            initial_volume: self.initial_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TrainerConfig::default();
        let timing = config.timing().unwrap();
        assert_eq!(timing.dot_ms, 150);
        assert_eq!(config.session().history_capacity, DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: TrainerConfig = toml::from_str("").unwrap();
        assert_eq!(config.decode_timeout_ms, 2000);
        assert_eq!(config.initial_volume, INITIAL_VOLUME);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: TrainerConfig =
            toml::from_str("dot_ms = 60\ndash_ms = 120\ntone_hz = 600.0").unwrap();
        assert_eq!(config.dot_ms, 60);
        assert_eq!(config.dash_ms, 120);
        assert_eq!(config.tone_hz, 600.0);
        // Untouched fields keep their defaults
        assert_eq!(config.word_gap_ms, 1000);
        config.timing().unwrap();
    }

    #[test]
    fn test_invalid_timing_rejected() {
        let config: TrainerConfig = toml::from_str("dot_ms = 0").unwrap();
        assert!(config.timing().is_err());
    }
}
