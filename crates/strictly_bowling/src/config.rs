//! Scoring rules configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How many pins stand for the second tenth-frame bonus roll when the
/// first bonus roll was not a strike.
///
/// After a strike the rack is always reset. The rules only differ when
/// the first bonus roll leaves pins standing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BonusRack {
    /// The second bonus roll is capped at the pins left by the first.
    #[default]
    Standing,
    /// Every bonus roll faces a full rack.
    Fresh,
}

/// Rules applied to one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Rack rule for the tenth frame's second bonus roll.
    tenth_frame_rack: BonusRack,
}

impl ScoringRules {
    /// Creates the regulation rules.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the tenth-frame rack rule.
    #[instrument(skip(self))]
    pub fn with_tenth_frame_rack(self, tenth_frame_rack: BonusRack) -> Self {
        Self { tenth_frame_rack }
    }

    /// Parses rules from TOML text. Missing keys fall back to defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let rules: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse scoring rules: {}", e)))?;
        debug!(tenth_frame_rack = %rules.tenth_frame_rack, "Parsed scoring rules");
        Ok(rules)
    }

    /// Loads rules from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading scoring rules from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read scoring rules file: {}", e))
        })?;

        let rules = Self::from_toml_str(&content)?;
        info!(tenth_frame_rack = %rules.tenth_frame_rack, "Scoring rules loaded");
        Ok(rules)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
