//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Rules the reducer needs; passed explicitly so the scoring core stays pure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Holes per match; hole numbers outside [1, holes] are discarded
    #[serde(default = "default_holes")]
    pub holes: u32,
}

fn default_holes() -> u32 {
    18
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            holes: default_holes(),
        }
    }
}

impl ScoringRules {
    /// Whether a hole number is inside the playable range.
    pub fn is_valid_hole(&self, hole_number: u32) -> bool {
        hole_number >= 1 && hole_number <= self.holes
    }
}

/// Tournament setup: teams, match count, points threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Trip name, used for the session ID
    #[serde(default = "default_trip_name")]
    pub trip_name: String,

    /// Display name for team A
    #[serde(default = "default_team_a")]
    pub team_a_name: String,

    /// Display name for team B
    #[serde(default = "default_team_b")]
    pub team_b_name: String,

    /// Total matches scheduled across the whole tournament
    #[serde(default = "default_total_matches")]
    pub total_matches: u32,

    /// Points needed to win; when absent, floor(total/2) + 0.5
    #[serde(default)]
    pub points_to_win: Option<f64>,

    #[serde(default)]
    pub rules: ScoringRules,
}

fn default_trip_name() -> String {
    "Ryder Trip".to_string()
}

fn default_team_a() -> String {
    "Team A".to_string()
}

fn default_team_b() -> String {
    "Team B".to_string()
}

fn default_total_matches() -> u32 {
    12
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            trip_name: default_trip_name(),
            team_a_name: default_team_a(),
            team_b_name: default_team_b(),
            total_matches: default_total_matches(),
            points_to_win: None,
            rules: ScoringRules::default(),
        }
    }
}

impl TournamentConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TournamentConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// The effective winning threshold.
    pub fn effective_points_to_win(&self) -> f64 {
        self.points_to_win
            .unwrap_or_else(|| crate::standings::points_to_win(self.total_matches))
    }

    /// Validate the configuration.
    ///
    /// The threshold may not sit below the convention minimum
    /// `floor(total/2) + 0.5`: anything lower is reachable by a side that
    /// has not secured even half the points.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_matches == 0 {
            return Err(ConfigError::ValidationError(
                "Total matches must be greater than 0".to_string(),
            ));
        }

        if self.rules.holes == 0 {
            return Err(ConfigError::ValidationError(
                "Holes per match must be greater than 0".to_string(),
            ));
        }

        let threshold = self.effective_points_to_win();
        let minimum = crate::standings::points_to_win(self.total_matches);
        if threshold < minimum {
            return Err(ConfigError::ValidationError(format!(
                "Points to win ({}) is below the minimum winning threshold ({})",
                threshold, minimum
            )));
        }
        if threshold > self.total_matches as f64 {
            return Err(ConfigError::ValidationError(format!(
                "Points to win ({}) exceeds the points available ({})",
                threshold, self.total_matches
            )));
        }

        Ok(())
    }
}
