// 9.0 config.rs: all settings in one place. scoring rules and data file names.
// 9.1 validate() catches configurations where nobody could ever score.

use crate::scoring::ScoringRules;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File names of the dataset, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPaths {
    pub matches: String,
    pub participants: String,
    pub predictions: String,
    // expected totals from the external spreadsheet
    pub baseline: String,
    pub teams: String,
    pub rules: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            matches: "matches.json".to_string(),
            participants: "participants.json".to_string(),
            predictions: "predictions.json".to_string(),
            baseline: "initial_clas.json".to_string(),
            teams: "teams.json".to_string(),
            rules: "rules.json".to_string(),
        }
    }
}

impl DataPaths {
    fn all(&self) -> [&str; 6] {
        [
            self.matches.as_str(),
            self.participants.as_str(),
            self.predictions.as_str(),
            self.baseline.as_str(),
            self.teams.as_str(),
            self.rules.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolConfig {
    pub rules: ScoringRules,
    pub data_paths: DataPaths,
}

impl PoolConfig {
    // 2 for the sign, 3 more for the exact score, nothing for goal difference
    pub fn league_phase() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: ScoringRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    // rules.json in the data dir wins over the configured rules when present
    pub fn with_rules_from_dir(mut self, dir: &Path) -> Result<Self, crate::season::SeasonError> {
        let path = dir.join(&self.data_paths.rules);
        if path.exists() {
            self.rules = ScoringRules::load(&path)?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.max_points() == 0 {
            return Err(ConfigError::InvalidRules {
                reason: "Rules award no points at all".to_string(),
            });
        }

        if self.rules.goal_difference_points != 0 {
            log::warn!(
                "goal difference points set to {} but not used by scoring",
                self.rules.goal_difference_points
            );
        }

        if self.data_paths.all().iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::InvalidDataPaths {
                reason: "Data file names must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidRules { reason: String },
    InvalidDataPaths { reason: String },
}
