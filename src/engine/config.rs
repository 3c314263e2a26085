//! Engine configuration options.

use crate::config::PoolConfig;
use crate::scoring::ScoringRules;

/// Engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Rules every recalculation scores with.
    pub rules: ScoringRules,
    /// Enable verbose logging.
    pub verbose: bool,
}

impl From<&PoolConfig> for EngineConfig {
    fn from(config: &PoolConfig) -> Self {
        Self {
            rules: config.rules,
            verbose: false,
        }
    }
}
