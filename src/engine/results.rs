// 10.0.2: result types and errors for engine operations.

use crate::ranking::RankedParticipant;
use crate::standings::TeamStat;
use crate::statistics::LeaderboardHighlights;
use crate::types::FixtureId;
use crate::validation::ValidationReport;
use serde::Serialize;

/// Output of one full pass over fixtures, overrides, predictions and rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recalculation {
    pub standings: Vec<TeamStat>,
    pub leaderboard: Vec<RankedParticipant>,
    pub validation: ValidationReport,
    pub highlights: Option<LeaderboardHighlights>,
}

impl Recalculation {
    pub fn team_position(&self, name: &str) -> Option<usize> {
        self.standings.iter().position(|t| t.name == name).map(|i| i + 1)
    }

    pub fn participant(&self, name: &str) -> Option<&RankedParticipant> {
        self.leaderboard.iter().find(|r| r.stat.name == name)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    #[error("Fixture {0} not found")]
    FixtureNotFound(FixtureId),
}
