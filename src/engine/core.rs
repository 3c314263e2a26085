// 10.1 engine/core.rs: main engine. holds the loaded season and the rules. nothing in
// here is mutable; provisional edits live in the caller's OverrideSet.

use super::config::EngineConfig;
use super::results::{EngineError, Recalculation};
use crate::fixture::{fixture_views, FixtureView, MatchdayFilter};
use crate::overrides::{OverrideSet, ScoreEdit};
use crate::ranking::{compute_ranking, RankedParticipant};
use crate::resolver::{effective_result, EffectiveResult};
use crate::scoring::ScoringRules;
use crate::season::Season;
use crate::standings::{compute_standings, TeamStat};
use crate::statistics::leaderboard_highlights;
use crate::types::FixtureId;
use crate::validation::{validate, ValidationReport};

/** 10.1: engine struct. immutable inputs only */
#[derive(Debug, Clone)]
pub struct Engine {
    pub(super) config: EngineConfig,
    pub(super) season: Season,
}

impl Engine {
    pub fn new(season: Season, config: EngineConfig) -> Self {
        Self { config, season }
    }

    pub fn season(&self) -> &Season {
        &self.season
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.config.rules
    }

    // changing rules means a new engine value; results from the old one stay valid
    pub fn with_rules(mut self, rules: ScoringRules) -> Self {
        self.config.rules = rules;
        self
    }

    pub fn standings(&self, overrides: &OverrideSet) -> Vec<TeamStat> {
        compute_standings(self.season.teams(), self.season.fixtures(), overrides)
    }

    pub fn leaderboard(&self, overrides: &OverrideSet) -> Vec<RankedParticipant> {
        compute_ranking(
            self.season.participants(),
            self.season.fixtures(),
            self.season.predictions(),
            overrides,
            &self.config.rules,
        )
    }

    pub fn validate(&self, leaderboard: &[RankedParticipant]) -> ValidationReport {
        validate(self.season.baseline(), leaderboard)
    }

    pub fn fixture_views(&self, overrides: &OverrideSet, filter: MatchdayFilter) -> Vec<FixtureView> {
        fixture_views(self.season.fixtures(), overrides, filter)
    }

    pub fn effective_result(
        &self,
        fixture_id: FixtureId,
        overrides: &OverrideSet,
    ) -> Result<EffectiveResult, EngineError> {
        let fixture = self
            .season
            .fixture(fixture_id)
            .ok_or(EngineError::FixtureNotFound(fixture_id))?;
        Ok(effective_result(fixture, overrides))
    }

    pub fn recalculate(&self, overrides: &OverrideSet) -> Recalculation {
        let standings = self.standings(overrides);
        let leaderboard = self.leaderboard(overrides);
        let validation = self.validate(&leaderboard);
        let highlights = leaderboard_highlights(&leaderboard);

        if self.config.verbose {
            log::info!(
                "recalculated with {} overrides: {} teams, {} participants, validation {}",
                overrides.len(),
                standings.len(),
                leaderboard.len(),
                if validation.is_pass() { "passed" } else { "failed" }
            );
        } else {
            log::debug!("recalculated with {} overrides", overrides.len());
        }

        Recalculation {
            standings,
            leaderboard,
            validation,
            highlights,
        }
    }

    // one "apply edit, recompute" step. edits for unknown fixtures are refused untouched
    pub fn apply_edit(
        &self,
        overrides: &mut OverrideSet,
        edit: ScoreEdit,
    ) -> Result<Recalculation, EngineError> {
        if self.season.fixture(edit.fixture_id).is_none() {
            return Err(EngineError::FixtureNotFound(edit.fixture_id));
        }
        overrides.apply(edit);
        Ok(self.recalculate(overrides))
    }

    pub fn restore(&self, overrides: &mut OverrideSet) -> Recalculation {
        overrides.restore();
        self.recalculate(overrides)
    }
}
