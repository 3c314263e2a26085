// 4.2: effective results. override value wins per side, otherwise the official one.
// a fixture counts as played only when both effective sides are present.

use crate::fixture::Fixture;
use crate::overrides::{OverrideSet, ScoreOverride};
use crate::sign::{sign, Sign};
use crate::types::{FixtureId, PartialScore, Scoreline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveResult {
    pub fixture_id: FixtureId,
    pub score: PartialScore,
}

impl EffectiveResult {
    pub fn is_played(&self) -> bool {
        self.score.is_complete()
    }

    pub fn scoreline(&self) -> Option<Scoreline> {
        self.score.scoreline()
    }

    pub fn sign(&self) -> Option<Sign> {
        sign(self.score.home, self.score.away)
    }
}

pub fn resolve_score(official: PartialScore, edit: Option<&ScoreOverride>) -> PartialScore {
    match edit {
        Some(edit) => PartialScore::new(
            edit.home_goals.or(official.home),
            edit.away_goals.or(official.away),
        ),
        None => official,
    }
}

pub fn effective_result(fixture: &Fixture, overrides: &OverrideSet) -> EffectiveResult {
    EffectiveResult {
        fixture_id: fixture.id,
        score: resolve_score(fixture.official, overrides.get(fixture.id)),
    }
}

/// Played fixtures only, paired with their effective scoreline.
pub fn played_results<'a>(
    fixtures: &'a [Fixture],
    overrides: &'a OverrideSet,
) -> impl Iterator<Item = (&'a Fixture, Scoreline)> + 'a {
    fixtures
        .iter()
        .filter_map(move |f| effective_result(f, overrides).scoreline().map(|s| (f, s)))
}
