// 3.0: fixtures. immutable once loaded; ids are stable across sessions.
// 3.1 matchday filter and the per-row view used by fixture listings.

use crate::overrides::OverrideSet;
use crate::resolver::effective_result;
use crate::sign::Sign;
use crate::types::{FixtureId, PartialScore, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub matchday: u32,
    pub kickoff: DateTime<Utc>,
    pub home: String,
    pub away: String,
    // None when the name is not in the team list. such fixtures never touch the table.
    pub home_team: Option<TeamId>,
    pub away_team: Option<TeamId>,
    pub official: PartialScore,
}

impl Fixture {
    pub fn is_officially_played(&self) -> bool {
        self.official.is_complete()
    }

    pub fn known_teams(&self) -> Option<(TeamId, TeamId)> {
        Some((self.home_team?, self.away_team?))
    }
}

/// Which matchdays a fixture listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchdayFilter {
    #[default]
    All,
    Matchday(u32),
}

impl MatchdayFilter {
    pub fn matches(&self, fixture: &Fixture) -> bool {
        match self {
            MatchdayFilter::All => true,
            MatchdayFilter::Matchday(day) => fixture.matchday == *day,
        }
    }
}

impl FromStr for MatchdayFilter {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(MatchdayFilter::All);
        }
        s.parse().map(MatchdayFilter::Matchday)
    }
}

impl fmt::Display for MatchdayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchdayFilter::All => write!(f, "all"),
            MatchdayFilter::Matchday(day) => write!(f, "{}", day),
        }
    }
}

pub fn fixtures_for_matchday(
    fixtures: &[Fixture],
    filter: MatchdayFilter,
) -> impl Iterator<Item = &Fixture> {
    fixtures.iter().filter(move |f| filter.matches(f))
}

/// One row of a fixture listing, with overrides already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureView {
    pub fixture_id: FixtureId,
    pub matchday: u32,
    pub kickoff: DateTime<Utc>,
    pub home: String,
    pub away: String,
    pub score: PartialScore,
    pub played: bool,
    pub sign: Option<Sign>,
    pub edited: bool,
}

pub fn fixture_views(
    fixtures: &[Fixture],
    overrides: &OverrideSet,
    filter: MatchdayFilter,
) -> Vec<FixtureView> {
    fixtures_for_matchday(fixtures, filter)
        .map(|fixture| {
            let result = effective_result(fixture, overrides);
            FixtureView {
                fixture_id: fixture.id,
                matchday: fixture.matchday,
                kickoff: fixture.kickoff,
                home: fixture.home.clone(),
                away: fixture.away.clone(),
                score: result.score,
                played: result.is_played(),
                sign: result.sign(),
                edited: overrides.is_edited(fixture.id),
            }
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::fixture;
    use super::*;

    #[test]
    fn matchday_filter_parsing() {
        assert_eq!("all".parse::<MatchdayFilter>().unwrap(), MatchdayFilter::All);
        assert_eq!(" 3 ".parse::<MatchdayFilter>().unwrap(), MatchdayFilter::Matchday(3));
        assert!("third".parse::<MatchdayFilter>().is_err());
        assert_eq!(MatchdayFilter::Matchday(8).to_string(), "8");
    }

    #[test]
    fn filter_by_matchday() {
        let fixtures = vec![
            fixture(1, 1, (0, "A"), (1, "B"), PartialScore::full(1, 0)),
            fixture(2, 2, (1, "B"), (0, "A"), PartialScore::unplayed()),
            fixture(3, 2, (0, "A"), (1, "B"), PartialScore::unplayed()),
        ];

        let day_two: Vec<_> = fixtures_for_matchday(&fixtures, MatchdayFilter::Matchday(2))
            .map(|f| f.id)
            .collect();
        assert_eq!(day_two, vec![FixtureId(2), FixtureId(3)]);
        assert_eq!(fixtures_for_matchday(&fixtures, MatchdayFilter::All).count(), 3);
    }

    #[test]
    fn views_reflect_overrides() {
        let fixtures = vec![
            fixture(1, 1, (0, "A"), (1, "B"), PartialScore::full(1, 0)),
            fixture(2, 1, (1, "B"), (0, "A"), PartialScore::unplayed()),
        ];
        let mut overrides = OverrideSet::new();
        overrides.set_home(FixtureId(2), Some(0));
        overrides.set_away(FixtureId(2), Some(2));

        let views = fixture_views(&fixtures, &overrides, MatchdayFilter::All);
        assert!(views[0].played);
        assert!(!views[0].edited);
        assert_eq!(views[0].sign, Some(Sign::HomeWin));

        assert!(views[1].played);
        assert!(views[1].edited);
        assert_eq!(views[1].score, PartialScore::full(0, 2));
        assert_eq!(views[1].sign, Some(Sign::AwayWin));
    }

    #[test]
    fn unknown_team_yields_no_pair() {
        let mut f = fixture(1, 1, (0, "A"), (1, "B"), PartialScore::unplayed());
        assert_eq!(f.known_teams(), Some((TeamId(0), TeamId(1))));
        f.away_team = None;
        assert_eq!(f.known_teams(), None);
    }
}
