//! League table.
//!
//! Folds every played fixture between two known teams into per-team aggregates and
//! orders the table by points, then goal difference, goals scored, away goals, wins
//! and away wins (all descending), with the team name as the final ascending key.
//! Names compare case-insensitively with accented latin letters folded onto their
//! base letter, so "club brugge" sits next to "Celtic" and "Zürich" after "Zagreb".
//! The table is rebuilt from scratch on every call.

use crate::fixture::Fixture;
use crate::overrides::OverrideSet;
use crate::resolver::played_results;
use crate::types::{Goals, Team, TeamId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 1;

/// Aggregates for one team. `away_goals` and `away_wins` only feed the tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStat {
    pub team_id: TeamId,
    pub name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
    pub away_goals: u32,
    pub away_wins: u32,
}

impl TeamStat {
    pub fn new(team: &Team) -> Self {
        Self {
            team_id: team.id,
            name: team.name.clone(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            away_goals: 0,
            away_wins: 0,
        }
    }

    fn record(&mut self, scored: Goals, conceded: Goals, away: bool) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        if away {
            self.away_goals += scored;
        }

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.points += WIN_POINTS;
                self.wins += 1;
                if away {
                    self.away_wins += 1;
                }
            }
            Ordering::Equal => {
                self.points += DRAW_POINTS;
                self.draws += 1;
            }
            Ordering::Less => self.losses += 1,
        }
    }

    fn finish(&mut self) {
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
    }
}

fn fold_letter(c: char) -> Option<&'static str> {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => Some("a"),
        'ç' | 'ć' | 'č' => Some("c"),
        'ď' | 'đ' => Some("d"),
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => Some("e"),
        'ğ' => Some("g"),
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ı' => Some("i"),
        'ł' => Some("l"),
        'ñ' | 'ń' | 'ň' => Some("n"),
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => Some("o"),
        'ř' => Some("r"),
        'ś' | 'š' | 'ş' | 'ș' => Some("s"),
        'ť' | 'ț' => Some("t"),
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => Some("u"),
        'ý' | 'ÿ' => Some("y"),
        'ź' | 'ż' | 'ž' => Some("z"),
        'ß' => Some("ss"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        _ => None,
    }
}

/// Sort key for team names: lowercase, accents folded.
pub fn name_sort_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        match fold_letter(c) {
            Some(base) => key.push_str(base),
            None => key.push(c),
        }
    }
    key
}

// descending on the six numeric keys, ascending on folded name, raw name last
pub fn compare_standings(a: &TeamStat, b: &TeamStat) -> Ordering {
    b.points
        .cmp(&a.points)
        .then(b.goal_difference.cmp(&a.goal_difference))
        .then(b.goals_for.cmp(&a.goals_for))
        .then(b.away_goals.cmp(&a.away_goals))
        .then(b.wins.cmp(&a.wins))
        .then(b.away_wins.cmp(&a.away_wins))
        .then_with(|| name_sort_key(&a.name).cmp(&name_sort_key(&b.name)))
        .then_with(|| a.name.cmp(&b.name))
}

pub fn compute_standings(
    teams: &[Team],
    fixtures: &[Fixture],
    overrides: &OverrideSet,
) -> Vec<TeamStat> {
    let mut table: Vec<TeamStat> = teams.iter().map(TeamStat::new).collect();
    let index: HashMap<TeamId, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| (team.id, i))
        .collect();

    for (fixture, score) in played_results(fixtures, overrides) {
        let slots = fixture
            .known_teams()
            .and_then(|(home, away)| Some((*index.get(&home)?, *index.get(&away)?)));
        let Some((home, away)) = slots else {
            log::debug!(
                "fixture {} ({} vs {}) skipped: unknown team",
                fixture.id,
                fixture.home,
                fixture.away
            );
            continue;
        };

        table[home].record(score.home, score.away, false);
        table[away].record(score.away, score.home, true);
    }

    table.iter_mut().for_each(TeamStat::finish);
    table.sort_by(compare_standings);
    table
}
