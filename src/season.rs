//! Season loading.
//!
//! The engine never sees raw names as join keys. This module takes the records as they
//! come out of the json files, rejects what the engine cannot work with (duplicate
//! names or ids, bad kickoff timestamps, negative or fractional goals) and resolves
//! every team and participant name to an id exactly once.

use crate::config::DataPaths;
use crate::fixture::Fixture;
use crate::prediction::{Prediction, PredictionBook};
use crate::types::{FixtureId, Goals, PartialScore, Participant, ParticipantId, Team, TeamId};
use crate::validation::BaselineEntry;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

/// One record of `matches.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFixture {
    pub id: FixtureId,
    pub matchday: u32,
    pub datetime: String,
    pub home: String,
    pub away: String,
    #[serde(default)]
    pub home_goals: Option<Goals>,
    #[serde(default)]
    pub away_goals: Option<Goals>,
}

/// One record of `teams.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTeam {
    pub team: String,
}

/// `predictions.json`: participant name -> fixture id -> prediction.
pub type RawPredictions = BTreeMap<String, BTreeMap<FixtureId, Prediction>>;

/// Everything the loader needs, already parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonInput {
    pub fixtures: Vec<RawFixture>,
    pub participants: Vec<String>,
    pub predictions: RawPredictions,
    pub teams: Vec<RawTeam>,
    pub baseline: Vec<BaselineEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeasonError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed json in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Team {0:?} listed twice")]
    DuplicateTeam(String),

    #[error("Participant {0:?} listed twice")]
    DuplicateParticipant(String),

    #[error("Fixture {0} listed twice")]
    DuplicateFixture(FixtureId),

    #[error("Fixture {fixture} has invalid kickoff {value:?}")]
    InvalidKickoff { fixture: FixtureId, value: String },
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SeasonError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeasonError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SeasonError::Json {
        path: path.to_path_buf(),
        source,
    })
}

// rfc3339 first, then a bare local timestamp taken as utc
fn parse_kickoff(id: FixtureId, value: &str) -> Result<DateTime<Utc>, SeasonError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| SeasonError::InvalidKickoff {
            fixture: id,
            value: value.to_string(),
        })
}

/// Validated, id-resolved inputs. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    teams: Vec<Team>,
    participants: Vec<Participant>,
    fixtures: Vec<Fixture>,
    predictions: PredictionBook,
    baseline: Vec<BaselineEntry>,
}

impl Season {
    pub fn from_input(input: SeasonInput) -> Result<Self, SeasonError> {
        let mut team_ids: HashMap<String, TeamId> = HashMap::new();
        let mut teams = Vec::with_capacity(input.teams.len());
        for raw in input.teams {
            let id = TeamId(teams.len() as u32);
            if team_ids.insert(raw.team.clone(), id).is_some() {
                return Err(SeasonError::DuplicateTeam(raw.team));
            }
            teams.push(Team { id, name: raw.team });
        }

        let mut participant_ids: HashMap<String, ParticipantId> = HashMap::new();
        let mut participants = Vec::with_capacity(input.participants.len());
        for name in input.participants {
            let id = ParticipantId(participants.len() as u32);
            if participant_ids.insert(name.clone(), id).is_some() {
                return Err(SeasonError::DuplicateParticipant(name));
            }
            participants.push(Participant { id, name });
        }

        let mut seen: HashSet<FixtureId> = HashSet::new();
        let mut fixtures = Vec::with_capacity(input.fixtures.len());
        for raw in input.fixtures {
            if !seen.insert(raw.id) {
                return Err(SeasonError::DuplicateFixture(raw.id));
            }
            let home_team = team_ids.get(&raw.home).copied();
            let away_team = team_ids.get(&raw.away).copied();
            if home_team.is_none() || away_team.is_none() {
                log::debug!(
                    "fixture {} references a team outside the team list ({} vs {})",
                    raw.id,
                    raw.home,
                    raw.away
                );
            }
            fixtures.push(Fixture {
                id: raw.id,
                matchday: raw.matchday,
                kickoff: parse_kickoff(raw.id, &raw.datetime)?,
                home: raw.home,
                away: raw.away,
                home_team,
                away_team,
                official: PartialScore::new(raw.home_goals, raw.away_goals),
            });
        }

        let mut predictions = PredictionBook::new();
        for (name, by_fixture) in input.predictions {
            let Some(&participant) = participant_ids.get(&name) else {
                log::warn!("dropping {} predictions of unknown participant {:?}", by_fixture.len(), name);
                continue;
            };
            for (fixture_id, prediction) in by_fixture {
                if !seen.contains(&fixture_id) {
                    log::warn!("dropping prediction of {:?} for unknown fixture {}", name, fixture_id);
                    continue;
                }
                predictions.insert(participant, fixture_id, prediction);
            }
        }

        log::info!(
            "season loaded: {} teams, {} participants, {} fixtures, {} predictions",
            teams.len(),
            participants.len(),
            fixtures.len(),
            predictions.len()
        );

        Ok(Self {
            teams,
            participants,
            fixtures,
            predictions,
            baseline: input.baseline,
        })
    }

    pub fn load_dir(dir: impl AsRef<Path>, paths: &DataPaths) -> Result<Self, SeasonError> {
        let dir = dir.as_ref();
        let input = SeasonInput {
            fixtures: read_json(&dir.join(&paths.matches))?,
            participants: read_json(&dir.join(&paths.participants))?,
            predictions: read_json(&dir.join(&paths.predictions))?,
            teams: read_json(&dir.join(&paths.teams))?,
            baseline: read_json(&dir.join(&paths.baseline))?,
        };
        Self::from_input(input)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn predictions(&self) -> &PredictionBook {
        &self.predictions
    }

    pub fn baseline(&self) -> &[BaselineEntry] {
        &self.baseline
    }

    pub fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == id)
    }

    pub fn team_id(&self, name: &str) -> Option<TeamId> {
        self.teams.iter().find(|t| t.name == name).map(|t| t.id)
    }

    pub fn participant_id(&self, name: &str) -> Option<ParticipantId> {
        self.participants.iter().find(|p| p.name == name).map(|p| p.id)
    }

    pub fn matchdays(&self) -> Vec<u32> {
        let mut days: Vec<u32> = self.fixtures.iter().map(|f| f.matchday).collect();
        days.sort_unstable();
        days.dedup();
        days
    }
}
