// 1.0: all the primitives live here. ids, goals, scorelines, roster entries.
// each id is a newtype so the compiler catches a team id passed where a participant id belongs.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u32);

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// goals are unsigned. negative counts never get past the loader.
pub type Goals = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opposite(&self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

// 1.1: scoreline where either side may still be missing. None = not played / not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartialScore {
    pub home: Option<Goals>,
    pub away: Option<Goals>,
}

impl PartialScore {
    pub fn new(home: Option<Goals>, away: Option<Goals>) -> Self {
        Self { home, away }
    }

    pub fn unplayed() -> Self {
        Self::default()
    }

    pub fn full(home: Goals, away: Goals) -> Self {
        Self {
            home: Some(home),
            away: Some(away),
        }
    }

    pub fn side(&self, side: TeamSide) -> Option<Goals> {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Away => self.away,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.home.is_some() && self.away.is_some()
    }

    pub fn scoreline(&self) -> Option<Scoreline> {
        match (self.home, self.away) {
            (Some(home), Some(away)) => Some(Scoreline { home, away }),
            _ => None,
        }
    }
}

impl fmt::Display for PartialScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |g: Option<Goals>| g.map_or_else(|| "-".to_string(), |g| g.to_string());
        write!(f, "{}-{}", side(self.home), side(self.away))
    }
}

// 1.2: complete scoreline of a played match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreline {
    pub home: Goals,
    pub away: Goals,
}

impl Scoreline {
    pub fn new(home: Goals, away: Goals) -> Self {
        Self { home, away }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.home) - i64::from(self.away)
    }
}

impl From<Scoreline> for PartialScore {
    fn from(s: Scoreline) -> Self {
        PartialScore::full(s.home, s.away)
    }
}

impl fmt::Display for Scoreline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

// 1.3: roster entries. names are resolved to ids once, at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}
