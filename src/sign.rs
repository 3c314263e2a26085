// 2.0: match outcome sign. '1' home win, 'X' draw, '2' away win.
// undefined (None) whenever either side of the scoreline is missing.

use crate::types::{Goals, Scoreline};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    #[serde(rename = "1")]
    HomeWin,
    #[serde(rename = "X")]
    Draw,
    #[serde(rename = "2")]
    AwayWin,
}

impl Sign {
    pub fn of(scoreline: Scoreline) -> Self {
        match scoreline.home.cmp(&scoreline.away) {
            std::cmp::Ordering::Greater => Sign::HomeWin,
            std::cmp::Ordering::Equal => Sign::Draw,
            std::cmp::Ordering::Less => Sign::AwayWin,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Sign::HomeWin => '1',
            Sign::Draw => 'X',
            Sign::AwayWin => '2',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn sign(home: Option<Goals>, away: Option<Goals>) -> Option<Sign> {
    match (home, away) {
        (Some(home), Some(away)) => Some(Sign::of(Scoreline::new(home, away))),
        _ => None,
    }
}
