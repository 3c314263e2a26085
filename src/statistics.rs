// 8.1: leaderboard highlights. most exact hits, most sign hits, leader totals.
// ties on the "most" picks go to the later participant in leaderboard order.

use crate::ranking::{ParticipantStat, RankedParticipant};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub participant: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardHighlights {
    pub most_exact_hits: Highlight,
    pub most_sign_hits: Highlight,
    pub top_total_points: Highlight,
    pub leader_played_matches: Highlight,
    pub leader_points_per_match: Decimal,
}

// average over counted predictions, 2dp. zero when nothing was counted
pub fn points_per_match(stat: &ParticipantStat) -> Decimal {
    if stat.played_matches == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(stat.total_points) / Decimal::from(stat.played_matches))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn most_by(ranking: &[RankedParticipant], value: impl Fn(&ParticipantStat) -> u32) -> Option<Highlight> {
    let best = ranking
        .iter()
        .reduce(|best, r| if value(&best.stat) > value(&r.stat) { best } else { r })?;
    Some(Highlight {
        participant: best.stat.name.clone(),
        value: value(&best.stat),
    })
}

pub fn leaderboard_highlights(ranking: &[RankedParticipant]) -> Option<LeaderboardHighlights> {
    let leader = &ranking.first()?.stat;
    Some(LeaderboardHighlights {
        most_exact_hits: most_by(ranking, |s| s.exact_hits)?,
        most_sign_hits: most_by(ranking, |s| s.sign_hits)?,
        top_total_points: Highlight {
            participant: leader.name.clone(),
            value: leader.total_points,
        },
        leader_played_matches: Highlight {
            participant: leader.name.clone(),
            value: leader.played_matches,
        },
        leader_points_per_match: points_per_match(leader),
    })
}
