// 7.0: participant leaderboard. folds scoring over played fixtures, sorts by total
// points, then assigns competition ranks (1,1,3) in a separate pass.

use crate::fixture::Fixture;
use crate::overrides::OverrideSet;
use crate::prediction::PredictionBook;
use crate::resolver::played_results;
use crate::scoring::{score_prediction, ScoreOutcome, ScoredPrediction, ScoringRules};
use crate::types::{Participant, ParticipantId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantStat {
    pub participant_id: ParticipantId,
    pub name: String,
    pub total_points: u32,
    pub exact_hits: u32,
    pub sign_hits: u32,
    pub played_matches: u32,
}

impl ParticipantStat {
    pub fn new(participant: &Participant) -> Self {
        Self {
            participant_id: participant.id,
            name: participant.name.clone(),
            total_points: 0,
            exact_hits: 0,
            sign_hits: 0,
            played_matches: 0,
        }
    }

    pub fn record(&mut self, scored: ScoredPrediction) {
        if !scored.outcome.is_counted() {
            return;
        }
        self.total_points = self.total_points.saturating_add(scored.points);
        self.played_matches += 1;
        match scored.outcome {
            ScoreOutcome::ExactScore => self.exact_hits += 1,
            ScoreOutcome::SignOnly => self.sign_hits += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedParticipant {
    pub rank: usize,
    pub stat: ParticipantStat,
}

/// Competition ranks for an already sorted sequence: equal keys share a rank, the
/// next distinct key resumes at its 1-based position.
pub fn competition_ranks<T, K, F>(sorted: &[T], key: F) -> Vec<usize>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut ranks = Vec::with_capacity(sorted.len());
    let mut previous: Option<K> = None;
    let mut rank = 0;

    for (i, item) in sorted.iter().enumerate() {
        let k = key(item);
        if previous.as_ref() != Some(&k) {
            rank = i + 1;
        }
        ranks.push(rank);
        previous = Some(k);
    }

    ranks
}

pub fn tally(
    participants: &[Participant],
    fixtures: &[Fixture],
    predictions: &PredictionBook,
    overrides: &OverrideSet,
    rules: &ScoringRules,
) -> Vec<ParticipantStat> {
    let mut stats: Vec<ParticipantStat> = participants.iter().map(ParticipantStat::new).collect();

    for (fixture, score) in played_results(fixtures, overrides) {
        for stat in stats.iter_mut() {
            let prediction = predictions.get(stat.participant_id, fixture.id);
            stat.record(score_prediction(score.into(), prediction, rules));
        }
    }

    stats
}

pub fn rank_participants(mut stats: Vec<ParticipantStat>) -> Vec<RankedParticipant> {
    // stable: tied participants keep roster order
    stats.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    let ranks = competition_ranks(&stats, |s| s.total_points);

    stats
        .into_iter()
        .zip(ranks)
        .map(|(stat, rank)| RankedParticipant { rank, stat })
        .collect()
}

pub fn compute_ranking(
    participants: &[Participant],
    fixtures: &[Fixture],
    predictions: &PredictionBook,
    overrides: &OverrideSet,
    rules: &ScoringRules,
) -> Vec<RankedParticipant> {
    rank_participants(tally(participants, fixtures, predictions, overrides, rules))
}
