// 6.0: prediction scoring. the scorer classifies first, points come from the class.
// sign points when predicted and actual outcome agree, exact points on top when both
// sides match. an unplayed match never scores.

use crate::prediction::Prediction;
use crate::sign::Sign;
use crate::types::{Goals, PartialScore};
use serde::{Deserialize, Serialize};
use std::path::Path;

/** 6.1: scoring rules. rules.json may carry the spanish keys `signo`/`exacto`/`diferencia` */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRules {
    // points for the right 1/X/2
    #[serde(alias = "signo")]
    pub sign_match_points: u32,
    // extra points for the exact scoreline
    #[serde(alias = "exacto")]
    pub exact_score_points: u32,
    // reserved. not consumed by scoring
    #[serde(alias = "diferencia", default)]
    pub goal_difference_points: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            sign_match_points: 2,
            exact_score_points: 3,
            goal_difference_points: 0,
        }
    }
}

impl ScoringRules {
    pub fn new(sign_match_points: u32, exact_score_points: u32) -> Self {
        Self {
            sign_match_points,
            exact_score_points,
            goal_difference_points: 0,
        }
    }

    /// Points for an exact hit. Saturates instead of overflowing on absurd rules.
    pub fn max_points(&self) -> u32 {
        self.sign_match_points.saturating_add(self.exact_score_points)
    }

    pub fn points_for(&self, outcome: ScoreOutcome) -> u32 {
        match outcome {
            ScoreOutcome::NoPrediction | ScoreOutcome::Pending | ScoreOutcome::WrongSign => 0,
            ScoreOutcome::SignOnly => self.sign_match_points,
            ScoreOutcome::ExactScore => self.max_points(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, crate::season::SeasonError> {
        crate::season::read_json(path.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreOutcome {
    // no prediction, or predicted home missing
    NoPrediction,
    // match not played yet
    Pending,
    WrongSign,
    SignOnly,
    ExactScore,
}

impl ScoreOutcome {
    // whether the prediction counts towards played matches
    pub fn is_counted(&self) -> bool {
        matches!(
            self,
            ScoreOutcome::WrongSign | ScoreOutcome::SignOnly | ScoreOutcome::ExactScore
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredPrediction {
    pub outcome: ScoreOutcome,
    pub points: u32,
}

pub fn classify(effective: PartialScore, prediction: Option<&Prediction>) -> ScoreOutcome {
    let Some(prediction) = prediction.filter(|p| p.is_made()) else {
        return ScoreOutcome::NoPrediction;
    };
    let Some(actual) = effective.scoreline() else {
        return ScoreOutcome::Pending;
    };

    if prediction.sign() != Some(Sign::of(actual)) {
        return ScoreOutcome::WrongSign;
    }
    if prediction.pred_home == Some(actual.home) && prediction.pred_away == Some(actual.away) {
        ScoreOutcome::ExactScore
    } else {
        ScoreOutcome::SignOnly
    }
}

pub fn score_prediction(
    effective: PartialScore,
    prediction: Option<&Prediction>,
    rules: &ScoringRules,
) -> ScoredPrediction {
    let outcome = classify(effective, prediction);
    ScoredPrediction {
        outcome,
        points: rules.points_for(outcome),
    }
}

// scalar form: effective goals + one prediction -> points
pub fn score(
    effective_home: Option<Goals>,
    effective_away: Option<Goals>,
    prediction: &Prediction,
    rules: &ScoringRules,
) -> u32 {
    score_prediction(
        PartialScore::new(effective_home, effective_away),
        Some(prediction),
        rules,
    )
    .points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ScoringRules {
        ScoringRules::new(2, 3)
    }

    #[test]
    fn exact_sign_and_wrong() {
        let rules = rules();
        assert_eq!(score(Some(2), Some(1), &Prediction::exact(2, 1), &rules), 5);
        assert_eq!(score(Some(2), Some(1), &Prediction::exact(3, 0), &rules), 2);
        assert_eq!(score(Some(2), Some(1), &Prediction::exact(1, 1), &rules), 0);
    }

    #[test]
    fn draw_sign_only() {
        let scored = score_prediction(PartialScore::full(1, 1), Some(&Prediction::exact(0, 0)), &rules());
        assert_eq!(scored.outcome, ScoreOutcome::SignOnly);
        assert_eq!(scored.points, 2);
    }

    #[test]
    fn unplayed_never_scores() {
        let scored = score_prediction(PartialScore::new(Some(2), None), Some(&Prediction::exact(2, 0)), &rules());
        assert_eq!(scored.outcome, ScoreOutcome::Pending);
        assert_eq!(scored.points, 0);
        assert!(!scored.outcome.is_counted());
    }

    #[test]
    fn missing_home_prediction_scores_zero() {
        let rules = rules();
        let pred = Prediction::new(None, Some(1));
        assert_eq!(score(Some(2), Some(1), &pred, &rules), 0);
        assert_eq!(classify(PartialScore::full(2, 1), Some(&pred)), ScoreOutcome::NoPrediction);
        assert_eq!(classify(PartialScore::full(2, 1), None), ScoreOutcome::NoPrediction);
    }

    #[test]
    fn half_prediction_is_counted_but_wrong() {
        let outcome = classify(PartialScore::full(2, 1), Some(&Prediction::new(Some(2), None)));
        assert_eq!(outcome, ScoreOutcome::WrongSign);
        assert!(outcome.is_counted());
    }

    #[test]
    fn zero_exact_points_still_classified_exact() {
        let rules = ScoringRules::new(2, 0);
        let scored = score_prediction(PartialScore::full(2, 1), Some(&Prediction::exact(2, 1)), &rules);
        assert_eq!(scored.outcome, ScoreOutcome::ExactScore);
        assert_eq!(scored.points, 2);
    }

    #[test]
    fn huge_rules_saturate() {
        let rules: ScoringRules =
            serde_json::from_str(r#"{"signo": 4294967295, "exacto": 7}"#).unwrap();
        assert_eq!(rules.max_points(), u32::MAX);
        let scored = score_prediction(PartialScore::full(1, 0), Some(&Prediction::exact(1, 0)), &rules);
        assert_eq!(scored.points, u32::MAX);
    }

    #[test]
    fn rules_accept_spanish_keys() {
        let rules: ScoringRules =
            serde_json::from_str(r#"{"signo": 2, "exacto": 3, "diferencia": 0}"#).unwrap();
        assert_eq!(rules, ScoringRules::default());

        let rules: ScoringRules =
            serde_json::from_str(r#"{"signMatchPoints": 1, "exactScorePoints": 4}"#).unwrap();
        assert_eq!(rules.max_points(), 5);
        assert_eq!(rules.goal_difference_points, 0);
    }
}
