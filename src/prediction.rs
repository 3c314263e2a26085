// 5.0: participant predictions, keyed by (participant, fixture).

use crate::sign::{sign, Sign};
use crate::types::{FixtureId, Goals, ParticipantId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    #[serde(default)]
    pub pred_home: Option<Goals>,
    #[serde(default)]
    pub pred_away: Option<Goals>,
}

impl Prediction {
    pub fn new(pred_home: Option<Goals>, pred_away: Option<Goals>) -> Self {
        Self {
            pred_home,
            pred_away,
        }
    }

    pub fn exact(home: Goals, away: Goals) -> Self {
        Self::new(Some(home), Some(away))
    }

    // a prediction counts once the home side is filled in
    pub fn is_made(&self) -> bool {
        self.pred_home.is_some()
    }

    pub fn sign(&self) -> Option<Sign> {
        sign(self.pred_home, self.pred_away)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionBook {
    entries: HashMap<(ParticipantId, FixtureId), Prediction>,
}

impl PredictionBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        participant: ParticipantId,
        fixture: FixtureId,
        prediction: Prediction,
    ) -> Option<Prediction> {
        self.entries.insert((participant, fixture), prediction)
    }

    pub fn get(&self, participant: ParticipantId, fixture: FixtureId) -> Option<&Prediction> {
        self.entries.get(&(participant, fixture))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn for_participant(
        &self,
        participant: ParticipantId,
    ) -> impl Iterator<Item = (FixtureId, &Prediction)> {
        self.entries
            .iter()
            .filter(move |((p, _), _)| *p == participant)
            .map(|((_, f), pred)| (*f, pred))
    }
}
