// 8.0: baseline validation. every baseline entry is checked against the computed
// leaderboard by exact name; all mismatches are reported together.

use crate::ranking::RankedParticipant;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineEntry {
    pub player: String,
    pub total_points: u32,
}

impl BaselineEntry {
    pub fn new(player: impl Into<String>, total_points: u32) -> Self {
        Self {
            player: player.into(),
            total_points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    pub participant: String,
    pub expected: u32,
    // None = participant missing from the leaderboard
    pub actual: Option<u32>,
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.actual {
            Some(actual) => write!(
                f,
                "{}: expected {}, computed {}",
                self.participant, self.expected, actual
            ),
            None => write!(
                f,
                "{}: expected {}, not found",
                self.participant, self.expected
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub discrepancies: Vec<Discrepancy>,
}

impl ValidationReport {
    pub fn is_pass(&self) -> bool {
        self.discrepancies.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            return write!(f, "validation passed: {} baseline totals match", self.checked);
        }
        let errors: Vec<String> = self.discrepancies.iter().map(|d| d.to_string()).collect();
        write!(f, "validation failed: {}", errors.join(", "))
    }
}

pub fn validate(baseline: &[BaselineEntry], ranking: &[RankedParticipant]) -> ValidationReport {
    let discrepancies: Vec<Discrepancy> = baseline
        .iter()
        .filter_map(|entry| {
            let actual = ranking
                .iter()
                .find(|r| r.stat.name == entry.player)
                .map(|r| r.stat.total_points);
            (actual != Some(entry.total_points)).then(|| Discrepancy {
                participant: entry.player.clone(),
                expected: entry.total_points,
                actual,
            })
        })
        .collect();

    if !discrepancies.is_empty() {
        log::warn!("{} of {} baseline totals differ", discrepancies.len(), baseline.len());
    }

    ValidationReport {
        checked: baseline.len(),
        discrepancies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::ParticipantStat;
    use crate::types::ParticipantId;

    fn ranked(name: &str, total_points: u32) -> RankedParticipant {
        RankedParticipant {
            rank: 1,
            stat: ParticipantStat {
                participant_id: ParticipantId(0),
                name: name.to_string(),
                total_points,
                exact_hits: 0,
                sign_hits: 0,
                played_matches: 0,
            },
        }
    }

    #[test]
    fn mismatch_reported() {
        let report = validate(&[BaselineEntry::new("Ana", 15)], &[ranked("Ana", 14)]);
        assert!(!report.is_pass());
        assert_eq!(
            report.discrepancies,
            vec![Discrepancy {
                participant: "Ana".to_string(),
                expected: 15,
                actual: Some(14),
            }]
        );
        assert_eq!(report.to_string(), "validation failed: Ana: expected 15, computed 14");
    }

    #[test]
    fn matching_totals_pass() {
        let report = validate(
            &[BaselineEntry::new("Ana", 15), BaselineEntry::new("Luis", 9)],
            &[ranked("Luis", 9), ranked("Ana", 15)],
        );
        assert!(report.is_pass());
        assert_eq!(report.checked, 2);
        assert!(report.to_string().starts_with("validation passed"));
    }

    #[test]
    fn name_match_is_case_sensitive_and_collects_all() {
        let report = validate(
            &[BaselineEntry::new("ana", 15), BaselineEntry::new("Pepe", 3), BaselineEntry::new("Luis", 9)],
            &[ranked("Ana", 15), ranked("Luis", 8)],
        );
        assert_eq!(report.discrepancies.len(), 3);
        assert_eq!(report.discrepancies[0].actual, None);
        assert_eq!(report.discrepancies[1].to_string(), "Pepe: expected 3, not found");
        assert_eq!(report.discrepancies[2].actual, Some(8));
    }

    #[test]
    fn empty_baseline_passes() {
        assert!(validate(&[], &[ranked("Ana", 1)]).is_pass());
    }
}
