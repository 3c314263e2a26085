// 4.0: provisional score edits. the caller owns the OverrideSet and hands the engine a
// shared reference per computation, so an edit can never race a recalculation.
// 4.0.1 OverrideBackup exports/imports the set as a json document.

use crate::types::{FixtureId, Goals, PartialScore, TeamSide};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provisional edit of one fixture. Each side is set or cleared independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreOverride {
    #[serde(default)]
    pub home_goals: Option<Goals>,
    #[serde(default)]
    pub away_goals: Option<Goals>,
}

impl ScoreOverride {
    pub fn new(home_goals: Option<Goals>, away_goals: Option<Goals>) -> Self {
        Self {
            home_goals,
            away_goals,
        }
    }

    pub fn set(&mut self, side: TeamSide, goals: Option<Goals>) {
        match side {
            TeamSide::Home => self.home_goals = goals,
            TeamSide::Away => self.away_goals = goals,
        }
    }

    pub fn as_partial(&self) -> PartialScore {
        PartialScore::new(self.home_goals, self.away_goals)
    }

    // an entry with both sides cleared still marks the fixture as edited
    pub fn is_empty(&self) -> bool {
        self.home_goals.is_none() && self.away_goals.is_none()
    }
}

/// A single "set this side of this fixture" edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEdit {
    pub fixture_id: FixtureId,
    pub side: TeamSide,
    pub goals: Option<Goals>,
}

impl ScoreEdit {
    pub fn home(fixture_id: FixtureId, goals: Option<Goals>) -> Self {
        Self {
            fixture_id,
            side: TeamSide::Home,
            goals,
        }
    }

    pub fn away(fixture_id: FixtureId, goals: Option<Goals>) -> Self {
        Self {
            fixture_id,
            side: TeamSide::Away,
            goals,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideSet {
    entries: BTreeMap<FixtureId, ScoreOverride>,
}

impl OverrideSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, fixture_id: FixtureId) -> Option<&ScoreOverride> {
        self.entries.get(&fixture_id)
    }

    pub fn insert(&mut self, fixture_id: FixtureId, entry: ScoreOverride) -> Option<ScoreOverride> {
        self.entries.insert(fixture_id, entry)
    }

    pub fn set(&mut self, fixture_id: FixtureId, side: TeamSide, goals: Option<Goals>) {
        self.entries.entry(fixture_id).or_default().set(side, goals);
    }

    pub fn set_home(&mut self, fixture_id: FixtureId, goals: Option<Goals>) {
        self.set(fixture_id, TeamSide::Home, goals);
    }

    pub fn set_away(&mut self, fixture_id: FixtureId, goals: Option<Goals>) {
        self.set(fixture_id, TeamSide::Away, goals);
    }

    pub fn apply(&mut self, edit: ScoreEdit) {
        self.set(edit.fixture_id, edit.side, edit.goals);
    }

    pub fn clear_fixture(&mut self, fixture_id: FixtureId) -> Option<ScoreOverride> {
        self.entries.remove(&fixture_id)
    }

    // drops every provisional edit, back to the official results
    pub fn restore(&mut self) {
        self.entries.clear();
    }

    pub fn is_edited(&self, fixture_id: FixtureId) -> bool {
        self.entries.contains_key(&fixture_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FixtureId, &ScoreOverride)> {
        self.entries.iter()
    }
}

impl FromIterator<(FixtureId, ScoreOverride)> for OverrideSet {
    fn from_iter<I: IntoIterator<Item = (FixtureId, ScoreOverride)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("Invalid backup document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Backup document has no editedMatches section")]
    MissingEditedMatches,
}

/** 4.1: backup document. `{ "editedMatches": {...}, "exportDate": "..." }` */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideBackup {
    #[serde(default)]
    pub edited_matches: Option<OverrideSet>,
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
}

impl OverrideBackup {
    pub fn export(overrides: &OverrideSet, at: DateTime<Utc>) -> Self {
        Self {
            edited_matches: Some(overrides.clone()),
            export_date: Some(at),
        }
    }

    pub fn to_json(&self) -> Result<String, BackupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, BackupError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn into_overrides(self) -> Result<OverrideSet, BackupError> {
        self.edited_matches.ok_or(BackupError::MissingEditedMatches)
    }

    // porra_backup_2024-10-01.json
    pub fn file_name(&self) -> String {
        let date = self.export_date.unwrap_or_else(Utc::now);
        format!("porra_backup_{}.json", date.format("%Y-%m-%d"))
    }
}

pub fn import_backup(raw: &str) -> Result<OverrideSet, BackupError> {
    let backup = OverrideBackup::from_json(raw)?;
    let overrides = backup.into_overrides()?;
    log::info!("imported backup with {} edited fixtures", overrides.len());
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sides_set_independently() {
        let mut set = OverrideSet::new();
        set.set_away(FixtureId(1), Some(0));

        let entry = set.get(FixtureId(1)).unwrap();
        assert_eq!(entry.home_goals, None);
        assert_eq!(entry.away_goals, Some(0));

        set.set_home(FixtureId(1), Some(3));
        set.set_away(FixtureId(1), None);
        let entry = set.get(FixtureId(1)).unwrap();
        assert_eq!(entry.as_partial(), PartialScore::new(Some(3), None));
    }

    #[test]
    fn cleared_entry_still_counts_as_edited() {
        let mut set = OverrideSet::new();
        set.apply(ScoreEdit::home(FixtureId(4), Some(1)));
        set.apply(ScoreEdit::home(FixtureId(4), None));

        assert!(set.is_edited(FixtureId(4)));
        assert!(set.get(FixtureId(4)).unwrap().is_empty());
        assert!(!set.is_edited(FixtureId(5)));
    }

    #[test]
    fn restore_drops_everything() {
        let mut set = OverrideSet::new();
        set.set_home(FixtureId(1), Some(1));
        set.set_home(FixtureId(2), Some(2));
        assert_eq!(set.len(), 2);

        set.restore();
        assert!(set.is_empty());
    }

    #[test]
    fn backup_export_then_import() {
        let mut set = OverrideSet::new();
        set.set_home(FixtureId(12), Some(2));
        set.set_away(FixtureId(12), Some(2));
        set.set_away(FixtureId(30), None);

        let at = Utc.with_ymd_and_hms(2024, 10, 1, 20, 0, 0).unwrap();
        let backup = OverrideBackup::export(&set, at);
        assert_eq!(backup.file_name(), "porra_backup_2024-10-01.json");

        let json = backup.to_json().unwrap();
        assert!(json.contains("\"editedMatches\""));
        assert!(json.contains("\"homeGoals\": 2"));

        let back = import_backup(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn import_reads_string_keyed_document() {
        let raw = r#"{
            "editedMatches": { "3": { "homeGoals": 1, "awayGoals": null } },
            "exportDate": "2024-11-05T10:00:00Z"
        }"#;
        let set = import_backup(raw).unwrap();
        assert_eq!(set.get(FixtureId(3)), Some(&ScoreOverride::new(Some(1), None)));
    }

    #[test]
    fn import_without_edited_matches_fails() {
        let result = import_backup(r#"{ "exportDate": "2024-11-05T10:00:00Z" }"#);
        assert!(matches!(result, Err(BackupError::MissingEditedMatches)));
    }

    #[test]
    fn import_rejects_negative_goals() {
        let result = import_backup(r#"{ "editedMatches": { "1": { "homeGoals": -1 } } }"#);
        assert!(matches!(result, Err(BackupError::Json(_))));
    }
}
