//! Persisted session record
//!
//! The serialized shape is a contract with any storage transport:
//! camelCase field names, snake_case status strings, single-letter hint map
//! keys with lowercase tag values. The hint map is written for external
//! readers but never trusted on load — resumption re-derives it from the
//! guesses.

use crate::core::LetterScore;
use crate::game::GameStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day's game progress, as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Calendar day this record belongs to
    pub date: NaiveDate,
    /// The day's target word
    pub word: String,
    /// Submitted guesses, in order
    pub guesses: Vec<String>,
    /// Lifecycle status at save time
    pub status: GameStatus,
    /// Seconds spent in play while the session was in progress
    pub elapsed_seconds: u64,
    /// Best-known per-letter status, for external renderers
    pub letter_hint_map: BTreeMap<char, LetterScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SessionRecord {
        SessionRecord {
            date: NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(),
            word: "CHICANE".to_string(),
            guesses: vec!["FERRARI".to_string(), "MCLAREN".to_string()],
            status: GameStatus::InProgress,
            elapsed_seconds: 42,
            letter_hint_map: [('A', LetterScore::Present), ('R', LetterScore::Absent)]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn record_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();

        for field in [
            "date",
            "word",
            "guesses",
            "status",
            "elapsedSeconds",
            "letterHintMap",
        ] {
            assert!(object.contains_key(field), "missing wire field {field}");
        }
        assert_eq!(object.len(), 6);
    }

    #[test]
    fn record_wire_values() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["date"], "2026-08-26");
        assert_eq!(value["status"], "in_progress");
        assert_eq!(value["elapsedSeconds"], 42);
        assert_eq!(value["letterHintMap"]["A"], "present");
        assert_eq!(value["letterHintMap"]["R"], "absent");
    }

    #[test]
    fn terminal_status_wire_strings() {
        let mut record = sample();

        record.status = GameStatus::Won;
        assert_eq!(serde_json::to_value(&record).unwrap()["status"], "won");

        record.status = GameStatus::Lost;
        assert_eq!(serde_json::to_value(&record).unwrap()["status"], "lost");
    }
}
