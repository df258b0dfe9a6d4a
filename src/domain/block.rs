//! Study block record and related types
//!
//! A StudyBlock is the unit of schedule output and of persisted/exported state.
//! Blocks are created wholesale by the planner engine; `completed` is the only
//! field that mutates afterward.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One scheduled study or revision interval.
///
/// Wire shape (JSON): `chapter`, `start`, `end` (ISO-8601 local timestamps),
/// `mode` ("Study"|"Revision"), `completed`. Legacy records missing `mode` or
/// `completed` parse with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyBlock {
    /// Chapter title this block covers (one of the planner's input titles)
    pub chapter: String,

    /// Local wall-clock start, no timezone conversion
    #[serde(rename = "start")]
    pub start_time: NaiveDateTime,

    /// Always `start_time + block_minutes`, strictly before the exam deadline
    #[serde(rename = "end")]
    pub end_time: NaiveDateTime,

    /// Study (first encounter) or Revision (repeat pass)
    #[serde(default)]
    pub mode: BlockMode,

    /// Toggled by completion marking; never set at generation time
    #[serde(default)]
    pub completed: bool,
}

/// The two kinds of session a block can represent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockMode {
    /// A chapter's first scheduled encounter
    #[default]
    Study,
    /// A repeat pass over a chapter already studied once
    Revision,
}

impl BlockMode {
    pub fn is_revision(&self) -> bool {
        matches!(self, BlockMode::Revision)
    }
}

impl std::fmt::Display for BlockMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockMode::Study => write!(f, "Study"),
            BlockMode::Revision => write!(f, "Revision"),
        }
    }
}

impl StudyBlock {
    /// Create a new block spanning `block_minutes` from `start`.
    pub fn new(
        chapter: impl Into<String>,
        start: NaiveDateTime,
        block_minutes: u32,
        mode: BlockMode,
    ) -> Self {
        Self {
            chapter: chapter.into(),
            start_time: start,
            end_time: start + Duration::minutes(i64::from(block_minutes)),
            mode,
            completed: false,
        }
    }

    /// Block length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Human-readable completion status, as used in calendar exports.
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_block_fields() {
        let block = StudyBlock::new("Thermodynamics", sample_start(), 45, BlockMode::Study);

        assert_eq!(block.chapter, "Thermodynamics");
        assert_eq!(block.start_time, sample_start());
        assert_eq!(block.duration_minutes(), 45);
        assert_eq!(block.mode, BlockMode::Study);
        assert!(!block.completed);
    }

    #[test]
    fn test_status_label() {
        let mut block = StudyBlock::new("Optics", sample_start(), 30, BlockMode::Revision);
        assert_eq!(block.status_label(), "Pending");

        block.completed = true;
        assert_eq!(block.status_label(), "Completed");
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(BlockMode::Study.to_string(), "Study");
        assert_eq!(BlockMode::Revision.to_string(), "Revision");
        assert!(BlockMode::Revision.is_revision());
        assert!(!BlockMode::Study.is_revision());
    }

    #[test]
    fn test_serialization_shape() {
        let block = StudyBlock::new("Waves", sample_start(), 45, BlockMode::Study);
        let json = serde_json::to_value(&block).unwrap();

        assert_eq!(json["chapter"], "Waves");
        assert_eq!(json["start"], "2026-03-01T09:00:00");
        assert_eq!(json["end"], "2026-03-01T09:45:00");
        assert_eq!(json["mode"], "Study");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut block = StudyBlock::new("Waves", sample_start(), 45, BlockMode::Revision);
        block.completed = true;

        let json = serde_json::to_string(&block).unwrap();
        let parsed: StudyBlock = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, block);
    }

    #[test]
    fn test_legacy_record_defaults() {
        // Records written before mode/completed existed still parse
        let json = r#"{
            "chapter": "Old chapter",
            "start": "2026-03-01T09:00:00",
            "end": "2026-03-01T09:45:00"
        }"#;
        let parsed: StudyBlock = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.mode, BlockMode::Study);
        assert!(!parsed.completed);
        assert_eq!(parsed.duration_minutes(), 45);
    }
}
