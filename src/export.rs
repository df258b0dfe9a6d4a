//! iCalendar export.
//!
//! Renders the schedule as an RFC 5545 calendar: one VEVENT per block with a
//! "{mode}: {chapter}" summary and a description noting the session kind and
//! completion status. Timestamps are floating local times, matching the
//! planner's wall-clock semantics.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use log::debug;

use crate::domain::StudyBlock;
use crate::error::Result;

/// Default export file name, relative to the working directory.
pub const DEFAULT_EXPORT_FILE: &str = "study_schedule.ics";

const PRODID: &str = "-//cramr//study schedule//EN";

/// Render the schedule as iCalendar text (CRLF line endings).
pub fn render_calendar(blocks: &[StudyBlock]) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
    ];

    for (index, block) in blocks.iter().enumerate() {
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!(
            "UID:{}-{}@cramr",
            block.start_time.format("%Y%m%dT%H%M%S"),
            index
        ));
        lines.push(format!("DTSTART:{}", format_timestamp(block.start_time)));
        lines.push(format!("DTEND:{}", format_timestamp(block.end_time)));
        lines.push(format!(
            "SUMMARY:{}",
            escape_text(&format!("{}: {}", block.mode, block.chapter))
        ));
        lines.push(format!(
            "DESCRIPTION:{}",
            escape_text(&format!(
                "{} session for {}\nStatus: {}",
                block.mode,
                block.chapter,
                block.status_label()
            ))
        ));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

/// Render and write the schedule to `path`.
pub fn export_to_ics(blocks: &[StudyBlock], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_calendar(blocks))?;
    debug!("Exported {} blocks to {}", blocks.len(), path.display());
    Ok(())
}

/// Floating local timestamp, e.g. 20260301T090000.
fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// Escape TEXT values per RFC 5545: backslash, semicolon, comma, newline.
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            other => out.push(other),
        }
    }
    out
}
