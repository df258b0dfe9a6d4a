//! Schedule persistence.
//!
//! The schedule is one pretty-printed JSON array of block records. A missing
//! file loads as an empty schedule so first runs need no setup.

use std::fs;
use std::path::Path;

use log::debug;

use crate::domain::StudyBlock;
use crate::error::Result;

/// Default schedule file name, relative to the working directory.
pub const DEFAULT_SCHEDULE_FILE: &str = "study_schedule.json";

/// Write the full schedule to `path`, replacing any previous contents.
pub fn save_schedule(blocks: &[StudyBlock], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(blocks)?;
    fs::write(path, json)?;
    debug!("Saved {} blocks to {}", blocks.len(), path.display());
    Ok(())
}

/// Load the schedule from `path`; a missing file is an empty schedule.
pub fn load_schedule(path: impl AsRef<Path>) -> Result<Vec<StudyBlock>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    let blocks: Vec<StudyBlock> = serde_json::from_str(&content)?;
    debug!("Loaded {} blocks from {}", blocks.len(), path.display());
    Ok(blocks)
}
