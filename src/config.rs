//! Configuration for cramr.
//!
//! Loaded from .cramr.yml or ~/.config/cramr/cramr.yml. Values mirror the
//! planner's defaults; out-of-range numbers are clamped at planner
//! construction rather than rejected here.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Planner tuning defaults.
    pub planner: PlannerConfig,

    /// Exam defaults.
    pub exam: ExamConfig,

    /// Schedule/export file locations.
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .cramr.yml in current directory
    /// 3. ~/.config/cramr/cramr.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit path takes precedence
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project config
        let project_config = PathBuf::from(".cramr.yml");
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from .cramr.yml");
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load .cramr.yml: {}", e);
                }
            }
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("cramr").join("cramr.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // Use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

/// Planner tuning defaults; each is overridable per run from the CLI.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Study block length in minutes.
    #[serde(rename = "block-minutes")]
    pub block_minutes: u32,

    /// Base blocks per day before ramping.
    #[serde(rename = "daily-limit")]
    pub daily_limit: u32,

    /// Break between blocks in minutes.
    #[serde(rename = "break-minutes")]
    pub break_minutes: u32,

    /// Session density ramp toward the exam, 0.0-1.0.
    #[serde(rename = "ramp-factor")]
    pub ramp_factor: f64,

    /// Hour each day's first slot starts (0-23).
    #[serde(rename = "day-start-hour")]
    pub day_start_hour: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            block_minutes: 45,
            daily_limit: 4,
            break_minutes: 10,
            ramp_factor: 0.5,
            day_start_hour: 9,
        }
    }
}

/// Exam defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExamConfig {
    /// Exam time of day (HH:MM, 24h) used when only a date is given.
    #[serde(rename = "default-time")]
    pub default_time: String,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            default_time: "09:00".to_string(),
        }
    }
}

/// Schedule/export file locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Where the schedule JSON lives.
    #[serde(rename = "schedule-file")]
    pub schedule_file: PathBuf,

    /// Default .ics export target.
    #[serde(rename = "export-file")]
    pub export_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            schedule_file: PathBuf::from(crate::storage::DEFAULT_SCHEDULE_FILE),
            export_file: PathBuf::from(crate::export::DEFAULT_EXPORT_FILE),
        }
    }
}
