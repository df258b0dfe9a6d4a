//! Error types for cramr
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in cramr
#[derive(Debug, Error)]
pub enum CramrError {
    /// Exam deadline is not strictly in the future at construction
    #[error("Exam deadline must be in the future")]
    InvalidDeadline,

    /// No chapter titles were supplied
    #[error("At least one chapter is required")]
    EmptyChapterSet,

    /// Fewer than one whole day between now and the exam date
    #[error("Not enough days until the exam (must be at least tomorrow)")]
    InsufficientLeadTime,

    /// Capacity search exhausted without enough candidate slots
    #[error("Unable to fit {chapters} chapters before the exam after {attempts} capacity increases")]
    UnschedulableConstraints { chapters: usize, attempts: u32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for cramr operations
pub type Result<T> = std::result::Result<T, CramrError>;
