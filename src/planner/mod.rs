//! The scheduler engine.
//!
//! Three stages, run in order by [`engine::StudyPlanner`]:
//! - `estimate`: difficulty/length scores per chapter from title text
//! - `capacity`: ramped per-day block counts and candidate time slots
//! - `engine`: feasibility search, chapter-to-slot assignment, completion marking

pub mod capacity;
pub mod engine;
pub mod estimate;

pub use engine::{PlanRequest, StudyPlanner};
pub use estimate::ChapterMeta;
