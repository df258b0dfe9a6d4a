//! Feasibility search and block assignment.
//!
//! The planner guarantees every chapter at least one Study block before the
//! exam: starting from the caller's daily limit it computes ramped capacities
//! and candidate slots, escalating the limit until enough slots exist or the
//! attempt bound is hit. Harder/longer chapters are assigned to the earliest
//! slots; every slot past the first pass becomes a Revision cycling through
//! the same order.

use chrono::{Local, NaiveDateTime, Timelike};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::capacity::{candidate_slots, daily_capacities};
use super::estimate::ChapterMeta;
use crate::domain::{BlockMode, StudyBlock};
use crate::error::{CramrError, Result};

/// How many times the capacity search escalates the daily limit before
/// declaring the constraints unschedulable.
pub const MAX_CAPACITY_ATTEMPTS: u32 = 30;

/// Everything the planner needs to build a schedule.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Ordered chapter titles; ties in weight keep this order
    pub chapters: Vec<String>,
    /// Block duration in minutes (clamped to >= 1)
    pub block_minutes: u32,
    /// Exam deadline, local wall clock; must be strictly future
    pub exam_datetime: NaiveDateTime,
    /// Base blocks per day before ramping (clamped to >= 1)
    pub daily_limit: u32,
    /// Gap between blocks in minutes
    pub break_minutes: u32,
    /// How much session density increases toward the exam, nominally 0.0-1.0
    pub ramp_factor: f64,
    /// Hour each day's first slot starts (clamped to 0-23)
    pub day_start_hour: u32,
    /// Fixing this makes metadata estimation reproducible
    pub seed: Option<u64>,
}

/// The scheduler engine.
///
/// Owns the chapter metadata (estimated once at construction) and the current
/// schedule, which is replaced wholesale on each [`generate`](Self::generate)
/// call. Synchronous and single-threaded; hosts embedding it concurrently must
/// serialize access per instance.
#[derive(Debug)]
pub struct StudyPlanner {
    chapters: Vec<ChapterMeta>,
    block_minutes: u32,
    exam_datetime: NaiveDateTime,
    daily_limit: u32,
    break_minutes: u32,
    ramp_factor: f64,
    day_start_hour: u32,
    /// Fixed reference instant for `new_at`; `new` re-reads the wall clock
    reference: Option<NaiveDateTime>,
    blocks: Vec<StudyBlock>,
}

impl StudyPlanner {
    /// Create a planner against the ambient local clock.
    pub fn new(request: PlanRequest) -> Result<Self> {
        Self::build(request, None)
    }

    /// Create a planner against an explicit reference instant.
    ///
    /// Used by tests and embedding hosts that need exact, reproducible slot
    /// math; `reference` stands in for "now" at construction and generation.
    pub fn new_at(request: PlanRequest, reference: NaiveDateTime) -> Result<Self> {
        Self::build(request, Some(reference))
    }

    fn build(request: PlanRequest, reference: Option<NaiveDateTime>) -> Result<Self> {
        let now = reference.unwrap_or_else(local_now);
        if request.exam_datetime <= now {
            return Err(CramrError::InvalidDeadline);
        }
        if request.chapters.is_empty() {
            return Err(CramrError::EmptyChapterSet);
        }

        // One code path for seeded and unseeded runs
        let seed = match request.seed {
            Some(seed) => seed,
            None => rand::rng().random(),
        };
        let mut rng = StdRng::seed_from_u64(seed);

        let chapters: Vec<ChapterMeta> = request
            .chapters
            .iter()
            .map(|title| ChapterMeta::estimate(title, &mut rng))
            .collect();
        debug!("Estimated metadata for {} chapters (seed {})", chapters.len(), seed);

        // Secondary parameters are clamped, never rejected
        Ok(Self {
            chapters,
            block_minutes: request.block_minutes.max(1),
            exam_datetime: request.exam_datetime,
            daily_limit: request.daily_limit.max(1),
            break_minutes: request.break_minutes,
            ramp_factor: request.ramp_factor,
            day_start_hour: request.day_start_hour.min(23),
            reference,
            blocks: Vec::new(),
        })
    }

    fn now(&self) -> NaiveDateTime {
        self.reference.unwrap_or_else(local_now)
    }

    /// Estimated chapter metadata in input order.
    pub fn chapters(&self) -> &[ChapterMeta] {
        &self.chapters
    }

    /// The current schedule, empty until [`generate`](Self::generate) succeeds.
    pub fn blocks(&self) -> &[StudyBlock] {
        &self.blocks
    }

    /// Consume the planner, keeping the schedule.
    pub fn into_blocks(self) -> Vec<StudyBlock> {
        self.blocks
    }

    /// Build the schedule, replacing any previous one.
    ///
    /// Runs the bounded capacity search, then assigns chapters to slots:
    /// the first N slots get one Study block per chapter in weight-descending
    /// order, every remaining slot becomes a Revision cycling through that
    /// same order. Returns the stored, time-ordered block list.
    pub fn generate(&mut self) -> Result<&[StudyBlock]> {
        let now = self.now();
        let total_days = (self.exam_datetime.date() - now.date()).num_days();
        if total_days < 1 {
            return Err(CramrError::InsufficientLeadTime);
        }
        let total_days = total_days as u32;

        let candidates = self.search_capacity(now, total_days)?;

        // Stable sort: equal weights keep input order
        let mut order: Vec<&ChapterMeta> = self.chapters.iter().collect();
        order.sort_by(|a, b| b.weight().cmp(&a.weight()));
        let chapter_count = order.len();

        let blocks: Vec<StudyBlock> = candidates
            .iter()
            .enumerate()
            .map(|(idx, &start)| {
                let (meta, mode) = if idx < chapter_count {
                    (order[idx], BlockMode::Study)
                } else {
                    (order[(idx - chapter_count) % chapter_count], BlockMode::Revision)
                };
                StudyBlock::new(&meta.title, start, self.block_minutes, mode)
            })
            .collect();

        info!(
            "Generated {} blocks ({} study, {} revision) before exam at {}",
            blocks.len(),
            chapter_count,
            blocks.len() - chapter_count,
            self.exam_datetime
        );
        self.blocks = blocks;
        Ok(&self.blocks)
    }

    /// Escalate the daily limit until candidate slots cover every chapter.
    fn search_capacity(&self, now: NaiveDateTime, total_days: u32) -> Result<Vec<NaiveDateTime>> {
        let mut base_limit = self.daily_limit;
        for attempt in 0..MAX_CAPACITY_ATTEMPTS {
            let capacities = daily_capacities(total_days, base_limit, self.ramp_factor);
            let candidates = candidate_slots(
                now,
                self.exam_datetime,
                self.day_start_hour,
                self.block_minutes,
                self.break_minutes,
                &capacities,
            );
            if candidates.len() >= self.chapters.len() {
                debug!(
                    "Capacity search succeeded on attempt {} with daily limit {} ({} slots)",
                    attempt + 1,
                    base_limit,
                    candidates.len()
                );
                return Ok(candidates);
            }
            base_limit += 1;
        }

        Err(CramrError::UnschedulableConstraints {
            chapters: self.chapters.len(),
            attempts: MAX_CAPACITY_ATTEMPTS,
        })
    }

    /// Mark the first block (in chronological order) for `chapter` completed.
    ///
    /// Idempotent and a silent no-op for unknown titles; returns whether a
    /// block matched. Already-completed blocks are not skipped, so callers
    /// wanting "first pending" filter before calling.
    pub fn mark_completed(&mut self, chapter: &str) -> bool {
        match self.blocks.iter_mut().find(|b| b.chapter == chapter) {
            Some(block) => {
                block.completed = true;
                true
            }
            None => false,
        }
    }
}

/// Local wall clock truncated to the minute, the granularity slots are laid
/// out at.
fn local_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}
