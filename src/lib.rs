//! Cramr - a study timetable planner
//!
//! Given a set of chapter titles and an exam deadline, cramr produces a sequence
//! of discrete study/revision blocks that fit the remaining time: every chapter is
//! studied at least once before the exam, and session density ramps upward as the
//! deadline approaches.

pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod planner;
pub mod storage;

pub use error::{CramrError, Result};
