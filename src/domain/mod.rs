//! Domain types for cramr
//!
//! This module contains the core schedule types:
//! - StudyBlock: one scheduled study or revision interval
//! - BlockMode: Study (first encounter) vs Revision (repeat pass)

pub mod block;

pub use block::{BlockMode, StudyBlock};
