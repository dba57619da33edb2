//! Proofreading data structures and algorithms
//!
//! This module contains the text model and the diff engine:
//!
//! - `core`: Shared utilities (pager wrapper, output selection)
//! - `diff`: Character-level diffing (segments, shortcuts, edit distance, cleanup)

pub mod core;
pub mod diff;
