//! Character-level diffing for proofread text
//!
//! `prfx` compares an original text with its proofread version and reports the
//! smallest set of deletions and insertions that turns one into the other.
//!
//! - `areas`: Proofreading session state and input loading
//! - `artifacts`: Diff engine and output plumbing
//! - `commands`: Command implementations behind the `prfx` binary

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::diff::{DiffEngine, DiffKind, DiffOptions, DiffScript, Difference, diff};
