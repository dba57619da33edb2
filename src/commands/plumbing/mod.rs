//! Plumbing commands (machine-readable output)
//!
//! ## Commands
//!
//! - `distance`: Print the Levenshtein distance between two texts

pub mod distance;
