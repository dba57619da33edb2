//! Porcelain commands (user-facing reports)
//!
//! ## Commands
//!
//! - `diff`: Print the edit script turning the original text into the proofread one

pub mod diff;
