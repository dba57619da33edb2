//! Core proofreading components
//!
//! - `proofreader`: Session state shared by every command (output writer, engine, limits)
//! - `workspace`: Resolution and loading of the texts being compared

pub mod proofreader;
pub mod workspace;
