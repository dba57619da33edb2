//! Proofreading command implementations
//!
//! Commands are split the same way a version control tool splits them:
//!
//! - `plumbing`: Bare numbers for scripts (distance)
//! - `porcelain`: Readable reports for people reviewing a proofread (diff)
//!
//! Every command is an inherent method on `Proofreader`, so they all share its
//! writer, engine configuration and input limits.

pub mod plumbing;
pub mod porcelain;
