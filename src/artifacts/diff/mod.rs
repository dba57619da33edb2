//! Character-level text diffing
//!
//! This module turns two texts into an edit script of `Equal` / `Delete` / `Insert`
//! segments:
//!
//! - `difference`: Segment model (`Difference`, `DiffKind`) and the `DiffScript` container
//! - `affix`: Binary-search common prefix/suffix lengths
//! - `half_match`: Divide-and-conquer shortcut on a large shared substring
//! - `edit_distance`: Levenshtein matrix fallback with backtrace
//! - `merge`: Coalescing of adjacent same-kind segments
//! - `semantic`: Optional boundary realignment to word and line breaks
//! - `engine`: The recursive orchestrator tying the pieces together
//!
//! All lengths and offsets are measured in code points (`char`), never bytes,
//! so multi-byte scripts such as CJK are split only on character boundaries.

/// Macro for debug logging that is enabled with the debug_diff feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("half-match split at {}", offset);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_diff")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod affix;
pub mod difference;
pub mod edit_distance;
pub mod engine;
pub mod half_match;
pub mod merge;
pub mod semantic;

pub use difference::{DiffKind, DiffScript, Difference};
pub use engine::{DiffEngine, DiffOptions, diff};

/// Index of the first occurrence of `needle` in `haystack` at or after `from`
pub(crate) fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return (from <= haystack.len()).then_some(from);
    }
    if from >= haystack.len() || needle.len() > haystack.len() - from {
        return None;
    }

    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset)
}
