//! Recursive diff orchestrator
//!
//! Cheap shortcuts are tried before the quadratic matrix:
//!
//! 1. Identical texts produce an empty script
//! 2. The common prefix and suffix are trimmed off and kept as equalities
//! 3. A middle that is empty on one side is a single insertion or deletion
//! 4. A middle contained in the other is an equality surrounded by two edits
//! 5. A half-match splits both middles into two independent subproblems
//! 6. Otherwise the edit-distance matrix solves the middles exactly
//!
//! Every result goes through the merge pass before it is returned.

use super::affix::{common_prefix_length, common_suffix_length};
use super::difference::{DiffKind, DiffScript};
use super::edit_distance::{DiffAlgorithm, LevenshteinDiff};
use super::find_from;
use super::half_match::half_match;
use super::merge::merge;
use super::semantic::cleanup_semantic_lossless;
use derive_new::new;

/// Compute the edit script turning `original` into `destination`
///
/// The semantic cleanup pass is never applied; use [`DiffEngine`] to opt into it.
pub fn diff(original: &str, destination: &str) -> anyhow::Result<DiffScript> {
    if original == destination {
        return Ok(DiffScript::new());
    }

    let ori: Vec<char> = original.chars().collect();
    let dst: Vec<char> = destination.chars().collect();
    diff_chars(&ori, &dst)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DiffOptions {
    /// Realign edit boundaries to word and line breaks after diffing
    pub semantic_cleanup: bool,
}

#[derive(Debug, Clone, Default, new)]
pub struct DiffEngine {
    options: DiffOptions,
}

impl DiffEngine {
    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn diff(&self, original: &str, destination: &str) -> anyhow::Result<DiffScript> {
        let script = diff(original, destination)?;

        if self.options.semantic_cleanup {
            cleanup_semantic_lossless(script)
        } else {
            Ok(script)
        }
    }

    /// Levenshtein distance between the two texts, always solved on the full matrix
    pub fn distance(&self, original: &str, destination: &str) -> usize {
        let ori: Vec<char> = original.chars().collect();
        let dst: Vec<char> = destination.chars().collect();
        LevenshteinDiff::new(&ori, &dst)
            .compute_shortest_edit()
            .distance()
    }
}

fn diff_chars(ori: &[char], dst: &[char]) -> anyhow::Result<DiffScript> {
    if ori == dst {
        return Ok(DiffScript::new());
    }

    let prefix_len = common_prefix_length(ori, dst);
    // The suffix may not reach into the prefix when one text is a subset of the other
    let suffix_len = common_suffix_length(ori, dst)
        .min(ori.len() - prefix_len)
        .min(dst.len() - prefix_len);

    let prefix = &ori[..prefix_len];
    let suffix = &ori[ori.len() - suffix_len..];
    let middle_ori = &ori[prefix_len..ori.len() - suffix_len];
    let middle_dst = &dst[prefix_len..dst.len() - suffix_len];

    let mut script = DiffScript::new();
    script.push_chars(DiffKind::Equal, prefix);
    script.extend(diff_middle(middle_ori, middle_dst)?);
    script.push_chars(DiffKind::Equal, suffix);

    Ok(merge(script))
}

/// Diff two texts that share neither a prefix nor a suffix
fn diff_middle(ori: &[char], dst: &[char]) -> anyhow::Result<DiffScript> {
    let mut script = DiffScript::new();

    if ori.is_empty() {
        debug_log!("single insertion of {} chars", dst.len());
        script.push_chars(DiffKind::Insert, dst);
        return Ok(script);
    }
    if dst.is_empty() {
        debug_log!("single deletion of {} chars", ori.len());
        script.push_chars(DiffKind::Delete, ori);
        return Ok(script);
    }

    let ori_is_long = ori.len() > dst.len();
    let (long_text, short_text, edit) = if ori_is_long {
        (ori, dst, DiffKind::Delete)
    } else {
        (dst, ori, DiffKind::Insert)
    };

    if let Some(start) = find_from(long_text, short_text, 0) {
        debug_log!("shorter text contained at offset {}", start);
        script.push_chars(edit, &long_text[..start]);
        script.push_chars(DiffKind::Equal, short_text);
        script.push_chars(edit, &long_text[start + short_text.len()..]);
        return Ok(script);
    }

    if let Some(hm) = half_match(ori, dst) {
        debug_log!("half-match on a shared middle of {} chars", hm.common.len());
        script.extend(diff_chars(hm.ori_prefix, hm.dst_prefix)?);
        script.push_chars(DiffKind::Equal, hm.common);
        script.extend(diff_chars(hm.ori_suffix, hm.dst_suffix)?);
        return Ok(script);
    }

    debug_log!("edit distance fallback on {}x{} chars", ori.len(), dst.len());
    LevenshteinDiff::new(ori, dst).diff()
}
