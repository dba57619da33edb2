//! Half-match shortcut
//!
//! If both texts share a substring that is at least half the length of the longer
//! text, that substring is certainly part of a good diff. The texts then split into
//! two independent pairs (the parts before and after the shared substring) that can
//! be diffed separately, which avoids running the quadratic matrix on the whole input.

use super::affix::{common_prefix_length, common_suffix_length};
use super::find_from;
use derive_new::new;

/// Below this length the shortcut costs more than it saves
const MIN_LONG_TEXT_LENGTH: usize = 10;

/// A split of both texts around a shared middle
///
/// `ori_prefix + common + ori_suffix` is the original text and
/// `dst_prefix + common + dst_suffix` is the destination text.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct HalfMatch<'d> {
    pub ori_prefix: &'d [char],
    pub ori_suffix: &'d [char],
    pub dst_prefix: &'d [char],
    pub dst_suffix: &'d [char],
    pub common: &'d [char],
}

impl<'d> HalfMatch<'d> {
    fn swapped(self) -> Self {
        HalfMatch::new(
            self.dst_prefix,
            self.dst_suffix,
            self.ori_prefix,
            self.ori_suffix,
            self.common,
        )
    }
}

/// Find a common substring of `ori` and `dst` at least half as long as the longer
/// of the two, seeded from the second and third quarters of the longer text
pub fn half_match<'d>(ori: &'d [char], dst: &'d [char]) -> Option<HalfMatch<'d>> {
    let ori_is_long = ori.len() > dst.len();
    let (long_text, short_text) = if ori_is_long { (ori, dst) } else { (dst, ori) };

    if long_text.len() < MIN_LONG_TEXT_LENGTH || short_text.is_empty() {
        return None;
    }

    let second_quarter = half_match_at(long_text, short_text, long_text.len().div_ceil(4));
    let third_quarter = half_match_at(long_text, short_text, long_text.len().div_ceil(2));

    // Matches are expressed as (long prefix, long suffix, short prefix, short suffix)
    let best = match (second_quarter, third_quarter) {
        (None, None) => return None,
        (Some(hm), None) | (None, Some(hm)) => hm,
        (Some(hm1), Some(hm2)) => {
            if hm1.common.len() > hm2.common.len() {
                hm1
            } else {
                hm2
            }
        }
    };

    if ori_is_long {
        Some(best)
    } else {
        Some(best.swapped())
    }
}

/// Does a quarter-length seed starting at `seed_start` in `long_text` grow into a
/// shared region at least half the length of `long_text`?
fn half_match_at<'d>(
    long_text: &'d [char],
    short_text: &'d [char],
    seed_start: usize,
) -> Option<HalfMatch<'d>> {
    let seed = &long_text[seed_start..seed_start + long_text.len() / 4];

    let mut best: Option<(usize, usize, usize)> = None;
    let mut best_length = 0;

    let mut occurrence = find_from(short_text, seed, 0);
    while let Some(j) = occurrence {
        let prefix = common_prefix_length(&long_text[seed_start..], &short_text[j..]);
        let suffix = common_suffix_length(&long_text[..seed_start], &short_text[..j]);

        if best_length < prefix + suffix {
            best_length = prefix + suffix;
            best = Some((j, prefix, suffix));
        }

        occurrence = find_from(short_text, seed, j + 1);
    }

    let (j, prefix, suffix) = best?;
    if best_length < long_text.len() / 2 {
        return None;
    }

    Some(HalfMatch::new(
        &long_text[..seed_start - suffix],
        &long_text[seed_start + prefix..],
        &short_text[..j - suffix],
        &short_text[j + prefix..],
        &short_text[j - suffix..j + prefix],
    ))
}
