//! Common prefix and suffix lengths
//!
//! Both searches are binary searches over the candidate length. Each step only
//! compares the region that has not been confirmed equal by an earlier step, so a
//! search costs `O(log n)` slice comparisons.
//!
//! Binary searches are least efficient at their extreme points, and texts with no
//! commonality at all are frequent in practice, so the first (or last) character is
//! checked before the search starts.

/// Length of the longest common prefix of `a` and `b`, in characters
pub fn common_prefix_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() || a[0] != b[0] {
        return 0;
    }

    let mut min = 0;
    let mut max = a.len().min(b.len());
    let mut mid = max;
    let mut start = 0;

    while min < mid {
        if a[start..mid] == b[start..mid] {
            min = mid;
            start = min;
        } else {
            max = mid;
        }
        mid = (max - min) / 2 + min;
    }

    mid
}

/// Length of the longest common suffix of `a` and `b`, in characters
pub fn common_suffix_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() || a[a.len() - 1] != b[b.len() - 1] {
        return 0;
    }

    let mut min = 0;
    let mut max = a.len().min(b.len());
    let mut mid = max;
    let mut end = 0;

    while min < mid {
        if a[a.len() - mid..a.len() - end] == b[b.len() - mid..b.len() - end] {
            min = mid;
            end = min;
        } else {
            max = mid;
        }
        mid = (max - min) / 2 + min;
    }

    mid
}
