//! Semantic boundary cleanup
//!
//! Looks for single edits surrounded on both sides by equalities which can be shifted
//! sideways to align the edit to a word or line boundary, e.g.
//! `The c<ins>at c</ins>ame.` becomes `The <ins>cat </ins>came.`
//!
//! The pass is lossless: both reconstructed texts stay exactly the same, only the
//! positions of the segment boundaries move. It is not part of the default pipeline.
//!
//! See <https://neil.fraser.name/writing/diff/> for the boundary scoring idea.

use super::affix::common_suffix_length;
use super::difference::{DiffScript, Difference};
use super::merge::merge;
use anyhow::Context;
use std::collections::VecDeque;

const BLANK_LINE_END_REGEX: &str = r"\n\r?\n\z";
const BLANK_LINE_START_REGEX: &str = r"\A\r?\n\r?\n";

/// Score given to a boundary at the very start or end of the text
const EDGE_SCORE: u8 = 5;

/// Longest text either blank line pattern can match (`\r\n\r\n`)
const BLANK_LINE_WINDOW: usize = 4;

/// Does `text` end with an empty line?
pub fn ends_with_blank_line(text: &str) -> anyhow::Result<bool> {
    let re = regex::Regex::new(BLANK_LINE_END_REGEX)
        .with_context(|| format!("invalid blank line regex: {BLANK_LINE_END_REGEX}"))?;
    Ok(re.is_match(text))
}

/// Does `text` start with an empty line?
pub fn starts_with_blank_line(text: &str) -> anyhow::Result<bool> {
    let re = regex::Regex::new(BLANK_LINE_START_REGEX)
        .with_context(|| format!("invalid blank line regex: {BLANK_LINE_START_REGEX}"))?;
    Ok(re.is_match(text))
}

/// Rate the boundary between `one` and `two` from 0 (inside a word) to 5 (text edge)
///
/// - 1 point if either side of the boundary is not alphanumeric
/// - 2 points if either side is whitespace
/// - 3 points if either side is a control character such as a line break
/// - 4 points if the boundary sits on a blank line
pub fn semantic_score(one: &[char], two: &[char]) -> anyhow::Result<u8> {
    let (Some(&last), Some(&first)) = (one.last(), two.first()) else {
        return Ok(EDGE_SCORE);
    };

    let mut score = 0;
    if !last.is_alphanumeric() || !first.is_alphanumeric() {
        score += 1;
        if last.is_whitespace() || first.is_whitespace() {
            score += 1;
            if last.is_control() || first.is_control() {
                score += 1;
                let tail: String = one[one.len().saturating_sub(BLANK_LINE_WINDOW)..]
                    .iter()
                    .collect();
                let head: String = two[..two.len().min(BLANK_LINE_WINDOW)].iter().collect();
                if ends_with_blank_line(&tail)? || starts_with_blank_line(&head)? {
                    score += 1;
                }
            }
        }
    }

    Ok(score)
}

/// An `equality, edit, equality` window and the boundaries it can slide between
#[derive(Debug, Clone, PartialEq, Eq)]
struct Window {
    equality1: Vec<char>,
    edit: Vec<char>,
    equality2: Vec<char>,
}

impl Window {
    fn new(equality1: &str, edit: &str, equality2: &str) -> Self {
        Window {
            equality1: equality1.chars().collect(),
            edit: edit.chars().collect(),
            equality2: equality2.chars().collect(),
        }
    }

    fn score(&self) -> anyhow::Result<u8> {
        Ok(semantic_score(&self.equality1, &self.edit)? + semantic_score(&self.edit, &self.equality2)?)
    }

    /// Move the edit as far left as the tail of the first equality allows
    fn shift_left(&mut self) {
        let offset = common_suffix_length(&self.equality1, &self.edit);
        if offset == 0 {
            return;
        }

        let common = self.edit[self.edit.len() - offset..].to_vec();
        self.equality1.truncate(self.equality1.len() - offset);
        self.edit = [&common[..], &self.edit[..self.edit.len() - offset]].concat();
        self.equality2 = [&common[..], &self.equality2[..]].concat();
    }

    /// Move the edit one character right, if the rotation keeps both texts intact
    fn step_right(&mut self) -> bool {
        match (self.edit.first(), self.equality2.first()) {
            (Some(&head), Some(&next)) if head == next => {
                self.equality1.push(head);
                self.edit.remove(0);
                self.edit.push(next);
                self.equality2.remove(0);
                true
            }
            _ => false,
        }
    }

    /// The best scoring placement of the edit, ties favouring the rightmost one so
    /// trailing rather than leading whitespace ends up inside the edit
    fn best_fit(mut self) -> anyhow::Result<Self> {
        self.shift_left();

        let mut best_score = self.score()?;
        let mut best = self.clone();
        while self.step_right() {
            let score = self.score()?;
            if score >= best_score {
                best_score = score;
                best = self.clone();
            }
        }

        Ok(best)
    }
}

/// Slide every single edit surrounded by equalities onto its best boundary
///
/// Equalities emptied by the shift are dropped and the neighbours they separated are
/// merged, so the output keeps alternating kinds.
pub fn cleanup_semantic_lossless(script: DiffScript) -> anyhow::Result<DiffScript> {
    let mut pending: VecDeque<Difference> = Vec::from(script).into();
    let mut cleaned: Vec<Difference> = Vec::with_capacity(pending.len());
    let mut changed = false;

    while let Some(mut current) = pending.pop_front() {
        let window = match (cleaned.last(), pending.front()) {
            (Some(previous), Some(next))
                if !current.is_equal() && previous.is_equal() && next.is_equal() =>
            {
                Some(Window::new(previous.content(), current.content(), next.content()))
            }
            _ => None,
        };

        if let Some(window) = window {
            let equality1 = window.equality1.clone();
            let best = window.best_fit()?;

            if best.equality1 != equality1 {
                changed = true;
                current.set_content(best.edit.iter().collect());

                if best.equality1.is_empty() {
                    cleaned.pop();
                } else if let Some(previous) = cleaned.last_mut() {
                    previous.set_content(best.equality1.iter().collect());
                }

                if best.equality2.is_empty() {
                    pending.pop_front();
                } else if let Some(next) = pending.front_mut() {
                    next.set_content(best.equality2.iter().collect());
                }
            }
        }

        cleaned.push(current);
    }

    let cleaned = DiffScript::from(cleaned);
    if changed {
        Ok(merge(cleaned))
    } else {
        Ok(cleaned)
    }
}
