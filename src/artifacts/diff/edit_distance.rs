//! Levenshtein edit-distance fallback
//!
//! Used when none of the orchestrator's shortcuts apply. The full
//! `(|a| + 1) x (|b| + 1)` matrix is built, then walked back from the bottom-right
//! corner to recover the edit script. This is `O(|a| * |b|)` in both time and memory.
//!
//! Recurrence:
//! - `a[r] == b[c]` -> `LD(r + 1, c + 1) = LD(r, c)`
//! - `a[r] != b[c]` -> `LD(r + 1, c + 1) = min(LD(r, c), LD(r, c + 1), LD(r + 1, c)) + 1`
//!
//! The output model has no "replace" segment, so a substitution is emitted as a
//! `Delete` followed by an `Insert`.

use super::difference::{DiffKind, DiffScript};
use derive_new::new;
use std::fmt::Display;

pub trait DiffAlgorithm<'d> {
    type Trace;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self, trace: &Self::Trace) -> anyhow::Result<DiffScript>;

    fn diff(&self) -> anyhow::Result<DiffScript> {
        let trace = self.compute_shortest_edit();
        self.backtrack(&trace)
    }

    fn format_diff(&self) -> anyhow::Result<String> {
        Ok(self.diff()?.to_string())
    }
}

/// Row-major table of edit distances between prefixes of two texts
///
/// Cells are 32 bits wide; a distance never exceeds the longer text's length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl Matrix {
    /// Matrix with the first row and column filled with their distance to the empty text
    fn with_borders(rows: usize, cols: usize) -> Self {
        let mut matrix = Matrix {
            rows,
            cols,
            cells: vec![0; rows * cols],
        };
        for (c, value) in (0..cols).zip(0u32..) {
            matrix.set(0, c, value);
        }
        for (r, value) in (0..rows).zip(0u32..) {
            matrix.set(r, 0, value);
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row * self.cols + col] = value;
    }

    /// Edit distance between the two full texts
    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1) as usize
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            let row = (0..self.cols)
                .map(|c| self.get(r, c).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Equal,
    Substitute,
    Up,
    Left,
}

/// Move out of a mismatching cell during the backtrace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Diagonal,
    Up,
    Left,
}

/// Backtrace output collected from the end of both texts towards the start
///
/// Each run holds its characters in reverse order; `into_script` flips both the
/// run order and the run contents.
#[derive(Default)]
struct ReversedRuns {
    runs: Vec<(DiffKind, Vec<char>)>,
    last_step: Option<Step>,
}

impl ReversedRuns {
    fn record(&mut self, step: Step, ori: Option<char>, dst: Option<char>) {
        let extends = self.last_step == Some(step);
        self.last_step = Some(step);

        match (step, ori, dst) {
            (Step::Equal, Some(ch), _) => self.push(DiffKind::Equal, ch, extends),
            (Step::Up, Some(ch), _) => self.push(DiffKind::Delete, ch, extends),
            (Step::Left, _, Some(ch)) => self.push(DiffKind::Insert, ch, extends),
            (Step::Substitute, Some(deleted), Some(inserted)) => {
                // Reversed at the end, so the insertion goes first to come out last
                let len = self.runs.len();
                if extends && len >= 2 {
                    self.runs[len - 2].1.push(inserted);
                    self.runs[len - 1].1.push(deleted);
                } else {
                    self.runs.push((DiffKind::Insert, vec![inserted]));
                    self.runs.push((DiffKind::Delete, vec![deleted]));
                }
            }
            _ => {}
        }
    }

    fn push(&mut self, kind: DiffKind, ch: char, extends: bool) {
        match self.runs.last_mut() {
            Some((_, content)) if extends => content.push(ch),
            _ => self.runs.push((kind, vec![ch])),
        }
    }

    fn into_script(self) -> DiffScript {
        let mut script = DiffScript::new();
        for (kind, mut content) in self.runs.into_iter().rev() {
            content.reverse();
            script.push_chars(kind, &content);
        }
        script
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LevenshteinDiff<'d> {
    a: &'d [char],
    b: &'d [char],
}

impl<'d> LevenshteinDiff<'d> {
    /// Cheapest admissible step out of `(row, col)`, preferring the diagonal, then
    /// up, then left when several directions share the minimum
    fn cheapest_step(&self, matrix: &Matrix, row: usize, col: usize) -> Option<Direction> {
        let diagonal = (row > 0 && col > 0).then(|| matrix.get(row - 1, col - 1));
        let up = (row > 0).then(|| matrix.get(row - 1, col));
        let left = (col > 0).then(|| matrix.get(row, col - 1));

        let min = [diagonal, up, left].into_iter().flatten().min()?;

        if diagonal == Some(min) {
            Some(Direction::Diagonal)
        } else if up == Some(min) {
            Some(Direction::Up)
        } else if left == Some(min) {
            Some(Direction::Left)
        } else {
            None
        }
    }
}

impl<'d> DiffAlgorithm<'d> for LevenshteinDiff<'d> {
    type Trace = Matrix;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let mut matrix = Matrix::with_borders(self.a.len() + 1, self.b.len() + 1);

        for (r, ori) in self.a.iter().enumerate() {
            for (c, dst) in self.b.iter().enumerate() {
                let value = if ori == dst {
                    matrix.get(r, c)
                } else {
                    matrix
                        .get(r, c)
                        .min(matrix.get(r, c + 1))
                        .min(matrix.get(r + 1, c))
                        + 1
                };
                matrix.set(r + 1, c + 1, value);
            }
        }

        debug_log!(
            "edit distance {} over a {}x{} matrix",
            matrix.distance(),
            matrix.rows(),
            matrix.cols()
        );

        matrix
    }

    fn backtrack(&self, matrix: &Self::Trace) -> anyhow::Result<DiffScript> {
        let (mut row, mut col) = (self.a.len(), self.b.len());
        let mut runs = ReversedRuns::default();

        while row != 0 || col != 0 {
            if row > 0 && col > 0 && self.a[row - 1] == self.b[col - 1] {
                row -= 1;
                col -= 1;
                runs.record(Step::Equal, Some(self.a[row]), None);
                continue;
            }

            let Some(direction) = self.cheapest_step(matrix, row, col) else {
                anyhow::bail!("edit distance backtrace stalled at row {row}, column {col}");
            };

            match direction {
                Direction::Diagonal => {
                    row -= 1;
                    col -= 1;
                    runs.record(Step::Substitute, Some(self.a[row]), Some(self.b[col]));
                }
                Direction::Up => {
                    row -= 1;
                    runs.record(Step::Up, Some(self.a[row]), None);
                }
                Direction::Left => {
                    col -= 1;
                    runs.record(Step::Left, None, Some(self.b[col]));
                }
            }
        }

        Ok(runs.into_script())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::difference::Difference;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[fixture]
    fn string_inputs() -> (Vec<char>, Vec<char>) {
        (chars("cat"), chars("dog"))
    }

    #[rstest]
    fn test_substitution_is_delete_then_insert(string_inputs: (Vec<char>, Vec<char>)) {
        let (a, b) = string_inputs;
        let result = LevenshteinDiff::new(&a, &b).diff().unwrap();
        let expected = DiffScript::from(vec![Difference::delete("cat"), Difference::insert("dog")]);

        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_matrix_borders_and_distance(string_inputs: (Vec<char>, Vec<char>)) {
        let (a, b) = string_inputs;
        let matrix = LevenshteinDiff::new(&a, &b).compute_shortest_edit();

        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.cols(), 4);
        assert_eq!(matrix.to_string(), "0, 1, 2, 3\n1, 1, 2, 3\n2, 2, 2, 3\n3, 3, 3, 3\n");
        assert_eq!(matrix.distance(), 3);
    }

    #[rstest]
    #[case(3, 3, Some(Direction::Diagonal))]
    #[case(3, 0, Some(Direction::Up))]
    #[case(0, 3, Some(Direction::Left))]
    #[case(1, 2, Some(Direction::Diagonal))]
    #[case(0, 0, None)]
    fn test_cheapest_step_prefers_diagonal_then_up(
        string_inputs: (Vec<char>, Vec<char>),
        #[case] row: usize,
        #[case] col: usize,
        #[case] expected: Option<Direction>,
    ) {
        let (a, b) = string_inputs;
        let solver = LevenshteinDiff::new(&a, &b);
        let matrix = solver.compute_shortest_edit();

        assert_eq!(solver.cheapest_step(&matrix, row, col), expected);
    }

    #[rstest]
    fn test_matrix_cells_are_32_bit(string_inputs: (Vec<char>, Vec<char>)) {
        let (a, b) = string_inputs;
        let matrix = LevenshteinDiff::new(&a, &b).compute_shortest_edit();

        assert_eq!(std::mem::size_of_val(matrix.cells.as_slice()), 16 * 4);
    }

    #[rstest]
    #[case("kitten", "sitting", 3)]
    #[case("", "abc", 3)]
    #[case("abc", "", 3)]
    #[case("flaw", "lawn", 2)]
    #[case("集中精力", "集中注意力", 2)]
    fn test_distance(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        let (a, b) = (chars(a), chars(b));
        let matrix = LevenshteinDiff::new(&a, &b).compute_shortest_edit();

        assert_eq!(matrix.distance(), expected);
    }

    #[test]
    fn test_coalesces_equal_runs() {
        let (a, b) = (chars("xabcy"), chars("zabcw"));
        let result = LevenshteinDiff::new(&a, &b).diff().unwrap();
        let expected = DiffScript::from(vec![
            Difference::delete("x"),
            Difference::insert("z"),
            Difference::equal("abc"),
            Difference::delete("y"),
            Difference::insert("w"),
        ]);

        assert_eq!(result, expected);
    }

    #[test]
    fn test_pure_deletion_and_insertion() {
        let (a, b) = (chars("abc"), chars("ac"));
        let result = LevenshteinDiff::new(&a, &b).diff().unwrap();
        let expected = DiffScript::from(vec![
            Difference::equal("a"),
            Difference::delete("b"),
            Difference::equal("c"),
        ]);
        assert_eq!(result, expected);

        let result = LevenshteinDiff::new(&b, &a).diff().unwrap();
        let expected = DiffScript::from(vec![
            Difference::equal("a"),
            Difference::insert("b"),
            Difference::equal("c"),
        ]);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_format_diff() {
        let (a, b) = (chars("ab"), chars("b"));
        let formatted = LevenshteinDiff::new(&a, &b).format_diff().unwrap();

        assert_eq!(formatted, "Delete: `a`\nEqual: `b`");
    }

    proptest! {
        #[test]
        fn prop_backtrack_reconstructs_both_texts(a in "[abc ]{0,16}", b in "[abc ]{0,16}") {
            let (ca, cb) = (chars(&a), chars(&b));
            let script = LevenshteinDiff::new(&ca, &cb).diff().unwrap();

            prop_assert_eq!(script.source_text(), a);
            prop_assert_eq!(script.target_text(), b);
        }

        #[test]
        fn prop_distance_is_symmetric(a in "[abc]{0,12}", b in "[abc]{0,12}") {
            let (ca, cb) = (chars(&a), chars(&b));
            let forward = LevenshteinDiff::new(&ca, &cb).compute_shortest_edit();
            let backward = LevenshteinDiff::new(&cb, &ca).compute_shortest_edit();

            prop_assert_eq!(forward.distance(), backward.distance());
        }
    }
}
