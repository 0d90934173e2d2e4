use std::fmt::Write;

use crate::scoring::{Cost, PenaltyTable};

/// Scoring matrix of a fitting alignment, one row per document prefix and one
/// column per target prefix.
///
/// Row 0 charges every leading target gap, column 0 is free: the document may
/// be skipped before the match starts. Rows only depend on the rows above
/// them, so appending document text appends rows and leaves the rest intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<Cost>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    /// Matrix for an empty document: just the boundary row.
    pub fn new(target_len: usize, penalties: &PenaltyTable) -> Self {
        let cols = target_len + 1;
        let mut data = Vec::with_capacity(cols);
        let mut cost: Cost = 0;
        for _ in 0..cols {
            data.push(cost);
            cost = cost.saturating_add(penalties.gap_in_target);
        }

        Self { data, rows: 1, cols }
    }

    pub fn build(document: &[char], target: &[char], penalties: &PenaltyTable) -> Self {
        let mut matrix = Self::new(target.len(), penalties);
        matrix.extend(document, target, penalties);
        matrix
    }

    /// Appends one row per character of `appended`.
    ///
    /// `target` must be the sequence the matrix was created for.
    pub fn extend(&mut self, appended: &[char], target: &[char], penalties: &PenaltyTable) {
        debug_assert_eq!(target.len() + 1, self.cols);
        self.data.reserve(appended.len() * self.cols);

        for &d in appended {
            let above = (self.rows - 1) * self.cols;
            self.data.push(0);
            for j in 1..self.cols {
                let diagonal = self.data[above + j - 1]
                    .saturating_add(penalties.penalty(d, target[j - 1]));
                let up = self.data[above + j].saturating_add(penalties.gap_in_document);
                let left = self.data[self.data.len() - 1].saturating_add(penalties.gap_in_target);
                self.data.push(diagonal.min(up).min(left));
            }
            self.rows += 1;
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Cost {
        self.data[row * self.cols + col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn document_len(&self) -> usize {
        self.rows - 1
    }

    pub fn target_len(&self) -> usize {
        self.cols - 1
    }

    /// Costs of aligning the whole target ending at each document offset.
    pub fn last_column(&self) -> impl Iterator<Item = Cost> + '_ {
        self.data.iter().skip(self.cols - 1).step_by(self.cols).copied()
    }

    /// Earliest document offset where the whole target aligns at minimum cost.
    pub fn best_end(&self) -> (usize, Cost) {
        let mut best = (0, self.get(0, self.cols - 1));
        for (i, cost) in self.last_column().enumerate().skip(1) {
            if cost < best.1 {
                best = (i, cost);
            }
        }
        best
    }

    /// Renders the matrix row by row for debugging.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(self.data.len() * 4);
        for row in self.data.chunks(self.cols) {
            for cost in row {
                let _ = write!(out, "{:4}", cost);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_boundaries() {
        let table = PenaltyTable::default();
        let matrix = ScoreMatrix::build(&chars("xyz"), &chars("abc"), &table);

        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.cols(), 4);
        for j in 0..4 {
            assert_eq!(matrix.get(0, j), 4 * j as Cost);
        }
        for i in 0..4 {
            assert_eq!(matrix.get(i, 0), 0);
        }
    }

    #[test]
    fn test_recurrence_by_hand() {
        let table = PenaltyTable::default();
        let matrix = ScoreMatrix::build(&chars("axbxc"), &chars("abc"), &table);

        let expected: [[Cost; 4]; 6] = [
            [0, 4, 8, 12],
            [0, 0, 4, 8],
            [0, 1, 3, 7],
            [0, 2, 1, 5],
            [0, 3, 2, 4],
            [0, 3, 3, 2],
        ];
        for (i, row) in expected.iter().enumerate() {
            for (j, &cost) in row.iter().enumerate() {
                assert_eq!(matrix.get(i, j), cost, "F[{}][{}]", i, j);
            }
        }
        assert_eq!(matrix.last_column().collect::<Vec<_>>(), vec![12, 8, 7, 5, 4, 2]);
        assert_eq!(matrix.best_end(), (5, 2));
    }

    #[test]
    fn test_best_end_prefers_earliest() {
        let table = PenaltyTable::default();
        let matrix = ScoreMatrix::build(&chars("abxab"), &chars("ab"), &table);
        assert_eq!(matrix.best_end(), (2, 0));
    }

    #[test]
    fn test_empty_document() {
        let table = PenaltyTable::default();
        let matrix = ScoreMatrix::new(3, &table);
        assert_eq!(matrix.document_len(), 0);
        assert_eq!(matrix.target_len(), 3);
        assert_eq!(matrix.best_end(), (0, 12));
    }

    #[test]
    fn test_extend_matches_build() {
        let table = PenaltyTable::default();
        let target = chars("needle");
        let document = chars("hay\nneedle in a haystack\n");

        let mut grown = ScoreMatrix::new(target.len(), &table);
        for chunk in document.chunks(4) {
            grown.extend(chunk, &target, &table);
        }
        assert_eq!(grown, ScoreMatrix::build(&document, &target, &table));
    }

    #[test]
    fn test_dump_layout() {
        let table = PenaltyTable::default();
        let matrix = ScoreMatrix::build(&chars("a"), &chars("a"), &table);
        assert_eq!(matrix.dump(), "   0   4\n   0   0\n");
    }
}
