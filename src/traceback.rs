use crate::matrix::ScoreMatrix;
use crate::scoring::{AlignmentStats, Cost, MatchVerdict, PenaltyTable};
use crate::FitAlignerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    /// Document character skipped inside the match.
    DocumentGap,
    /// Target character with no document counterpart.
    TargetGap,
}

/// One column of the alignment. `None` marks the skipped side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedPair {
    pub document: Option<char>,
    pub target: Option<char>,
}

#[derive(Debug, Clone)]
pub struct AlignmentResult {
    pub cost: Cost,
    /// Offset of the first document character covered by the match.
    pub start: usize,
    /// Exclusive end offset of the match.
    pub end: usize,
    pub verdict: MatchVerdict,
    pub pairs: Vec<AlignedPair>,
    pub operations: Vec<TracebackOperation>,
    pub statistics: AlignmentStats,
}

impl AlignmentResult {
    pub fn is_match(&self) -> bool {
        self.verdict.is_match()
    }

    /// Aligned pairs, withheld when no suitable alignment was found.
    pub fn alignment(&self) -> Option<&[AlignedPair]> {
        self.is_match().then_some(self.pairs.as_slice())
    }
}

pub struct Traceback<'a> {
    matrix: &'a ScoreMatrix,
    document: &'a [char],
    target: &'a [char],
    penalties: &'a PenaltyTable,
}

impl<'a> Traceback<'a> {
    pub fn new(
        matrix: &'a ScoreMatrix,
        document: &'a [char],
        target: &'a [char],
        penalties: &'a PenaltyTable,
    ) -> Self {
        Self {
            matrix,
            document,
            target,
            penalties,
        }
    }

    /// Walks back from `(end, m)` until the whole target is consumed.
    ///
    /// Ties are broken diagonal first, then document gap, then target gap.
    pub fn reconstruct_alignment(
        &self,
        end: usize,
        ceiling: Cost,
    ) -> Result<AlignmentResult, FitAlignerError> {
        if end >= self.matrix.rows() {
            return Err(FitAlignerError::TracebackError(format!(
                "end offset {} outside document of length {}",
                end,
                self.matrix.document_len()
            )));
        }

        let mut pairs = Vec::new();
        let mut operations = Vec::new();
        let mut statistics = AlignmentStats::default();

        let mut i = end;
        let mut j = self.matrix.target_len();
        let mut cost: Cost = 0;

        while j > 0 {
            let current = self.matrix.get(i, j);
            let t = self.target[j - 1];

            if i > 0 {
                let d = self.document[i - 1];
                let step = self.penalties.penalty(d, t);
                if current == self.matrix.get(i - 1, j - 1).saturating_add(step) {
                    pairs.push(AlignedPair {
                        document: Some(d),
                        target: Some(t),
                    });
                    if d == t {
                        operations.push(TracebackOperation::Match);
                        statistics.matches += 1;
                    } else {
                        operations.push(TracebackOperation::Mismatch);
                        statistics.mismatches += 1;
                    }
                    cost = cost.saturating_add(step);
                    i -= 1;
                    j -= 1;
                    continue;
                }

                let up = self
                    .matrix
                    .get(i - 1, j)
                    .saturating_add(self.penalties.gap_in_document);
                if current == up {
                    pairs.push(AlignedPair {
                        document: Some(d),
                        target: None,
                    });
                    operations.push(TracebackOperation::DocumentGap);
                    statistics.document_gaps += 1;
                    cost = cost.saturating_add(self.penalties.gap_in_document);
                    i -= 1;
                    continue;
                }
            }

            if current == self.matrix.get(i, j - 1).saturating_add(self.penalties.gap_in_target) {
                pairs.push(AlignedPair {
                    document: None,
                    target: Some(t),
                });
                operations.push(TracebackOperation::TargetGap);
                statistics.target_gaps += 1;
                cost = cost.saturating_add(self.penalties.gap_in_target);
                j -= 1;
                continue;
            }

            return Err(FitAlignerError::TracebackError(format!(
                "no predecessor reproduces cell ({}, {}) = {}",
                i, j, current
            )));
        }

        let expected = self.matrix.get(end, self.matrix.target_len());
        if cost != expected {
            return Err(FitAlignerError::TracebackError(format!(
                "path cost {} differs from matrix cost {}",
                cost, expected
            )));
        }

        pairs.reverse();
        operations.reverse();

        Ok(AlignmentResult {
            cost,
            start: i,
            end,
            verdict: MatchVerdict::from_cost(cost, ceiling),
            pairs,
            operations,
            statistics,
        })
    }
}
