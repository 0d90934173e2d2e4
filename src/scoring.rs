use unicode_general_category::{get_general_category, GeneralCategory};

use crate::{
    EXACT_MATCH, GAP_IN_DOCUMENT, GAP_IN_TARGET, MISMATCH_NON_PRINTABLE, MISMATCH_PRINTABLE,
};

/// Alignment cost. Costs are never negative.
pub type Cost = u32;

/// Penalties charged by the fitting alignment.
///
/// `gap_in_document` is paid for every document character skipped inside the
/// match, `gap_in_target` for every target character left unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenaltyTable {
    pub exact: Cost,
    pub mismatch_printable: Cost,
    pub mismatch_non_printable: Cost,
    pub gap_in_document: Cost,
    pub gap_in_target: Cost,
}

impl Default for PenaltyTable {
    fn default() -> Self {
        Self {
            exact: EXACT_MATCH,
            mismatch_printable: MISMATCH_PRINTABLE,
            mismatch_non_printable: MISMATCH_NON_PRINTABLE,
            gap_in_document: GAP_IN_DOCUMENT,
            gap_in_target: GAP_IN_TARGET,
        }
    }
}

impl PenaltyTable {
    /// Cost of aligning document character `a` against target character `b`.
    pub fn penalty(&self, a: char, b: char) -> Cost {
        if a == b {
            self.exact
        } else if is_printable(a) && is_printable(b) {
            self.mismatch_printable
        } else {
            self.mismatch_non_printable
        }
    }
}

/// Space is printable. Other separators, control, format, surrogate,
/// private-use and unassigned characters are not.
pub fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchVerdict {
    Found,
    NoSuitableAlignment,
}

impl MatchVerdict {
    pub fn from_cost(cost: Cost, ceiling: Cost) -> Self {
        if cost < ceiling {
            MatchVerdict::Found
        } else {
            MatchVerdict::NoSuitableAlignment
        }
    }

    pub fn is_match(self) -> bool {
        self == MatchVerdict::Found
    }
}

/// Best cost of a run without the traceback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentScore {
    pub cost: Cost,
    /// Exclusive end offset of the match in the document.
    pub end: usize,
    pub verdict: MatchVerdict,
}

impl AlignmentScore {
    pub fn new(cost: Cost, end: usize, ceiling: Cost) -> Self {
        Self {
            cost,
            end,
            verdict: MatchVerdict::from_cost(cost, ceiling),
        }
    }

    pub fn is_exact(&self) -> bool {
        self.cost == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignmentStats {
    pub matches: u32,
    pub mismatches: u32,
    pub document_gaps: u32,
    pub target_gaps: u32,
    pub execution_time_ms: f32,
}
