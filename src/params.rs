use crate::scoring::{Cost, PenaltyTable};
use crate::{FitAlignerError, COST_CEILING, SKIP_GLYPH};

/// Per-run alignment parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentParams {
    penalties: PenaltyTable,
    cost_ceiling: Cost,
    skip_glyph: char,
}

impl Default for AlignmentParams {
    fn default() -> Self {
        Self {
            penalties: PenaltyTable::default(),
            cost_ceiling: COST_CEILING,
            skip_glyph: SKIP_GLYPH,
        }
    }
}

impl AlignmentParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity alignment must stay free, so `exact` has to be 0.
    pub fn with_penalties(mut self, penalties: PenaltyTable) -> Result<Self, FitAlignerError> {
        if penalties.exact != 0 {
            return Err(FitAlignerError::InvalidParameters(format!(
                "exact match cost must be 0, got {}",
                penalties.exact
            )));
        }
        self.penalties = penalties;
        Ok(self)
    }

    pub fn with_cost_ceiling(mut self, cost_ceiling: Cost) -> Result<Self, FitAlignerError> {
        if cost_ceiling == 0 {
            return Err(FitAlignerError::InvalidParameters(
                "cost ceiling must be greater than 0".to_string(),
            ));
        }
        self.cost_ceiling = cost_ceiling;
        Ok(self)
    }

    pub fn with_skip_glyph(mut self, skip_glyph: char) -> Self {
        self.skip_glyph = skip_glyph;
        self
    }

    pub fn penalties(&self) -> &PenaltyTable {
        &self.penalties
    }

    pub fn cost_ceiling(&self) -> Cost {
        self.cost_ceiling
    }

    pub fn skip_glyph(&self) -> char {
        self.skip_glyph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = AlignmentParams::new();
        assert_eq!(params.cost_ceiling(), 25);
        assert_eq!(params.skip_glyph(), '_');
        assert_eq!(params.penalties().gap_in_document, 1);
        assert_eq!(params.penalties().gap_in_target, 4);
    }

    #[test]
    fn test_rejects_nonzero_exact_cost() {
        let penalties = PenaltyTable {
            exact: 1,
            ..PenaltyTable::default()
        };
        let err = AlignmentParams::new().with_penalties(penalties).unwrap_err();
        assert!(matches!(err, FitAlignerError::InvalidParameters(_)));
    }

    #[test]
    fn test_rejects_zero_ceiling() {
        assert!(AlignmentParams::new().with_cost_ceiling(0).is_err());
        let params = AlignmentParams::new().with_cost_ceiling(10).unwrap().with_skip_glyph('-');
        assert_eq!(params.cost_ceiling(), 10);
        assert_eq!(params.skip_glyph(), '-');
    }
}
