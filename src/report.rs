use std::fmt;

use crate::params::AlignmentParams;
use crate::scoring::is_printable;
use crate::traceback::{AlignedPair, AlignmentResult};

/// Shown in place of non-printable characters so every pair stays one cell wide.
pub const NON_PRINTABLE_GLYPH: char = '·';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportLayout {
    /// One `document target` pair per line.
    #[default]
    Pairs,
    /// Document row above target row.
    Rows,
}

pub struct Report<'a> {
    result: &'a AlignmentResult,
    params: &'a AlignmentParams,
    layout: ReportLayout,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a AlignmentResult, params: &'a AlignmentParams) -> Self {
        Self {
            result,
            params,
            layout: ReportLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: ReportLayout) -> Self {
        self.layout = layout;
        self
    }

    fn glyph(&self, c: Option<char>) -> char {
        match c {
            None => self.params.skip_glyph(),
            Some(c) if is_printable(c) => c,
            Some(_) => NON_PRINTABLE_GLYPH,
        }
    }

    fn write_rows(&self, f: &mut fmt::Formatter<'_>, pairs: &[AlignedPair]) -> fmt::Result {
        let document: String = pairs.iter().map(|p| self.glyph(p.document)).collect();
        let target: String = pairs.iter().map(|p| self.glyph(p.target)).collect();
        writeln!(f, "{}", document)?;
        writeln!(f, "{}", target)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        writeln!(f, "opt index {} cost {}", result.end, result.cost)?;
        writeln!(f, "Start at {} in the long text", result.start)?;

        let Some(pairs) = result.alignment() else {
            return writeln!(
                f,
                "No suitable alignment found (cost {} >= ceiling {})",
                result.cost,
                self.params.cost_ceiling()
            );
        };

        writeln!(f, "Match found")?;
        writeln!(
            f,
            "Alignment (target on right). Skipped chars are aligned to '{}'.",
            self.params.skip_glyph()
        )?;
        match self.layout {
            ReportLayout::Pairs => {
                for pair in pairs {
                    writeln!(f, "{}{}", self.glyph(pair.document), self.glyph(pair.target))?;
                }
                Ok(())
            }
            ReportLayout::Rows => self.write_rows(f, pairs),
        }
    }
}
