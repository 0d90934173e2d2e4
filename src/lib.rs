use std::io::BufRead;
use std::time::Instant;

use log::{debug, info, trace};
use thiserror::Error;

pub mod config;
pub mod matrix;
pub mod params;
pub mod report;
pub mod scoring;
pub mod traceback;

pub use crate::config::{RescanMode, StreamConfig};
pub use crate::matrix::ScoreMatrix;
pub use crate::params::AlignmentParams;
pub use crate::report::{Report, ReportLayout};
pub use crate::scoring::{AlignmentScore, AlignmentStats, Cost, MatchVerdict, PenaltyTable};
pub use crate::traceback::{AlignedPair, AlignmentResult, Traceback, TracebackOperation};

// Reference penalty values
pub const EXACT_MATCH: Cost = 0;
pub const MISMATCH_PRINTABLE: Cost = 3;
pub const MISMATCH_NON_PRINTABLE: Cost = 5;
pub const GAP_IN_DOCUMENT: Cost = 1;
pub const GAP_IN_TARGET: Cost = 4;

/// Costs at or above this are reported as no suitable alignment.
pub const COST_CEILING: Cost = 25;
pub const SKIP_GLYPH: char = '_';

#[derive(Debug, Error)]
pub enum FitAlignerError {
    #[error("Target must not be empty")]
    EmptyTarget,
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("Traceback failed: {0}")]
    TracebackError(String),
    #[error("No sequences set")]
    NoSequences,
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FitAlignerError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    data: Vec<char>,
}

impl Sequence {
    pub fn new(text: &str) -> Self {
        Self {
            data: text.chars().collect(),
        }
    }

    pub fn push_str(&mut self, text: &str) {
        self.data.extend(text.chars());
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.data
    }
}

/// Fitting aligner over a growing document.
///
/// The aligner owns the document buffer and the scoring matrix. Appending
/// text with [`FitAligner::extend`] keeps the matrix current, either by
/// rebuilding it or by adding rows, as chosen by [`StreamConfig::rescan`].
pub struct FitAligner {
    params: AlignmentParams,
    config: StreamConfig,
    target: Sequence,
    document: Sequence,
    matrix: Option<ScoreMatrix>,
}

impl FitAligner {
    pub fn new(params: AlignmentParams) -> Self {
        Self {
            params,
            config: StreamConfig::default(),
            target: Sequence::default(),
            document: Sequence::default(),
            matrix: None,
        }
    }

    pub fn with_config(mut self, config: StreamConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the target and starts over with an empty document.
    pub fn set_target(&mut self, target: &Sequence) -> Result<()> {
        if target.is_empty() {
            return Err(FitAlignerError::EmptyTarget);
        }

        self.target = target.clone();
        self.document = Sequence::default();
        self.matrix = Some(ScoreMatrix::new(target.len(), self.params.penalties()));
        Ok(())
    }

    pub fn set_sequences(&mut self, document: &Sequence, target: &Sequence) -> Result<()> {
        self.set_target(target)?;
        self.document = document.clone();
        self.matrix = Some(ScoreMatrix::build(
            self.document.as_slice(),
            self.target.as_slice(),
            self.params.penalties(),
        ));
        Ok(())
    }

    /// Appends `chunk` to the document and returns the new best score.
    pub fn extend(&mut self, chunk: &str) -> Result<AlignmentScore> {
        let previous_len = self.document.len();
        let matrix = self.matrix.as_mut().ok_or(FitAlignerError::NoSequences)?;
        self.document.push_str(chunk);

        match self.config.rescan {
            RescanMode::Recompute => {
                *matrix = ScoreMatrix::build(
                    self.document.as_slice(),
                    self.target.as_slice(),
                    self.params.penalties(),
                );
            }
            RescanMode::Extend => {
                matrix.extend(
                    &self.document.as_slice()[previous_len..],
                    self.target.as_slice(),
                    self.params.penalties(),
                );
            }
        }
        trace!(
            "Extended document by {} chars to {} ({:?})",
            self.document.len() - previous_len,
            self.document.len(),
            self.config.rescan
        );

        self.align()
    }

    /// Best cost and end offset, without reconstructing the path.
    pub fn align(&self) -> Result<AlignmentScore> {
        let matrix = self.matrix.as_ref().ok_or(FitAlignerError::NoSequences)?;
        let (end, cost) = matrix.best_end();
        Ok(AlignmentScore::new(cost, end, self.params.cost_ceiling()))
    }

    pub fn align_with_traceback(&self) -> Result<AlignmentResult> {
        let start_time = Instant::now();
        let matrix = self.matrix.as_ref().ok_or(FitAlignerError::NoSequences)?;
        let (end, _) = matrix.best_end();

        let mut result = Traceback::new(
            matrix,
            self.document.as_slice(),
            self.target.as_slice(),
            self.params.penalties(),
        )
        .reconstruct_alignment(end, self.params.cost_ceiling())?;
        result.statistics.execution_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

        debug!(
            "Aligned target of {} chars against document of {} chars: cost {} at [{}, {}), {:?}",
            self.target.len(),
            self.document.len(),
            result.cost,
            result.start,
            result.end,
            result.verdict
        );
        Ok(result)
    }

    /// Feeds the document line by line, line terminators included.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD rather than failing the
    /// run. Stops at end of input, or at the first exact match when early
    /// termination is enabled. An empty stream leaves the document empty.
    pub fn consume_lines<R: BufRead>(&mut self, mut reader: R) -> Result<AlignmentScore> {
        let mut score = self.align()?;
        let mut buf = Vec::new();
        let mut lines = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            lines += 1;
            score = self.extend(&String::from_utf8_lossy(&buf))?;

            if self.config.early_termination && score.is_exact() {
                info!("Exact match after {} lines, ending at offset {}", lines, score.end);
                break;
            }
        }

        debug!("Consumed {} lines, best cost {}", lines, score.cost);
        Ok(score)
    }

    pub fn params(&self) -> &AlignmentParams {
        &self.params
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    pub fn document(&self) -> &Sequence {
        &self.document
    }

    pub fn target(&self) -> &Sequence {
        &self.target
    }

    pub fn matrix(&self) -> Option<&ScoreMatrix> {
        self.matrix.as_ref()
    }
}

/// Aligns `target` against `document` with the reference parameters.
pub fn align(document: &str, target: &str) -> Result<AlignmentResult> {
    let mut aligner = FitAligner::new(AlignmentParams::default());
    aligner.set_sequences(&Sequence::new(document), &Sequence::new(target))?;
    aligner.align_with_traceback()
}
