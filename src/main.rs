use std::io;

use clap::{Parser, ValueEnum};
use fit_aligner::{
    AlignmentParams, Cost, FitAligner, PenaltyTable, RescanMode, Report, ReportLayout, Sequence,
    StreamConfig, COST_CEILING, GAP_IN_DOCUMENT, GAP_IN_TARGET, MISMATCH_NON_PRINTABLE,
    MISMATCH_PRINTABLE, SKIP_GLYPH,
};

/// Finds the best fitting alignment of TARGET inside the document read from stdin.
#[derive(Parser, Debug)]
#[command(name = "fit-aligner", version)]
struct Cli {
    /// String to locate in the document.
    target: String,
    #[arg(long, default_value_t = MISMATCH_PRINTABLE)]
    mismatch_printable: Cost,
    #[arg(long, default_value_t = MISMATCH_NON_PRINTABLE)]
    mismatch_non_printable: Cost,
    /// Cost of skipping a document character inside the match.
    #[arg(long, default_value_t = GAP_IN_DOCUMENT)]
    gap_in_document: Cost,
    /// Cost of leaving a target character unmatched.
    #[arg(long, default_value_t = GAP_IN_TARGET)]
    gap_in_target: Cost,
    /// Costs at or above this are reported as no suitable alignment.
    #[arg(long, default_value_t = COST_CEILING)]
    cost_ceiling: Cost,
    #[arg(long, default_value_t = SKIP_GLYPH)]
    skip_glyph: char,
    #[arg(long, value_enum, default_value_t = LayoutArg::Pairs)]
    layout: LayoutArg,
    #[arg(long, value_enum, default_value_t = RescanArg::Extend)]
    rescan: RescanArg,
    /// Keep reading after an exact match.
    #[arg(long, default_value_t = false)]
    no_early_stop: bool,
    /// Print the scoring matrix to stderr.
    #[arg(long, default_value_t = false)]
    dump_matrix: bool,
    #[arg(long, short = 'v', default_value_t = false)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    Pairs,
    Rows,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RescanArg {
    Recompute,
    Extend,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let params = AlignmentParams::new()
        .with_penalties(PenaltyTable {
            mismatch_printable: cli.mismatch_printable,
            mismatch_non_printable: cli.mismatch_non_printable,
            gap_in_document: cli.gap_in_document,
            gap_in_target: cli.gap_in_target,
            ..PenaltyTable::default()
        })?
        .with_cost_ceiling(cli.cost_ceiling)?
        .with_skip_glyph(cli.skip_glyph);

    let config = StreamConfig {
        rescan: match cli.rescan {
            RescanArg::Recompute => RescanMode::Recompute,
            RescanArg::Extend => RescanMode::Extend,
        },
        early_termination: !cli.no_early_stop,
    };

    let mut aligner = FitAligner::new(params).with_config(config);
    aligner.set_target(&Sequence::new(&cli.target))?;
    aligner.consume_lines(io::stdin().lock())?;

    if cli.dump_matrix {
        if let Some(matrix) = aligner.matrix() {
            eprint!("{}", matrix.dump());
        }
    }

    let result = aligner.align_with_traceback()?;
    let layout = match cli.layout {
        LayoutArg::Pairs => ReportLayout::Pairs,
        LayoutArg::Rows => ReportLayout::Rows,
    };
    print!("{}", Report::new(&result, aligner.params()).with_layout(layout));

    Ok(())
}
