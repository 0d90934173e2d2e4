use fit_aligner::{AlignmentParams, FitAligner, RescanMode, Sequence, StreamConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = StreamConfig {
        rescan: RescanMode::Extend,
        early_termination: true,
        ..StreamConfig::default()
    };
    let mut aligner = FitAligner::new(AlignmentParams::default()).with_config(config);
    aligner.set_target(&Sequence::new("checksum mismatch"))?;

    let lines = [
        "booting\n",
        "loading modules\n",
        "warning: checksum mismatsh in block 7\n",
        "error: checksum mismatch in block 9\n",
        "halted\n",
    ];

    for line in lines {
        let score = aligner.extend(line)?;
        println!(
            "{:>4} chars: best cost {:>2} ending at {:>3} ({:?})",
            aligner.document().len(),
            score.cost,
            score.end,
            score.verdict
        );
        if score.is_exact() {
            break;
        }
    }

    let result = aligner.align_with_traceback()?;
    println!("Match at [{}, {}) with cost {}", result.start, result.end, result.cost);

    Ok(())
}
