use fit_aligner::{AlignmentParams, FitAligner, Report, ReportLayout, Sequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let params = AlignmentParams::new().with_cost_ceiling(10)?;
    let mut aligner = FitAligner::new(params);

    let document = Sequence::new("Contents of the quick brwn fox report, page 3");
    let target = Sequence::new("quick brown fox");
    aligner.set_sequences(&document, &target)?;

    let result = aligner.align_with_traceback()?;

    println!("Cost: {}", result.cost);
    println!("Operations: {:?}", result.operations);
    print!(
        "{}",
        Report::new(&result, aligner.params()).with_layout(ReportLayout::Rows)
    );

    Ok(())
}
