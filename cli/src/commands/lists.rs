use primer_common::{config::Config, sequence::NumberSequence};
use primer_core::showcase::{self, DEFAULT_OPERANDS, ShowcaseReport};

use crate::terminal::print;

pub fn lists(numbers: &NumberSequence, cfg: &Config) -> anyhow::Result<()> {
    print::header("sequences & calculator", cfg.quiet);

    let report: ShowcaseReport = showcase::run(numbers, cfg.threshold, DEFAULT_OPERANDS)?;
    for (label, value) in report_lines(&report) {
        print::labeled(&label, value);
    }
    Ok(())
}

/// Label and rendered value of every report line, in print order.
fn report_lines(report: &ShowcaseReport) -> Vec<(String, String)> {
    vec![
        ("Original".into(), format!("{:?}", report.original)),
        ("Doubled".into(), format!("{:?}", report.doubled)),
        (format!("Filtered (> {})", report.threshold), format!("{:?}", report.filtered)),
        ("Sum".into(), report.sum.to_string()),
        ("Calculator result".into(), report.calculator_result.to_string()),
        ("History".into(), format!("{:?}", report.history)),
        ("Sorted".into(), format!("{:?}", report.sorted)),
    ]
}
