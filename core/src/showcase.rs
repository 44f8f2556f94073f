//! The synchronous half of the demo: sequence transforms and a calculator run.

use primer_common::sequence::NumberSequence;
use tracing::info;

use crate::calculator::Calculator;

pub const DEFAULT_OPERANDS: (i64, i64) = (10, 20);

/// Everything the synchronous routine computes, in print order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseReport {
    pub original: Vec<i64>,
    pub doubled: Vec<i64>,
    pub threshold: i64,
    pub filtered: Vec<i64>,
    pub sum: i64,
    pub sorted: Vec<i64>,
    pub calculator_result: i64,
    pub history: Vec<String>,
}

pub fn run(
    numbers: &NumberSequence,
    threshold: i64,
    operands: (i64, i64),
) -> anyhow::Result<ShowcaseReport> {
    info!("deriving views from {} numbers", numbers.len());

    let doubled: Vec<i64> = numbers.doubled()?;
    let filtered: Vec<i64> = numbers.filtered_above(threshold);
    let sum: i64 = numbers.sum()?;
    let sorted: Vec<i64> = numbers.sorted();

    let mut calc: Calculator = Calculator::new();
    let (a, b) = operands;
    let calculator_result: i64 = calc.add(a, b)?;

    Ok(ShowcaseReport {
        original: numbers.as_slice().to_vec(),
        doubled,
        threshold,
        filtered,
        sum,
        sorted,
        calculator_result,
        history: calc.history().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_matches_expected_values() {
        let report = run(&NumberSequence::default(), 3, DEFAULT_OPERANDS).unwrap();
        assert_eq!(report.original, vec![5, 2, 8, 1, 9, 3]);
        assert_eq!(report.doubled, vec![10, 4, 16, 2, 18, 6]);
        assert_eq!(report.filtered, vec![5, 8, 9]);
        assert_eq!(report.sum, 28);
        assert_eq!(report.calculator_result, 30);
        assert_eq!(report.history, vec!["10 + 20 = 30".to_string()]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let numbers = NumberSequence::default();
        let first = run(&numbers, 3, DEFAULT_OPERANDS).unwrap();
        let second = run(&numbers, 3, DEFAULT_OPERANDS).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn overflow_propagates() {
        let numbers = NumberSequence::new(vec![i64::MAX, 1]);
        assert!(run(&numbers, 0, DEFAULT_OPERANDS).is_err());
        assert!(run(&NumberSequence::default(), 3, (i64::MAX, 1)).is_err());
    }
}
