#![cfg(test)]
use std::time::Duration;

use primer_common::config::Config;
use primer_common::sequence::NumberSequence;
use primer_core::calculator::Calculator;
use primer_core::greeting::{self, GREETING};
use primer_core::showcase::{self, DEFAULT_OPERANDS, ShowcaseReport};

/// Runs the synchronous routine with the stock inputs, as the default command does.
#[test]
fn stock_showcase_values() {
    let cfg: Config = Config::default();
    let numbers: NumberSequence = NumberSequence::default();

    let report: ShowcaseReport = showcase::run(&numbers, cfg.threshold, DEFAULT_OPERANDS)
        .expect("stock inputs cannot overflow");

    assert_eq!(report.doubled, vec![10, 4, 16, 2, 18, 6]);
    assert_eq!(report.filtered, vec![5, 8, 9]);
    assert_eq!(report.sum, 28);
    assert_eq!(report.calculator_result, 30);
    assert_eq!(report.history, vec!["10 + 20 = 30".to_string()]);
}

#[test]
fn parsed_sequence_feeds_showcase() {
    let numbers: NumberSequence = "4, -2, 7".parse().expect("valid list");
    let report = showcase::run(&numbers, 0, (1, 2)).expect("no overflow");

    assert_eq!(report.original, vec![4, -2, 7]);
    assert_eq!(report.doubled, vec![8, -4, 14]);
    assert_eq!(report.filtered, vec![4, 7]);
    assert_eq!(report.sorted, vec![-2, 4, 7]);
    assert_eq!(report.sum, 9);
    assert_eq!(report.history, vec!["1 + 2 = 3".to_string()]);
}

#[test]
fn history_grows_once_per_add() {
    let mut calc = Calculator::new();
    assert!(calc.history().is_empty());

    let pairs = [(3, 4), (100, -1)];
    for (i, (a, b)) in pairs.iter().enumerate() {
        let result = calc.add(*a, *b).expect("small operands");
        assert_eq!(result, a + b);
        assert_eq!(calc.len(), i + 1);
    }

    let expected: Vec<String> = pairs
        .iter()
        .map(|(a, b)| format!("{} + {} = {}", a, b, a + b))
        .collect();
    assert_eq!(calc.history(), expected.as_slice());
}

#[tokio::test(start_paused = true)]
async fn sync_then_async_sequencing() -> anyhow::Result<()> {
    let cfg: Config = Config::default();

    let report = showcase::run(&NumberSequence::default(), cfg.threshold, DEFAULT_OPERANDS)?;
    assert_eq!(report.sum, 28);

    let greeting = greeting::delayed_greeting(cfg.delay).await;
    assert_eq!(greeting.message, GREETING);
    assert!(greeting.waited >= Duration::from_millis(100));
    Ok(())
}
