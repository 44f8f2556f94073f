use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("{a} + {b} overflows a 64-bit integer")]
    Overflow { a: i64, b: i64 },
}

/// An adder that remembers every operation it performed.
///
/// The history only grows: one entry per successful [`Calculator::add`],
/// appended in call order.
#[derive(Debug, Default, Clone)]
pub struct Calculator {
    history: Vec<String>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        let result: i64 = a.checked_add(b).ok_or(CalculatorError::Overflow { a, b })?;
        let entry: String = format!("{a} + {b} = {result}");
        debug!("calculator: {}", entry);
        self.history.push(entry);
        Ok(result)
    }

    /// Folds `operands` left to right, recording one entry per addition.
    pub fn add_all(&mut self, operands: &[i64]) -> Result<Option<i64>, CalculatorError> {
        let Some((first, rest)) = operands.split_first() else {
            return Ok(None);
        };

        let mut total: i64 = *first;
        for operand in rest {
            total = self.add(total, *operand)?;
        }
        Ok(Some(total))
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_calculator_has_no_history() {
        let calc = Calculator::new();
        assert!(calc.is_empty());
        assert_eq!(calc.len(), 0);
    }

    #[test]
    fn add_returns_sum_and_records_entry() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(10, 20), Ok(30));
        assert_eq!(calc.history(), &["10 + 20 = 30".to_string()]);
    }

    #[test]
    fn history_keeps_call_order() {
        let mut calc = Calculator::new();
        calc.add(1, 2).unwrap();
        calc.add(-4, 7).unwrap();
        assert_eq!(calc.history(), &["1 + 2 = 3", "-4 + 7 = 3"]);
    }

    #[test]
    fn add_all_chains_running_total() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add_all(&[1, 2, 3]), Ok(Some(6)));
        assert_eq!(calc.history(), &["1 + 2 = 3", "3 + 3 = 6"]);
    }

    #[test]
    fn add_all_without_operands() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add_all(&[]), Ok(None));
        assert_eq!(calc.add_all(&[7]), Ok(Some(7)));
        assert!(calc.is_empty());
    }

    #[test]
    fn overflow_leaves_history_alone() {
        let mut calc = Calculator::new();
        calc.add(1, 1).unwrap();
        let err = calc.add(i64::MAX, 1).unwrap_err();
        assert_eq!(err, CalculatorError::Overflow { a: i64::MAX, b: 1 });
        assert_eq!(calc.len(), 1);
    }
}
