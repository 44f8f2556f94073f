//! Fixed integer sequences and the derived views computed from them.
//!
//! A [`NumberSequence`] never changes after construction. Every transform
//! allocates a fresh `Vec`, so the source can be reused for any number of
//! derivations.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("sequence must contain at least one number")]
    Empty,

    #[error("'{item}' is not a valid integer: {source}")]
    InvalidItem {
        item: String,
        #[source]
        source: ParseIntError,
    },

    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberSequence {
    numbers: Vec<i64>,
}

impl NumberSequence {
    pub const DEFAULT: [i64; 6] = [5, 2, 8, 1, 9, 3];

    pub fn new(numbers: Vec<i64>) -> Self {
        Self { numbers }
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Every element multiplied by two, in original order.
    pub fn doubled(&self) -> Result<Vec<i64>, SequenceError> {
        self.numbers
            .iter()
            .map(|n| n.checked_mul(2).ok_or(SequenceError::Overflow("doubled")))
            .collect()
    }

    /// Elements strictly greater than `threshold`, in original order.
    pub fn filtered_above(&self, threshold: i64) -> Vec<i64> {
        self.numbers
            .iter()
            .copied()
            .filter(|n| *n > threshold)
            .collect()
    }

    pub fn sum(&self) -> Result<i64, SequenceError> {
        self.numbers
            .iter()
            .try_fold(0i64, |acc, n| acc.checked_add(*n))
            .ok_or(SequenceError::Overflow("sum"))
    }

    pub fn sorted(&self) -> Vec<i64> {
        let mut sorted: Vec<i64> = self.numbers.clone();
        sorted.sort_unstable();
        sorted
    }
}

impl Default for NumberSequence {
    fn default() -> Self {
        Self::new(Self::DEFAULT.to_vec())
    }
}

impl fmt::Display for NumberSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.numbers)
    }
}

/// Parses comma separated input such as `5, 2, 8`.
impl FromStr for NumberSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(SequenceError::Empty);
        }

        let numbers = s
            .split(',')
            .map(str::trim)
            .map(|item| {
                item.parse::<i64>().map_err(|source| SequenceError::InvalidItem {
                    item: item.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<i64>, SequenceError>>()?;

        Ok(Self::new(numbers))
    }
}
