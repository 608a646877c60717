//! Closest-number lookups by absolute difference.
//!
//! There is no threshold here: every query gets the nearest reference number.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::matcher::{DEFAULT_PARALLEL_THRESHOLD, map_distinct, scan};

/// An `f64` usable as a map key.
///
/// Equality and hashing work on the bit pattern, with `-0.0` folded into
/// `0.0` and every NaN folded into one value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberKey(f64);

impl NumberKey {
    /// Wrap a number.
    pub fn new(value: f64) -> Self {
        NumberKey(value)
    }

    /// The wrapped number.
    pub fn value(self) -> f64 {
        self.0
    }

    fn canonical_bits(self) -> u64 {
        if self.0.is_nan() {
            f64::NAN.to_bits()
        } else if self.0 == 0.0 {
            0.0f64.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl From<f64> for NumberKey {
    fn from(value: f64) -> Self {
        NumberKey(value)
    }
}

impl PartialEq for NumberKey {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for NumberKey {}

impl Hash for NumberKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl fmt::Display for NumberKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Nearest number to `value` in `numbers`; the earlier one wins a tie.
///
/// ```
/// use bestmatch::number::find_closest_number;
///
/// assert_eq!(find_closest_number(2.0, &[1.0, 3.0, 10.0]).unwrap(), 1.0);
/// ```
pub fn find_closest_number(value: f64, numbers: &[f64]) -> Result<f64> {
    let best = scan(&value, numbers, |q: &f64, c: &&f64| (q - **c).abs())?;
    Ok(*best.candidate)
}

/// Nearest reference number for every distinct value of `queries`.
pub fn find_closest_numbers(reference: &[f64], queries: &[f64]) -> Result<HashMap<NumberKey, f64>> {
    find_closest_numbers_with_threshold(reference, queries, DEFAULT_PARALLEL_THRESHOLD)
}

/// [`find_closest_numbers`] with an explicit parallel threshold.
pub fn find_closest_numbers_with_threshold(
    reference: &[f64],
    queries: &[f64],
    parallel_threshold: usize,
) -> Result<HashMap<NumberKey, f64>> {
    if reference.is_empty() {
        return Err(MatchError::invalid_argument("reference number list is empty"));
    }

    map_distinct(
        queries.iter().copied().map(NumberKey::from),
        parallel_threshold,
        |query| find_closest_number(query.value(), reference),
    )
}
