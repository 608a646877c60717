//! String similarity ratios.
//!
//! A ratio scores two strings in `[0.0, 1.0]`, where `1.0` means identical.
//! The word adapter turns a ratio into a distance with `1.0 - ratio` so it
//! plugs into the matcher's "lower is better" contract. Any
//! `Fn(&str, &str) -> f64` closure is a ratio too, which lets callers inject
//! their own measure.

pub mod levenshtein;
pub mod sequence;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

pub use levenshtein::*;
pub use sequence::*;

/// A string similarity measure in `[0.0, 1.0]` (1.0 = identical).
pub trait SimilarityRatio: Send + Sync {
    /// Similarity between `a` and `b`.
    fn ratio(&self, a: &str, b: &str) -> f64;

    /// Distance counterpart of [`ratio`](Self::ratio).
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.ratio(a, b)
    }

    /// Name of the measure for logging and output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> SimilarityRatio for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn ratio(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// Built-in ratios selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RatioMetric {
    /// Matching-blocks ratio, `2*M / (|a| + |b|)`.
    #[default]
    Sequence,
    /// Indel ratio, `2*LCS / (|a| + |b|)`.
    Indel,
    /// Normalized Levenshtein, `1 - lev / max(|a|, |b|)`.
    Levenshtein,
}

impl RatioMetric {
    /// Parse a ratio metric from a string.
    pub fn parse_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sequence" | "difflib" => Ok(RatioMetric::Sequence),
            "indel" => Ok(RatioMetric::Indel),
            "levenshtein" | "lev" => Ok(RatioMetric::Levenshtein),
            _ => Err(MatchError::invalid_argument(format!(
                "Unknown ratio metric: '{s}'. Valid: sequence, indel, levenshtein"
            ))),
        }
    }
}

impl FromStr for RatioMetric {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl SimilarityRatio for RatioMetric {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        match self {
            RatioMetric::Sequence => sequence_ratio(a, b),
            RatioMetric::Indel => indel_ratio(a, b),
            RatioMetric::Levenshtein => levenshtein_ratio(a, b),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            RatioMetric::Sequence => "sequence",
            RatioMetric::Indel => "indel",
            RatioMetric::Levenshtein => "levenshtein",
        }
    }
}
