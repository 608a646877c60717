//! Matching configuration shared by the adapters and the CLI.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::matcher::DEFAULT_PARALLEL_THRESHOLD;
use crate::similarity::RatioMetric;

/// Configuration for word matching and bulk lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Largest accepted distance (`1.0 - ratio`); `None` accepts any best match.
    pub max_diff: Option<f64>,
    /// Similarity ratio used for words.
    pub ratio: RatioMetric,
    /// Distinct query count at which bulk mapping goes parallel.
    pub parallel_threshold: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            max_diff: None,
            ratio: RatioMetric::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl MatchConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: MatchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values make sense.
    pub fn validate(&self) -> Result<()> {
        validate_max_diff(self.max_diff)
    }
}

/// `max_diff` must be a finite, non-negative number when present.
pub fn validate_max_diff(max_diff: Option<f64>) -> Result<()> {
    match max_diff {
        Some(value) if !value.is_finite() => Err(MatchError::invalid_config(format!(
            "max_diff must be a finite number, got {value}"
        ))),
        Some(value) if value < 0.0 => Err(MatchError::invalid_config(format!(
            "max_diff must not be negative, got {value}"
        ))),
        _ => Ok(()),
    }
}
