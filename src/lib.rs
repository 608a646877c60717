//! # bestmatch
//!
//! Find the closest element of a reference set to a query.
//!
//! ## Features
//!
//! - Generic best-match search over any distance function
//! - Optional inclusive distance threshold
//! - Closest word lookup with pluggable similarity ratios
//! - Closest number lookup
//! - Bulk mapping of many queries, parallel for large inputs
//! - Word-list spelling corrector

pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod number;
pub mod similarity;
pub mod spelling;
pub mod word;

pub mod prelude {
    pub use crate::config::MatchConfig;
    pub use crate::error::{MatchError, Result};
    pub use crate::matcher::{Scored, find_best_match, find_best_scored, try_find_best_match};
    pub use crate::number::{NumberKey, find_closest_number, find_closest_numbers};
    pub use crate::similarity::{RatioMetric, SimilarityRatio};
    pub use crate::spelling::{Correction, SpellCorrector, WordList};
    pub use crate::word::{WordMatcher, find_similar_word, find_similar_words};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
