//! Closest-word lookups.
//!
//! Words are compared with a [`SimilarityRatio`] turned into a distance
//! (`1.0 - ratio`). `max_diff` is expressed in that distance: `0.4` rejects
//! every candidate whose ratio is below `0.6`.

use std::collections::HashMap;

use crate::config::MatchConfig;
use crate::error::{MatchError, Result};
use crate::matcher::{DEFAULT_PARALLEL_THRESHOLD, Scored, find_best_scored, map_distinct};
use crate::similarity::{RatioMetric, SequenceRatio, SimilarityRatio};

/// Word matcher over a configurable similarity ratio.
#[derive(Debug, Clone)]
pub struct WordMatcher<R = SequenceRatio> {
    ratio: R,
    max_diff: Option<f64>,
    parallel_threshold: usize,
}

impl WordMatcher<SequenceRatio> {
    /// Matcher with the default sequence ratio and no threshold.
    pub fn new() -> Self {
        Self::with_ratio(SequenceRatio)
    }
}

impl Default for WordMatcher<SequenceRatio> {
    fn default() -> Self {
        Self::new()
    }
}

impl WordMatcher<RatioMetric> {
    /// Build a matcher from a validated configuration.
    pub fn from_config(config: &MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(WordMatcher {
            ratio: config.ratio,
            max_diff: config.max_diff,
            parallel_threshold: config.parallel_threshold,
        })
    }
}

impl<R: SimilarityRatio> WordMatcher<R> {
    /// Matcher over a custom ratio.
    pub fn with_ratio(ratio: R) -> Self {
        WordMatcher {
            ratio,
            max_diff: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Reject matches whose distance exceeds `max_diff`.
    ///
    /// Passed to the matcher as is: a negative value rejects everything,
    /// `f64::INFINITY` rejects nothing and NaN is an invalid argument.
    pub fn max_diff(mut self, max_diff: Option<f64>) -> Self {
        self.max_diff = max_diff;
        self
    }

    /// Distinct query count at which [`find_all`](Self::find_all) goes parallel.
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// The ratio in use.
    pub fn ratio(&self) -> &R {
        &self.ratio
    }

    /// The configured threshold.
    pub fn threshold(&self) -> Option<f64> {
        self.max_diff
    }

    /// Closest word to `word` among `words`, or `None` if it is too far.
    pub fn find<'a, S: AsRef<str>>(&self, word: &str, words: &'a [S]) -> Result<Option<&'a S>> {
        Ok(self.find_scored(word, words)?.map(Scored::into_candidate))
    }

    /// Like [`find`](Self::find), keeping index and distance of the match.
    pub fn find_scored<'a, S: AsRef<str>>(
        &self,
        word: &str,
        words: &'a [S],
    ) -> Result<Option<Scored<&'a S, f64>>> {
        find_best_scored(
            word,
            words,
            |query, candidate| self.ratio.distance(query, candidate.as_ref()),
            self.max_diff,
        )
    }

    /// Best match in `reference` for every distinct word of `queries`.
    ///
    /// Every distinct query is a key of the result, also when it maps to
    /// `None`. An empty `reference` is an error even if `queries` is empty.
    pub fn find_all<S, Q>(&self, reference: &[S], queries: &[Q]) -> Result<HashMap<String, Option<String>>>
    where
        S: AsRef<str> + Sync,
        Q: AsRef<str>,
    {
        ensure_not_empty(reference)?;

        map_distinct(
            queries.iter().map(|q| q.as_ref().to_string()),
            self.parallel_threshold,
            |query| Ok(self.find(query, reference)?.map(|w| w.as_ref().to_string())),
        )
    }
}

fn ensure_not_empty<S>(reference: &[S]) -> Result<()> {
    if reference.is_empty() {
        return Err(MatchError::invalid_argument("reference word list is empty"));
    }
    Ok(())
}

/// Closest word to `word` among `words` using the sequence ratio.
///
/// ```
/// use bestmatch::word::find_similar_word;
///
/// let words = ["apple", "grape", "pineapple"];
/// assert_eq!(find_similar_word("appl", &words, None).unwrap(), Some(&"apple"));
/// ```
pub fn find_similar_word<'a, S: AsRef<str>>(
    word: &str,
    words: &'a [S],
    max_diff: Option<f64>,
) -> Result<Option<&'a S>> {
    WordMatcher::new().max_diff(max_diff).find(word, words)
}

/// Map every distinct word of `query_words` to its closest word in `reference_words`.
pub fn find_similar_words<S, Q>(
    reference_words: &[S],
    query_words: &[Q],
    max_diff: Option<f64>,
) -> Result<HashMap<String, Option<String>>>
where
    S: AsRef<str> + Sync,
    Q: AsRef<str>,
{
    WordMatcher::new()
        .max_diff(max_diff)
        .find_all(reference_words, query_words)
}
