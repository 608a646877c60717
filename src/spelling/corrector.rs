//! Spelling corrector: exact lookup first, best match otherwise.

use log::debug;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::config::validate_max_diff;
use crate::error::Result;
use crate::similarity::{IndelRatio, RatioMetric, SimilarityRatio};
use crate::spelling::dictionary::WordList;
use crate::word::WordMatcher;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorrectorConfig {
    /// Largest accepted distance for a suggestion; `None` always suggests.
    pub max_diff: Option<f64>,
    /// Similarity ratio used to rank suggestions.
    pub ratio: RatioMetric,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_diff: None,
            ratio: RatioMetric::Indel,
        }
    }
}

/// Outcome of checking one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "suggestion", rename_all = "snake_case")]
pub enum Correction {
    /// The word is in the word list.
    Correct,
    /// The word is unknown; this is the closest known word.
    Suggestion(String),
    /// The word is unknown and nothing is close enough.
    NoSuggestion,
}

impl Correction {
    /// Check if the word was found as is.
    pub fn is_correct(&self) -> bool {
        matches!(self, Correction::Correct)
    }

    /// The suggested replacement, if any.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Correction::Suggestion(word) => Some(word),
            _ => None,
        }
    }
}

/// Spell checker over a word list.
pub struct SpellCorrector<R = IndelRatio> {
    words: WordList,
    matcher: WordMatcher<R>,
}

impl SpellCorrector<IndelRatio> {
    /// Corrector with the indel ratio and no threshold.
    pub fn new(words: WordList) -> Self {
        Self::with_ratio(words, IndelRatio)
    }
}

impl SpellCorrector<RatioMetric> {
    /// Corrector built from a configuration.
    pub fn with_config(words: WordList, config: &CorrectorConfig) -> Result<Self> {
        validate_max_diff(config.max_diff)?;
        Ok(SpellCorrector {
            words,
            matcher: WordMatcher::with_ratio(config.ratio).max_diff(config.max_diff),
        })
    }
}

impl<R: SimilarityRatio> SpellCorrector<R> {
    /// Corrector over a custom ratio.
    pub fn with_ratio(words: WordList, ratio: R) -> Self {
        SpellCorrector {
            words,
            matcher: WordMatcher::with_ratio(ratio),
        }
    }

    /// Reject suggestions further away than `max_diff`.
    pub fn max_diff(mut self, max_diff: Option<f64>) -> Self {
        self.matcher = self.matcher.max_diff(max_diff);
        self
    }

    /// The word list in use.
    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    /// Check if a word is correctly spelled.
    pub fn is_correct(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Check one word.
    ///
    /// Known words short-circuit. Unknown words are matched against the whole
    /// list, which fails with an invalid argument error if the list is empty.
    pub fn check(&self, word: &str) -> Result<Correction> {
        if self.words.contains(word) {
            return Ok(Correction::Correct);
        }

        debug!("'{word}' not in word list, searching {} candidates", self.words.len());
        let correction = match self.matcher.find(word, self.words.words())? {
            Some(best) => Correction::Suggestion(best.clone()),
            None => Correction::NoSuggestion,
        };
        Ok(correction)
    }

    /// Check every word of a line of text, in order.
    pub fn correct_text(&self, text: &str) -> Result<Vec<(String, Correction)>> {
        text.unicode_words()
            .map(|word| Ok((word.to_string(), self.check(word)?)))
            .collect()
    }
}
