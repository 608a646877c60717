//! Spell checking on top of the word matcher.
//!
//! A [`WordList`] answers exact membership in O(1); the [`SpellCorrector`]
//! only falls back to the (linear) best-match search for unknown words.

pub mod corrector;
pub mod dictionary;

pub use corrector::*;
pub use dictionary::*;
