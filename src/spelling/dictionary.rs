//! Word lists for spell checking.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::info;

use crate::error::Result;

/// An ordered list of known words plus a set for exact lookups.
///
/// The order matters: when two words are equally close to a misspelling,
/// the one listed first is suggested.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Words in file order, duplicates included
    words: Vec<String>,
    /// Set of all words for fast lookup
    word_set: HashSet<String>,
}

impl WordList {
    /// Create a new empty word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a word list from words in memory.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = WordList::new();
        for word in words {
            list.add_word(word);
        }
        list
    }

    /// Append a word. Matching is case-sensitive, so the word is kept as is.
    pub fn add_word<S: Into<String>>(&mut self, word: S) {
        let word = word.into();
        self.word_set.insert(word.clone());
        self.words.push(word);
    }

    /// Load a word list from a text file with one word per line.
    ///
    /// Lines are trimmed and blank lines are skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut list = WordList::new();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                list.add_word(word);
            }
        }

        info!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Save the word list, one word per line, in list order.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        for word in &self.words {
            writeln!(file, "{word}")?;
        }
        Ok(())
    }

    /// Check if a word is in the list (exact match).
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// All words in list order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct words.
    pub fn unique_len(&self) -> usize {
        self.word_set.len()
    }

    /// Whether the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
