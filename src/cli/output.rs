//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{BestMatchArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::Correction;

/// Result structure for a single word lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordMatchResult {
    pub query: String,
    pub ratio: String,
    pub best_match: Option<String>,
    pub distance: Option<f64>,
    pub index: Option<usize>,
}

/// One entry of a bulk mapping.
#[derive(Debug, Serialize, Deserialize)]
pub struct MappingEntry<Q, M> {
    pub query: Q,
    pub best_match: M,
}

/// Result structure for bulk word mapping.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordMappingResult {
    pub ratio: String,
    pub mappings: Vec<MappingEntry<String, Option<String>>>,
}

/// Result structure for a single number lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct NumberMatchResult {
    pub query: f64,
    pub best_match: f64,
}

/// Result structure for bulk number mapping.
#[derive(Debug, Serialize, Deserialize)]
pub struct NumberMappingResult {
    pub mappings: Vec<MappingEntry<f64, f64>>,
}

/// Result structure for spell checking.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpellCheckResult {
    pub dictionary_words: usize,
    pub words: Vec<SpellCheckEntry>,
}

/// Outcome for one checked word.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpellCheckEntry {
    pub word: String,
    pub correction: Correction,
}

/// Result structure for the demo command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoResult {
    pub single: WordMatchResult,
    pub words: WordMappingResult,
    pub numbers: NumberMappingResult,
}

fn display_option<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "no match".to_string(),
    }
}

impl fmt::Display for WordMatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.best_match, self.distance) {
            (Some(best), Some(distance)) => write!(
                f,
                "Best match for '{}' is '{}' (distance {:.3})",
                self.query, best, distance
            ),
            _ => write!(f, "No match for '{}'", self.query),
        }
    }
}

impl fmt::Display for WordMappingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "All similar words ({}):", self.ratio)?;
        for entry in &self.mappings {
            writeln!(f, "  {} -> {}", entry.query, display_option(&entry.best_match))?;
        }
        Ok(())
    }
}

impl fmt::Display for NumberMatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Closest number to {} is {}", self.query, self.best_match)
    }
}

impl fmt::Display for NumberMappingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "All close numbers:")?;
        for entry in &self.mappings {
            writeln!(f, "  {} -> {}", entry.query, entry.best_match)?;
        }
        Ok(())
    }
}

impl fmt::Display for SpellCheckEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.correction {
            Correction::Correct => write!(f, "{}: Word is correct.", self.word),
            Correction::Suggestion(best) => write!(f, "{}: Did you mean {}?", self.word, best),
            Correction::NoSuggestion => write!(f, "{}: No suggestion.", self.word),
        }
    }
}

impl fmt::Display for SpellCheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.words {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DemoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.single)?;
        writeln!(f)?;
        write!(f, "{}", self.words)?;
        writeln!(f)?;
        write!(f, "{}", self.numbers)
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &BestMatchArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(message: &str, result: &T, args: &BestMatchArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let rendered = result.to_string();
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &BestMatchArgs) -> Result<()> {
    println!("{}", render_json(result, args.pretty)?);
    Ok(())
}

/// Serialize a result, optionally pretty-printed.
pub fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
