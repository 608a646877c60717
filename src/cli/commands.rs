//! Command implementations for the bestmatch CLI.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::MatchConfig;
use crate::error::Result;
use crate::matcher::Scored;
use crate::number::{NumberKey, find_closest_number, find_closest_numbers_with_threshold};
use crate::similarity::{RatioMetric, SimilarityRatio};
use crate::spelling::{Correction, CorrectorConfig, SpellCorrector, WordList};
use crate::word::WordMatcher;

const DEMO_REFERENCE_WORDS: [&str; 3] = ["apple", "grape", "pineapple"];
const DEMO_QUERY_WORDS: [&str; 9] = [
    "apple1",
    "apple",
    "greip",
    "greb",
    "grape",
    "grabe",
    "painapple",
    "pinaple",
    "pineapple",
];
const DEMO_REFERENCE_NUMBERS: [f64; 5] = [1.0, 3.0, 10.0, 40.0, 100.0];
const DEMO_QUERY_NUMBERS: [f64; 9] = [1.0, 1.93, 2.1, 2.0, 4.0, 6.0, 50.0, 150.0, 2000.0];

/// Execute a CLI command.
pub fn execute_command(args: BestMatchArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Word(word_args) => find_word(word_args, &config, &args),
        Command::Words(words_args) => map_words(words_args, &config, &args),
        Command::Number(number_args) => find_number(number_args, &args),
        Command::Numbers(numbers_args) => map_numbers(numbers_args, &config, &args),
        Command::Spell(spell_args) => spell_check(spell_args, &config, &args),
        Command::Demo => run_demo(&config, &args),
    }
}

/// Load the config file, if any.
fn load_config(args: &BestMatchArgs) -> Result<MatchConfig> {
    match &args.config {
        Some(path) => {
            let config = MatchConfig::load_from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            info!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(MatchConfig::default()),
    }
}

/// Command-line flags win over the config file.
pub fn merge_options(config: &MatchConfig, options: &MatchOptions) -> MatchConfig {
    MatchConfig {
        max_diff: options.max_diff.or(config.max_diff),
        ratio: options.ratio.map(RatioMetric::from).unwrap_or(config.ratio),
        parallel_threshold: config.parallel_threshold,
    }
}

/// Keep the first occurrence of every query, in input order.
fn distinct_in_order<T, K, F>(items: &[T], key: F) -> Vec<&T>
where
    K: std::hash::Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items.iter().filter(|item| seen.insert(key(*item))).collect()
}

/// Look up a single word.
fn find_word(args: &WordArgs, config: &MatchConfig, cli_args: &BestMatchArgs) -> Result<()> {
    let config = merge_options(config, &args.options);
    let result = word_match(&args.word, &args.candidates, &config)?;
    output_result("Word lookup", &result, cli_args)
}

fn word_match<S: AsRef<str>>(word: &str, candidates: &[S], config: &MatchConfig) -> Result<WordMatchResult> {
    let matcher = WordMatcher::from_config(config)?;
    let scored = matcher
        .find_scored(word, candidates)?
        .map(|s| s.map(|candidate| candidate.as_ref().to_string()));

    Ok(WordMatchResult {
        query: word.to_string(),
        ratio: matcher.ratio().name().to_string(),
        distance: scored.as_ref().map(|s| s.distance),
        index: scored.as_ref().map(|s| s.index),
        best_match: scored.map(Scored::into_candidate),
    })
}

/// Map many words at once.
fn map_words(args: &WordsArgs, config: &MatchConfig, cli_args: &BestMatchArgs) -> Result<()> {
    let config = merge_options(config, &args.options);
    let result = word_mapping(&args.reference, &args.queries, &config)?;
    output_result("Word mapping", &result, cli_args)
}

fn word_mapping<S, Q>(reference: &[S], queries: &[Q], config: &MatchConfig) -> Result<WordMappingResult>
where
    S: AsRef<str> + Sync,
    Q: AsRef<str>,
{
    let matcher = WordMatcher::from_config(config)?;
    let mut mapping = matcher.find_all(reference, queries)?;

    let mappings = distinct_in_order(queries, |q| q.as_ref().to_string())
        .into_iter()
        .map(|query| {
            let query = query.as_ref().to_string();
            let best_match = mapping.remove(&query).flatten();
            MappingEntry { query, best_match }
        })
        .collect();

    Ok(WordMappingResult {
        ratio: matcher.ratio().name().to_string(),
        mappings,
    })
}

/// Look up a single number.
fn find_number(args: &NumberArgs, cli_args: &BestMatchArgs) -> Result<()> {
    let best_match = find_closest_number(args.value, &args.reference)?;
    let result = NumberMatchResult {
        query: args.value,
        best_match,
    };
    output_result("Number lookup", &result, cli_args)
}

/// Map many numbers at once.
fn map_numbers(args: &NumbersArgs, config: &MatchConfig, cli_args: &BestMatchArgs) -> Result<()> {
    let result = number_mapping(&args.reference, &args.queries, config)?;
    output_result("Number mapping", &result, cli_args)
}

fn number_mapping(reference: &[f64], queries: &[f64], config: &MatchConfig) -> Result<NumberMappingResult> {
    let mapping = find_closest_numbers_with_threshold(reference, queries, config.parallel_threshold)?;

    let mappings = distinct_in_order(queries, |q| NumberKey::new(*q))
        .into_iter()
        .filter_map(|query| {
            mapping.get(&NumberKey::new(*query)).map(|best| MappingEntry {
                query: *query,
                best_match: *best,
            })
        })
        .collect();

    Ok(NumberMappingResult { mappings })
}

/// Spell-check the given words, or run interactively on stdin.
fn spell_check(args: &SpellArgs, config: &MatchConfig, cli_args: &BestMatchArgs) -> Result<()> {
    let words = WordList::load_from_file(&args.dictionary)
        .with_context(|| format!("failed to load word list from {}", args.dictionary.display()))?;

    let corrector_config = CorrectorConfig {
        max_diff: args.options.max_diff.or(config.max_diff),
        ratio: args
            .options
            .ratio
            .map(RatioMetric::from)
            .unwrap_or(CorrectorConfig::default().ratio),
    };
    let corrector = SpellCorrector::with_config(words, &corrector_config)?;

    if args.words.is_empty() {
        return spell_interactive(&corrector);
    }

    let mut entries = Vec::new();
    for word in &args.words {
        for (word, correction) in corrector.correct_text(word)? {
            entries.push(SpellCheckEntry { word, correction });
        }
    }

    let result = SpellCheckResult {
        dictionary_words: corrector.word_list().len(),
        words: entries,
    };
    output_result("Spell check", &result, cli_args)
}

/// Prompt for words until an empty line or end of input.
fn spell_interactive<R: SimilarityRatio>(corrector: &SpellCorrector<R>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "Write word: ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            break;
        }

        let word = line.trim();
        if word.is_empty() {
            break;
        }

        match corrector.check(word)? {
            Correction::Correct => writeln!(stdout, "Word is correct.")?,
            Correction::Suggestion(best) => writeln!(stdout, "Did you mean {best}?")?,
            Correction::NoSuggestion => writeln!(stdout, "No suggestion.")?,
        }
    }

    debug!("interactive spell check finished");
    Ok(())
}

/// Print the example mappings.
fn run_demo(config: &MatchConfig, cli_args: &BestMatchArgs) -> Result<()> {
    let result = demo_result(config)?;
    output_result("Demo", &result, cli_args)
}

/// Build the demo output: one word lookup, one word mapping, one number mapping.
pub fn demo_result(config: &MatchConfig) -> Result<DemoResult> {
    Ok(DemoResult {
        single: word_match("appl", &DEMO_REFERENCE_WORDS, config)?,
        words: word_mapping(&DEMO_REFERENCE_WORDS, &DEMO_QUERY_WORDS, config)?,
        numbers: number_mapping(&DEMO_REFERENCE_NUMBERS, &DEMO_QUERY_NUMBERS, config)?,
    })
}
