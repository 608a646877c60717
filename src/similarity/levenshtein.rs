//! Edit-distance based ratios.

use std::cmp::min;

use crate::similarity::SimilarityRatio;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len2 = s2_chars.len();

    if s1_chars.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1_chars.len();
    }

    // Two rows are enough
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, &c1) in s1_chars.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };

            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Length of the longest common subsequence of two strings.
pub fn lcs_length(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len2 = s2_chars.len();

    if s1_chars.is_empty() || len2 == 0 {
        return 0;
    }

    let mut prev_row = vec![0; len2 + 1];
    let mut curr_row = vec![0; len2 + 1];

    for &c1 in &s1_chars {
        for (j, &c2) in s2_chars.iter().enumerate() {
            curr_row[j + 1] = if c1 == c2 {
                prev_row[j] + 1
            } else {
                prev_row[j + 1].max(curr_row[j])
            };
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Normalized Levenshtein similarity, `1 - distance / max_len`.
/// Two empty strings are identical (1.0).
pub fn levenshtein_ratio(s1: &str, s2: &str) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());

    if max_len == 0 {
        return 1.0;
    }

    1.0 - (levenshtein_distance(s1, s2) as f64 / max_len as f64)
}

/// Indel similarity: `(lensum - indel_distance) / lensum`, which reduces to
/// `2 * LCS / lensum`. Substitutions cost two edits here, so this is the
/// ratio classic spell-checkers report for Levenshtein.
pub fn indel_ratio(s1: &str, s2: &str) -> f64 {
    let lensum = s1.chars().count() + s2.chars().count();

    if lensum == 0 {
        return 1.0;
    }

    (2 * lcs_length(s1, s2)) as f64 / lensum as f64
}

/// [`levenshtein_ratio`] as a [`SimilarityRatio`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevenshteinRatio;

impl SimilarityRatio for LevenshteinRatio {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        levenshtein_ratio(a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// [`indel_ratio`] as a [`SimilarityRatio`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndelRatio;

impl SimilarityRatio for IndelRatio {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        indel_ratio(a, b)
    }

    fn name(&self) -> &'static str {
        "indel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2); // transposition
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
    }

    #[test]
    fn test_lcs_length() {
        assert_eq!(lcs_length("", "abc"), 0);
        assert_eq!(lcs_length("abc", "abc"), 3);
        assert_eq!(lcs_length("greip", "grape"), 3);
        assert_eq!(lcs_length("kitten", "sitting"), 4);
    }

    #[test]
    fn test_levenshtein_ratio() {
        assert!((levenshtein_ratio("", "") - 1.0).abs() < 1e-12);
        assert!((levenshtein_ratio("abc", "abc") - 1.0).abs() < 1e-12);
        assert!((levenshtein_ratio("abc", "def") - 0.0).abs() < 1e-12);
        assert!((levenshtein_ratio("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
    }

    #[test]
    fn test_indel_ratio() {
        assert!((indel_ratio("", "") - 1.0).abs() < 1e-12);
        assert!((indel_ratio("kitten", "sitting") - 8.0 / 13.0).abs() < 1e-12);
        assert!((indel_ratio("greip", "grape") - 0.6).abs() < 1e-12);
        assert!((indel_ratio("abc", "xyz") - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_common_typos_stay_close() {
        let common_typos = vec![
            ("the", "teh"),
            ("search", "serach"),
            ("hello", "helo"),
            ("world", "wrold"),
            ("quick", "quikc"),
        ];

        for (correct, typo) in common_typos {
            let ratio = IndelRatio.ratio(correct, typo);
            assert!(ratio >= 0.6, "Ratio too low for {correct} -> {typo}: {ratio}");
        }
    }
}
