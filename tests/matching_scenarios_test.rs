use std::collections::HashMap;

use bestmatch::error::MatchError;
use bestmatch::matcher::{find_best_match, find_best_scored, try_find_best_match};
use bestmatch::number::{NumberKey, find_closest_number, find_closest_numbers};
use bestmatch::similarity::{RatioMetric, SimilarityRatio};
use bestmatch::word::{WordMatcher, find_similar_word, find_similar_words};

const FRUITS: [&str; 3] = ["apple", "grape", "pineapple"];

fn abs_diff(a: &f64, b: &&f64) -> f64 {
    (a - **b).abs()
}

#[test]
fn test_closest_word() {
    assert_eq!(find_similar_word("appl", &FRUITS, None).unwrap(), Some(&"apple"));
}

#[test]
fn test_similar_words_mapping() {
    let queries = ["apple1", "apple", "greip", "grape", "painapple", "pineapple"];
    let mapping = find_similar_words(&FRUITS, &queries, None).unwrap();

    let expected: HashMap<String, Option<String>> = [
        ("apple1", "apple"),
        ("apple", "apple"),
        ("greip", "grape"),
        ("grape", "grape"),
        ("painapple", "pineapple"),
        ("pineapple", "pineapple"),
    ]
    .into_iter()
    .map(|(q, m)| (q.to_string(), Some(m.to_string())))
    .collect();

    assert_eq!(mapping, expected);
}

#[test]
fn test_far_word_maps_to_none() {
    let mapping = find_similar_words(&FRUITS, &["xyz"], Some(0.1)).unwrap();
    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping["xyz"], None);
}

#[test]
fn test_closest_number_tie_picks_first() {
    let reference = [1.0, 3.0, 10.0, 40.0, 100.0];
    assert_eq!(find_closest_number(2.0, &reference).unwrap(), 1.0);
}

#[test]
fn test_closest_numbers_mapping() {
    let reference = [1.0, 3.0, 10.0, 40.0, 100.0];
    let mapping = find_closest_numbers(&reference, &[1.93, 150.0]).unwrap();

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping[&NumberKey::new(1.93)], 1.0);
    assert_eq!(mapping[&NumberKey::new(150.0)], 100.0);
}

#[test]
fn test_threshold_correctness() {
    let candidates = [10.0, 4.0, 7.5, 4.0, 12.0];
    let query = 6.0;
    let unthresholded = find_best_match(&query, &candidates, abs_diff, None)
        .unwrap()
        .copied();
    let min_distance = candidates
        .iter()
        .map(|c| abs_diff(&query, &c))
        .fold(f64::INFINITY, f64::min);

    for step in 0..=40 {
        let max_distance = step as f64 * 0.25;
        let result = find_best_match(&query, &candidates, abs_diff, Some(max_distance))
            .unwrap()
            .copied();

        if min_distance > max_distance {
            assert_eq!(result, None, "max_distance {max_distance}");
        } else {
            assert_eq!(result, unthresholded, "max_distance {max_distance}");
        }
    }
}

#[test]
fn test_threshold_is_inclusive() {
    let scored = find_best_scored(&6.0, &[4.0, 9.0], abs_diff, Some(2.0))
        .unwrap()
        .unwrap();
    assert_eq!(scored.index, 0);
    assert_eq!(scored.distance, 2.0);
}

#[test]
fn test_tie_break_is_stable() {
    #[derive(Debug, PartialEq)]
    struct Item(&'static str);

    let candidates = [Item("A"), Item("B")];
    for _ in 0..10 {
        let best = find_best_match(&(), &candidates, |_, _| 1u32, None).unwrap();
        assert_eq!(best, Some(&Item("A")));
    }
}

#[test]
fn test_bulk_mapping_coverage() {
    let queries = [
        "apple1", "greb", "grabe", "pinaple", "xyz", "greb", "apple1", "",
    ];
    let matcher = WordMatcher::with_ratio(RatioMetric::Indel).max_diff(Some(0.5));
    let mapping = matcher.find_all(&FRUITS, &queries).unwrap();

    assert_eq!(mapping.len(), 6);
    for query in queries {
        let single = matcher.find(query, &FRUITS).unwrap().map(|w| w.to_string());
        assert_eq!(mapping[query], single, "query '{query}'");
    }
}

#[test]
fn test_bulk_mapping_parallel_agrees_with_sequential() {
    let queries: Vec<String> = (0..300).map(|i| format!("gr{}pe{}", i % 7, i)).collect();

    let sequential = WordMatcher::new()
        .parallel_threshold(usize::MAX)
        .find_all(&FRUITS, &queries)
        .unwrap();
    let parallel = WordMatcher::new()
        .parallel_threshold(1)
        .find_all(&FRUITS, &queries)
        .unwrap();

    assert_eq!(sequential.len(), 300);
    assert_eq!(sequential, parallel);
}

#[test]
fn test_empty_candidates_fail() {
    let empty: [f64; 0] = [];

    let err = find_best_match(&1.0, &empty, abs_diff, None).unwrap_err();
    assert!(matches!(err, MatchError::InvalidArgument(_)));

    let err = find_similar_word("appl", &[] as &[&str], Some(0.5)).unwrap_err();
    assert!(err.is_invalid_argument());

    let err = find_closest_numbers(&empty, &[1.0]).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_distance_errors_propagate_unmodified() {
    #[derive(Debug, PartialEq)]
    enum LookupError {
        Unknown(String),
        Match(String),
    }

    impl From<MatchError> for LookupError {
        fn from(err: MatchError) -> Self {
            LookupError::Match(err.to_string())
        }
    }

    let result = try_find_best_match(
        "apple",
        &["apple", "mango"],
        |_, candidate| {
            if **candidate == "mango" {
                Err(LookupError::Unknown(candidate.to_string()))
            } else {
                Ok(0.0)
            }
        },
        None,
    );
    assert_eq!(result, Err(LookupError::Unknown("mango".to_string())));

    let empty: [&str; 0] = [];
    let result = try_find_best_match("apple", &empty, |_, _| Ok::<f64, LookupError>(0.0), None);
    assert!(matches!(result, Err(LookupError::Match(_))));
}

#[test]
fn test_nan_distance_is_reported() {
    let err = find_best_match(&0.0, &[1.0, 2.0], |_, _| f64::NAN, None).unwrap_err();
    assert!(matches!(err, MatchError::IncomparableDistance { index: 0 }));
}

#[test]
fn test_ratios_agree_on_obvious_matches() {
    for metric in [
        RatioMetric::Sequence,
        RatioMetric::Indel,
        RatioMetric::Levenshtein,
    ] {
        let matcher = WordMatcher::with_ratio(metric);
        assert_eq!(matcher.find("grap", &FRUITS).unwrap(), Some(&"grape"), "{}", metric.name());
        assert_eq!(
            matcher.find("pineaple", &FRUITS).unwrap(),
            Some(&"pineapple"),
            "{}",
            metric.name()
        );
    }
}

#[test]
fn test_word_threshold_behaves_like_max_distance() {
    let sequence_distance = |q: &str, c: &&&str| RatioMetric::Sequence.distance(q, c);

    for max_diff in [-0.5, 0.0, 0.3, 0.4, 0.45, 1.0, f64::INFINITY] {
        let core = find_best_match("greip", &FRUITS, sequence_distance, Some(max_diff)).unwrap();
        let word = find_similar_word("greip", &FRUITS, Some(max_diff)).unwrap();
        assert_eq!(word, core, "max_diff {max_diff}");
    }

    let mapping = find_similar_words(&FRUITS, &["xyz"], Some(-0.5)).unwrap();
    assert_eq!(mapping["xyz"], None);

    let mapping = find_similar_words(&FRUITS, &["greip"], Some(f64::INFINITY)).unwrap();
    assert_eq!(mapping["greip"].as_deref(), Some("grape"));
}

#[test]
fn test_config_still_rejects_bad_max_diff() {
    use bestmatch::config::MatchConfig;

    for max_diff in [-0.5, f64::INFINITY, f64::NAN] {
        let config = MatchConfig {
            max_diff: Some(max_diff),
            ..Default::default()
        };
        assert!(WordMatcher::from_config(&config).is_err(), "max_diff {max_diff}");
    }
}
