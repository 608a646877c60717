//! Linear best-match scan with stable tie-breaking.

use std::cmp::Ordering;

use crate::error::{MatchError, Result};

/// A selected candidate together with where it was found and how far it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<T, D> {
    /// Position of the candidate in the iteration order of the candidate set.
    pub index: usize,
    /// The candidate itself.
    pub candidate: T,
    /// Distance between the query and the candidate.
    pub distance: D,
}

impl<T, D> Scored<T, D> {
    /// Drop the score and keep the candidate.
    pub fn into_candidate(self) -> T {
        self.candidate
    }

    /// Map the candidate, keeping index and distance.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Scored<U, D> {
        Scored {
            index: self.index,
            candidate: f(self.candidate),
            distance: self.distance,
        }
    }
}

/// Find the closest candidate to `query`.
///
/// Every candidate is scored with `distance`; the lowest score wins and ties
/// go to the candidate that comes first. With `max_distance` set, the best
/// candidate is only returned when its distance is `<= max_distance`.
///
/// Returns `Ok(None)` when the threshold rejects the best candidate and
/// [`MatchError::InvalidArgument`] when there are no candidates at all.
///
/// ```
/// use bestmatch::matcher::find_best_match;
///
/// let numbers = [1i32, 3, 10];
/// let best = find_best_match(&2i32, &numbers, |q, c| (*q - **c).abs(), None).unwrap();
/// assert_eq!(best, Some(&1));
/// ```
pub fn find_best_match<Q, I, D, F>(
    query: &Q,
    candidates: I,
    distance: F,
    max_distance: Option<D>,
) -> Result<Option<I::Item>>
where
    Q: ?Sized,
    I: IntoIterator,
    D: PartialOrd,
    F: Fn(&Q, &I::Item) -> D,
{
    Ok(find_best_scored(query, candidates, distance, max_distance)?.map(Scored::into_candidate))
}

/// Same as [`find_best_match`] but keeps the index and distance of the winner.
pub fn find_best_scored<Q, I, D, F>(
    query: &Q,
    candidates: I,
    distance: F,
    max_distance: Option<D>,
) -> Result<Option<Scored<I::Item, D>>>
where
    Q: ?Sized,
    I: IntoIterator,
    D: PartialOrd,
    F: Fn(&Q, &I::Item) -> D,
{
    try_find_best_scored(query, candidates, |q, c| Ok(distance(q, c)), max_distance)
}

/// Best-match search with a fallible distance function.
///
/// Errors returned by `distance` reach the caller unmodified; the scan stops
/// at the first one. Matcher failures (empty candidate set, incomparable
/// distance) are converted into `E`.
pub fn try_find_best_match<Q, I, D, E, F>(
    query: &Q,
    candidates: I,
    distance: F,
    max_distance: Option<D>,
) -> std::result::Result<Option<I::Item>, E>
where
    Q: ?Sized,
    I: IntoIterator,
    D: PartialOrd,
    E: From<MatchError>,
    F: Fn(&Q, &I::Item) -> std::result::Result<D, E>,
{
    Ok(try_find_best_scored(query, candidates, distance, max_distance)?.map(Scored::into_candidate))
}

/// Fallible variant of [`find_best_scored`].
pub fn try_find_best_scored<Q, I, D, E, F>(
    query: &Q,
    candidates: I,
    distance: F,
    max_distance: Option<D>,
) -> std::result::Result<Option<Scored<I::Item, D>>, E>
where
    Q: ?Sized,
    I: IntoIterator,
    D: PartialOrd,
    E: From<MatchError>,
    F: Fn(&Q, &I::Item) -> std::result::Result<D, E>,
{
    if let Some(limit) = &max_distance
        && !is_comparable(limit)
    {
        return Err(MatchError::invalid_argument("max_distance is not comparable").into());
    }

    let best = try_scan(query, candidates, distance)?;

    match max_distance {
        Some(limit) if best.distance > limit => Ok(None),
        _ => Ok(Some(best)),
    }
}

/// Score every candidate and return the closest one, ignoring any threshold.
///
/// Used directly by adapters that have no notion of "too far".
pub fn scan<Q, I, D, F>(query: &Q, candidates: I, distance: F) -> Result<Scored<I::Item, D>>
where
    Q: ?Sized,
    I: IntoIterator,
    D: PartialOrd,
    F: Fn(&Q, &I::Item) -> D,
{
    try_scan(query, candidates, |q, c| Ok(distance(q, c)))
}

/// Fallible variant of [`scan`].
pub fn try_scan<Q, I, D, E, F>(
    query: &Q,
    candidates: I,
    distance: F,
) -> std::result::Result<Scored<I::Item, D>, E>
where
    Q: ?Sized,
    I: IntoIterator,
    D: PartialOrd,
    E: From<MatchError>,
    F: Fn(&Q, &I::Item) -> std::result::Result<D, E>,
{
    let mut best: Option<Scored<I::Item, D>> = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let score = distance(query, &candidate)?;
        if !is_comparable(&score) {
            return Err(MatchError::incomparable_distance(index).into());
        }

        // Strictly lower only: the earlier candidate keeps a tie.
        let replace = match &best {
            None => true,
            Some(current) => score.partial_cmp(&current.distance) == Some(Ordering::Less),
        };

        if replace {
            best = Some(Scored {
                index,
                candidate,
                distance: score,
            });
        }
    }

    best.ok_or_else(|| MatchError::invalid_argument("candidate set is empty").into())
}

/// NaN and friends do not compare with themselves.
fn is_comparable<D: PartialOrd>(value: &D) -> bool {
    value.partial_cmp(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abs_diff(q: &i64, c: &&i64) -> i64 {
        (*q - **c).abs()
    }

    #[test]
    fn test_picks_lowest_distance() {
        let candidates = [40, 10, 3, 100];
        let best = find_best_match(&9, &candidates, abs_diff, None).unwrap();
        assert_eq!(best, Some(&10));
    }

    #[test]
    fn test_tie_goes_to_first_candidate() {
        let candidates = ["b", "a"];
        let best = find_best_match("x", &candidates, |_, _| 1.0, None).unwrap();
        assert_eq!(best, Some(&"b"));

        let numbers = [1, 3, 10, 40, 100];
        let best = find_best_scored(&2, &numbers, abs_diff, None)
            .unwrap()
            .unwrap();
        assert_eq!(best.index, 0);
        assert_eq!(*best.candidate, 1);
        assert_eq!(best.distance, 1);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let candidates = [5, 7, 5];
        let best = find_best_scored(&5, &candidates, abs_diff, None)
            .unwrap()
            .unwrap();
        assert_eq!(best.index, 0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let candidates = [10, 20];
        assert_eq!(
            find_best_match(&12, &candidates, abs_diff, Some(2)).unwrap(),
            Some(&10)
        );
        assert_eq!(
            find_best_match(&12, &candidates, abs_diff, Some(1)).unwrap(),
            None
        );
    }

    #[test]
    fn test_threshold_only_filters() {
        let candidates = [3.0, 8.5, -1.0, 4.0];
        let distance = |q: &f64, c: &&f64| (q - **c).abs();
        let unbounded = find_best_match(&4.2, &candidates, distance, None).unwrap();

        for limit in [0.0, 0.1, 0.2, 0.5, 1.0, 10.0] {
            let bounded = find_best_match(&4.2, &candidates, distance, Some(limit)).unwrap();
            if (4.2f64 - 4.0).abs() > limit {
                assert_eq!(bounded, None, "limit {limit}");
            } else {
                assert_eq!(bounded, unbounded, "limit {limit}");
            }
        }
    }

    #[test]
    fn test_empty_candidates_is_invalid_argument() {
        let candidates: [i64; 0] = [];
        let err = find_best_match(&1, &candidates, abs_diff, None).unwrap_err();
        assert!(err.is_invalid_argument());

        // Also with a threshold: empty must not look like "nothing close enough".
        let err = find_best_match(&1, &candidates, abs_diff, Some(10)).unwrap_err();
        assert!(matches!(err, MatchError::InvalidArgument(_)));
    }

    #[test]
    fn test_nan_distance_is_reported() {
        let candidates = [1.0, f64::NAN, 3.0];
        let err = find_best_match(&2.5, &candidates, |q: &f64, c: &&f64| (q - **c).abs(), None)
            .unwrap_err();
        assert!(matches!(err, MatchError::IncomparableDistance { index: 1 }));
    }

    #[test]
    fn test_nan_threshold_is_rejected() {
        let candidates = [1.0, 2.0];
        let err = find_best_match(
            &2.5,
            &candidates,
            |q: &f64, c: &&f64| (q - **c).abs(),
            Some(f64::NAN),
        )
        .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_distance_errors_propagate_unmodified() {
        #[derive(Debug, PartialEq)]
        enum ScoreError {
            Unscorable(&'static str),
            Matcher(String),
        }

        impl From<MatchError> for ScoreError {
            fn from(err: MatchError) -> Self {
                ScoreError::Matcher(err.to_string())
            }
        }

        let candidates = ["ok", "bad", "never"];
        let result = try_find_best_match(
            "query",
            &candidates,
            |_, c| {
                if **c == "bad" {
                    Err(ScoreError::Unscorable("bad"))
                } else {
                    Ok(1.0)
                }
            },
            None,
        );
        assert_eq!(result, Err(ScoreError::Unscorable("bad")));

        let empty: [&str; 0] = [];
        let result = try_find_best_match("query", &empty, |_, _| Ok::<f64, ScoreError>(0.0), None);
        assert_eq!(
            result,
            Err(ScoreError::Matcher(
                "Invalid argument: candidate set is empty".to_string()
            ))
        );
    }

    #[test]
    fn test_owned_candidates() {
        let words = vec!["alpha".to_string(), "beta".to_string()];
        let best = find_best_match(
            "bet",
            words,
            |q: &str, c: &String| q.len().abs_diff(c.len()),
            None,
        )
        .unwrap();
        assert_eq!(best.as_deref(), Some("beta"));
    }

    #[test]
    fn test_deterministic() {
        let candidates = [7, 3, 11, 3, 9];
        let first = find_best_scored(&5, &candidates, abs_diff, None).unwrap();
        for _ in 0..10 {
            assert_eq!(find_best_scored(&5, &candidates, abs_diff, None).unwrap(), first);
        }
    }

    #[test]
    fn test_scored_map_keeps_score() {
        let scored = find_best_scored(&5, &[7, 4, 9], abs_diff, None)
            .unwrap()
            .unwrap()
            .map(|c| c.to_string());
        assert_eq!(scored.index, 1);
        assert_eq!(scored.distance, 1);
        assert_eq!(scored.into_candidate(), "4");
    }
}
