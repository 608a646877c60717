//! Bulk mapping: run one lookup per distinct query.
//!
//! Lookups share no state, so large batches are spread over the rayon pool.
//! The result is a map, which makes the execution order unobservable.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use log::debug;
use rayon::prelude::*;

use crate::error::Result;

/// Minimum number of distinct queries before bulk mapping goes parallel.
///
/// Below this, thread pool coordination costs more than the lookups.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Apply `lookup` once per distinct key and collect the results.
///
/// Duplicate keys collapse into a single entry. The first error returned by
/// `lookup` aborts the whole mapping. A `parallel_threshold` of 0 always runs
/// on the rayon pool.
pub fn map_distinct<K, R, I, F>(keys: I, parallel_threshold: usize, lookup: F) -> Result<HashMap<K, R>>
where
    I: IntoIterator<Item = K>,
    K: Hash + Eq + Clone + Send,
    R: Send,
    F: Fn(&K) -> Result<R> + Sync,
{
    let mut seen = HashSet::new();
    let distinct: Vec<K> = keys
        .into_iter()
        .filter(|key| seen.insert(key.clone()))
        .collect();

    let parallel = distinct.len() >= parallel_threshold;
    debug!(
        "bulk mapping {} distinct queries ({})",
        distinct.len(),
        if parallel { "parallel" } else { "sequential" }
    );

    let pairs: Vec<(K, R)> = if parallel {
        distinct
            .into_par_iter()
            .map(|key| {
                let result = lookup(&key)?;
                Ok((key, result))
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        distinct
            .into_iter()
            .map(|key| {
                let result = lookup(&key)?;
                Ok((key, result))
            })
            .collect::<Result<Vec<_>>>()?
    };

    Ok(pairs.into_iter().collect())
}
