//! Latest-version resolution.
//!
//! Given the candidates that passed every non-version predicate, keep exactly
//! one entry per key: the one with the highest version. Runs before sorting
//! and paging so pages are cut from the deduplicated set.

use crate::definition::ProcessDefinition;
use hashbrown::HashMap;

/// Something identified by a logical key and a version within that key.
pub trait Versioned {
    fn version_key(&self) -> &str;
    fn version(&self) -> i32;
}

impl Versioned for ProcessDefinition {
    fn version_key(&self) -> &str {
        &self.key
    }

    fn version(&self) -> i32 {
        self.version
    }
}

/// Keeps the maximum-version entry of every key, preserving input order.
pub fn latest_versions<T: Versioned>(candidates: Vec<T>) -> Vec<T> {
    let mut max_by_key: HashMap<&str, i32> = HashMap::with_capacity(candidates.len());
    for candidate in &candidates {
        let max = max_by_key.entry(candidate.version_key()).or_insert(i32::MIN);
        *max = (*max).max(candidate.version());
    }
    let keep: Vec<bool> = candidates
        .iter()
        .map(|c| max_by_key.get(c.version_key()) == Some(&c.version()))
        .collect();
    drop(max_by_key);

    candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(candidate, keep)| keep.then_some(candidate))
        .collect()
}
