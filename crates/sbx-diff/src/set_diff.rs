//! Keyed set diff: compare two relationship collections by a key function.
//!
//! Members are matched purely by key. Two members with the same key but
//! different non-key attributes are considered unchanged, so the choice of
//! key decides what counts as a change (an alias keyed by its text never
//! reports a reorder, a scene performer keyed by id and credited name does
//! report a new credit).

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Members added to and removed from a collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDiff<T> {
    pub added: Vec<T>,
    pub removed: Vec<T>,
}

impl<T> Default for SetDiff<T> {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
        }
    }
}

impl<T> SetDiff<T> {
    /// Create an empty set diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing was added or removed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Total number of added and removed members.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len()
    }

    /// A single member swapped for another.
    pub fn is_replacement(&self) -> bool {
        self.added.len() == 1 && self.removed.len() == 1
    }

    /// Split into `(added, removed)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.added, self.removed)
    }
}

/// Compute the members of `new` missing from `old` (added) and the members
/// of `old` missing from `new` (removed), matching by `key`.
///
/// Input order is preserved in both halves. Runs in `O(n + m)`.
pub fn diff_keyed<T, K, F>(old: &[T], new: &[T], key: F) -> SetDiff<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let old_keys: HashSet<K> = old.iter().map(&key).collect();
    let new_keys: HashSet<K> = new.iter().map(&key).collect();

    let removed = old
        .iter()
        .filter(|item| !new_keys.contains(&key(*item)))
        .cloned()
        .collect();
    let added = new
        .iter()
        .filter(|item| !old_keys.contains(&key(*item)))
        .cloned()
        .collect();

    SetDiff { added, removed }
}
