//! Draft text that could not be placed into the form, plus the
//! order-preserving dedup used when seeding collections.

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// One piece of leftover draft text, labelled with the field it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedField {
    pub field: String,
    pub value: String,
}

/// Leftover draft text for a reviewer to handle by hand, in the order the
/// fields were examined.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnmatchedFields {
    entries: Vec<UnmatchedField>,
}

impl UnmatchedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under `field`. Blank values are skipped and a repeated
    /// field replaces the earlier value.
    pub fn insert(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|e| e.field == field) {
            Some(entry) => entry.value = value,
            None => self.entries.push(UnmatchedField {
                field: field.to_string(),
                value,
            }),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnmatchedField> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// `incoming` followed by `existing`, keeping only the first member seen
/// for each key, so incoming members win.
pub fn prepend_unique<T, K, F>(incoming: &[T], existing: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    incoming
        .iter()
        .chain(existing)
        .filter(|item| seen.insert(key(*item)))
        .cloned()
        .collect()
}
