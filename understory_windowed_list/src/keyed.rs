// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable-key join between consecutive visible slices.
//!
//! Hosts reconcile their widgets by key, not by position: a row that scrolls
//! from slot 3 to slot 2 of the slice should keep its widget. [`key_delta`]
//! reports which keys entered and which left, so the host only creates and
//! destroys what actually changed.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

/// Keys that entered and exited a visible slice between two recomputations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyDelta<K> {
    /// Keys present now but not before, in slice order.
    pub entered: Vec<K>,
    /// Keys present before but not now, in their previous slice order.
    pub exited: Vec<K>,
}

impl<K> KeyDelta<K> {
    /// A delta with no changes.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            entered: Vec::new(),
            exited: Vec::new(),
        }
    }

    /// Returns `true` if no keys entered or exited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

impl<K> Default for KeyDelta<K> {
    fn default() -> Self {
        Self::none()
    }
}

/// Joins `previous` and `next` by key.
///
/// Both slices are expected to hold unique keys.
///
/// ```rust
/// use understory_windowed_list::key_delta;
///
/// let delta = key_delta(&["a", "b", "c"], &["b", "c", "d"]);
/// assert_eq!(delta.entered, ["d"]);
/// assert_eq!(delta.exited, ["a"]);
/// ```
#[must_use]
pub fn key_delta<K: Clone + Eq + Hash>(previous: &[K], next: &[K]) -> KeyDelta<K> {
    if previous == next {
        return KeyDelta::none();
    }
    let before: HashSet<&K> = previous.iter().collect();
    let after: HashSet<&K> = next.iter().collect();
    KeyDelta {
        entered: next
            .iter()
            .filter(|k| !before.contains(k))
            .cloned()
            .collect(),
        exited: previous
            .iter()
            .filter(|k| !after.contains(k))
            .cloned()
            .collect(),
    }
}
