// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collection adapters: ordered, keyed item sequences.
//!
//! A [`Collection`] exposes exactly what the windowing core needs from the
//! host's data: a length, positional access, and a stable key per item. It
//! performs no filtering or sorting; whatever upstream pipeline produced the
//! ordered sequence owns that.
//!
//! Two adapters are provided:
//!
//! - [`KeyedVec`]: owns its items. Handing one to
//!   [`WindowManager::on_collection_changed`](crate::WindowManager::on_collection_changed)
//!   gives the core an immutable snapshot for as long as it is installed.
//! - [`KeyedSlice`]: borrows items from the host for a single render pass.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::WindowError;

/// An ordered sequence of items with stable per-item keys.
///
/// Implementations must keep indices stable for as long as the core holds
/// them, and `key_of` must be a pure function of the item's identity rather
/// than its position.
pub trait Collection {
    /// Item type.
    type Item;

    /// Stable identity of an item.
    type Key: Clone + Eq + Hash;

    /// Number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the collection has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the item at `index`, or `None` outside `0..len`.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns the key for `item`.
    fn key_of(&self, item: &Self::Item) -> Self::Key;

    /// Returns the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::IndexOutOfRange`] when `index >= len`.
    fn at(&self, index: usize) -> Result<&Self::Item, WindowError> {
        self.get(index).ok_or(WindowError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Returns the key of the item at `index`, if any.
    fn key_at(&self, index: usize) -> Option<Self::Key> {
        self.get(index).map(|item| self.key_of(item))
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;
    type Key = C::Key;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&Self::Item> {
        (**self).get(index)
    }

    fn key_of(&self, item: &Self::Item) -> Self::Key {
        (**self).key_of(item)
    }
}

/// Returns the index of the first item whose key repeats an earlier one.
fn first_duplicate<T, K, F>(items: &[T], key_fn: &F) -> Option<usize>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().position(|item| !seen.insert(key_fn(item)))
}

/// An owned, keyed snapshot of items.
///
/// ```rust
/// use understory_windowed_list::{Collection, KeyedVec};
///
/// let servers = KeyedVec::new(vec![(41_u32, "alpha"), (17, "beta")], |s: &(u32, &str)| s.0);
/// assert_eq!(servers.len(), 2);
/// assert_eq!(servers.key_at(1), Some(17));
/// assert!(servers.at(2).is_err());
/// ```
#[derive(Clone)]
pub struct KeyedVec<T, F> {
    items: Vec<T>,
    key_fn: F,
}

impl<T, K, F> KeyedVec<T, F>
where
    F: Fn(&T) -> K,
    K: Clone + Eq + Hash,
{
    /// Wraps `items`, deriving keys with `key_fn`.
    ///
    /// Keys are assumed unique; use [`KeyedVec::try_new`] to check.
    #[must_use]
    pub fn new(items: Vec<T>, key_fn: F) -> Self {
        Self { items, key_fn }
    }

    /// Wraps `items`, rejecting them if two items share a key.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::DuplicateKey`] naming the second occurrence.
    pub fn try_new(items: Vec<T>, key_fn: F) -> Result<Self, WindowError> {
        match first_duplicate(&items, &key_fn) {
            Some(index) => Err(WindowError::DuplicateKey { index }),
            None => Ok(Self { items, key_fn }),
        }
    }

    /// Returns the wrapped items in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Unwraps the adapter, returning the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T, K, F> Collection for KeyedVec<T, F>
where
    F: Fn(&T) -> K,
    K: Clone + Eq + Hash,
{
    type Item = T;
    type Key = K;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn key_of(&self, item: &T) -> K {
        (self.key_fn)(item)
    }
}

impl<T, F> fmt::Debug for KeyedVec<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedVec")
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}

/// A borrowed, keyed view over a slice of items.
#[derive(Clone, Copy)]
pub struct KeyedSlice<'a, T, F> {
    items: &'a [T],
    key_fn: F,
}

impl<'a, T, K, F> KeyedSlice<'a, T, F>
where
    F: Fn(&T) -> K,
    K: Clone + Eq + Hash,
{
    /// Borrows `items`, deriving keys with `key_fn`.
    #[must_use]
    pub fn new(items: &'a [T], key_fn: F) -> Self {
        Self { items, key_fn }
    }

    /// Borrows `items`, rejecting them if two items share a key.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::DuplicateKey`] naming the second occurrence.
    pub fn try_new(items: &'a [T], key_fn: F) -> Result<Self, WindowError> {
        match first_duplicate(items, &key_fn) {
            Some(index) => Err(WindowError::DuplicateKey { index }),
            None => Ok(Self { items, key_fn }),
        }
    }

    /// Returns the borrowed items.
    #[must_use]
    pub fn items(&self) -> &'a [T] {
        self.items
    }
}

impl<T, K, F> Collection for KeyedSlice<'_, T, F>
where
    F: Fn(&T) -> K,
    K: Clone + Eq + Hash,
{
    type Item = T;
    type Key = K;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn key_of(&self, item: &T) -> K {
        (self.key_fn)(item)
    }
}

impl<T, F> fmt::Debug for KeyedSlice<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedSlice")
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}
