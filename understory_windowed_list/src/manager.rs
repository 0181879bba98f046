// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render window manager: scroll state plus the published window.

use alloc::vec::Vec;
use core::fmt;

use crate::config::{check_item_height, check_viewport_height};
use crate::range::{compute_visible_window, index_at_offset, visible_rows};
use crate::{
    Collection, KeyDelta, OffsetPolicy, Positioning, Scalar, VisibleWindow, WindowConfig,
    WindowError, compute_positioning, key_delta,
};

/// Recomputation phase of a [`WindowManager`].
///
/// Recomputation runs to completion inside the event call that triggered it,
/// so callers always observe [`RecomputeState::Idle`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RecomputeState {
    /// No recomputation in progress.
    #[default]
    Idle,
    /// A window is being derived from the current inputs.
    Recomputing,
}

/// Where to place a row when scrolling it into view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the row's top edge with the viewport's top edge.
    Start,
    /// Align the row's bottom edge with the viewport's bottom edge.
    End,
    /// Center the row in the viewport.
    Center,
    /// Scroll the minimum distance needed to show the whole row.
    #[default]
    Nearest,
}

/// Owns the scroll offset of a fixed-height list and publishes its window.
///
/// Every input event recomputes the window synchronously:
///
/// 1. the range is derived with [`compute_visible_window`],
/// 2. it is translated to pixels with [`compute_positioning`],
/// 3. the keys of the realized items are collected from the [`Collection`],
/// 4. the [`KeyDelta`] against the previous slice is returned to the caller.
///
/// The cost is proportional to the realized window, not to the collection, so
/// it is fine to call on every scroll event. Each event fully replaces the
/// published state; there is no queue.
///
/// The manager treats its collection as an immutable snapshot. To change the
/// data, hand a new collection to [`WindowManager::on_collection_changed`].
///
/// ```rust
/// use understory_windowed_list::{KeyedVec, WindowConfig, WindowManager};
///
/// let rows: Vec<u32> = (0..1000).collect();
/// let collection = KeyedVec::new(rows, |id: &u32| *id);
/// let mut list = WindowManager::new(collection, WindowConfig::new(120.0, 600.0)).unwrap();
///
/// let delta = list.on_scroll(6000.0);
/// assert_eq!(delta.entered.first(), Some(&49));
///
/// let view = list.view();
/// assert_eq!(view.window_offset(), 5880.0);
/// assert_eq!(view.total_content_height(), 120_000.0);
/// let ids: Vec<u32> = view.items().map(|row| *row.item).collect();
/// assert_eq!(ids, (49..56).collect::<Vec<_>>());
/// ```
pub struct WindowManager<C: Collection, S: Scalar = f64> {
    collection: C,
    item_height: S,
    viewport_height: S,
    overscan: usize,
    offset_policy: OffsetPolicy,
    scroll_offset: S,
    state: RecomputeState,
    window: VisibleWindow,
    positioning: Positioning<S>,
    visible_keys: Vec<C::Key>,
    revision: u64,
}

impl<C: Collection, S: Scalar> WindowManager<C, S> {
    /// Creates a manager scrolled to the top and publishes its first window.
    ///
    /// No [`KeyDelta`] is returned for that window: all of its keys entered,
    /// and they are available from [`WindowManager::visible_keys`].
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidConfiguration`] if either height in
    /// `config` is unusable. The instance is not created in that case.
    pub fn new(collection: C, config: WindowConfig<S>) -> Result<Self, WindowError> {
        config.validate()?;
        let mut manager = Self {
            collection,
            item_height: config.item_height,
            viewport_height: config.initial_viewport_height,
            overscan: config.overscan_count,
            offset_policy: config.offset_policy,
            scroll_offset: S::zero(),
            state: RecomputeState::Idle,
            window: VisibleWindow::EMPTY,
            positioning: Positioning::empty(),
            visible_keys: Vec::new(),
            revision: 0,
        };
        // Every key in the first slice is new; hosts read it from `visible_keys`.
        let _ = manager.recompute();
        Ok(manager)
    }

    /// Handles a scroll event.
    ///
    /// The offset is taken as-is; clamping is up to the host (see
    /// [`WindowManager::clamp_scroll_offset`]). Out-of-range offsets still
    /// produce a window inside `0..len`.
    pub fn on_scroll(&mut self, scroll_offset: S) -> KeyDelta<C::Key> {
        self.scroll_offset = scroll_offset;
        self.recompute()
    }

    /// Handles a viewport resize.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidConfiguration`] and keeps the previous
    /// height if `viewport_height` is zero, negative, or not finite.
    pub fn on_viewport_resize(
        &mut self,
        viewport_height: S,
    ) -> Result<KeyDelta<C::Key>, WindowError> {
        if let Err(issue) = check_viewport_height(viewport_height) {
            log::warn!("ignoring viewport resize to {viewport_height:?}: {issue}");
            return Err(issue.into());
        }
        self.viewport_height = viewport_height;
        Ok(self.recompute())
    }

    /// Changes the row height.
    ///
    /// The scroll offset is kept in pixels, so the realized rows shift.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidConfiguration`] and keeps the previous
    /// height if `item_height` is zero, negative, or not finite.
    pub fn set_item_height(
        &mut self,
        item_height: S,
    ) -> Result<KeyDelta<C::Key>, WindowError> {
        if let Err(issue) = check_item_height(item_height) {
            log::warn!("ignoring item height change to {item_height:?}: {issue}");
            return Err(issue.into());
        }
        self.item_height = item_height;
        Ok(self.recompute())
    }

    /// Changes the overscan count.
    pub fn set_overscan(&mut self, overscan: usize) -> KeyDelta<C::Key> {
        self.overscan = overscan;
        self.recompute()
    }

    /// Changes how the offset is treated on later collection changes.
    pub fn set_offset_policy(&mut self, offset_policy: OffsetPolicy) {
        self.offset_policy = offset_policy;
    }

    /// Installs a new collection snapshot, returning the previous one.
    ///
    /// The last known scroll offset is reused according to the configured
    /// [`OffsetPolicy`], then the window is recomputed against the new length.
    pub fn replace_collection(&mut self, collection: C) -> (C, KeyDelta<C::Key>) {
        let previous = core::mem::replace(&mut self.collection, collection);
        let before = self.scroll_offset;
        self.scroll_offset = match self.offset_policy {
            OffsetPolicy::Preserve => before,
            OffsetPolicy::ClampToEnd => self.clamp_scroll_offset(before),
            OffsetPolicy::Reset => S::zero(),
        };
        log::debug!(
            "collection changed: len {} -> {}, offset {before:?} -> {:?} ({:?})",
            previous.len(),
            self.collection.len(),
            self.scroll_offset,
            self.offset_policy,
        );
        let delta = self.recompute();
        (previous, delta)
    }

    /// Installs a new collection snapshot.
    ///
    /// See [`WindowManager::replace_collection`].
    pub fn on_collection_changed(&mut self, collection: C) -> KeyDelta<C::Key> {
        self.replace_collection(collection).1
    }

    /// Scrolls so that `index` is placed according to `align`.
    ///
    /// Indices past the end target the last row. The resulting offset is
    /// clamped to the scrollable range.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) -> KeyDelta<C::Key> {
        let offset = self.scroll_offset_for_index(index, align);
        self.on_scroll(offset)
    }

    /// Returns the clamped scroll offset that would place `index` per `align`.
    ///
    /// Returns zero for an empty collection.
    #[must_use]
    pub fn scroll_offset_for_index(&self, index: usize, align: ScrollAlign) -> S {
        let len = self.collection.len();
        if len == 0 {
            return S::zero();
        }
        let index = index.min(len - 1);
        let top = S::from_usize(index) * self.item_height;
        let bottom = top + self.item_height;
        let target = match align {
            ScrollAlign::Start => top,
            ScrollAlign::End => bottom - self.viewport_height,
            ScrollAlign::Center => top + self.item_height.half() - self.viewport_height.half(),
            ScrollAlign::Nearest => {
                let current = self.clamp_scroll_offset(self.scroll_offset);
                if top < current {
                    top
                } else if bottom > current + self.viewport_height {
                    bottom - self.viewport_height
                } else {
                    current
                }
            }
        };
        self.clamp_scroll_offset(target)
    }

    /// Largest offset that still keeps the viewport inside the content.
    #[must_use]
    pub fn max_scroll_offset(&self) -> S {
        let content = S::from_usize(self.collection.len()) * self.item_height;
        (content - self.viewport_height).max(S::zero())
    }

    /// Clamps `offset` into `[0, max_scroll_offset]`. NaN maps to zero.
    #[must_use]
    pub fn clamp_scroll_offset(&self, offset: S) -> S {
        offset.max(S::zero()).min(self.max_scroll_offset())
    }

    /// Rows intersecting the viewport, without overscan.
    #[must_use]
    pub fn visible_rows(&self) -> VisibleWindow {
        visible_rows(
            self.scroll_offset,
            self.viewport_height,
            self.item_height,
            self.collection.len(),
        )
    }

    /// Returns `true` if any part of row `index` is inside the viewport.
    #[must_use]
    pub fn is_index_visible(&self, index: usize) -> bool {
        self.visible_rows().contains(index)
    }

    /// Row under a content-space offset.
    #[must_use]
    pub fn index_at_offset(&self, offset: S) -> Option<usize> {
        index_at_offset(offset, self.item_height, self.collection.len())
    }

    /// Row under a point `y` pixels below the viewport's top edge.
    #[must_use]
    pub fn index_at_viewport_y(&self, y: S) -> Option<usize> {
        self.index_at_offset(self.scroll_offset + y)
    }

    /// The currently published window, ready for rendering.
    #[must_use]
    pub fn view(&self) -> WindowView<'_, C, S> {
        WindowView {
            collection: &self.collection,
            window: self.window,
            positioning: self.positioning,
            keys: &self.visible_keys,
        }
    }

    /// The installed collection.
    #[must_use]
    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Consumes the manager, returning its collection.
    #[must_use]
    pub fn into_collection(self) -> C {
        self.collection
    }

    /// Number of items in the installed collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Returns `true` if the installed collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Last scroll offset received, exactly as given.
    #[must_use]
    pub fn scroll_offset(&self) -> S {
        self.scroll_offset
    }

    /// Current viewport height.
    #[must_use]
    pub fn viewport_height(&self) -> S {
        self.viewport_height
    }

    /// Current row height.
    #[must_use]
    pub fn item_height(&self) -> S {
        self.item_height
    }

    /// Current overscan count.
    #[must_use]
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Offset policy applied on collection changes.
    #[must_use]
    pub fn offset_policy(&self) -> OffsetPolicy {
        self.offset_policy
    }

    /// Current recomputation phase.
    #[must_use]
    pub fn state(&self) -> RecomputeState {
        self.state
    }

    /// Published window.
    #[must_use]
    pub fn window(&self) -> VisibleWindow {
        self.window
    }

    /// Published positioning.
    #[must_use]
    pub fn positioning(&self) -> Positioning<S> {
        self.positioning
    }

    /// Keys of the published slice, in slice order.
    #[must_use]
    pub fn visible_keys(&self) -> &[C::Key] {
        &self.visible_keys
    }

    /// Counter bumped whenever the published window, positioning, or keys change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn recompute(&mut self) -> KeyDelta<C::Key> {
        debug_assert_eq!(self.state, RecomputeState::Idle, "recompute is not re-entrant");
        self.state = RecomputeState::Recomputing;

        let len = self.collection.len();
        let window = compute_visible_window(
            self.scroll_offset,
            self.viewport_height,
            self.item_height,
            len,
            self.overscan,
        );
        let positioning = compute_positioning(window, self.item_height, len);
        let keys: Vec<C::Key> = window
            .as_range()
            .filter_map(|index| self.collection.key_at(index))
            .collect();
        debug_assert_eq!(keys.len(), window.len(), "window must stay inside the collection");

        let delta = key_delta(&self.visible_keys, &keys);
        let changed = window != self.window
            || positioning != self.positioning
            || keys != self.visible_keys;
        if changed {
            self.window = window;
            self.positioning = positioning;
            self.visible_keys = keys;
            self.revision += 1;
            log::trace!(
                "window {}..{} of {len} at offset {:?} (content {:?}, revision {})",
                window.start,
                window.end,
                self.scroll_offset,
                positioning.total_content_height,
                self.revision,
            );
        }

        self.state = RecomputeState::Idle;
        delta
    }
}

impl<C: Collection, S: Scalar> fmt::Debug for WindowManager<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowManager")
            .field("len", &self.collection.len())
            .field("item_height", &self.item_height)
            .field("viewport_height", &self.viewport_height)
            .field("overscan", &self.overscan)
            .field("offset_policy", &self.offset_policy)
            .field("scroll_offset", &self.scroll_offset)
            .field("state", &self.state)
            .field("window", &self.window)
            .field("positioning", &self.positioning)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

/// A realized item inside a [`WindowView`].
#[derive(Debug)]
pub struct VisibleItem<'a, T, K> {
    /// Position of the item in the collection.
    pub index: usize,
    /// Stable key of the item.
    pub key: &'a K,
    /// The item itself.
    pub item: &'a T,
}

impl<T, K> Clone for VisibleItem<'_, T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K> Copy for VisibleItem<'_, T, K> {}

/// Read-only view of the published window.
///
/// Hosts draw a spacer of [`WindowView::total_content_height`], translate the
/// realized slice by [`WindowView::window_offset`], and render
/// [`WindowView::items`] in order, reconciling widgets by key.
pub struct WindowView<'a, C: Collection, S> {
    collection: &'a C,
    window: VisibleWindow,
    positioning: Positioning<S>,
    keys: &'a [C::Key],
}

impl<'a, C: Collection, S: Scalar> WindowView<'a, C, S> {
    /// Realized index range.
    #[must_use]
    pub fn window(&self) -> VisibleWindow {
        self.window
    }

    /// Pixel offset of the first realized item.
    #[must_use]
    pub fn window_offset(&self) -> S {
        self.positioning.window_offset
    }

    /// Height of the whole collection.
    #[must_use]
    pub fn total_content_height(&self) -> S {
        self.positioning.total_content_height
    }

    /// Full positioning record.
    #[must_use]
    pub fn positioning(&self) -> Positioning<S> {
        self.positioning
    }

    /// Number of realized items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if nothing is realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys of the realized items, in order.
    #[must_use]
    pub fn keys(&self) -> &'a [C::Key] {
        self.keys
    }

    /// Realized items, in order, tagged with index and key.
    pub fn items(&self) -> impl Iterator<Item = VisibleItem<'a, C::Item, C::Key>> + 'a {
        let collection = self.collection;
        self.window
            .as_range()
            .zip(self.keys)
            .filter_map(move |(index, key)| {
                collection
                    .get(index)
                    .map(|item| VisibleItem { index, key, item })
            })
    }
}

impl<C: Collection, S: Scalar> fmt::Debug for WindowView<'_, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowView")
            .field("window", &self.window)
            .field("positioning", &self.positioning)
            .finish_non_exhaustive()
    }
}
