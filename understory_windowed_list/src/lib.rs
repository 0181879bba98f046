// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_windowed_list --heading-base-level=0

//! Understory Windowed List: keyed windowing for fixed-height lists.
//!
//! This crate computes which rows of a large ordered collection a host should
//! actually render, given a scroll offset and a viewport height. It is
//! renderer-agnostic: it never creates widgets or touches a display tree.
//!
//! The pieces, leaves first:
//!
//! - [`Collection`]: an ordered sequence with positional access and a stable
//!   key per item. [`KeyedVec`] and [`KeyedSlice`] adapt plain vectors and
//!   slices.
//! - [`compute_visible_window`]: a total function from scroll offset, viewport
//!   height, item height, length, and overscan to a [`VisibleWindow`]
//!   `[start, end)` that always lies inside `0..len`.
//! - [`compute_positioning`]: translates a window into a [`Positioning`]: the
//!   full content height for the spacer and the offset of the realized slice.
//! - [`WindowManager`]: owns the scroll offset, reacts to scroll, resize, and
//!   collection-change events, and publishes a [`WindowView`] plus the
//!   [`KeyDelta`] of keys entering and leaving the slice.
//!
//! Hosts are responsible for:
//!
//! - Producing the ordered collection (filtering, sorting, searching).
//! - Forwarding scroll and resize events.
//! - Drawing a spacer of [`WindowView::total_content_height`] and translating
//!   the realized items by [`WindowView::window_offset`].
//! - Reconciling widgets by key using the returned [`KeyDelta`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_windowed_list::{KeyedVec, WindowConfig, WindowManager};
//!
//! #[derive(Debug)]
//! struct Server {
//!     id: u64,
//!     name: String,
//! }
//!
//! let servers: Vec<Server> = (0..10_000)
//!     .map(|id| Server { id, name: format!("server-{id}") })
//!     .collect();
//!
//! // 48px rows in a 480px viewport, two rows of overscan on each side.
//! let config = WindowConfig::new(48.0, 480.0).with_overscan(2);
//! let mut list = WindowManager::new(KeyedVec::new(servers, |s: &Server| s.id), config).unwrap();
//!
//! let delta = list.on_scroll(4800.0);
//! assert!(!delta.entered.is_empty());
//!
//! let view = list.view();
//! assert_eq!(view.window().start, 98);
//! assert_eq!(view.window_offset(), 98.0 * 48.0);
//! for row in view.items() {
//!     // Render `row.item` keyed by `row.key`, stacked from `window_offset`.
//!     assert_eq!(row.item.name, format!("server-{}", row.key));
//! }
//! ```
//!
//! ## Offsets and clamping
//!
//! Scroll offsets are taken exactly as the host reports them. The window is
//! clamped to the collection, so negative offsets, offsets past the end, and
//! stale offsets after the collection shrinks never produce an out-of-range
//! index. Hosts that want the offset itself clamped can use
//! [`WindowManager::clamp_scroll_offset`], or pick an [`OffsetPolicy`] that is
//! applied whenever the collection changes.
//!
//! All heights must be finite and greater than zero; see [`WindowConfig`].
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod collection;
mod config;
mod error;
mod keyed;
mod manager;
mod positioning;
mod range;
mod scalar;

pub use collection::{Collection, KeyedSlice, KeyedVec};
pub use config::{OffsetPolicy, WindowConfig};
pub use error::{ConfigIssue, WindowError};
pub use keyed::{KeyDelta, key_delta};
pub use manager::{RecomputeState, ScrollAlign, VisibleItem, WindowManager, WindowView};
pub use positioning::{Positioning, compute_positioning};
pub use range::{
    DEFAULT_OVERSCAN, VisibleWindow, compute_visible_window, index_at_offset, visible_rows,
};
pub use scalar::Scalar;
