// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible range calculation for fixed-height rows.
//!
//! [`compute_visible_window`] maps a scroll offset and viewport height onto the
//! half-open index range `[start, end)` that should be realized, widened by an
//! overscan count on each side and clamped to `0..len`.
//!
//! The functions here are total. Offsets are not assumed to be clamped by the
//! host: negative offsets, offsets past the end of the content, and even NaN
//! all produce a window satisfying `start <= end <= len`.

use core::ops::Range;

use crate::Scalar;

/// Default number of extra rows realized on each side of the viewport.
pub const DEFAULT_OVERSCAN: usize = 1;

/// A half-open range of realized indices, `start..end`.
///
/// Windows produced by this crate satisfy `start <= end <= len` for the
/// collection they were computed against. The fields are public, so a
/// hand-built window may be inverted; it then behaves as empty.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    /// First realized index (inclusive).
    pub start: usize,
    /// One past the last realized index (exclusive).
    pub end: usize,
}

impl VisibleWindow {
    /// An empty window at index zero.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Number of realized indices.
    ///
    /// An inverted window (`start > end`) has length zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if no indices are realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if `index` lies in `start..end`.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Returns the window as a `Range<usize>`.
    #[must_use]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<VisibleWindow> for Range<usize> {
    fn from(window: VisibleWindow) -> Self {
        window.as_range()
    }
}

fn clamp_index(value: isize, len: usize) -> usize {
    usize::try_from(value).map_or(0, |v| v.min(len))
}

/// Row whose span contains `offset`: `floor(offset / item_height)`.
///
/// With fractional heights the quotient can round across a row boundary, so
/// the result is checked against the row's edges (`r * item_height`, the same
/// products used for positioning) and stepped by one where they disagree.
fn row_containing<S: Scalar>(offset: S, item_height: S) -> isize {
    let row = (offset / item_height).floor_to_isize();
    let Ok(r) = usize::try_from(row) else {
        return row;
    };
    if r > 0 && S::from_usize(r) * item_height > offset {
        row - 1
    } else if S::from_usize(r.saturating_add(1)) * item_height <= offset {
        row.saturating_add(1)
    } else {
        row
    }
}

/// First row whose top edge is at or after `offset`: `ceil(offset / item_height)`.
///
/// Corrected against the row edges the same way as [`row_containing`].
fn first_row_from<S: Scalar>(offset: S, item_height: S) -> isize {
    let row = (offset / item_height).ceil_to_isize();
    let Ok(r) = usize::try_from(row) else {
        return row;
    };
    if S::from_usize(r) * item_height < offset {
        row.saturating_add(1)
    } else if r > 0 && S::from_usize(r - 1) * item_height >= offset {
        row - 1
    } else {
        row
    }
}

/// Returns the rows whose pixel span intersects the viewport, without overscan.
///
/// Row `i` spans `[i * item_height, (i + 1) * item_height)`. The result is
/// clamped to `0..len`.
///
/// `item_height` must be positive; non-positive or non-finite heights yield an
/// empty window rather than a panic.
#[must_use]
pub fn visible_rows<S: Scalar>(
    scroll_offset: S,
    viewport_height: S,
    item_height: S,
    len: usize,
) -> VisibleWindow {
    compute_visible_window(scroll_offset, viewport_height, item_height, len, 0)
}

/// Computes the realized window for a fixed-height list.
///
/// ```text
/// raw_start = floor(scroll_offset / item_height)
/// raw_end   = ceil((scroll_offset + viewport_height) / item_height)
/// (both corrected by one row where the quotient rounds past a row edge)
/// start     = clamp(raw_start - overscan, 0, len)
/// end       = max(clamp(raw_end + overscan, 0, len), start)
/// ```
///
/// ```rust
/// use understory_windowed_list::{VisibleWindow, compute_visible_window};
///
/// // 1000 rows of 120px, a 600px viewport scrolled to the top of row 50.
/// let window = compute_visible_window(6000.0_f64, 600.0, 120.0, 1000, 1);
/// assert_eq!(window, VisibleWindow { start: 49, end: 56 });
/// ```
#[must_use]
pub fn compute_visible_window<S: Scalar>(
    scroll_offset: S,
    viewport_height: S,
    item_height: S,
    len: usize,
    overscan: usize,
) -> VisibleWindow {
    if len == 0 || !item_height.is_positive_finite() {
        return VisibleWindow::EMPTY;
    }

    let raw_start = row_containing(scroll_offset, item_height);
    let raw_end = first_row_from(scroll_offset + viewport_height, item_height);

    let overscan = isize::try_from(overscan).unwrap_or(isize::MAX);
    let start = clamp_index(raw_start.saturating_sub(overscan), len);
    let end = clamp_index(raw_end.saturating_add(overscan), len).max(start);

    VisibleWindow { start, end }
}

/// Returns the index of the row under `offset`, if any.
///
/// `offset` is measured from the top of the content. Returns `None` for
/// offsets before the first row, at or past the end of the last row, or when
/// `item_height` is unusable.
#[must_use]
pub fn index_at_offset<S: Scalar>(offset: S, item_height: S, len: usize) -> Option<usize> {
    if !item_height.is_positive_finite() || !offset.is_finite() || offset < S::zero() {
        return None;
    }
    let index = usize::try_from(row_containing(offset, item_height)).ok()?;
    (index < len).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::{VisibleWindow, compute_visible_window, index_at_offset, visible_rows};

    #[test]
    fn top_of_list_realizes_viewport_plus_trailing_overscan() {
        let window = compute_visible_window(0.0_f64, 600.0, 120.0, 1000, 1);
        assert_eq!(window, VisibleWindow { start: 0, end: 6 });
    }

    #[test]
    fn partial_rows_are_included_on_both_edges() {
        // Viewport 50..250 touches rows 2 (40..60) through 12 (240..260).
        let window = visible_rows(50.0_f32, 200.0, 20.0, 100);
        assert_eq!(window, VisibleWindow { start: 2, end: 13 });
    }

    #[test]
    fn empty_collection_yields_empty_window() {
        let window = compute_visible_window(300.0_f64, 600.0, 120.0, 0, 3);
        assert_eq!(window, VisibleWindow::EMPTY);
        assert!(window.is_empty());
    }

    #[test]
    fn negative_offset_clamps_start_to_zero() {
        let window = compute_visible_window(-500.0_f64, 600.0, 120.0, 1000, 1);
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 2);
    }

    #[test]
    fn offset_far_past_the_end_collapses_at_len() {
        let window = compute_visible_window(6000.0_f64, 600.0, 120.0, 10, 1);
        assert_eq!(window, VisibleWindow { start: 10, end: 10 });
    }

    #[test]
    fn non_finite_inputs_stay_in_bounds() {
        for offset in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let window = compute_visible_window(offset, 600.0, 120.0, 50, 2);
            assert!(window.start <= window.end && window.end <= 50, "{window:?}");
        }
        let window = compute_visible_window(0.0_f64, f64::INFINITY, 120.0, 50, 0);
        assert_eq!(window, VisibleWindow { start: 0, end: 50 });
        let window = compute_visible_window(0.0_f64, 600.0, 0.0, 50, 0);
        assert_eq!(window, VisibleWindow::EMPTY);
    }

    #[test]
    fn huge_overscan_saturates() {
        let window = compute_visible_window(6000.0_f64, 600.0, 120.0, 1000, usize::MAX);
        assert_eq!(window, VisibleWindow { start: 0, end: 1000 });
    }

    #[test]
    fn index_at_offset_hits_rows() {
        assert_eq!(index_at_offset(0.0_f64, 120.0, 3), Some(0));
        assert_eq!(index_at_offset(239.9_f64, 120.0, 3), Some(1));
        assert_eq!(index_at_offset(360.0_f64, 120.0, 3), None);
        assert_eq!(index_at_offset(-1.0_f64, 120.0, 3), None);
        assert_eq!(index_at_offset(f64::NAN, 120.0, 3), None);
    }

    #[test]
    fn fractional_heights_do_not_drop_boundary_rows() {
        // 1.7 / 0.1 rounds to 17.0, but row 16 ends at 17.0 * 0.1 > 1.7.
        let rows = visible_rows(1.7_f64, 5.0, 0.1, 10_000);
        assert_eq!(rows.start, 16);
        assert!(rows.contains(16));
        assert_eq!(index_at_offset(1.7_f64, 0.1, 10_000), Some(16));

        for step in 1..2_000_u32 {
            let offset = f64::from(step) * 0.01;
            let rows = visible_rows(offset, 3.0, 0.1, 10_000);
            let top = f64::from(u32::try_from(rows.start).unwrap()) * 0.1;
            let bottom = f64::from(u32::try_from(rows.start + 1).unwrap()) * 0.1;
            assert!(top <= offset && bottom > offset, "offset {offset}: {rows:?}");
        }
    }

    #[test]
    fn inverted_window_is_empty_not_a_panic() {
        let window = VisibleWindow { start: 5, end: 3 };
        assert_eq!(window.len(), 0);
        assert!(window.is_empty());
        assert!(!window.contains(4));
        assert_eq!(window.as_range().count(), 0);
    }

    #[test]
    fn window_helpers() {
        let window = VisibleWindow { start: 4, end: 9 };
        assert_eq!(window.len(), 5);
        assert!(window.contains(4));
        assert!(!window.contains(9));
        let range: core::ops::Range<usize> = window.into();
        assert_eq!(range, 4..9);
    }
}
