// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation from index windows to pixel positions.

use crate::{Scalar, VisibleWindow};

/// Pixel placement of a realized window inside the full content.
///
/// Hosts size a spacer to `total_content_height` so the native scrollbar
/// reflects the whole collection, then translate the realized slice by
/// `window_offset` as a single block. Items inside the slice are laid out in
/// order, one `item_height` apart.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Positioning<S> {
    /// Height of the whole collection: `len * item_height`.
    pub total_content_height: S,
    /// Offset of the first realized item: `start * item_height`.
    pub window_offset: S,
}

impl<S: Scalar> Positioning<S> {
    /// Positioning for an empty collection.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_content_height: S::zero(),
            window_offset: S::zero(),
        }
    }

    /// Space between the end of the realized slice and the end of the content.
    ///
    /// `window_len` is the number of realized items.
    #[must_use]
    pub fn trailing_space(&self, window_len: usize, item_height: S) -> S {
        let slice_end = self.window_offset + S::from_usize(window_len) * item_height;
        (self.total_content_height - slice_end).max(S::zero())
    }
}

/// Computes where a window sits inside content of `len` rows.
///
/// ```rust
/// use understory_windowed_list::{VisibleWindow, compute_positioning};
///
/// let window = VisibleWindow { start: 49, end: 56 };
/// let pos = compute_positioning(window, 120.0_f64, 1000);
/// assert_eq!(pos.total_content_height, 120_000.0);
/// assert_eq!(pos.window_offset, 5_880.0);
/// ```
#[must_use]
pub fn compute_positioning<S: Scalar>(
    window: VisibleWindow,
    item_height: S,
    len: usize,
) -> Positioning<S> {
    Positioning {
        total_content_height: S::from_usize(len) * item_height,
        window_offset: S::from_usize(window.start) * item_height,
    }
}

#[cfg(test)]
mod tests {
    use super::{Positioning, compute_positioning};
    use crate::{VisibleWindow, compute_visible_window};

    #[test]
    fn content_smaller_than_viewport() {
        let window = compute_visible_window(0.0_f64, 600.0, 120.0, 3, 1);
        assert_eq!(window, VisibleWindow { start: 0, end: 3 });

        let pos = compute_positioning(window, 120.0_f64, 3);
        assert_eq!(pos.total_content_height, 360.0);
        assert_eq!(pos.window_offset, 0.0);
        assert_eq!(pos.trailing_space(window.len(), 120.0), 0.0);
    }

    #[test]
    fn trailing_space_fills_the_rest_of_the_spacer() {
        let window = VisibleWindow { start: 10, end: 15 };
        let pos = compute_positioning(window, 20.0_f32, 100);
        assert_eq!(pos.window_offset, 200.0);
        assert_eq!(pos.trailing_space(window.len(), 20.0), 1700.0);
    }

    #[test]
    fn empty_positioning_is_zero() {
        let pos = Positioning::<f64>::empty();
        assert_eq!(pos, compute_positioning(VisibleWindow::EMPTY, 120.0, 0));
    }
}
