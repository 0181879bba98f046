// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for [`WindowManager`](crate::WindowManager).

use crate::range::DEFAULT_OVERSCAN;
use crate::{ConfigIssue, Scalar, WindowError};

/// What happens to the scroll offset when the collection is replaced.
///
/// The core never clamps the offset on its own while scrolling; that is the
/// host's job. A collection change is the one place where the host may want
/// the core to do it, for example after a search query shrinks the list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OffsetPolicy {
    /// Keep the last known offset. The window is still clamped to the new
    /// length, so an offset past the end yields an empty window at `len`.
    #[default]
    Preserve,
    /// Clamp the offset into `[0, max(0, len * item_height - viewport_height)]`.
    ClampToEnd,
    /// Scroll back to the top.
    Reset,
}

/// Configuration for a [`WindowManager`](crate::WindowManager).
///
/// ```rust
/// use understory_windowed_list::{OffsetPolicy, WindowConfig};
///
/// let config = WindowConfig::new(120.0_f64, 600.0)
///     .with_overscan(3)
///     .with_offset_policy(OffsetPolicy::ClampToEnd);
/// assert!(config.validate().is_ok());
/// assert!(WindowConfig::new(0.0_f64, 600.0).validate().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig<S> {
    /// Height of every row. Must be finite and greater than zero.
    pub item_height: S,
    /// Viewport height at construction. Must be finite and greater than zero.
    pub initial_viewport_height: S,
    /// Extra rows realized on each side of the viewport.
    #[cfg_attr(feature = "serde", serde(default = "default_overscan"))]
    pub overscan_count: usize,
    /// Offset handling on collection changes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset_policy: OffsetPolicy,
}

#[cfg(feature = "serde")]
fn default_overscan() -> usize {
    DEFAULT_OVERSCAN
}

impl<S: Scalar> WindowConfig<S> {
    /// Creates a configuration with the default overscan and offset policy.
    #[must_use]
    pub fn new(item_height: S, initial_viewport_height: S) -> Self {
        Self {
            item_height,
            initial_viewport_height,
            overscan_count: DEFAULT_OVERSCAN,
            offset_policy: OffsetPolicy::default(),
        }
    }

    /// Sets the overscan count.
    #[must_use]
    pub fn with_overscan(mut self, overscan_count: usize) -> Self {
        self.overscan_count = overscan_count;
        self
    }

    /// Sets the offset policy applied on collection changes.
    #[must_use]
    pub fn with_offset_policy(mut self, offset_policy: OffsetPolicy) -> Self {
        self.offset_policy = offset_policy;
        self
    }

    /// Checks that both heights are usable.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidConfiguration`] if either height is zero,
    /// negative, or not finite.
    pub fn validate(&self) -> Result<(), WindowError> {
        check_item_height(self.item_height)?;
        check_viewport_height(self.initial_viewport_height)?;
        Ok(())
    }
}

pub(crate) fn check_item_height<S: Scalar>(height: S) -> Result<(), ConfigIssue> {
    if height.is_positive_finite() {
        Ok(())
    } else {
        Err(ConfigIssue::NonPositiveItemHeight)
    }
}

pub(crate) fn check_viewport_height<S: Scalar>(height: S) -> Result<(), ConfigIssue> {
    if height.is_positive_finite() {
        Ok(())
    } else {
        Err(ConfigIssue::NonPositiveViewportHeight)
    }
}
