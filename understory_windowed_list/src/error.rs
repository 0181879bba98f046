// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

/// Which configuration value was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigIssue {
    /// The item height was zero, negative, or not finite.
    #[error("item height must be finite and greater than zero")]
    NonPositiveItemHeight,
    /// The viewport height was zero, negative, or not finite.
    #[error("viewport height must be finite and greater than zero")]
    NonPositiveViewportHeight,
}

/// Errors reported by the windowed list core.
///
/// Range and positioning arithmetic is total and never fails; errors only come
/// from configuration checks and from direct, unchecked collection access.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// A height passed at construction or on resize was unusable.
    ///
    /// At construction this is fatal for the instance. On a later resize the
    /// previous value is kept.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),

    /// A collection was indexed outside `0..len`.
    ///
    /// Indices produced by the range calculator are always in bounds, so this
    /// indicates a caller bypassed it.
    #[error("index {index} is out of range for a collection of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The collection length at the time of the request.
        len: usize,
    },

    /// Two items in a collection produced the same key.
    #[error("duplicate key at index {index}")]
    DuplicateKey {
        /// Position of the second occurrence.
        index: usize,
    },
}
