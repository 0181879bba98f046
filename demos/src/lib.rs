// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable host simulations for `understory_windowed_list`.
//!
//! See the `examples/` directory of this crate.
