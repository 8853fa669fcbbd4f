// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer compositor: draws one offscreen-rendered layer onto a canvas.
//!
//! This crate owns the single operation the surrounding system dispatches
//! to — [`draw_layer`] — plus the [`LayerSource`] entry point used by
//! per-frame drawables. The data model and the canvas contract live in
//! [`strata_core`].
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod compositor;

pub use compositor::{LayerSource, draw_backing_layer, draw_layer};
