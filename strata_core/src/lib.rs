// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types and transform math for single-layer compositing.
//!
//! `strata_core` provides the foundational pieces shared by the compositor
//! and its backends. It is `no_std` compatible and keeps all geometry in
//! [`kurbo`] types.
//!
//! **[`layer`]** — The borrowed [`Layer`](layer::Layer) view: everything the
//! compositor needs to know about one offscreen-rendered layer for the
//! duration of one draw call, plus opaque content handles.
//!
//! **[`paint`]** — The [`Paint`](paint::Paint) draw-state descriptor and the
//! blend/sampling enums it carries.
//!
//! **[`canvas`]** — The [`Canvas`](canvas::Canvas) trait that destination
//! surfaces implement, and the opaque render-context handle.
//!
//! **[`transform`]** — 2-D matrix helpers: the texture-origin flip, texture
//! transform re-basing, and graceful inversion.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod canvas;
pub mod layer;
pub mod paint;
pub mod transform;
