// Copyright 2026 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core state and math for the letterbox rendering harness.
//!
//! `letterbox_core` holds everything about the harness that does not need a
//! browser: the immutable surface configuration, the aspect-ratio fit
//! computation, the frame timing accumulator, the procedural pixel pattern,
//! and the frame loop controller that composes them. It is `no_std`
//! compatible (with `alloc`) so every invariant is unit-testable on the host.
//!
//! # Architecture
//!
//! The harness is a single host-driven loop. Each platform tick flows through
//! the controller and back out as presentation work:
//!
//! ```text
//!   Backend (tick source)
//!       │  now_seconds
//!       ▼
//!   FrameLoop::on_frame() ──► FrameReport ──► surface blit + HUD overlay
//!
//!   Backend (viewport resize)
//!       │  viewport size
//!       ▼
//!   FrameLoop::fit() ──► FitBox ──► CSS displayed box
//! ```
//!
//! **[`config`]** — Immutable surface configuration: fixed render dimensions,
//! the surface identifier, and the timing-history bound.
//!
//! **[`fit`]** — Pure aspect-ratio-fit computation producing the displayed
//! box (letterboxing/pillarboxing); never touches pixel dimensions.
//!
//! **[`timing`]** — Per-frame delta, bounded FIFO delta history, and the
//! moving-average FPS derived from it.
//!
//! **[`pattern`]** — The deterministic per-frame RGBA fill used as a
//! throughput probe.
//!
//! **[`controller`]** — [`FrameLoop`](controller::FrameLoop), the single
//! stateful loop driver tying the above together.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod fit;
pub mod pattern;
pub mod timing;
