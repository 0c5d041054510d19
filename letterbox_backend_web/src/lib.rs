// Copyright 2026 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for letterbox.
//!
//! This crate provides the browser-facing half of the harness:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source
//! - [`CanvasSurface`]: canvas acquisition, pixel blit, and CSS fit
//! - [`HudOverlay`]: the frame/delta/fps text targets
//! - [`ViewportWatcher`]: resize and initial-content-ready subscriptions
//!
//! All startup acquisition is fallible with `Err(JsValue)` diagnostics;
//! per-frame presentation writes follow the usual DOM convention of
//! best-effort `let _ =` style writes.

#![no_std]

extern crate alloc;

mod overlay;
mod raf;
mod surface;
mod viewport;

pub use overlay::HudOverlay;
pub use raf::RafLoop;
pub use surface::CanvasSurface;
pub use viewport::ViewportWatcher;

/// Returns the current wall-clock time in seconds from `performance.now()`.
#[must_use]
pub fn now_seconds() -> f64 {
    raf::performance_now() / 1000.0
}
