// Copyright 2026 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser harness: a fixed-resolution canvas letterboxed in the viewport,
//! repainted with a procedural pattern every animation frame.
//!
//! This crate is the wiring layer. It constructs the one
//! [`FrameLoop`](letterbox_core::controller::FrameLoop) instance, acquires
//! the canvas and HUD targets (fatally, if missing), and registers the two
//! host callbacks: the viewport watcher for fit/centering and the
//! `requestAnimationFrame` loop for rendering.
//!
//! Build with: `wasm-pack build --target web letterbox_harness`
//!
//! The hosting page must provide a `<canvas id="render-target">` and three
//! text elements with ids `frame`, `delta`, and `fps`.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Size;
use wasm_bindgen::prelude::*;

use letterbox_backend_web::{CanvasSurface, HudOverlay, RafLoop, ViewportWatcher};
use letterbox_core::config::SurfaceConfig;
use letterbox_core::controller::FrameLoop;

/// Static configuration: render resolution, surface id, timing-history bound.
const CONFIG: SurfaceConfig = SurfaceConfig::new(640, 360, "render-target", 60);

/// Entry point — called automatically by `wasm_bindgen(start)`.
///
/// # Errors
///
/// Returns `Err` (aborting startup with a console diagnostic) if the canvas,
/// its 2D context, or any HUD target cannot be acquired.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|_| JsValue::from_str("logger already initialized"))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let surface = Rc::new(CanvasSurface::acquire(&document, &CONFIG)?);
    let overlay = HudOverlay::acquire(&document)?;

    log::info!(
        "letterbox: {}x{} surface on '{}', fps window {}",
        CONFIG.width,
        CONFIG.height,
        CONFIG.canvas_id,
        CONFIG.history_bound
    );

    let controller = Rc::new(RefCell::new(FrameLoop::new(CONFIG)));

    // Fit and center on every resize and once on initial content load. The
    // density hint is accepted for future DPI-awareness but unused in the
    // fit math.
    let watcher = {
        let controller = Rc::clone(&controller);
        let surface = Rc::clone(&surface);
        ViewportWatcher::register(move |width, height, _density| {
            log::info!("viewport resized to {width}x{height}");
            let fit = controller.borrow().fit(Size::new(width, height));
            surface.apply_fit(&fit);
        })?
    };

    // Frame loop: timing update, pattern fill, blit, HUD — then the RafLoop
    // re-registers itself for the next frame.
    let raf = {
        let controller = Rc::clone(&controller);
        let surface = Rc::clone(&surface);
        RafLoop::new(move |now| {
            let report = controller.borrow_mut().on_frame(now);
            if let Err(err) = surface.blit(&report.pixels) {
                log::error!("blit failed: {err:?}");
            }
            overlay.update(report.frame_index, report.delta_ms, report.average_fps);
        })
    };
    raf.start();

    // Keep the loop and listeners alive — there is no graceful shutdown on
    // the web; the page's teardown ends them implicitly.
    std::mem::forget(raf);
    std::mem::forget(watcher);

    Ok(())
}
