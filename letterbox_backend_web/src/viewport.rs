// Copyright 2026 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport size subscriptions.
//!
//! [`ViewportWatcher`] registers the harness's two external event
//! subscriptions: `resize` on the window and `DOMContentLoaded` on the
//! document (the initial-content-ready signal, so the first fit happens
//! without waiting for a resize). Both deliver the current viewport
//! dimensions and the device pixel ratio to one shared callback.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::Window;

type ViewportCallback = Rc<RefCell<Box<dyn FnMut(f64, f64, f64)>>>;

/// Keeps the two viewport event listeners alive.
///
/// Dropping the watcher releases the JS closures but does not unregister the
/// listeners; the harness leaks it intentionally since the loop runs until
/// page teardown.
pub struct ViewportWatcher {
    _resize: Closure<dyn FnMut()>,
    _loaded: Closure<dyn FnMut()>,
}

impl ViewportWatcher {
    /// Registers the `resize` and `DOMContentLoaded` listeners.
    ///
    /// `callback` receives `(width, height, device_pixel_ratio)` in logical
    /// pixels on every delivery. The density value is forwarded for future
    /// DPI-awareness; the fit math does not consume it.
    ///
    /// # Errors
    ///
    /// Fails if the global window or document is unavailable, or if listener
    /// registration is rejected.
    pub fn register(callback: impl FnMut(f64, f64, f64) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let handler: ViewportCallback = Rc::new(RefCell::new(Box::new(callback)));

        let resize = listener(&window, &handler);
        let loaded = listener(&window, &handler);

        window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
        document
            .add_event_listener_with_callback("DOMContentLoaded", loaded.as_ref().unchecked_ref())?;

        Ok(Self {
            _resize: resize,
            _loaded: loaded,
        })
    }
}

impl core::fmt::Debug for ViewportWatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewportWatcher").finish()
    }
}

fn listener(window: &Window, handler: &ViewportCallback) -> Closure<dyn FnMut()> {
    let window = window.clone();
    let handler = Rc::clone(handler);
    Closure::wrap(Box::new(move || {
        let (width, height, density) = viewport_metrics(&window);
        handler.borrow_mut()(width, height, density);
    }) as Box<dyn FnMut()>)
}

/// Reads the current viewport dimensions and pixel density.
///
/// `innerWidth`/`innerHeight` are JS numbers; a non-numeric value (which the
/// browser should never produce) degrades to zero rather than panicking in
/// an event handler.
fn viewport_metrics(window: &Window) -> (f64, f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height, window.device_pixel_ratio())
}
