// Copyright 2026 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HUD text overlay.
//!
//! [`HudOverlay`] resolves the three named text targets once at startup and
//! writes the frame counter, the last frame delta, and the moving-average
//! FPS into them each frame. The targets live outside the canvas; their
//! content is display-only and not part of core state.

use alloc::format;
use alloc::string::String;

use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, HtmlElement};

/// Element id of the frame-counter target.
const FRAME_ID: &str = "frame";
/// Element id of the frame-delta target.
const DELTA_ID: &str = "delta";
/// Element id of the average-FPS target.
const FPS_ID: &str = "fps";

/// The three HUD text targets.
pub struct HudOverlay {
    frame: HtmlElement,
    delta: HtmlElement,
    fps: HtmlElement,
}

impl HudOverlay {
    /// Resolves the `frame`, `delta`, and `fps` elements.
    ///
    /// # Errors
    ///
    /// Fails if any target is missing. The render step writes all three every
    /// frame, so a missing target is a startup fault rather than a per-frame
    /// surprise.
    pub fn acquire(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            frame: text_target(document, FRAME_ID)?,
            delta: text_target(document, DELTA_ID)?,
            fps: text_target(document, FPS_ID)?,
        })
    }

    /// Writes the three HUD values.
    pub fn update(&self, frame_index: u64, delta_ms: f64, average_fps: f64) {
        self.frame.set_inner_text(&format!("{frame_index}"));
        self.delta.set_inner_text(&format_delta_ms(delta_ms));
        self.fps.set_inner_text(&format_fps(average_fps));
    }
}

impl core::fmt::Debug for HudOverlay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HudOverlay")
            .field("frame", &FRAME_ID)
            .field("delta", &DELTA_ID)
            .field("fps", &FPS_ID)
            .finish()
    }
}

fn text_target(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no overlay element with id '{id}'")))?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("overlay element '{id}' is not an HTML element")))
}

/// Formats a frame delta in milliseconds to 2 decimal places.
fn format_delta_ms(delta_ms: f64) -> String {
    format!("{delta_ms:.2}")
}

/// Formats an average FPS to 1 decimal place.
fn format_fps(fps: f64) -> String {
    format!("{fps:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_has_two_decimal_places() {
        assert_eq!(format_delta_ms(16.666), "16.67");
        assert_eq!(format_delta_ms(0.0), "0.00");
    }

    #[test]
    fn fps_has_one_decimal_place() {
        assert_eq!(format_fps(59.94), "59.9");
        assert_eq!(format_fps(60.0), "60.0");
    }

    #[test]
    fn degenerate_fps_still_formats() {
        // An all-zero delta history yields an infinite average; the overlay
        // renders it rather than guarding it.
        assert_eq!(format_fps(f64::INFINITY), "inf");
    }
}
