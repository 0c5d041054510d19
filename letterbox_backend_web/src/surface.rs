// Copyright 2026 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas surface acquisition, blit, and CSS fit.
//!
//! [`CanvasSurface`] wraps the pre-existing `<canvas>` element and its 2D
//! context. Acquisition is fatal if either is unavailable — nothing can
//! proceed without a drawing surface. The canvas's *pixel* dimensions are
//! bound to the configured render size once at acquisition and never change;
//! the *displayed* box is a separate CSS-only transform applied by
//! [`apply_fit`](CanvasSurface::apply_fit).

use alloc::format;

use letterbox_core::config::SurfaceConfig;
use letterbox_core::fit::FitBox;
use wasm_bindgen::{Clamped, JsCast as _, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, ImageData};

/// The fixed-resolution drawing surface and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    /// Locates the canvas named by `config.canvas_id` and binds its pixel
    /// dimensions to the configured render size.
    ///
    /// # Errors
    ///
    /// Fails if the element does not exist, is not a `<canvas>`, or does not
    /// provide a 2D context. All three abort startup; there is no fallback.
    pub fn acquire(document: &Document, config: &SurfaceConfig) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(config.canvas_id)
            .ok_or_else(|| {
                JsValue::from_str(&format!("no element with id '{}'", config.canvas_id))
            })?
            .dyn_into()
            .map_err(|_| {
                JsValue::from_str(&format!("element '{}' is not a <canvas>", config.canvas_id))
            })?;

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D canvas context unavailable"))?
            .unchecked_into();

        // Pixel dimensions are the render resolution, decoupled from the
        // CSS-displayed size set by apply_fit().
        canvas.set_width(config.width);
        canvas.set_height(config.height);

        // Offsets from apply_fit() are relative to the viewport origin.
        let style = canvas.style();
        let _ = style.set_property("position", "absolute");

        Ok(Self {
            canvas,
            context,
            width: config.width,
            height: config.height,
        })
    }

    /// Writes a full-surface RGBA buffer to the canvas in a single blit at
    /// the top-left origin.
    ///
    /// # Errors
    ///
    /// Fails if `pixels` does not match the surface dimensions or the context
    /// rejects the write.
    pub fn blit(&self, pixels: &[u8]) -> Result<(), JsValue> {
        let image =
            ImageData::new_with_u8_clamped_array_and_sh(Clamped(pixels), self.width, self.height)?;
        self.context.put_image_data(&image, 0.0, 0.0)
    }

    /// Applies a displayed box to the canvas's CSS style.
    ///
    /// Presentation only: pixel dimensions are untouched. Style writes are
    /// best-effort, as in any DOM presenter.
    pub fn apply_fit(&self, fit: &FitBox) {
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", fit.width));
        let _ = style.set_property("height", &format!("{}px", fit.height));
        let _ = style.set_property("top", &format!("{}px", fit.top));
        let _ = style.set_property("left", &format!("{}px", fit.left));
    }

    /// The underlying canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl core::fmt::Debug for CanvasSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CanvasSurface")
            .field("canvas", &"HtmlCanvasElement")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
