// Copyright 2026 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable surface configuration.
//!
//! [`SurfaceConfig`] captures the process-wide constants of the harness: the
//! fixed render dimensions, the identifier of the pre-existing drawing
//! surface, and the bound on the frame-delta history. It is constructed once
//! at startup and read-only thereafter.

use kurbo::Size;

/// Process-wide surface constants, set once at startup.
///
/// The render dimensions describe the *pixel buffer*, not the displayed box;
/// the displayed box is derived per resize by [`fit`](crate::fit) and only
/// ever affects presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceConfig {
    /// Fixed render width in pixels.
    pub width: u32,
    /// Fixed render height in pixels.
    pub height: u32,
    /// Logical identifier of the pre-existing drawing surface.
    pub canvas_id: &'static str,
    /// Maximum number of retained frame deltas for the moving average.
    pub history_bound: usize,
}

impl SurfaceConfig {
    /// Creates a configuration.
    ///
    /// # Panics
    ///
    /// Panics if either dimension or the history bound is zero.
    #[must_use]
    pub const fn new(
        width: u32,
        height: u32,
        canvas_id: &'static str,
        history_bound: usize,
    ) -> Self {
        assert!(width > 0 && height > 0, "render dimensions must be nonzero");
        assert!(history_bound > 0, "history bound must be nonzero");
        Self {
            width,
            height,
            canvas_id,
            history_bound,
        }
    }

    /// Returns the render width/height aspect ratio.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Returns the render dimensions as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Returns the RGBA pixel buffer length for one full frame.
    #[must_use]
    pub const fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}
