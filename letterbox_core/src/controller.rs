// Copyright 2026 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame loop controller.
//!
//! [`FrameLoop`] is the harness's single stateful loop driver. It owns the
//! surface configuration, the timing accumulator, and the frame counter, and
//! exposes the two operations the host wires callbacks to:
//!
//! - [`on_frame`](FrameLoop::on_frame) — one per display refresh, strictly
//!   ordered: timing update, pattern fill, counter increment.
//! - [`fit`](FrameLoop::fit) — one per viewport resize, touching only
//!   presentation geometry.
//!
//! The controller is constructed once at startup and lives for the process's
//! entire lifetime; there is no teardown path.

use alloc::vec::Vec;
use kurbo::Size;

use crate::config::SurfaceConfig;
use crate::fit::{FitBox, fit_viewport};
use crate::pattern::render_pattern;
use crate::timing::FrameTiming;

/// Everything one frame hands back to the host for presentation.
#[derive(Clone, Debug)]
pub struct FrameReport {
    /// The frame counter value this frame was rendered with.
    pub frame_index: u64,
    /// Last frame delta in milliseconds.
    pub delta_ms: f64,
    /// Moving-average FPS over the retained history.
    pub average_fps: f64,
    /// Freshly filled full-surface RGBA buffer.
    pub pixels: Vec<u8>,
}

/// The single stateful loop driver.
///
/// Host-driven: the platform backend invokes [`on_frame`](Self::on_frame)
/// once per refresh and [`fit`](Self::fit) on each viewport resize. The two
/// operations share no mutable state (fit reads only the immutable
/// configuration), so resize notifications may interleave with frame
/// callbacks freely.
#[derive(Clone, Debug)]
pub struct FrameLoop {
    config: SurfaceConfig,
    timing: FrameTiming,
    frames_rendered: u64,
}

impl FrameLoop {
    /// Creates the controller for the given configuration.
    #[must_use]
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            config,
            timing: FrameTiming::new(config.history_bound),
            frames_rendered: 0,
        }
    }

    /// Runs one frame at `now` seconds and returns the presentation work.
    ///
    /// Order is fixed: the timing update first, then the pattern fill at the
    /// *current* counter value, then the increment. The report carries the
    /// pre-increment counter, which is the value the frame was rendered with
    /// and the value the HUD displays.
    pub fn on_frame(&mut self, now: f64) -> FrameReport {
        self.timing.update(now);

        let frame_index = self.frames_rendered;
        let pixels = render_pattern(self.config.width, self.config.height, frame_index);

        self.frames_rendered += 1;

        FrameReport {
            frame_index,
            delta_ms: self.timing.delta_ms(),
            average_fps: self.timing.average_fps(),
            pixels,
        }
    }

    /// Computes the displayed box for the configured surface inside
    /// `viewport`.
    ///
    /// Presentation-only: no timing or pixel state is read or written.
    #[must_use]
    pub fn fit(&self, viewport: Size) -> FitBox {
        fit_viewport(self.config.size(), viewport)
    }

    /// The immutable surface configuration.
    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Total frames completed so far.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: SurfaceConfig = SurfaceConfig::new(64, 36, "render-target", 60);

    #[test]
    fn counter_increments_exactly_once_per_frame() {
        let mut frame_loop = FrameLoop::new(CONFIG);
        assert_eq!(frame_loop.frames_rendered(), 0);

        for i in 0..1000_u64 {
            let report = frame_loop.on_frame(i as f64 / 60.0);
            assert_eq!(report.frame_index, i, "report carries pre-increment value");
            assert_eq!(frame_loop.frames_rendered(), i + 1);
        }
    }

    #[test]
    fn pattern_uses_pre_increment_counter() {
        let mut frame_loop = FrameLoop::new(CONFIG);
        for _ in 0..5 {
            let _ = frame_loop.on_frame(0.0);
        }
        // Sixth frame renders with t = 5: pixel (10, 20) is (15, 25, 30).
        let report = frame_loop.on_frame(0.0);
        assert_eq!(report.frame_index, 5);
        let i = (10 * 64 + 20) * 4;
        assert_eq!(&report.pixels[i..i + 4], &[15, 25, 30, 255]);
    }

    #[test]
    fn report_reflects_timing() {
        let mut frame_loop = FrameLoop::new(CONFIG);
        let _ = frame_loop.on_frame(10.0);
        let report = frame_loop.on_frame(10.020);
        assert!((report.delta_ms - 20.0).abs() < 1e-9);
        // History is [0, 0.020]: average fps = 1 / (0.020 / 2) = 100.
        assert!((report.average_fps - 100.0).abs() < 1e-6);
    }

    #[test]
    fn frame_buffer_matches_config() {
        let mut frame_loop = FrameLoop::new(CONFIG);
        let report = frame_loop.on_frame(0.0);
        assert_eq!(report.pixels.len(), CONFIG.buffer_len());
    }

    #[test]
    fn fit_delegates_to_configured_size() {
        let frame_loop = FrameLoop::new(CONFIG);
        let fit = frame_loop.fit(Size::new(128.0, 72.0));
        // Same 16:9 aspect: exact fill.
        assert_eq!(fit.left, 0.0);
        assert_eq!(fit.top, 0.0);
        assert_eq!(fit.width, 128.0);
        assert_eq!(fit.height, 72.0);
    }
}
