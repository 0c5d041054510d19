// Copyright 2026 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aspect-ratio fit and centering.
//!
//! [`fit_viewport`] computes the displayed box for a fixed-aspect surface
//! inside a variable-size viewport: the surface is scaled to the largest size
//! that fits, then centered along the leftover axis (letterbox bars above and
//! below when the viewport is relatively narrower, pillarbox bars at the
//! sides when it is relatively wider). The computation is pure presentation
//! math and never touches the surface's pixel dimensions.

use kurbo::Size;

/// The displayed box of the surface inside the viewport, in logical CSS
/// pixels.
///
/// `left`/`top` are the offsets of the box's top-left corner from the
/// viewport origin; exactly one of them is nonzero (or both are zero when the
/// aspect ratios match exactly).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitBox {
    /// Horizontal offset from the viewport's left edge.
    pub left: f64,
    /// Vertical offset from the viewport's top edge.
    pub top: f64,
    /// Displayed width.
    pub width: f64,
    /// Displayed height.
    pub height: f64,
}

/// Computes the displayed box for `surface` fit and centered inside
/// `viewport`.
///
/// The tie-break uses `<=`, so a viewport whose aspect exactly equals the
/// surface aspect takes the width-constrained branch and fills the viewport
/// with zero offsets on both axes.
///
/// Viewport dimensions are expected to be positive; a degenerate zero-height
/// viewport yields an infinite viewport aspect and falls through to the
/// height-constrained branch with a zero-size box.
#[must_use]
pub fn fit_viewport(surface: Size, viewport: Size) -> FitBox {
    let surface_aspect = surface.width / surface.height;
    let viewport_aspect = viewport.width / viewport.height;

    if viewport_aspect <= surface_aspect {
        // Viewport is relatively taller/narrower than the surface: constrain
        // by width and center vertically.
        let width = viewport.width;
        let height = width / surface_aspect;
        FitBox {
            left: 0.0,
            top: (viewport.height - height) / 2.0,
            width,
            height,
        }
    } else {
        // Viewport is relatively wider: constrain by height and center
        // horizontally.
        let height = viewport.height;
        let width = height * surface_aspect;
        FitBox {
            left: (viewport.width - width) / 2.0,
            top: 0.0,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Size = Size::new(640.0, 360.0);

    #[test]
    fn equal_aspect_fills_viewport_exactly() {
        // Same 16:9 aspect at a different scale: zero offsets on both axes.
        let fit = fit_viewport(SURFACE, Size::new(1280.0, 720.0));
        assert_eq!(
            fit,
            FitBox {
                left: 0.0,
                top: 0.0,
                width: 1280.0,
                height: 720.0,
            }
        );
    }

    #[test]
    fn narrow_viewport_constrains_width() {
        // 1:1 viewport is narrower than 16:9: full width, centered vertically.
        let fit = fit_viewport(SURFACE, Size::new(800.0, 800.0));
        assert_eq!(fit.width, 800.0);
        assert_eq!(fit.left, 0.0);
        let expected_height = 800.0 / (16.0 / 9.0);
        assert!((fit.height - expected_height).abs() < 1e-9);
        assert!((fit.top - (800.0 - expected_height) / 2.0).abs() < 1e-9);
        assert!(fit.top >= 0.0, "centering offset must not be negative");
    }

    #[test]
    fn wide_viewport_constrains_height() {
        // 32:9 viewport is wider than 16:9: full height, centered horizontally.
        let fit = fit_viewport(SURFACE, Size::new(2560.0, 720.0));
        assert_eq!(fit.height, 720.0);
        assert_eq!(fit.top, 0.0);
        let expected_width = 720.0 * (16.0 / 9.0);
        assert!((fit.width - expected_width).abs() < 1e-9);
        assert!((fit.left - (2560.0 - expected_width) / 2.0).abs() < 1e-9);
        assert!(fit.left >= 0.0, "centering offset must not be negative");
    }

    #[test]
    fn tie_break_takes_width_constrained_branch() {
        // Exactly matching aspect must behave as "viewport narrower": the
        // width-constrained branch with both offsets collapsing to zero.
        let fit = fit_viewport(Size::new(100.0, 100.0), Size::new(250.0, 250.0));
        assert_eq!(fit.left, 0.0);
        assert_eq!(fit.top, 0.0);
        assert_eq!(fit.width, 250.0);
        assert_eq!(fit.height, 250.0);
    }

    #[test]
    fn portrait_surface_in_landscape_viewport() {
        let fit = fit_viewport(Size::new(360.0, 640.0), Size::new(1920.0, 1080.0));
        // Viewport much wider than the 9:16 surface: height-constrained.
        assert_eq!(fit.height, 1080.0);
        assert_eq!(fit.top, 0.0);
        let expected_width = 1080.0 * (360.0 / 640.0);
        assert!((fit.width - expected_width).abs() < 1e-9);
        assert!(fit.left > 0.0);
    }
}
