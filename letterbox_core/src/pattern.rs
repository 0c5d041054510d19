// Copyright 2026 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Procedural RGBA test pattern.
//!
//! [`render_pattern`] fills a fresh full-surface pixel buffer with a
//! diagonally scrolling gradient indexed by row, column, and frame counter.
//! The pattern has no semantic meaning; it exists to exercise the full fill
//! and blit path every frame as a throughput and visual-sanity probe.

use alloc::vec::Vec;

/// Fills a freshly allocated `width * height * 4` RGBA buffer for frame `t`.
///
/// Per pixel at row `r`, column `c`:
///
/// ```text
/// R = (r + t) mod 256
/// G = (c + t) mod 256
/// B = (r + c) mod 256
/// A = 255
/// ```
///
/// Row-major, top-left origin. A new buffer is allocated on every call by
/// design — the harness measures the cost of the whole per-frame path,
/// allocation included.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "channel values are reduced mod 256 before narrowing to u8"
)]
pub fn render_pattern(width: u32, height: u32, t: u64) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);

    for r in 0..u64::from(height) {
        for c in 0..u64::from(width) {
            pixels.push(((r + t) % 256) as u8);
            pixels.push(((c + t) % 256) as u8);
            pixels.push(((r + c) % 256) as u8);
            pixels.push(255);
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel_at(pixels: &[u8], width: u32, r: u32, c: u32) -> [u8; 4] {
        let i = (r as usize * width as usize + c as usize) * 4;
        [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    }

    #[test]
    fn buffer_covers_full_surface() {
        let pixels = render_pattern(640, 360, 0);
        assert_eq!(pixels.len(), 640 * 360 * 4);
    }

    #[test]
    fn pixel_formula_at_frame_five() {
        let pixels = render_pattern(64, 32, 5);
        assert_eq!(pixel_at(&pixels, 64, 10, 20), [15, 25, 30, 255]);
    }

    #[test]
    fn channels_wrap_at_256() {
        // t = 300 pushes R and G past one wrap at small r/c.
        let pixels = render_pattern(16, 16, 300);
        let [red, green, blue, alpha] = pixel_at(&pixels, 16, 2, 3);
        assert_eq!(red, ((2 + 300) % 256) as u8);
        assert_eq!(green, ((3 + 300) % 256) as u8);
        assert_eq!(blue, 5);
        assert_eq!(alpha, 255);
    }

    #[test]
    fn pattern_scrolls_with_frame_counter() {
        let a = render_pattern(8, 8, 1);
        let b = render_pattern(8, 8, 2);
        // R at (0,0) advances by one per frame.
        assert_eq!(a[0] + 1, b[0]);
        // B is independent of t.
        assert_eq!(a[2], b[2]);
    }
}
