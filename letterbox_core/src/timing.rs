// Copyright 2026 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame delta and moving-average FPS.
//!
//! [`FrameTiming`] accumulates one observation per frame: the wall-clock
//! delta since the previous frame, a bounded FIFO history of recent deltas,
//! and the average FPS derived from that history. Time flows in as `f64`
//! seconds from the host clock (`performance.now() / 1000` on the web).
//!
//! The first update is special-cased: `0.0` doubles as the "unset" sentinel
//! for the last timestamp, so the first observed delta is forced to zero
//! rather than measuring the gap back to the epoch.

use alloc::collections::VecDeque;

/// Per-frame timing accumulator with a bounded delta history.
///
/// Feed one [`update`](Self::update) per frame; query
/// [`delta_seconds`](Self::delta_seconds) and
/// [`average_fps`](Self::average_fps) afterwards.
#[derive(Clone, Debug)]
pub struct FrameTiming {
    /// Last observed time in seconds; `0.0` until the first update.
    last_timestamp: f64,
    /// Seconds elapsed between the two most recent updates.
    delta: f64,
    /// Recent deltas, oldest first. Length never exceeds `bound`.
    history: VecDeque<f64>,
    /// Maximum retained history length.
    bound: usize,
    /// Average FPS over `history`, recomputed on every update.
    average_fps: f64,
}

impl FrameTiming {
    /// Creates an accumulator retaining at most `bound` deltas.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    #[must_use]
    pub fn new(bound: usize) -> Self {
        assert!(bound > 0, "history bound must be nonzero");
        Self {
            last_timestamp: 0.0,
            delta: 0.0,
            history: VecDeque::with_capacity(bound),
            bound,
            average_fps: 0.0,
        }
    }

    /// Records one frame observation at `now` seconds.
    ///
    /// On the first call the delta is zero regardless of `now`. Afterwards
    /// the delta is appended to the history, evicting the oldest entry once
    /// the bound is reached (growth is one-at-a-time, so at most one eviction
    /// per append), and the average FPS is recomputed.
    ///
    /// An all-zero history (clock resolution, or just the first frame) makes
    /// the average infinite. That is accepted degenerate output, not an
    /// error.
    pub fn update(&mut self, now: f64) {
        if self.last_timestamp == 0.0 {
            self.last_timestamp = now;
        }
        self.delta = now - self.last_timestamp;
        self.last_timestamp = now;

        self.history.push_back(self.delta);
        if self.history.len() > self.bound {
            self.history.pop_front();
        }

        let total: f64 = self.history.iter().sum();
        self.average_fps = 1.0 / (total / self.history.len() as f64);
    }

    /// Seconds between the two most recent updates (zero before and at the
    /// first update).
    #[must_use]
    pub fn delta_seconds(&self) -> f64 {
        self.delta
    }

    /// The last delta in milliseconds, for display.
    #[must_use]
    pub fn delta_ms(&self) -> f64 {
        self.delta * 1000.0
    }

    /// Average FPS over the retained history.
    ///
    /// Zero before the first update; may be infinite while the history is
    /// all zeros.
    #[must_use]
    pub fn average_fps(&self) -> f64 {
        self.average_fps
    }

    /// Number of deltas currently retained.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_has_zero_delta() {
        let mut timing = FrameTiming::new(60);
        // Arbitrarily late first observation; delta must still be zero.
        timing.update(1234.5);
        assert_eq!(timing.delta_seconds(), 0.0);
        assert_eq!(timing.history_len(), 1);
    }

    #[test]
    fn delta_tracks_consecutive_updates() {
        let mut timing = FrameTiming::new(60);
        timing.update(10.0);
        timing.update(10.025);
        assert!((timing.delta_seconds() - 0.025).abs() < 1e-12);
        assert!((timing.delta_ms() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn history_never_exceeds_bound() {
        let mut timing = FrameTiming::new(60);
        for i in 0..200 {
            timing.update(1.0 + i as f64 / 60.0);
            assert!(
                timing.history_len() <= 60,
                "bound violated at frame {i}: {}",
                timing.history_len()
            );
        }
        assert_eq!(timing.history_len(), 60);
    }

    #[test]
    fn average_fps_near_sixty() {
        // Bound of 3: the zero first-frame delta is evicted by the fourth
        // update, leaving a history of exactly [0.0166, 0.0166, 0.0166].
        let mut timing = FrameTiming::new(3);
        let mut now = 100.0;
        timing.update(now);
        for _ in 0..3 {
            now += 0.0166;
            timing.update(now);
        }
        assert!(
            (timing.average_fps() - 60.0).abs() < 0.5,
            "expected ~60fps, got {}",
            timing.average_fps()
        );
    }

    #[test]
    fn average_fps_converges_once_history_fills() {
        let mut timing = FrameTiming::new(60);
        let mut now = 100.0;
        timing.update(now);
        // After > bound frames the zero first delta has been evicted and the
        // history holds only ~60fps deltas.
        for _ in 0..120 {
            now += 0.0166;
            timing.update(now);
        }
        assert!(
            (timing.average_fps() - 60.0).abs() < 0.5,
            "expected ~60fps, got {}",
            timing.average_fps()
        );
    }

    #[test]
    fn all_zero_history_yields_infinite_average() {
        let mut timing = FrameTiming::new(4);
        timing.update(5.0);
        assert!(
            timing.average_fps().is_infinite(),
            "first frame average is 1/0"
        );
    }
}
