use std::collections::VecDeque;

use crate::shared::constants::FRAME_RATE_WINDOW;

/// Moving-average frames-per-second over a bounded timestamp window.
///
/// Timestamps are milliseconds and assumed non-decreasing. The window
/// holds at most `FRAME_RATE_WINDOW` samples; the rate is computed over
/// the span from oldest to newest (always newest minus oldest). With
/// fewer than two samples, or a zero span, the rate is unknown rather
/// than a division by zero.
#[derive(Debug)]
pub struct FpsEstimator {
    timestamps: VecDeque<u64>,
    capacity: usize,
}

impl FpsEstimator {
    pub fn new() -> Self {
        Self::with_capacity(FRAME_RATE_WINDOW)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            timestamps: VecDeque::with_capacity(capacity),
            capacity: capacity.max(2),
        }
    }

    /// Records a frame timestamp, evicting the oldest sample once the
    /// window is full.
    pub fn push(&mut self, timestamp_ms: u64) {
        self.timestamps.push_back(timestamp_ms);
        while self.timestamps.len() > self.capacity {
            self.timestamps.pop_front();
        }
    }

    /// Current moving-average FPS, or `None` while the window cannot
    /// support a defined rate.
    pub fn fps(&self) -> Option<f64> {
        if self.timestamps.len() < 2 {
            return None;
        }
        let oldest = *self.timestamps.front()?;
        let newest = *self.timestamps.back()?;
        let span_ms = newest.saturating_sub(oldest);
        if span_ms == 0 {
            return None;
        }
        let intervals = (self.timestamps.len() - 1) as f64;
        Some(intervals * 1000.0 / span_ms as f64)
    }

    pub fn sample_count(&self) -> usize {
        self.timestamps.len()
    }
}

impl Default for FpsEstimator {
    fn default() -> Self {
        Self::new()
    }
}
