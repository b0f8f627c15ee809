//! Moving average over recent samples
//!
//! Camera noise and small hand movements make single-frame samples flicker.
//! The smoother keeps the last few samples and reports their per-channel
//! mean, so a reading settles within a fraction of a second.

use std::collections::VecDeque;

use crate::color::ColorSample;
use crate::constants::smoothing::HISTORY_LENGTH;
use crate::{AnalysisError, Result};

/// Fixed-capacity FIFO of recent samples
#[derive(Debug, Clone)]
pub struct TemporalSmoother {
    history: VecDeque<ColorSample>,
    capacity: usize,
}

impl Default for TemporalSmoother {
    fn default() -> Self {
        Self::new()
    }
}

impl TemporalSmoother {
    /// Smoother averaging the last five samples
    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(HISTORY_LENGTH),
            capacity: HISTORY_LENGTH,
        }
    }

    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero capacity
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(AnalysisError::invalid_parameter("history_length", capacity));
        }
        Ok(Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Record a sample and return the mean of the retained history
    ///
    /// Once the history is full the oldest sample is evicted.
    pub fn push(&mut self, sample: ColorSample) -> ColorSample {
        self.history.push_back(sample);
        if self.history.len() > self.capacity {
            self.history.pop_front();
        }
        self.mean()
    }

    /// Mean of the current history, `None` before the first push
    pub fn smoothed(&self) -> Option<ColorSample> {
        if self.history.is_empty() {
            None
        } else {
            Some(self.mean())
        }
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sums in `f64` so a history of identical samples averages back to
    /// exactly that sample
    fn mean(&self) -> ColorSample {
        let count = self.history.len() as f64;
        let (red, green, blue) = self
            .history
            .iter()
            .fold((0.0f64, 0.0f64, 0.0f64), |(r, g, b), s| {
                (r + s.red as f64, g + s.green as f64, b + s.blue as f64)
            });
        ColorSample::new(
            (red / count) as f32,
            (green / count) as f32,
            (blue / count) as f32,
        )
    }
}
