//! Per-frame sample, smooth and name
//!
//! [`ScanPipeline`] is the synchronous core of live scanning: it has no
//! notion of time or threads. Callers that feed it at camera rate gate the
//! work with a [`Throttle`].

use std::time::{Duration, Instant};

use tracing::trace;

use super::smoother::TemporalSmoother;
use crate::color::ColorSample;
use crate::config::ScanConfig;
use crate::frame::{FrameSampler, PixelBufferView, SamplePoint};
use crate::{describe, NamedColor, Result};

/// Sampler and smoother for one scanning session
#[derive(Debug, Clone)]
pub struct ScanPipeline {
    sampler: FrameSampler,
    smoother: TemporalSmoother,
}

impl Default for ScanPipeline {
    fn default() -> Self {
        Self {
            sampler: FrameSampler::live(),
            smoother: TemporalSmoother::new(),
        }
    }
}

impl ScanPipeline {
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration does not validate
    pub fn new(config: &ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sampler: FrameSampler::new(config.sampling.live_window)?,
            smoother: TemporalSmoother::with_capacity(config.smoothing.history_length)?,
        })
    }

    /// Sample the frame center, fold it into the history and name the mean
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the window misses the frame. The history is
    /// left untouched in that case.
    pub fn process(&mut self, view: &PixelBufferView<'_>) -> Result<NamedColor> {
        self.process_at(view, SamplePoint::center_of(view.width(), view.height()))
    }

    /// Same as [`process`](Self::process) with an explicit sampling point
    pub fn process_at(
        &mut self,
        view: &PixelBufferView<'_>,
        point: SamplePoint,
    ) -> Result<NamedColor> {
        let sample = self.sampler.sample(view, point)?;
        let smoothed = self.smoother.push(sample);
        trace!(
            "sample {} smoothed {} over {} frames",
            sample.to_hex(),
            smoothed.to_hex(),
            self.smoother.len()
        );
        Ok(describe(smoothed))
    }

    /// Forget the history, e.g. when the camera is pointed somewhere new
    pub fn reset(&mut self) {
        self.smoother.reset();
    }

    pub fn smoothed(&self) -> Option<ColorSample> {
        self.smoother.smoothed()
    }

    pub fn history_len(&self) -> usize {
        self.smoother.len()
    }
}

/// Rate limiter for per-frame work
///
/// An update is accepted when strictly more than `interval` has passed since
/// the last accepted one. The first call is always accepted, and a zero
/// interval accepts every call.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether an update at `now` is due, without recording it
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last {
            None => true,
            Some(_) if self.interval.is_zero() => true,
            Some(last) => now.saturating_duration_since(last) > self.interval,
        }
    }

    /// Record an update made at `now`
    pub fn mark(&mut self, now: Instant) {
        self.last = Some(now);
    }

    /// Whether an update at `now` is due; records `now` when it is
    pub fn ready(&mut self, now: Instant) -> bool {
        let due = self.is_due(now);
        if due {
            self.mark(now);
        }
        due
    }

    /// Accept the next update immediately
    pub fn reset(&mut self) {
        self.last = None;
    }
}
