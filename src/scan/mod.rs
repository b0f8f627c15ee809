//! Live color scanning
//!
//! Turns a stream of camera frames into a steady color reading:
//!
//! - [`TemporalSmoother`]: moving average over the last few samples
//! - [`ScanPipeline`]: sample, smooth and name one frame
//! - [`Throttle`]: limits how often the pipeline runs
//! - [`LiveScanner`]: runs the pipeline on a worker thread

pub mod live;
pub mod pipeline;
pub mod smoother;

use serde::{Deserialize, Serialize};

use crate::NamedColor;

pub use live::{LatestReading, LiveScanner};
pub use pipeline::{ScanPipeline, Throttle};
pub use smoother::TemporalSmoother;

/// A published live reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReading {
    #[serde(flatten)]
    pub color: NamedColor,
    /// Increases by one with every published reading
    pub sequence: u64,
}
