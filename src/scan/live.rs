//! Background worker for camera-rate scanning
//!
//! Capture callbacks must never wait on color work. [`LiveScanner`] owns a
//! [`ScanPipeline`] on a dedicated thread: frames are offered through a
//! bounded queue and dropped when the worker is busy, and each result
//! overwrites a single shared slot that the display side polls.

use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use tracing::{debug, info, trace, warn};

use super::pipeline::{ScanPipeline, Throttle};
use super::ScanReading;
use crate::config::ScanConfig;
use crate::frame::{Frame, PixelFormat};
use crate::{AnalysisError, NamedColor, Result};

const WORKER_NAME: &str = "chroma-scan-worker";

#[derive(Debug)]
enum Command {
    Frame(Frame),
    Reset,
    Stop,
}

#[derive(Debug, Default)]
struct Slot {
    value: Option<ScanReading>,
    sequence: u64,
}

/// Single-slot cell holding the most recent reading
///
/// Clones share the same slot. Publishing overwrites whatever was there, so
/// a reader only ever sees the newest reading.
#[derive(Debug, Clone, Default)]
pub struct LatestReading {
    slot: Arc<Mutex<Slot>>,
}

impl LatestReading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a reading and return its sequence number
    pub fn publish(&self, color: NamedColor) -> u64 {
        let mut slot = self.lock();
        slot.sequence += 1;
        let sequence = slot.sequence;
        slot.value = Some(ScanReading { color, sequence });
        sequence
    }

    pub fn latest(&self) -> Option<ScanReading> {
        self.lock().value.clone()
    }

    /// Number of readings published so far
    pub fn sequence(&self) -> u64 {
        self.lock().sequence
    }

    /// Drop the current reading; the sequence keeps counting
    pub fn clear(&self) {
        self.lock().value = None;
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        // A panic mid-publish cannot leave the slot half-written
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle to a running scan worker
///
/// Dropping the handle stops the worker and waits for it to exit.
#[derive(Debug)]
pub struct LiveScanner {
    sender: Option<SyncSender<Command>>,
    handle: Option<JoinHandle<()>>,
    latest: LatestReading,
    pixel_format: PixelFormat,
}

impl LiveScanner {
    /// Start a worker thread for the given configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an invalid configuration and
    /// `WorkerError` if the thread cannot be started
    pub fn spawn(config: &ScanConfig) -> Result<Self> {
        let pipeline = ScanPipeline::new(config)?;
        let throttle = Throttle::new(config.smoothing.update_interval());
        let latest = LatestReading::new();
        let (sender, receiver) = mpsc::sync_channel(config.worker.frame_queue);

        let worker_latest = latest.clone();
        let handle = thread::Builder::new()
            .name(WORKER_NAME.to_string())
            .spawn(move || run_worker(pipeline, throttle, receiver, worker_latest))
            .map_err(|e| AnalysisError::WorkerError {
                reason: format!("failed to start {}: {}", WORKER_NAME, e),
            })?;

        info!(
            "Live scanning started (window {}px, history {}, interval {}ms)",
            config.sampling.live_window,
            config.smoothing.history_length,
            config.smoothing.update_interval_ms
        );

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
            latest,
            pixel_format: config.sampling.pixel_format,
        })
    }

    /// Offer a frame to the worker without blocking
    ///
    /// Returns `false` if the frame was dropped because the worker is busy
    /// or has stopped.
    pub fn submit(&self, frame: Frame) -> bool {
        let Some(sender) = &self.sender else {
            return false;
        };
        match sender.try_send(Command::Frame(frame)) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                trace!("Worker busy, frame dropped");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!("Worker has exited, frame dropped");
                false
            }
        }
    }

    /// Offer raw camera bytes in the configured pixel format
    pub fn submit_bytes(&self, data: Vec<u8>, width: u32, height: u32, bytes_per_row: usize) -> bool {
        self.submit(Frame::new(data, width, height, bytes_per_row, self.pixel_format))
    }

    /// Start a fresh reading: clears the history and the current reading
    ///
    /// Frames queued before the call are still processed first.
    ///
    /// # Errors
    ///
    /// Returns `WorkerError` if the worker has stopped
    pub fn restart(&self) -> Result<()> {
        self.latest.clear();
        self.send(Command::Reset)
    }

    pub fn latest(&self) -> Option<ScanReading> {
        self.latest.latest()
    }

    /// Current color, or the placeholder before anything was read
    pub fn latest_or_placeholder(&self) -> NamedColor {
        self.latest()
            .map(|reading| reading.color)
            .unwrap_or_else(NamedColor::placeholder)
    }

    /// Shared slot for display code running on another thread
    pub fn readings(&self) -> LatestReading {
        self.latest.clone()
    }

    /// Stop the worker and wait for it to exit
    ///
    /// # Errors
    ///
    /// Returns `WorkerError` if the worker thread panicked
    pub fn shutdown(mut self) -> Result<()> {
        self.stop()
    }

    fn send(&self, command: Command) -> Result<()> {
        let sender = self.sender.as_ref().ok_or_else(|| AnalysisError::WorkerError {
            reason: "scanner is shut down".to_string(),
        })?;
        sender.send(command).map_err(|_| AnalysisError::WorkerError {
            reason: "worker has exited".to_string(),
        })
    }

    fn stop(&mut self) -> Result<()> {
        if let Some(sender) = self.sender.take() {
            // The worker may already be gone
            let _ = sender.send(Command::Stop);
        }
        if let Some(handle) = self.handle.take() {
            handle.join().map_err(|_| AnalysisError::WorkerError {
                reason: "worker panicked".to_string(),
            })?;
        }
        Ok(())
    }
}

impl Drop for LiveScanner {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            warn!("{}", e);
        }
    }
}

fn run_worker(
    mut pipeline: ScanPipeline,
    mut throttle: Throttle,
    receiver: Receiver<Command>,
    latest: LatestReading,
) {
    for command in receiver {
        match command {
            Command::Frame(frame) => {
                if !throttle.is_due(frame.captured_at) {
                    trace!("Frame throttled");
                    continue;
                }
                match frame.view().and_then(|view| pipeline.process(&view)) {
                    Ok(color) => {
                        debug!("Reading: {} ({})", color.name, color.hex);
                        latest.publish(color);
                        throttle.mark(frame.captured_at);
                    }
                    Err(e) if e.is_recoverable() => trace!("Frame skipped: {}", e),
                    Err(e) => warn!("Invalid frame: {}", e),
                }
            }
            Command::Reset => {
                pipeline.reset();
                throttle.reset();
                latest.clear();
                info!("Live scanning restarted");
            }
            Command::Stop => break,
        }
    }
    info!("Live scanning stopped");
}
