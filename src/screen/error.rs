use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for screen capture operations.
pub type CaptureResult<T> = Result<T, CaptureError>;

/// The error type for display enumeration and capture.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Screen capture API unavailable: {description}")]
    Unavailable { description: String },

    #[error("No monitors reported by the display API")]
    NoMonitors,

    #[error("Monitor {index} is no longer connected")]
    MonitorGone { index: usize },

    #[error("Capture of monitor {index} failed: {description}")]
    MonitorCaptureFailed { index: usize, description: String },

    #[error("Monitor {index} produced an unusable buffer ({width}x{height})")]
    InvalidBuffer { index: usize, width: u32, height: u32 },

    #[error("Failed to save debug screenshot {path:?}: {source}")]
    DumpFailed {
        path: PathBuf,
        source: image::ImageError,
    },
}
