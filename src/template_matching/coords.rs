//! Physical → logical coordinate conversion
//!
//! Captures come back in physical pixels while pointer APIs expect logical
//! units. Each monitor has its own ratio, independently per axis.

use super::types::{MatchRect, MatchResult};
use crate::screen::{CaptureError, CaptureResult, MonitorInfo};

/// Physical pixels per logical unit for one monitor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonitorScale {
    pub x: f64,
    pub y: f64,
}

impl MonitorScale {
    /// `captured dimension / logical dimension`, per axis
    pub fn from_capture(
        monitor: &MonitorInfo,
        capture_width: u32,
        capture_height: u32,
    ) -> CaptureResult<Self> {
        if monitor.width == 0 || monitor.height == 0 || capture_width == 0 || capture_height == 0 {
            return Err(CaptureError::InvalidBuffer {
                index: monitor.index,
                width: capture_width,
                height: capture_height,
            });
        }
        Ok(Self {
            x: f64::from(capture_width) / f64::from(monitor.width),
            y: f64::from(capture_height) / f64::from(monitor.height),
        })
    }

    pub fn is_identity(&self) -> bool {
        (self.x - 1.0).abs() < 1e-9 && (self.y - 1.0).abs() < 1e-9
    }
}

/// Convert a match inside `monitor`'s capture into global logical coordinates.
///
/// The logical origin is first scaled into physical space, the capture
/// offset is added there, and the sum is divided back by the axis scale.
pub fn to_logical(monitor: &MonitorInfo, scale: MonitorScale, rect: &MatchRect) -> MatchResult {
    let phys_x = f64::from(monitor.x) * scale.x + f64::from(rect.x);
    let phys_y = f64::from(monitor.y) * scale.y + f64::from(rect.y);

    MatchResult {
        x: (phys_x / scale.x).round() as i32,
        y: (phys_y / scale.y).round() as i32,
        width: (f64::from(rect.width) / scale.x).round() as u32,
        height: (f64::from(rect.height) / scale.y).round() as u32,
        monitor_index: monitor.index,
    }
}
