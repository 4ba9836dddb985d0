// Real display access through the xcap crate.
// Every call opens its own monitor handles and drops them before returning.
use image::{DynamicImage, RgbImage, RgbaImage};
use xcap::Monitor;

use super::error::{CaptureError, CaptureResult};
use super::types::{MonitorInfo, ScreenSource};

#[derive(Debug, Default, Clone, Copy)]
pub struct XcapScreen;

impl XcapScreen {
    pub fn new() -> Self {
        Self
    }

    fn all_monitors() -> CaptureResult<Vec<Monitor>> {
        let monitors = Monitor::all().map_err(|e| CaptureError::Unavailable {
            description: format!("Failed to enumerate monitors: {e}"),
        })?;
        if monitors.is_empty() {
            return Err(CaptureError::NoMonitors);
        }
        Ok(monitors)
    }

    fn describe(index: usize, monitor: &Monitor) -> MonitorInfo {
        MonitorInfo {
            index,
            name: monitor.name().to_string(),
            x: monitor.x(),
            y: monitor.y(),
            width: monitor.width(),
            height: monitor.height(),
            is_primary: monitor.is_primary(),
        }
    }
}

impl ScreenSource for XcapScreen {
    fn list_monitors(&self) -> CaptureResult<Vec<MonitorInfo>> {
        // xcap only reports real displays, there is no stitched "all monitors" entry to skip
        let monitors = Self::all_monitors()?;
        Ok(monitors
            .iter()
            .enumerate()
            .map(|(i, m)| Self::describe(i + 1, m))
            .collect())
    }

    fn capture_monitor(&self, monitor: &MonitorInfo) -> CaptureResult<RgbImage> {
        let monitors = Self::all_monitors()?;
        let target = monitors
            .get(monitor.index.wrapping_sub(1))
            .filter(|m| m.x() == monitor.x && m.y() == monitor.y)
            .ok_or(CaptureError::MonitorGone {
                index: monitor.index,
            })?;

        let grab = target
            .capture_image()
            .map_err(|e| CaptureError::MonitorCaptureFailed {
                index: monitor.index,
                description: e.to_string(),
            })?;

        let (width, height) = (grab.width(), grab.height());
        // Rebuild through raw bytes so xcap's own `image` version never leaks into ours
        let rgba = RgbaImage::from_raw(width, height, grab.into_raw()).ok_or(
            CaptureError::InvalidBuffer {
                index: monitor.index,
                width,
                height,
            },
        )?;
        if width == 0 || height == 0 {
            return Err(CaptureError::InvalidBuffer {
                index: monitor.index,
                width,
                height,
            });
        }

        Ok(DynamicImage::ImageRgba8(rgba).to_rgb8())
    }
}
