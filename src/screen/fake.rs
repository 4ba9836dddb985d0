// In-memory display used by tests
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use image::{Rgb, RgbImage};

use super::error::{CaptureError, CaptureResult};
use super::types::{MonitorInfo, ScreenSource};

pub struct FakeScreen {
    monitors: Vec<(MonitorInfo, RgbImage)>,
    capture_delay: Duration,
    fail_capture_of: Option<usize>,
    unavailable: bool,
    captures: AtomicUsize,
}

impl FakeScreen {
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
            capture_delay: Duration::ZERO,
            fail_capture_of: None,
            unavailable: false,
            captures: AtomicUsize::new(0),
        }
    }

    /// Add a monitor at logical origin (x, y) whose physical buffer is `capture`.
    pub fn with_monitor(mut self, x: i32, y: i32, width: u32, height: u32, capture: RgbImage) -> Self {
        let index = self.monitors.len() + 1;
        self.monitors
            .push((MonitorInfo::new(index, x, y, width, height), capture));
        self
    }

    /// Add a monitor with a plain black buffer at 1:1 scale.
    pub fn with_blank_monitor(self, x: i32, y: i32, width: u32, height: u32) -> Self {
        self.with_monitor(x, y, width, height, RgbImage::from_pixel(width, height, Rgb([0, 0, 0])))
    }

    pub fn with_capture_delay(mut self, delay: Duration) -> Self {
        self.capture_delay = delay;
        self
    }

    pub fn failing_capture_of(mut self, index: usize) -> Self {
        self.fail_capture_of = Some(index);
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn capture_count(&self) -> usize {
        self.captures.load(Ordering::SeqCst)
    }
}

impl ScreenSource for FakeScreen {
    fn list_monitors(&self) -> CaptureResult<Vec<MonitorInfo>> {
        if self.unavailable {
            return Err(CaptureError::Unavailable {
                description: "fake display offline".to_string(),
            });
        }
        Ok(self.monitors.iter().map(|(info, _)| info.clone()).collect())
    }

    fn capture_monitor(&self, monitor: &MonitorInfo) -> CaptureResult<RgbImage> {
        self.captures.fetch_add(1, Ordering::SeqCst);
        if !self.capture_delay.is_zero() {
            std::thread::sleep(self.capture_delay);
        }
        if self.fail_capture_of == Some(monitor.index) {
            return Err(CaptureError::MonitorCaptureFailed {
                index: monitor.index,
                description: "injected failure".to_string(),
            });
        }
        self.monitors
            .iter()
            .find(|(info, _)| info.index == monitor.index)
            .map(|(_, capture)| capture.clone())
            .ok_or(CaptureError::MonitorGone {
                index: monitor.index,
            })
    }
}
