// Monitor descriptors and the capture capability
use image::RgbImage;

use super::error::CaptureResult;

/// One physical display, in logical (pointer) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorInfo {
    /// 1-based position in enumeration order, stable for one search call
    pub index: usize,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub is_primary: bool,
}

impl MonitorInfo {
    pub fn new(index: usize, x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            index,
            name: format!("monitor-{index}"),
            x,
            y,
            width,
            height,
            is_primary: index == 1,
        }
    }

    /// Exclusive bottom-right corner of the logical bounds
    pub fn bottom_right(&self) -> (i32, i32) {
        (self.x + self.width as i32, self.y + self.height as i32)
    }

    pub fn bounds_label(&self) -> String {
        let (right, bottom) = self.bottom_right();
        format!("({},{})..({},{})", self.x, self.y, right, bottom)
    }
}

// Trait defining display capabilities (real OS capture or in-memory fakes)
pub trait ScreenSource {
    /// Real monitors only, in a stable order, indexed from 1.
    fn list_monitors(&self) -> CaptureResult<Vec<MonitorInfo>>;

    /// Fresh grab of one monitor in physical pixels, alpha dropped.
    fn capture_monitor(&self, monitor: &MonitorInfo) -> CaptureResult<RgbImage>;
}
