//! Template matching data types
use std::fmt;

use image::RgbImage;

/// The reference bitmap being searched for, loaded once per search call
#[derive(Clone, Debug)]
pub struct Template {
    /// Display name, usually the file stem
    pub name: String,
    /// Pixel data, always 3-channel RGB
    pub pixels: RgbImage,
}

impl Template {
    pub fn new(name: impl Into<String>, pixels: RgbImage) -> Self {
        Self {
            name: name.into(),
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// An accepted match inside one monitor's capture, in physical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchRect {
    /// X offset inside the capture buffer
    pub x: u32,
    /// Y offset inside the capture buffer
    pub y: u32,
    /// Width of the resized template that matched
    pub width: u32,
    /// Height of the resized template that matched
    pub height: u32,
    /// Similarity score (0.0-1.0)
    pub score: f32,
    /// Template scale factor that produced the match
    pub scale: f64,
    /// Confidence threshold the score was accepted at
    pub confidence: f64,
}

/// Final answer of a search, in logical (pointer) coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// 1-based monitor the match was found on
    pub monitor_index: usize,
}

impl MatchResult {
    pub fn new(x: i32, y: i32, width: u32, height: u32, monitor_index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            monitor_index,
        }
    }

    /// Center point of the match, where a pointer should be placed
    pub fn center(&self) -> (i32, i32) {
        (
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }

    /// `(x, y, width, height, monitor_index)`
    pub fn as_tuple(&self) -> (i32, i32, u32, u32, usize) {
        (self.x, self.y, self.width, self.height, self.monitor_index)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at ({},{}) size=({}×{}) on monitor {}",
            self.x, self.y, self.width, self.height, self.monitor_index
        )
    }
}
