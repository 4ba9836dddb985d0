//! Locate a template image on any connected monitor.
//!
//! Captures are taken per monitor in physical pixels, searched over a
//! (confidence × scale) ladder, and the hit is reported in logical units
//! ready for pointer placement.

pub mod args;
pub mod finder;
pub mod log_sink;
pub mod screen;
pub mod template_matching;

pub use finder::{
    FinderError, FinderResult, SearchOutcome, SearchParams, find_image, find_image_on_screen,
    try_find_image,
};
pub use log_sink::{DefaultLogSink, LogSink};
pub use screen::{MonitorInfo, ScreenSource, XcapScreen};
pub use template_matching::MatchResult;
