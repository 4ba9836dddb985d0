/// Template matching module for locating a template inside monitor captures
///
/// This module provides:
/// - Deterministic scale and confidence ladders
/// - A per-monitor ladder matcher with an attempt budget
/// - Physical to logical coordinate conversion for HiDPI monitors
pub mod coords;
pub mod ladder;
pub mod matcher;
pub mod types;

pub use coords::{MonitorScale, to_logical};
pub use ladder::{build_confidences, build_scales};
pub use matcher::{MatchAttempt, TemplateMatcher};
pub use types::{MatchRect, MatchResult, Template};
