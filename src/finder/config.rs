//! Configuration for a search call

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{FinderError, FinderResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Confidence the caller asked for; always part of the ladder (0.0 to 1.0)
    pub base_confidence: f64,
    /// Overall deadline in seconds; `None` or non-positive means unbounded
    pub timeout_secs: Option<f64>,
    /// Pause between monitors, in seconds
    pub poll_interval_secs: f64,
    /// Attempt budget for each monitor
    pub max_attempts_per_monitor: usize,
    /// Lowest confidence the ladder relaxes to
    pub min_confidence: f64,
    /// Distance between confidence rungs
    pub confidence_step: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub scale_step: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            base_confidence: 0.80,
            timeout_secs: Some(10.0),
            poll_interval_secs: 0.50,
            max_attempts_per_monitor: 20,
            min_confidence: 0.30,
            confidence_step: 0.05,
            min_scale: 0.80,
            max_scale: 1.20,
            scale_step: 0.10,
        }
    }
}

impl SearchParams {
    /// Load from a TOML file; missing keys keep their defaults
    pub fn from_toml_file(path: &Path) -> FinderResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| FinderError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| FinderError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_base_confidence(mut self, confidence: f64) -> Self {
        self.base_confidence = confidence;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: Option<f64>) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_poll_interval_secs(mut self, secs: f64) -> Self {
        self.poll_interval_secs = secs;
        self
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts_per_monitor = attempts;
        self
    }

    /// Deadline for the whole search, `None` when unbounded
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .map(Duration::from_secs_f64)
    }

    pub fn poll_interval(&self) -> Duration {
        if self.poll_interval_secs.is_finite() && self.poll_interval_secs > 0.0 {
            Duration::from_secs_f64(self.poll_interval_secs)
        } else {
            Duration::ZERO
        }
    }

    /// Human readable timeout for log lines
    pub fn timeout_label(&self) -> String {
        match self.timeout() {
            Some(limit) => format!("{}s", limit.as_secs_f64()),
            None => "∞".to_string(),
        }
    }

    pub fn validate(&self) -> FinderResult<()> {
        let invalid = |description: String| Err(FinderError::InvalidParams { description });

        for (name, value) in [
            ("base_confidence", self.base_confidence),
            ("min_confidence", self.min_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return invalid(format!("{name}={value} must be within [0, 1]"));
            }
        }
        if self.min_confidence > self.base_confidence {
            return invalid(format!(
                "min_confidence={} exceeds base_confidence={}",
                self.min_confidence, self.base_confidence
            ));
        }
        if !(self.confidence_step.is_finite() && self.confidence_step > 0.0) {
            return invalid(format!("confidence_step={} must be positive", self.confidence_step));
        }
        if !(self.scale_step.is_finite() && self.scale_step > 0.0) {
            return invalid(format!("scale_step={} must be positive", self.scale_step));
        }
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return invalid(format!("min_scale={} must be positive", self.min_scale));
        }
        if !(self.max_scale.is_finite() && self.max_scale >= self.min_scale) {
            return invalid(format!(
                "max_scale={} must be at least min_scale={}",
                self.max_scale, self.min_scale
            ));
        }
        if self.poll_interval_secs.is_nan() || self.poll_interval_secs < 0.0 {
            return invalid(format!(
                "poll_interval_secs={} must not be negative",
                self.poll_interval_secs
            ));
        }
        if self.max_attempts_per_monitor == 0 {
            return invalid("max_attempts_per_monitor must be at least 1".to_string());
        }
        Ok(())
    }
}
