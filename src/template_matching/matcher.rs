//! Per-monitor ladder search
//!
//! Correlation-based matching over a (confidence × scale) ladder with a
//! per-monitor attempt budget. First acceptable match wins.
//!
//! Scores are normalized cross-correlation over all three color channels,
//! so two regions with the same brightness but different colors differ.
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, RgbImage};
use imageproc::template_matching::{MatchTemplateMethod, match_template};
use log::Level;

use super::types::MatchRect;
use crate::log_sink::LogSink;

/// Scores this close below a threshold still pass (f32 correlation noise).
const SCORE_TOLERANCE: f64 = 1e-6;

/// Outcome of scanning one monitor
#[derive(Clone, Debug, PartialEq)]
pub struct MatchAttempt {
    /// Accepted match in physical pixels, if any
    pub rect: Option<MatchRect>,
    /// Budget units consumed, dimension skips included
    pub attempts: usize,
    /// Highest score observed on this monitor (0.0 when nothing was scanned)
    pub best_score: f32,
}

#[derive(Clone, Copy, Debug)]
struct Peak {
    x: u32,
    y: u32,
    score: f32,
}

struct ScaledTemplate {
    scale: f64,
    /// R, G and B planes of the resized template
    planes: [GrayImage; 3],
    /// Sum of squared values per plane
    energy: [f64; 3],
}

impl ScaledTemplate {
    fn new(template: &RgbImage, scale: f64) -> Self {
        let resized = if (scale - 1.0).abs() < 1e-9 {
            template.clone()
        } else {
            let width = scaled_dimension(template.width(), scale);
            let height = scaled_dimension(template.height(), scale);
            imageops::resize(template, width, height, FilterType::Triangle)
        };
        let planes = split_channels(&resized);
        let energy = std::array::from_fn(|c| {
            planes[c]
                .pixels()
                .map(|p| f64::from(p[0]) * f64::from(p[0]))
                .sum()
        });
        Self {
            scale,
            planes,
            energy,
        }
    }

    fn dimensions(&self) -> (u32, u32) {
        self.planes[0].dimensions()
    }
}

/// Template matcher holding one resized copy of the template per ladder scale
pub struct TemplateMatcher {
    scaled: Vec<ScaledTemplate>,
}

impl TemplateMatcher {
    /// Prepare the template at every scale, in ladder order
    pub fn new(template: &RgbImage, scales: &[f64]) -> Self {
        let scaled = scales
            .iter()
            .map(|&scale| ScaledTemplate::new(template, scale))
            .collect();
        Self { scaled }
    }

    /// Sizes of the prepared templates, in ladder order
    pub fn template_sizes(&self) -> Vec<(f64, u32, u32)> {
        self.scaled
            .iter()
            .map(|t| {
                let (width, height) = t.dimensions();
                (t.scale, width, height)
            })
            .collect()
    }

    /// Search one monitor's capture.
    ///
    /// Outer loop walks `confidences` (descending), inner loop walks the
    /// scales. Every (confidence, scale) pair costs one unit of
    /// `max_attempts`, including pairs skipped because the template does not
    /// fit the capture.
    pub fn match_in_monitor<L: LogSink + ?Sized>(
        &self,
        capture: &RgbImage,
        confidences: &[f64],
        max_attempts: usize,
        sink: &L,
    ) -> MatchAttempt {
        let haystack = split_channels(capture);
        let (hay_w, hay_h) = capture.dimensions();

        // The best location for a scale does not depend on the threshold,
        // so each scale is scanned at most once per monitor.
        let mut peaks: Vec<Option<Peak>> = vec![None; self.scaled.len()];
        let mut attempts = 0usize;
        let mut best_score = 0.0f32;

        for &confidence in confidences {
            for (i, template) in self.scaled.iter().enumerate() {
                if attempts >= max_attempts {
                    sink.log(
                        Level::Info,
                        &format!("🔚 Reached max attempts ({max_attempts}) on this monitor"),
                    );
                    return MatchAttempt {
                        rect: None,
                        attempts,
                        best_score,
                    };
                }
                attempts += 1;

                let (tpl_w, tpl_h) = template.dimensions();
                if tpl_w > hay_w || tpl_h > hay_h {
                    sink.log(
                        Level::Warn,
                        &format!(
                            "⚠️ [attempt {attempts:02}] skipping scale={:.2}: template ({tpl_w}×{tpl_h}) > capture ({hay_w}×{hay_h})",
                            template.scale
                        ),
                    );
                    continue;
                }

                let peak = *peaks[i].get_or_insert_with(|| best_location(&haystack, template));
                best_score = best_score.max(peak.score);
                sink.log(
                    Level::Info,
                    &format!(
                        "[attempt {attempts:02}] conf>={confidence:.2} scale={:.2} -> score={:.3}",
                        template.scale, peak.score
                    ),
                );

                if f64::from(peak.score) + SCORE_TOLERANCE >= confidence {
                    return MatchAttempt {
                        rect: Some(MatchRect {
                            x: peak.x,
                            y: peak.y,
                            width: tpl_w,
                            height: tpl_h,
                            score: peak.score,
                            scale: template.scale,
                            confidence,
                        }),
                        attempts,
                        best_score,
                    };
                }
            }
        }

        MatchAttempt {
            rect: None,
            attempts,
            best_score,
        }
    }
}

/// `floor(dimension * scale)`, at least one pixel
pub fn scaled_dimension(dimension: u32, scale: f64) -> u32 {
    ((f64::from(dimension) * scale + 1e-9).floor() as u32).max(1)
}

fn split_channels(image: &RgbImage) -> [GrayImage; 3] {
    let (width, height) = image.dimensions();
    std::array::from_fn(|c| GrayImage::from_fn(width, height, |x, y| Luma([image.get_pixel(x, y)[c]])))
}

/// Highest color normalized cross-correlation score, first in row-major order on ties.
///
/// `score = Σc Σ(I·T) / sqrt(Σc ΣT² · Σc ΣI²)`. The per-channel
/// correlations come from `CrossCorrelation`; window energies from
/// `SumOfSquaredErrors` against an all-zero template. Zero-energy windows
/// score 0.
fn best_location(haystack: &[GrayImage; 3], template: &ScaledTemplate) -> Peak {
    let (tpl_w, tpl_h) = template.dimensions();
    let zeros = GrayImage::new(tpl_w, tpl_h);
    let template_energy: f64 = template.energy.iter().sum();

    // channels the template leaves dark contribute nothing to the numerator
    let cross: Vec<_> = (0..3)
        .filter(|&c| template.energy[c] > 0.0)
        .map(|c| {
            match_template(
                &haystack[c],
                &template.planes[c],
                MatchTemplateMethod::CrossCorrelation,
            )
        })
        .collect();
    let window_energy: Vec<_> = haystack
        .iter()
        .map(|plane| match_template(plane, &zeros, MatchTemplateMethod::SumOfSquaredErrors))
        .collect();

    let mut best = Peak {
        x: 0,
        y: 0,
        score: 0.0,
    };
    let (out_w, out_h) = window_energy[0].dimensions();
    for y in 0..out_h {
        for x in 0..out_w {
            let numerator: f64 = cross.iter().map(|m| f64::from(m.get_pixel(x, y)[0])).sum();
            let window: f64 = window_energy
                .iter()
                .map(|m| f64::from(m.get_pixel(x, y)[0]))
                .sum();
            let denominator = (template_energy * window).sqrt();
            if denominator <= 0.0 || !numerator.is_finite() {
                continue;
            }
            let score = (numerator / denominator).clamp(0.0, 1.0) as f32;
            if score > best.score {
                best = Peak { x, y, score };
            }
        }
    }
    best
}
