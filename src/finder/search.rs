//! Multi-monitor search driver
//!
//! `Init → PerMonitorScan → Found | Exhausted | TimedOut`. The deadline is
//! only checked between monitors; a scan in progress always runs to the end
//! of its ladder or budget.

use std::path::Path;
use std::time::Instant;

use image::RgbImage;
use log::Level;

use super::config::SearchParams;
use super::error::{FinderError, FinderResult};
use crate::log_sink::{DefaultLogSink, LogSink};
use crate::screen::{ScreenSource, XcapScreen};
use crate::template_matching::{
    MatchResult, MonitorScale, Template, TemplateMatcher, build_confidences, build_scales,
    to_logical,
};

/// Terminal state of a search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(MatchResult),
    /// Every monitor scanned without an acceptable match
    Exhausted,
    /// Deadline passed before all monitors were scanned
    TimedOut,
}

impl SearchOutcome {
    pub fn found(&self) -> Option<MatchResult> {
        match self {
            SearchOutcome::Found(result) => Some(*result),
            _ => None,
        }
    }
}

/// Read a template file into a 3-channel image
pub fn load_template(path: &Path) -> FinderResult<Template> {
    if !path.exists() {
        return Err(FinderError::TemplateNotFound {
            path: path.to_path_buf(),
        });
    }
    let decoded = image::open(path).map_err(|source| FinderError::TemplateDecode {
        path: path.to_path_buf(),
        source,
    })?;
    let pixels: RgbImage = decoded.to_rgb8();

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("template")
        .to_string();
    Ok(Template::new(name, pixels))
}

/// Search every monitor of `source` for the template at `template_path`.
///
/// Returns the typed outcome; input and capture problems are errors.
pub fn try_find_image<S, L>(
    source: &S,
    template_path: &Path,
    params: &SearchParams,
    sink: &L,
) -> FinderResult<SearchOutcome>
where
    S: ScreenSource + ?Sized,
    L: LogSink + ?Sized,
{
    params.validate()?;
    let template = load_template(template_path)?;

    let confidences = build_confidences(
        params.base_confidence,
        params.min_confidence,
        params.confidence_step,
    );
    let scales = build_scales(params.min_scale, params.max_scale, params.scale_step);
    let matcher = TemplateMatcher::new(&template.pixels, &scales);

    let monitors = source.list_monitors()?;
    sink.log(
        Level::Info,
        &format!(
            "🔍 Searching '{}' ({}×{}) base_conf={:.2} timeout={} monitors={}",
            template.name,
            template.width(),
            template.height(),
            params.base_confidence,
            params.timeout_label(),
            monitors.len()
        ),
    );

    let deadline = params.timeout();
    let started = Instant::now();

    for (position, monitor) in monitors.iter().enumerate() {
        if let Some(limit) = deadline
            && started.elapsed() >= limit
        {
            sink.log(
                Level::Info,
                &format!(
                    "⏱ Timeout reached after {:.2}s before scanning monitor {}",
                    started.elapsed().as_secs_f64(),
                    monitor.index
                ),
            );
            return Ok(SearchOutcome::TimedOut);
        }

        let capture = source.capture_monitor(monitor)?;
        let scale = MonitorScale::from_capture(monitor, capture.width(), capture.height())?;
        sink.log(
            Level::Info,
            &format!(
                "🖥 Monitor {} logical_bounds={} physical_size=({}×{}) scale=({:.2},{:.2})",
                monitor.index,
                monitor.bounds_label(),
                capture.width(),
                capture.height(),
                scale.x,
                scale.y
            ),
        );

        let attempt = matcher.match_in_monitor(
            &capture,
            &confidences,
            params.max_attempts_per_monitor,
            sink,
        );

        if let Some(rect) = attempt.rect {
            sink.log(
                Level::Info,
                &format!(
                    "✅ FOUND on monitor {} physical=({},{}) score={:.3} conf>={:.2} scale={:.2}",
                    monitor.index, rect.x, rect.y, rect.score, rect.confidence, rect.scale
                ),
            );
            let result = to_logical(monitor, scale, &rect);
            sink.log(Level::Info, &format!("➡ logical {result}"));
            return Ok(SearchOutcome::Found(result));
        }

        sink.log(
            Level::Info,
            &format!(
                "No match on monitor {} after {} attempts (best score {:.3})",
                monitor.index, attempt.attempts, attempt.best_score
            ),
        );

        let poll = params.poll_interval();
        if position + 1 < monitors.len() && !poll.is_zero() {
            std::thread::sleep(poll);
        }
    }

    sink.log(Level::Info, "❌ No match found on any monitor");
    Ok(SearchOutcome::Exhausted)
}

/// Search with the default contract: any error is logged and reported as `None`.
pub fn find_image<S, L>(
    source: &S,
    template_path: &Path,
    params: &SearchParams,
    sink: &L,
) -> Option<MatchResult>
where
    S: ScreenSource + ?Sized,
    L: LogSink + ?Sized,
{
    match try_find_image(source, template_path, params, sink) {
        Ok(outcome) => outcome.found(),
        Err(e) => {
            sink.log(Level::Error, &format!("❌ {e}"));
            None
        }
    }
}

/// Search the real displays, logging through the `log` facade.
pub fn find_image_on_screen(template_path: &Path, params: &SearchParams) -> Option<MatchResult> {
    find_image(&XcapScreen::new(), template_path, params, &DefaultLogSink)
}
