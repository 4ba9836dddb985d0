// Debug screenshots, one PNG per monitor
use std::path::{Path, PathBuf};

use super::error::{CaptureError, CaptureResult};
use super::types::ScreenSource;

/// File name used for the debug grab of monitor `index` (1-based).
pub fn dump_file_name(index: usize) -> String {
    format!("screen{index}.png")
}

/// Capture every monitor and save it as `screen{N}.png` inside `dir`.
///
/// Returns the written paths in monitor order.
pub fn dump_monitors<S: ScreenSource>(source: &S, dir: &Path) -> CaptureResult<Vec<PathBuf>> {
    let monitors = source.list_monitors()?;
    let mut written = Vec::with_capacity(monitors.len());

    for monitor in &monitors {
        let capture = source.capture_monitor(monitor)?;
        let path = dir.join(dump_file_name(monitor.index));
        capture
            .save(&path)
            .map_err(|source| CaptureError::DumpFailed {
                path: path.clone(),
                source,
            })?;
        log::info!(
            "🖥 Saved debug screenshot of monitor {} ({}x{}) → {}",
            monitor.index,
            capture.width(),
            capture.height(),
            path.display()
        );
        written.push(path);
    }

    Ok(written)
}
