// Screen module - monitor enumeration and per-monitor capture
// Coordinates of `MonitorInfo` are logical; captured buffers are physical pixels.

pub mod dump;
pub mod error;
pub mod types;
pub mod xcap_impl;

#[cfg(test)]
pub mod fake;

#[cfg(test)]
mod tests;

pub use dump::{dump_file_name, dump_monitors};
pub use error::{CaptureError, CaptureResult};
pub use types::{MonitorInfo, ScreenSource};
pub use xcap_impl::XcapScreen;
