//! Search orchestration across all monitors
//!
//! Builds the ladders once per call, walks the monitors in enumeration
//! order under a deadline, and converts the first hit to logical units.

pub mod config;
pub mod error;
pub mod search;


pub use config::SearchParams;
pub use error::{FinderError, FinderResult};
pub use search::{
    SearchOutcome, find_image, find_image_on_screen, load_template, try_find_image,
};
