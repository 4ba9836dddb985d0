use std::path::PathBuf;
use thiserror::Error;

use crate::screen::CaptureError;

/// A specialized `Result` type for search operations.
pub type FinderResult<T> = Result<T, FinderError>;

/// The error type for a search call and its inputs.
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("Template not found: {path:?}")]
    TemplateNotFound { path: PathBuf },

    #[error("Could not decode template {path:?}: {source}")]
    TemplateDecode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Invalid search parameters: {description}")]
    InvalidParams { description: String },

    #[error("{source}")]
    Capture {
        #[from]
        source: CaptureError,
    },

    #[error("Failed to read search config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse search config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl FinderError {
    /// Input errors: the caller handed us something unusable
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            FinderError::TemplateNotFound { .. }
                | FinderError::TemplateDecode { .. }
                | FinderError::InvalidParams { .. }
                | FinderError::ConfigRead { .. }
                | FinderError::ConfigParse { .. }
        )
    }
}
