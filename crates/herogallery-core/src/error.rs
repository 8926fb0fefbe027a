//! Error types for Hero Gallery

use thiserror::Error;

/// Main error type for gallery operations.
///
/// None of these are fatal: the loader recovers from source failures by
/// moving on, and the UI recovers from image and audio failures in place.
#[derive(Error, Debug)]
pub enum GalleryError {
    /// A single catalog source failed (network, status, body or shape)
    #[error("Source unavailable ({source_label}): {reason}")]
    SourceUnavailable {
        source_label: String,
        reason: String,
    },

    /// Every configured source failed; the fallback catalog is used instead
    #[error("All catalog sources exhausted")]
    AllSourcesExhausted,

    /// An image URL could not be loaded
    #[error("Image unreachable: {0}")]
    ImageUnreachable(String),

    /// No voice line exists for the record, or playback failed to start
    #[error("Voice unavailable for {0}")]
    AudioUnavailable(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GalleryError {
    /// Shorthand for a [`GalleryError::SourceUnavailable`].
    pub fn source_unavailable(label: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            source_label: label.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;
