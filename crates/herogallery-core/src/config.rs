//! Gallery configuration.
//!
//! Every tunable the gallery uses lives here, with defaults matching the
//! public Mobile Legends endpoints. A JSON file may override any subset of
//! fields; missing fields keep their defaults.
//!
//! ```json
//! {
//!   "sources": ["http://localhost:8080/heroes.json"],
//!   "aliases": { "name": ["name", "displayName"] }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GalleryError, GalleryResult};
use crate::modal::TiltSensitivity;
use crate::normalize::FieldAliases;

/// Candidate catalog endpoints, highest priority first
pub const DEFAULT_SOURCES: &[&str] = &[
    "https://mlbb-wiki-api.vercel.app/api/heroes",
    "https://raw.githubusercontent.com/p3hndrx/MLBB-API/main/sample%20data/hero-data.json",
];

/// Generic image shown whenever no usable image exists
pub const DEFAULT_PLACEHOLDER: &str =
    "https://via.placeholder.com/512x720.png?text=MLBB+Hero+%F0%9F%8E%AE";

/// Wiki page prefix; the URL-encoded name is appended
pub const DEFAULT_WIKI_BASE: &str = "https://mobile-legends.fandom.com/wiki/";

/// Image CDN prefix; `<slug>.png` is appended
pub const DEFAULT_IMAGE_CDN_BASE: &str =
    "https://static.wikia.nocookie.net/mobile-legends/images/0/00/";

/// Gallery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// External sources in priority order
    pub sources: Vec<String>,
    /// Placeholder image URL
    pub placeholder_image: String,
    /// Wiki link prefix
    pub wiki_base: String,
    /// Image CDN prefix used for best-effort image guesses
    pub image_cdn_base: String,
    /// Per-field key aliases for the normalizer
    pub aliases: FieldAliases,
    /// Pointer tilt sensitivity for the detail modal
    pub tilt: TiltSensitivity,
    /// Delay before the modal entry animation flag is applied
    pub animate_in_delay_ms: u64,
    /// How long the status line stays up after an API load
    pub status_hide_ms_api: u64,
    /// How long the status line stays up after falling back
    pub status_hide_ms_fallback: u64,
    /// Voice playback volume (0.0 - 1.0)
    pub voice_volume: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            placeholder_image: DEFAULT_PLACEHOLDER.to_string(),
            wiki_base: DEFAULT_WIKI_BASE.to_string(),
            image_cdn_base: DEFAULT_IMAGE_CDN_BASE.to_string(),
            aliases: FieldAliases::default(),
            tilt: TiltSensitivity::default(),
            animate_in_delay_ms: 10,
            status_hide_ms_api: 900,
            status_hide_ms_fallback: 1200,
            voice_volume: 0.85,
        }
    }
}

impl GalleryConfig {
    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::Io` if the file cannot be read,
    /// `GalleryError::Json` if it is not valid JSON, and
    /// `GalleryError::Config` if the values are out of range.
    pub fn load(path: impl AsRef<Path>) -> GalleryResult<Self> {
        let path = path.as_ref();
        debug!(?path, "Loading gallery config");
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        info!(?path, sources = config.sources.len(), "Loaded gallery config");
        Ok(config)
    }

    /// Load from `path` if given, else from the default location if a file
    /// exists there, else use defaults.
    pub fn load_or_default(path: Option<&Path>) -> GalleryResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Replace the source list (used by `--source` overrides).
    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    /// Check values that serde alone cannot.
    pub fn validate(&self) -> GalleryResult<()> {
        if self.placeholder_image.trim().is_empty() {
            return Err(GalleryError::Config(
                "placeholder_image must not be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.voice_volume) {
            return Err(GalleryError::Config(format!(
                "voice_volume must be within 0.0..=1.0, got {}",
                self.voice_volume
            )));
        }
        if self.aliases.name.is_empty() {
            return Err(GalleryError::Config(
                "aliases.name needs at least one key".to_string(),
            ));
        }
        Ok(())
    }
}

/// `<config dir>/herogallery/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("herogallery").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.animate_in_delay_ms, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"sources": ["http://localhost:9/heroes"]}}"#).unwrap();

        let config = GalleryConfig::load(file.path()).unwrap();
        assert_eq!(config.sources, vec!["http://localhost:9/heroes".to_string()]);
        assert_eq!(config.placeholder_image, DEFAULT_PLACEHOLDER);
        assert_eq!(config.aliases, FieldAliases::default());
    }

    #[test]
    fn test_invalid_volume_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"voice_volume": 3.0}}"#).unwrap();

        let err = GalleryConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, GalleryError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GalleryConfig::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, GalleryError::Io(_)));
    }
}
