//! Hero Gallery Core Library
//!
//! Catalog loading and detail-modal state for the hero gallery, kept free
//! of any UI toolkit so the desktop app and the CLI share one behavior.
//!
//! ## Overview
//!
//! - **Normalize** heterogeneous JSON payloads into [`Record`]s
//! - **Load** from prioritized sources, falling back to a bundled list
//! - **Resolve** missing images to best-effort CDN guesses
//! - **Project** the catalog into grid tiles
//! - **Drive** the detail modal (open, animate, tilt, close)
//!
//! ## Quick Start
//!
//! ```ignore
//! use herogallery_core::{CatalogLoader, Gallery, GalleryConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = GalleryConfig::default();
//!     let loader = CatalogLoader::from_config(&config);
//!     let mut gallery = Gallery::new(&config);
//!
//!     if gallery.begin_refresh() {
//!         gallery.finish_load(loader.load().await);
//!     }
//!     for tile in gallery.tiles() {
//!         println!("{}: {}", tile.index, tile.name);
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod fallback;
pub mod gallery;
pub mod grid;
pub mod image;
pub mod loader;
pub mod logging;
pub mod modal;
pub mod normalize;
pub mod record;
pub mod source;

// Re-exports
pub use config::GalleryConfig;
pub use error::{GalleryError, GalleryResult};
pub use fallback::{fallback_catalog, FALLBACK_HEROES};
pub use gallery::Gallery;
pub use grid::{project_tiles, Tile};
pub use image::{slugify, ImageResolver, ImageSlot};
pub use loader::{CatalogLoader, CatalogOrigin, LoadOutcome};
pub use modal::{
    tilt_from_pointer, voice_action, DetailModal, ModalState, ModalView, Rect, Tilt,
    TiltSensitivity, VoiceAction,
};
pub use normalize::{FieldAliases, Normalizer};
pub use record::Record;
pub use source::{http_sources, CatalogSource, HttpSource, StaticSource};
