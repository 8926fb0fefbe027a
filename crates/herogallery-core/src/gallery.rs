//! Gallery controller.
//!
//! Owns the published catalog, the images-enabled flag and the detail
//! modal. The UI holds one `Gallery` and drives it through an explicit
//! lifecycle:
//!
//! ```ignore
//! if gallery.begin_refresh() {
//!     let outcome = loader.load().await;
//!     gallery.finish_load(outcome);
//! }
//! let tiles = gallery.tiles();
//! gallery.open(3);
//! gallery.close();
//! ```
//!
//! Refresh requests arriving while a load is in flight are refused rather
//! than raced, so two overlapping loads can never publish out of order.

use tracing::{debug, info};

use crate::config::GalleryConfig;
use crate::grid::{project_tiles, Tile};
use crate::loader::{CatalogOrigin, LoadOutcome};
use crate::modal::DetailModal;
use crate::record::Record;

#[derive(Debug, Clone)]
pub struct Gallery {
    catalog: Vec<Record>,
    origin: Option<CatalogOrigin>,
    images_enabled: bool,
    loading: bool,
    status: Option<String>,
    status_generation: u64,
    modal: DetailModal,
    placeholder: String,
}

impl Gallery {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            catalog: Vec::new(),
            origin: None,
            images_enabled: true,
            loading: false,
            status: None,
            status_generation: 0,
            modal: DetailModal::new(
                config.tilt,
                config.placeholder_image.clone(),
                config.wiki_base.clone(),
                config.voice_volume,
            ),
            placeholder: config.placeholder_image.clone(),
        }
    }

    pub fn with_images_enabled(mut self, enabled: bool) -> Self {
        self.images_enabled = enabled;
        self
    }

    pub fn catalog(&self) -> &[Record] {
        &self.catalog
    }

    pub fn origin(&self) -> Option<&CatalogOrigin> {
        self.origin.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Generation of the status line published by the latest load.
    pub fn status_generation(&self) -> u64 {
        self.status_generation
    }

    /// Hide the status line published by load `generation`.
    ///
    /// Ignored while a load is in flight, and when a newer load has
    /// replaced the line since the timer was armed.
    pub fn clear_status(&mut self, generation: u64) {
        if self.loading || generation != self.status_generation {
            debug!(generation, current = self.status_generation, "Status hide ignored");
            return;
        }
        self.status = None;
    }

    /// Start a load. Returns `false` if one is already in flight.
    pub fn begin_refresh(&mut self) -> bool {
        if self.loading {
            debug!("Refresh ignored: load already in flight");
            return false;
        }
        self.loading = true;
        self.status = Some("Loading heroes...".to_string());
        true
    }

    /// Publish a finished load, replacing the catalog wholesale.
    ///
    /// The modal is closed because its index belonged to the old catalog.
    pub fn finish_load(&mut self, outcome: LoadOutcome) {
        self.status = Some(outcome.status_message());
        self.status_generation += 1;
        info!(count = outcome.records.len(), fallback = outcome.is_fallback(), "Publishing catalog");
        self.catalog = outcome.records;
        self.origin = Some(outcome.origin);
        self.loading = false;
        self.modal.invalidate();
    }

    pub fn images_enabled(&self) -> bool {
        self.images_enabled
    }

    /// Flip the images flag. The catalog is untouched; only the projection
    /// changes. Returns the new value.
    pub fn toggle_images(&mut self) -> bool {
        self.images_enabled = !self.images_enabled;
        debug!(enabled = self.images_enabled, "Images toggled");
        self.images_enabled
    }

    pub fn images_label(&self) -> &'static str {
        if self.images_enabled {
            "Images: ON"
        } else {
            "Images: OFF"
        }
    }

    /// Full tile projection of the current catalog.
    pub fn tiles(&self) -> Vec<Tile> {
        project_tiles(&self.catalog, self.images_enabled, &self.placeholder)
    }

    pub fn open(&mut self, index: usize) -> bool {
        self.modal.open(index, &self.catalog, self.images_enabled)
    }

    pub fn close(&mut self) {
        self.modal.close();
    }

    pub fn modal(&self) -> &DetailModal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut DetailModal {
        &mut self.modal
    }
}
