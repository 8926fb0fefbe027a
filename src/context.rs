//! Gallery context provider for Hero Gallery.
//!
//! Provides the gallery controller and configuration to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(Gallery::new(&config)));
//! use_context_provider(|| config.clone());
//!
//! // In child components
//! let gallery = use_gallery();
//! let config = use_config();
//! ```

use dioxus::prelude::*;
use herogallery_core::{Gallery, GalleryConfig};

/// Get the gallery configuration set from command line args.
pub fn get_config() -> GalleryConfig {
    crate::get_config()
}

/// Whether the images toggle starts on.
pub fn get_images_enabled() -> bool {
    crate::get_images_enabled()
}

/// Hook to access the gallery controller from context.
///
/// The catalog, images flag and modal all live in this one signal, so
/// every mutation happens through it on the UI thread.
///
/// # Example
///
/// ```ignore
/// let mut gallery = use_gallery();
/// let tiles = gallery.read().tiles();
/// gallery.write().toggle_images();
/// ```
pub fn use_gallery() -> Signal<Gallery> {
    use_context::<Signal<Gallery>>()
}

/// Hook to access the gallery configuration.
pub fn use_config() -> GalleryConfig {
    use_context::<GalleryConfig>()
}
