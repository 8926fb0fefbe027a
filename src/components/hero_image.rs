//! Hero Image
//!
//! Displays an unverified image hint and swaps to the placeholder when the
//! webview reports a load error.

use dioxus::prelude::*;
use herogallery_core::{GalleryError, ImageSlot};

/// Lazily decoded image with placeholder fallback
///
/// Each mount owns its slot, so parents should key this component by the
/// slot's source to reset it when the source changes.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     HeroImage {
///         slot: ImageSlot::new("https://cdn.example/miya.png", PLACEHOLDER),
///         alt: "Miya".to_string(),
///     }
/// }
/// ```
#[component]
pub fn HeroImage(
    /// Image hint plus placeholder
    slot: ImageSlot,
    /// Alt text for accessibility
    alt: String,
    /// Optional CSS class
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let mut current = use_signal(|| slot.clone());

    let on_error = move |_| {
        let hint = current.read().hint().to_string();
        if current.write().mark_failed() {
            tracing::debug!(error = %GalleryError::ImageUnreachable(hint), "Using placeholder");
        }
    };

    let css_class = class.unwrap_or_else(|| "hero-image".to_string());
    let src = current.read().src().to_string();

    rsx! {
        img {
            class: "{css_class}",
            src: "{src}",
            alt: "{alt}",
            "loading": "lazy",
            "decoding": "async",
            onerror: on_error,
        }
    }
}
