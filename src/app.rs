use dioxus::prelude::*;
use herogallery_core::Gallery;

use crate::actions::{listen_for_keys, refresh_catalog};
use crate::components::{HeroGrid, HeroModal, Toolbar};
use crate::context::{get_config, get_images_enabled};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and gallery context, kicks off the initial load
/// and lays out toolbar, grid and modal.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_config);
    let gallery: Signal<Gallery> = use_signal({
        let config = config.clone();
        move || Gallery::new(&config).with_images_enabled(get_images_enabled())
    });

    // Provide gallery context to all child components
    use_context_provider(|| gallery);
    use_context_provider({
        let config = config.clone();
        move || config
    });

    // Initial load on mount
    use_effect({
        let config = config.clone();
        move || refresh_catalog(gallery, config.clone())
    });

    // Global Escape handling
    use_future(move || listen_for_keys(gallery));

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "gallery-app",
            header { class: "gallery-header",
                h1 { class: "page-title", "Hero Gallery" }
                Toolbar {}
            }
            HeroGrid {}
            HeroModal {}
        }
    }
}
