//! Toolbar Component
//!
//! Refresh and images-toggle controls plus the transient status line.

use dioxus::prelude::*;

use crate::actions::refresh_catalog;
use crate::context::{use_config, use_gallery};

#[component]
pub fn Toolbar() -> Element {
    let mut gallery = use_gallery();
    let config = use_config();

    let (loading, images_label, status) = {
        let g = gallery.read();
        (g.is_loading(), g.images_label(), g.status().map(str::to_string))
    };

    let on_refresh = move |_: MouseEvent| refresh_catalog(gallery, config.clone());

    // Re-renders the grid from the same catalog; nothing is reloaded
    let on_toggle_images = move |_: MouseEvent| {
        gallery.write().toggle_images();
    };

    rsx! {
        div { class: "toolbar",
            button {
                class: "btn-primary",
                onclick: on_refresh,
                disabled: loading,
                if loading { "Loading..." } else { "Refresh" }
            }
            button {
                class: "btn-secondary",
                onclick: on_toggle_images,
                "{images_label}"
            }
            if let Some(status) = status {
                div { class: "toolbar__status", role: "status", "{status}" }
            }
        }
    }
}
