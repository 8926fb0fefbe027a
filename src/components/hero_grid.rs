//! Hero Grid Component
//!
//! Projects the whole catalog into focusable tiles. Every render rebuilds
//! the tile list from the gallery; there is no diffing beyond Dioxus keys.

use dioxus::prelude::*;
use herogallery_core::Tile;

use super::HeroImage;
use crate::actions::open_hero;
use crate::context::{use_config, use_gallery};

/// Thumbnail grid of every hero in the catalog
#[component]
pub fn HeroGrid() -> Element {
    let gallery = use_gallery();
    let (tiles, loading) = {
        let g = gallery.read();
        (g.tiles(), g.is_loading())
    };

    if tiles.is_empty() {
        return rsx! {
            div { class: "hero-grid__empty",
                if loading { "Loading heroes..." } else { "No heroes to show." }
            }
        };
    }

    rsx! {
        div { class: "hero-grid", role: "list",
            for tile in tiles {
                HeroTile {
                    key: "{tile.index}-{tile.image.src()}",
                    tile: tile.clone(),
                }
            }
        }
    }
}

/// One clickable, keyboard-activatable tile
#[component]
pub fn HeroTile(tile: Tile) -> Element {
    let gallery = use_gallery();
    let config = use_config();
    let index = tile.index;

    let open = move || open_hero(gallery, &config, index);
    let open_on_key = open.clone();

    rsx! {
        div {
            class: "hero-tile",
            role: "listitem",
            tabindex: "0",
            "data-index": "{index}",
            onclick: move |_| open(),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Enter {
                    open_on_key();
                }
            },

            HeroImage {
                slot: tile.image.clone(),
                alt: tile.alt().to_string(),
                class: Some("hero-tile__img".to_string()),
            }
            div { class: "hero-tile__name", "{tile.name}" }
        }
    }
}
