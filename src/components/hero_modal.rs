//! Hero Detail Modal Component
//!
//! Overlay showing one hero's detail on a card that tilts toward the
//! pointer. All state lives in the gallery's `DetailModal`; this component
//! only renders it and forwards events.

use std::rc::Rc;

use dioxus::prelude::*;
use herogallery_core::Rect;

use crate::actions::play_voice;
use crate::context::use_gallery;

/// Detail modal for the currently open hero
///
/// Closes on the close button, a backdrop click, or Escape (handled
/// globally by the app).
#[component]
pub fn HeroModal() -> Element {
    let mut gallery = use_gallery();
    let mut card_ref: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut card_rect: Signal<Rect> = use_signal(Rect::default);

    let (view, animated, transform) = {
        let g = gallery.read();
        let modal = g.modal();
        (
            modal.view().cloned(),
            modal.is_animated(),
            modal.tilt().css_transform(),
        )
    };

    let Some(view) = view else {
        return rsx! {
            div { class: "hero-modal", "aria-hidden": "true" }
        };
    };

    // Refresh the cached surface rect; pointer moves read it synchronously
    let measure = move || {
        spawn(async move {
            let Some(card) = card_ref.read().clone() else {
                return;
            };
            match card.get_client_rect().await {
                Ok(r) => card_rect.set(Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height)),
                Err(e) => tracing::debug!(error = ?e, "Could not measure modal card"),
            }
        });
    };

    let handle_close = move |_: MouseEvent| gallery.write().close();

    let on_pointer_move = move |e: PointerEvent| {
        let point = e.client_coordinates();
        let rect = card_rect();
        gallery.write().modal_mut().pointer_move(point.x, point.y, rect);
    };

    let on_pointer_leave = move |_: PointerEvent| {
        gallery.write().modal_mut().pointer_leave();
    };

    let on_image_error = move |_| {
        gallery.write().modal_mut().image_failed();
    };

    let voice = view.voice.clone();
    let voice_name = view.name.clone();
    let on_play_voice = move |_: MouseEvent| play_voice(voice.clone(), voice_name.clone());

    let animate_class = if animated { "animate-in" } else { "" };
    let measure_on_enter = measure;

    rsx! {
        div {
            class: "hero-modal",
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": "false",
            "aria-label": "{view.name}",

            div { class: "hero-modal__backdrop", onclick: handle_close }

            div {
                class: "hero-modal__card open {animate_class}",
                tabindex: "-1",
                onmounted: move |e: MountedEvent| {
                    let data = e.data();
                    card_ref.set(Some(data.clone()));
                    spawn(async move {
                        let _ = data.set_focus(true).await;
                    });
                    measure();
                },
                onpointerenter: move |_| measure_on_enter(),
                onpointermove: on_pointer_move,
                onpointerleave: on_pointer_leave,

                button {
                    class: "hero-modal__close",
                    onclick: handle_close,
                    "aria-label": "Close",
                    "×"
                }

                div { class: "card3d", style: "transform: {transform};",
                    div { class: "card-front",
                        img {
                            class: "hero-modal__img",
                            src: "{view.image.src()}",
                            alt: "{view.name}",
                            onerror: on_image_error,
                        }
                        div { class: "hero-modal__info",
                            h2 { class: "hero-modal__name", "{view.name}" }
                            p { class: "hero-modal__role", "{view.role_label}" }
                            p { class: "hero-modal__desc", "{view.description}" }

                            div { class: "modal-actions",
                                button {
                                    class: "btn-primary",
                                    onclick: on_play_voice,
                                    "▶ Play Voice"
                                }
                                a {
                                    class: "btn-secondary",
                                    href: "{view.wiki}",
                                    target: "_blank",
                                    rel: "noopener",
                                    "Open Wiki"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
