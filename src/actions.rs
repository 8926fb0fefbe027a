//! User actions that need async work or platform facilities.
//!
//! Components call these instead of touching the loader, timers, audio or
//! dialogs directly.

use std::time::Duration;

use dioxus::prelude::*;
use herogallery_core::{CatalogLoader, Gallery, GalleryConfig, GalleryError, VoiceAction};
use rfd::{MessageDialog, MessageLevel};

/// Re-run the full load and publish the result.
///
/// Ignored while a previous load is still in flight.
pub fn refresh_catalog(mut gallery: Signal<Gallery>, config: GalleryConfig) {
    if !gallery.write().begin_refresh() {
        return;
    }

    spawn(async move {
        let loader = CatalogLoader::from_config(&config);
        let outcome = loader.load().await;
        let hide_after = outcome.status_duration(&config);

        let generation = {
            let mut g = gallery.write();
            g.finish_load(outcome);
            g.status_generation()
        };

        tokio::time::sleep(hide_after).await;
        gallery.write().clear_status(generation);
    });
}

/// Open the detail modal at `index` and schedule its entry animation.
pub fn open_hero(mut gallery: Signal<Gallery>, config: &GalleryConfig, index: usize) {
    if !gallery.write().open(index) {
        return;
    }
    let generation = gallery.read().modal().generation();
    let delay = Duration::from_millis(config.animate_in_delay_ms);

    spawn(async move {
        tokio::time::sleep(delay).await;
        gallery.write().modal_mut().animate_in(generation);
    });
}

/// Play the voice line, or tell the user there is none.
///
/// Playback failures (autoplay policy, bad URL) are logged, never shown.
pub fn play_voice(action: VoiceAction, name: String) {
    match action {
        VoiceAction::Play { url, volume } => {
            let url_js = serde_json::to_string(&url).unwrap_or_else(|_| "\"\"".to_string());
            let script = format!(
                r#"
                try {{
                    const a = new Audio({url_js});
                    a.volume = {volume};
                    await a.play();
                    return "ok";
                }} catch (e) {{
                    return String(e);
                }}
                "#
            );
            spawn(async move {
                match document::eval(&script).await {
                    Ok(serde_json::Value::String(result)) if result == "ok" => {
                        tracing::debug!(hero = %name, "Voice playing");
                    }
                    Ok(other) => {
                        tracing::warn!(hero = %name, result = %other, "Voice play blocked");
                    }
                    Err(e) => {
                        tracing::warn!(hero = %name, error = ?e, "Voice play failed");
                    }
                }
            });
        }
        VoiceAction::Unavailable { message } => {
            tracing::info!(error = %GalleryError::AudioUnavailable(name), "No voice line");
            spawn(async move {
                // Native dialog blocks, keep it off the UI thread
                let shown = tokio::task::spawn_blocking(move || {
                    MessageDialog::new()
                        .set_level(MessageLevel::Info)
                        .set_title("Hero Gallery")
                        .set_description(message)
                        .show()
                })
                .await;
                if let Err(e) = shown {
                    tracing::warn!(error = %e, "Failed to show voice notice");
                }
            });
        }
    }
}

/// Forward every window-level keydown to the gallery.
///
/// Escape closes the modal no matter which element has focus.
pub async fn listen_for_keys(mut gallery: Signal<Gallery>) {
    let mut eval = document::eval(
        r#"
        window.addEventListener("keydown", (e) => dioxus.send(e.key));
        await new Promise(() => {});
        "#,
    );

    loop {
        match eval.recv::<String>().await {
            Ok(key) => {
                // Only take the write lock when there is something to close
                let open = gallery.read().modal().is_open();
                if open && gallery.write().modal_mut().handle_key(&key) {
                    tracing::debug!(%key, "Modal closed by key");
                }
            }
            Err(e) => {
                tracing::warn!(error = ?e, "Key listener stopped");
                break;
            }
        }
    }
}
