use crate::api::Catalog;
use crate::components::{AudioController, Icon, MusicPlayer};
use crate::playback::PlaybackController;
use crate::settings::PlayerSettings;
use dioxus::prelude::*;
use tracing::error;

#[component]
pub fn AppShell() -> Element {
    let catalog = use_hook(|| {
        Catalog::bundled().map_err(|err| {
            error!("Unable to load the playlist catalog: {}", err);
            err.to_string()
        })
    });

    match catalog {
        Ok(catalog) => rsx! {
            PlayerRoot { catalog }
        },
        Err(message) => rsx! {
            div { class: "catalog-error", role: "alert",
                Icon { name: "alert".to_string(), class: "icon-large".to_string() }
                h1 { "No music to play" }
                p { "{message}" }
            }
        },
    }
}

/// Owns the playback state for the session and shares it with the player tree.
#[component]
fn PlayerRoot(catalog: Catalog) -> Element {
    let controller = use_signal(move || PlaybackController::new(catalog, PlayerSettings::bundled()));
    use_context_provider(|| controller);

    rsx! {
        AudioController {}
        MusicPlayer {}
    }
}
