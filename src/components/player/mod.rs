use crate::components::{BrowserAudio, Icon};
use crate::playback::{shortcut_action, PlaybackController};
use dioxus::prelude::*;

mod controls;
mod playlist_picker;
mod scrub_bar;
mod track_strip;

use controls::TransportControls;
use playlist_picker::PlaylistPicker;
use scrub_bar::ScrubBar;
use track_strip::TrackStrip;

#[component]
pub fn MusicPlayer() -> Element {
    let mut controller = use_context::<Signal<PlaybackController>>();

    let on_keydown = move |e: KeyboardEvent| {
        let modifiers = e.modifiers();
        let command = modifiers.contains(Modifiers::CONTROL) || modifiers.contains(Modifiers::META);
        let alt = modifiers.contains(Modifiers::ALT);
        if let Some(action) = shortcut_action(&e.key().to_string(), command, alt) {
            e.prevent_default();
            controller.write().apply(action, &mut BrowserAudio);
        }
    };

    rsx! {
        div { class: "music-player", tabindex: "0", onkeydown: on_keydown,
            PlaylistPicker {}
            PlaylistHeader {}
            PlaybackErrorBanner {}
            TrackStrip {}
            ScrubBar {}
            TransportControls {}
        }
    }
}

#[component]
fn PlaylistHeader() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();
    let (name, byline) = {
        let current = controller.read();
        let playlist = current.playlist();
        (playlist.name.clone(), playlist.byline())
    };

    rsx! {
        header { class: "playlist-header",
            h1 { "{name}" }
            p { "{byline}" }
        }
    }
}

/// Failure message for the track that could not be played.
#[component]
fn PlaybackErrorBanner() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();
    let failure = {
        let current = controller.read();
        current.session().track_error.as_ref().and_then(|error| {
            current
                .catalog()
                .track(error.playlist, error.track)
                .map(|track| (track.name.clone(), error.message.clone()))
        })
    };

    rsx! {
        if let Some((track_name, message)) = failure {
            div { class: "playback-error", role: "alert",
                Icon { name: "alert".to_string(), class: "icon-small".to_string() }
                span { class: "playback-error-track", "{track_name}" }
                span { "{message}" }
            }
        }
    }
}
