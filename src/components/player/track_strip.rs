use crate::api::format_time;
use crate::components::{BrowserAudio, Icon};
use crate::playback::PlaybackController;
use dioxus::prelude::*;
use tracing::warn;

fn track_card_id(index: usize) -> String {
    format!("track-card-{index}")
}

/// Horizontally scrolling row of track cards for the selected playlist.
#[component]
pub(super) fn TrackStrip() -> Element {
    let mut controller = use_context::<Signal<PlaybackController>>();

    // Only re-scroll when the selection changes, not on every progress tick.
    let focused = use_memo(move || {
        let current = controller.read();
        let session = current.session();
        (session.selected_playlist, session.current_track)
    });

    use_effect(move || {
        let (_, index) = focused();
        let card_id = track_card_id(index);
        let script = format!(
            r#"(function() {{
                const card = document.getElementById("{card_id}");
                if (!card) return;
                card.scrollIntoView({{ behavior: "smooth", inline: "center", block: "nearest" }});
            }})();"#
        );
        let _ = document::eval(&script);
    });

    let cards: Vec<(usize, String, String, bool, bool)> = {
        let current = controller.read();
        let session = current.session();
        current
            .playlist()
            .tracks
            .iter()
            .enumerate()
            .map(|(index, track)| {
                (
                    index,
                    track.name.clone(),
                    format_time(track.duration),
                    index == session.current_track,
                    session.has_error(session.selected_playlist, index),
                )
            })
            .collect()
    };

    rsx! {
        div { class: "track-cards-container",
            for (index, name, length, active, failed) in cards {
                button {
                    key: "{index}",
                    id: track_card_id(index),
                    r#type: "button",
                    class: match (active, failed) {
                        (true, true) => "track-card active failed",
                        (true, false) => "track-card active",
                        (false, true) => "track-card failed",
                        (false, false) => "track-card",
                    },
                    aria_current: if active { "true" } else { "false" },
                    onclick: move |_| {
                        if let Err(err) = controller.write().select_track(index, &mut BrowserAudio) {
                            warn!("Track selection rejected: {}", err);
                        }
                    },
                    div { class: "track-card-art",
                        Icon {
                            name: if failed { "alert".to_string() } else { "music".to_string() },
                            class: "icon-small".to_string(),
                        }
                    }
                    span { class: "track-card-name", "{name}" }
                    span { class: "track-card-length", "{length}" }
                }
            }
        }
    }
}
