use crate::components::{BrowserAudio, Icon};
use crate::playback::{PlaybackController, TransportAction};
use dioxus::prelude::*;

#[component]
pub(super) fn TransportControls() -> Element {
    rsx! {
        div { class: "controls",
            for (id, action) in TransportAction::ALL.map(|action| (action.button_id(), action)) {
                {
                    match action {
                        TransportAction::ToggleRepeat => rsx! {
                            RepeatButton { key: "{id}" }
                        },
                        TransportAction::TogglePlay => rsx! {
                            PlayPauseButton { key: "{id}" }
                        },
                        _ => rsx! {
                            TransportButton { key: "{id}", action }
                        },
                    }
                }
            }
        }
    }
}

/// Play/Pause button - the only control with a filled style
#[component]
fn PlayPauseButton() -> Element {
    let mut controller = use_context::<Signal<PlaybackController>>();
    let playing = controller.read().session().is_playing;
    let action = TransportAction::TogglePlay;

    rsx! {
        button {
            id: action.button_id(),
            r#type: "button",
            class: "control-btn control-btn-primary",
            aria_label: if playing { "Pause" } else { "Play" },
            onclick: move |_| controller.write().apply(action, &mut BrowserAudio),
            if playing {
                Icon { name: "pause".to_string(), class: "icon-large".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "icon-large".to_string() }
            }
        }
    }
}

/// Repeat-one toggle, highlighted while active
#[component]
fn RepeatButton() -> Element {
    let mut controller = use_context::<Signal<PlaybackController>>();
    let repeat_one = controller.read().session().repeat_one;
    let action = TransportAction::ToggleRepeat;

    rsx! {
        button {
            id: action.button_id(),
            r#type: "button",
            class: if repeat_one { "control-btn active" } else { "control-btn" },
            aria_label: "Toggle repeat",
            aria_pressed: if repeat_one { "true" } else { "false" },
            onclick: move |_| controller.write().apply(action, &mut BrowserAudio),
            Icon {
                name: if repeat_one { "repeat-1".to_string() } else { "repeat".to_string() },
                class: "icon-large".to_string(),
            }
        }
    }
}

/// Stateless transport buttons: previous, seek back, seek forward, next and shuffle.
#[component]
fn TransportButton(action: TransportAction) -> Element {
    let mut controller = use_context::<Signal<PlaybackController>>();
    let seek_step = controller.read().settings().seek_step_secs;

    let (icon, label) = match action {
        TransportAction::Previous => ("prev", "Previous track".to_string()),
        TransportAction::SeekBackward => ("rewind", format!("Back {seek_step}s")),
        TransportAction::SeekForward => ("fast-forward", format!("Forward {seek_step}s")),
        TransportAction::Next => ("next", "Next track".to_string()),
        TransportAction::Shuffle => ("shuffle", "Random track".to_string()),
        TransportAction::TogglePlay => ("play", "Play".to_string()),
        TransportAction::ToggleRepeat => ("repeat", "Toggle repeat".to_string()),
    };

    rsx! {
        button {
            id: action.button_id(),
            r#type: "button",
            class: "control-btn",
            aria_label: "{label}",
            title: "{label}",
            onclick: move |_| controller.write().apply(action, &mut BrowserAudio),
            Icon { name: icon.to_string(), class: "icon-large".to_string() }
        }
    }
}
