use crate::components::BrowserAudio;
use crate::playback::PlaybackController;
use dioxus::prelude::*;
use tracing::warn;

#[component]
pub(super) fn PlaylistPicker() -> Element {
    let mut controller = use_context::<Signal<PlaybackController>>();
    let (selected, options) = {
        let current = controller.read();
        let options: Vec<(usize, String)> = current
            .catalog()
            .playlists()
            .iter()
            .enumerate()
            .map(|(index, playlist)| (index, playlist.name.clone()))
            .collect();
        (current.session().selected_playlist, options)
    };

    let on_change = move |e: FormEvent| {
        let Ok(index) = e.value().parse::<usize>() else {
            warn!("Ignoring playlist selection {:?}", e.value());
            return;
        };
        if let Err(err) = controller.write().select_playlist(index, &mut BrowserAudio) {
            warn!("Playlist selection rejected: {}", err);
        }
    };

    rsx! {
        div { class: "playlist-select",
            label { r#for: "playlist-select", "Playlist" }
            select {
                id: "playlist-select",
                value: "{selected}",
                onchange: on_change,
                onkeydown: move |e: KeyboardEvent| e.stop_propagation(),
                for (index, name) in options {
                    option {
                        key: "{index}",
                        value: "{index}",
                        selected: index == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
