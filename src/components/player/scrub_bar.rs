use crate::api::format_time;
use crate::components::BrowserAudio;
use crate::playback::PlaybackController;
use dioxus::prelude::*;

/// Progress slider. Dragging only moves the thumb; the seek happens on release.
#[component]
pub(super) fn ScrubBar() -> Element {
    let mut controller = use_context::<Signal<PlaybackController>>();
    let (percent, elapsed_label, duration_label) = {
        let current = controller.read();
        let session = current.session();
        (
            session.progress_percent,
            format_time(session.current_time),
            format_time(session.duration),
        )
    };

    let on_input = move |e: FormEvent| {
        let Ok(percent) = e.value().parse::<f64>() else {
            return;
        };
        let mut current = controller.write();
        if current.session().scrubbing {
            current.update_scrub_drag(percent);
        } else {
            current.begin_scrub_drag(percent);
        }
    };

    let on_change = move |e: FormEvent| {
        let percent = e.value().parse::<f64>().unwrap_or(f64::NAN);
        controller.write().commit_scrub_drag(percent, &mut BrowserAudio);
    };

    rsx! {
        div { class: "progress-container",
            span { class: "time-label", "{elapsed_label}" }
            input {
                r#type: "range",
                class: "progress-slider",
                aria_label: "Seek",
                min: "0",
                max: "100",
                step: "0.1",
                value: "{percent}",
                style: "--progress: {percent}%;",
                oninput: on_input,
                onchange: on_change,
                onkeydown: move |e: KeyboardEvent| e.stop_propagation(),
            }
            span { class: "time-label", "{duration_label}" }
        }
    }
}
