// Mount-time wiring: load the first track and poll the media element into the controller.
use super::{backend, BrowserAudio};
use crate::playback::{MediaSync, PlaybackController};
use dioxus::prelude::*;
use tracing::{debug, trace};

#[component]
pub fn AudioController() -> Element {
    let mut controller = use_context::<Signal<PlaybackController>>();

    use_effect(move || {
        backend::ensure_audio_element();
        controller.write().start(&mut BrowserAudio);
        let poll_interval_ms = controller.peek().settings().poll_interval_ms;
        debug!("Polling the media element every {}ms", poll_interval_ms);

        spawn(async move {
            let mut sync = MediaSync::new(&controller.peek());

            loop {
                backend::delay_ms(poll_interval_ms).await;

                let requested_at = controller.peek().session().load_count;
                let Some(snapshot) = backend::snapshot().await else {
                    continue;
                };

                let events = sync.observe(requested_at, &snapshot, &controller.peek());
                if events.is_empty() {
                    continue;
                }

                let mut current = controller.write();
                for event in events {
                    trace!("Media event {:?}", event);
                    current.handle_media_event(event, &mut BrowserAudio);
                }
            }
        });
    });

    rsx! {}
}
