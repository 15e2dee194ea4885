// Browser (wasm) media element access.
use crate::playback::MediaSnapshot;
use dioxus::prelude::*;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlAudioElement};

const AUDIO_ELEMENT_ID: &str = "playdeck-audio";

/// Initialize the global audio element once.
fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

pub(super) fn ensure_audio_element() {
    if get_or_create_audio_element().is_none() {
        debug!("No document available for the audio element");
    }
}

pub(super) fn load(url: &str) {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_src(url);
    }
}

pub(super) fn set_playing(playing: bool) {
    let Some(audio) = get_or_create_audio_element() else {
        return;
    };
    if playing {
        try_play(&audio);
    } else if !audio.paused() {
        let _ = audio.pause();
    }
}

fn try_play(audio: &HtmlAudioElement) {
    if let Ok(promise) = audio.play() {
        spawn(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                debug!("Media element rejected play(): {:?}", err);
            }
        });
    }
}

pub(super) fn seek(seconds: f64) {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_current_time(seconds);
    }
}

pub(super) async fn snapshot() -> Option<MediaSnapshot> {
    let audio = get_or_create_audio_element()?;
    Some(MediaSnapshot {
        current_time: audio.current_time(),
        duration: audio.duration(),
        paused: audio.paused(),
        ended: audio.ended(),
        error_code: audio.error().map(|error| error.code()),
    })
}

pub(super) async fn delay_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}
