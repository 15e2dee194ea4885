//! Audio Manager - drives the hidden `<audio>` element outside of the component render cycle.
//! wasm builds talk to the element through web-sys; native webviews go through a JS bridge.

mod controller;
#[cfg(not(target_arch = "wasm32"))]
mod native_bridge;
#[cfg(target_arch = "wasm32")]
mod web_backend;

#[cfg(not(target_arch = "wasm32"))]
use native_bridge as backend;
#[cfg(target_arch = "wasm32")]
use web_backend as backend;

pub use controller::*;

use crate::playback::MediaWidget;

/// The page's media element, seen as a [MediaWidget].
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserAudio;

impl MediaWidget for BrowserAudio {
    fn load(&mut self, url: &str) {
        backend::load(url);
    }

    fn set_playing(&mut self, playing: bool) {
        backend::set_playing(playing);
    }

    fn seek(&mut self, seconds: f64) {
        backend::seek(seconds.max(0.0));
    }
}
