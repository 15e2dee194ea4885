// Desktop/mobile webview bridge: the media element lives in the webview and is driven through eval.
use crate::playback::MediaSnapshot;
use dioxus::prelude::*;
use serde_json::json;
use tracing::debug;

const NATIVE_AUDIO_BOOTSTRAP_JS: &str = r#"
(() => {
  if (window.__playdeckAudioBridge) {
    return true;
  }

  const existing = document.getElementById("playdeck-audio-native");
  const audio = existing || document.createElement("audio");
  if (!existing) {
    audio.id = "playdeck-audio-native";
    audio.preload = "metadata";
    audio.style.display = "none";
    audio.setAttribute("playsinline", "true");
    document.body.appendChild(audio);
  }

  const safePlay = async () => {
    try {
      await audio.play();
    } catch (_err) {}
  };

  window.__playdeckAudioBridge = {
    audio,
    apply(cmd) {
      if (!cmd || !cmd.type) return;

      switch (cmd.type) {
        case "load":
          if (cmd.src) {
            audio.src = cmd.src;
          }
          break;
        case "play":
          safePlay();
          break;
        case "pause":
          audio.pause();
          break;
        case "seek":
          if (typeof cmd.position === "number" && Number.isFinite(cmd.position)) {
            try {
              audio.currentTime = Math.max(0, cmd.position);
            } catch (_err) {}
          }
          break;
      }
    },
    snapshot() {
      return {
        current_time: Number.isFinite(audio.currentTime) ? audio.currentTime : 0,
        duration: Number.isFinite(audio.duration) ? audio.duration : 0,
        paused: !!audio.paused,
        ended: !!audio.ended,
        error_code: audio.error ? audio.error.code : null,
      };
    },
  };
  return true;
})();
"#;

pub(super) fn ensure_audio_element() {
    let _ = document::eval(NATIVE_AUDIO_BOOTSTRAP_JS);
}

fn native_audio_command(value: serde_json::Value) {
    ensure_audio_element();
    let payload = value.to_string();
    let script = format!(
        r#"(function () {{
            const bridge = window.__playdeckAudioBridge;
            if (!bridge) return false;
            bridge.apply({payload});
            return true;
        }})();"#
    );
    let _ = document::eval(&script);
}

pub(super) fn load(url: &str) {
    native_audio_command(json!({ "type": "load", "src": url }));
}

pub(super) fn set_playing(playing: bool) {
    native_audio_command(json!({ "type": if playing { "play" } else { "pause" } }));
}

pub(super) fn seek(seconds: f64) {
    native_audio_command(json!({ "type": "seek", "position": seconds }));
}

pub(super) async fn snapshot() -> Option<MediaSnapshot> {
    let eval = document::eval(
        r#"return (function () {
            const bridge = window.__playdeckAudioBridge;
            return bridge ? bridge.snapshot() : null;
        })();"#,
    );
    match eval.join::<Option<MediaSnapshot>>().await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            debug!("Failed to read the media element snapshot: {:?}", err);
            None
        }
    }
}

pub(super) async fn delay_ms(ms: u32) {
    let script = format!(
        r#"return (async function () {{
            await new Promise(resolve => setTimeout(resolve, {ms}));
            return true;
        }})();"#
    );
    let _ = document::eval(&script).await;
}
