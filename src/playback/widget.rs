use serde::Deserialize;

/// The embedded media element as seen by the controller.
///
/// Commands are fire-and-forget; the element reports back through
/// [MediaEvent]s produced by a [MediaPoller].
pub trait MediaWidget {
    /// Replace the current source. Playback stops until [MediaWidget::set_playing] is called.
    fn load(&mut self, url: &str);

    fn set_playing(&mut self, playing: bool);

    /// Seek to an absolute position in seconds.
    fn seek(&mut self, seconds: f64);
}

/// Notifications flowing from the media element into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    Progress { fraction: f64, seconds: f64 },
    Duration(f64),
    Ended,
    Failed(String),
    /// The element was paused or resumed outside the app, e.g. by media keys or a rejected `play()`.
    PlayState(bool),
}

/// Point-in-time state of the media element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaSnapshot {
    #[serde(default)]
    pub current_time: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub ended: bool,
    #[serde(default)]
    pub error_code: Option<u16>,
}

impl MediaSnapshot {
    fn known_duration(&self) -> Option<f64> {
        (self.duration.is_finite() && self.duration > 0.0).then_some(self.duration)
    }

    fn played_fraction(&self) -> f64 {
        match self.known_duration() {
            Some(duration) => (self.current_time / duration).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}

/// Translate a `MediaError.code` into a message for the track card.
pub fn media_error_message(code: u16) -> String {
    match code {
        1 => "Playback was aborted before the track loaded.",
        2 => "Network error while loading this track.",
        3 => "Audio playback failed due to a decode error.",
        4 => "Failed to load audio because no supported source was found.",
        _ => "Unable to load this audio source.",
    }
    .to_string()
}

const PROGRESS_EPSILON_SECS: f64 = 0.05;
const DURATION_EPSILON_SECS: f64 = 0.01;
/// Consecutive polls the element must disagree with the session before its play state wins.
const PLAY_STATE_DEBOUNCE_POLLS: u32 = 2;

/// Turns periodic [MediaSnapshot]s into [MediaEvent]s.
///
/// Ended and failure states persist on the element across polls, so both are
/// latched and reported once until the element leaves that state.
#[derive(Debug, Default)]
pub struct MediaPoller {
    ended_latched: bool,
    failure_latched: bool,
    play_state_mismatches: u32,
}

impl MediaPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget latched states, for when a new source is loaded.
    pub fn reset(&mut self) {
        self.ended_latched = false;
        self.failure_latched = false;
        self.play_state_mismatches = 0;
    }

    /// `known_time`, `known_duration` and `known_playing` are what the controller currently holds.
    pub fn observe(
        &mut self,
        snapshot: &MediaSnapshot,
        known_time: f64,
        known_duration: f64,
        known_playing: bool,
    ) -> Vec<MediaEvent> {
        let mut events = Vec::new();

        if let Some(code) = snapshot.error_code {
            if !self.failure_latched {
                self.failure_latched = true;
                events.push(MediaEvent::Failed(media_error_message(code)));
            }
            return events;
        }
        self.failure_latched = false;

        if let Some(duration) = snapshot.known_duration() {
            if (duration - known_duration).abs() > DURATION_EPSILON_SECS {
                events.push(MediaEvent::Duration(duration));
            }
        }

        let time = snapshot.current_time;
        if time.is_finite() && (time - known_time).abs() >= PROGRESS_EPSILON_SECS {
            events.push(MediaEvent::Progress {
                fraction: snapshot.played_fraction(),
                seconds: time.max(0.0),
            });
        }

        let element_playing = !snapshot.paused;
        if snapshot.ended || element_playing == known_playing {
            self.play_state_mismatches = 0;
        } else {
            self.play_state_mismatches += 1;
            if self.play_state_mismatches == PLAY_STATE_DEBOUNCE_POLLS {
                events.push(MediaEvent::PlayState(element_playing));
            }
        }

        if snapshot.ended {
            if !self.ended_latched {
                self.ended_latched = true;
                events.push(MediaEvent::Ended);
            }
        } else {
            self.ended_latched = false;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_progress_and_duration() {
        let mut poller = MediaPoller::new();
        let snapshot = MediaSnapshot {
            current_time: 50.0,
            duration: 200.0,
            ..MediaSnapshot::default()
        };

        let result = poller.observe(&snapshot, 0.0, 0.0, true);

        assert_eq!(
            vec![
                MediaEvent::Duration(200.0),
                MediaEvent::Progress {
                    fraction: 0.25,
                    seconds: 50.0
                },
            ],
            result
        );
    }

    #[test]
    fn test_observe_unchanged_state() {
        let mut poller = MediaPoller::new();
        let snapshot = MediaSnapshot {
            current_time: 50.0,
            duration: 200.0,
            paused: true,
            ..MediaSnapshot::default()
        };

        let result = poller.observe(&snapshot, 50.0, 200.0, false);

        assert_eq!(Vec::<MediaEvent>::new(), result);
    }

    #[test]
    fn test_observe_unknown_duration() {
        let mut poller = MediaPoller::new();
        let snapshot = MediaSnapshot {
            current_time: 1.0,
            duration: f64::NAN,
            ..MediaSnapshot::default()
        };

        let result = poller.observe(&snapshot, 0.0, 0.0, true);

        assert_eq!(
            vec![MediaEvent::Progress {
                fraction: 0.0,
                seconds: 1.0
            }],
            result
        );
    }

    #[test]
    fn test_observe_ended_is_latched() {
        let mut poller = MediaPoller::new();
        let ended = MediaSnapshot {
            current_time: 200.0,
            duration: 200.0,
            paused: true,
            ended: true,
            error_code: None,
        };

        assert_eq!(vec![MediaEvent::Ended], poller.observe(&ended, 200.0, 200.0, true));
        assert_eq!(Vec::<MediaEvent>::new(), poller.observe(&ended, 200.0, 200.0, true));

        let restarted = MediaSnapshot {
            current_time: 0.0,
            ended: false,
            ..ended.clone()
        };
        poller.observe(&restarted, 0.0, 200.0, false);

        assert_eq!(vec![MediaEvent::Ended], poller.observe(&ended, 200.0, 200.0, true));
    }

    #[test]
    fn test_observe_failure_is_latched() {
        let mut poller = MediaPoller::new();
        let failed = MediaSnapshot {
            error_code: Some(4),
            ..MediaSnapshot::default()
        };

        assert_eq!(
            vec![MediaEvent::Failed(media_error_message(4))],
            poller.observe(&failed, 0.0, 0.0, true)
        );
        assert_eq!(Vec::<MediaEvent>::new(), poller.observe(&failed, 0.0, 0.0, true));

        poller.observe(&MediaSnapshot::default(), 0.0, 0.0, true);

        assert_eq!(1, poller.observe(&failed, 0.0, 0.0, true).len());
    }

    #[test]
    fn test_observe_play_state_is_debounced() {
        let mut poller = MediaPoller::new();
        let paused = MediaSnapshot {
            current_time: 10.0,
            duration: 200.0,
            paused: true,
            ..MediaSnapshot::default()
        };

        assert_eq!(Vec::<MediaEvent>::new(), poller.observe(&paused, 10.0, 200.0, true));
        assert_eq!(
            vec![MediaEvent::PlayState(false)],
            poller.observe(&paused, 10.0, 200.0, true)
        );
        assert_eq!(Vec::<MediaEvent>::new(), poller.observe(&paused, 10.0, 200.0, true));
    }

    #[test]
    fn test_observe_single_disagreeing_poll_is_ignored() {
        let mut poller = MediaPoller::new();
        let playing = MediaSnapshot {
            current_time: 10.0,
            duration: 200.0,
            ..MediaSnapshot::default()
        };
        let paused = MediaSnapshot {
            paused: true,
            ..playing.clone()
        };

        poller.observe(&playing, 10.0, 200.0, false);
        poller.observe(&paused, 10.0, 200.0, false);

        assert_eq!(Vec::<MediaEvent>::new(), poller.observe(&playing, 10.0, 200.0, false));
    }

    #[test]
    fn test_observe_ended_element_keeps_play_state() {
        let mut poller = MediaPoller::new();
        let ended = MediaSnapshot {
            current_time: 200.0,
            duration: 200.0,
            paused: true,
            ended: true,
            error_code: None,
        };

        poller.observe(&ended, 200.0, 200.0, true);
        let result = poller.observe(&ended, 200.0, 200.0, true);

        assert!(!result.contains(&MediaEvent::PlayState(false)));
    }

    #[test]
    fn test_reset_rearms_failure() {
        let mut poller = MediaPoller::new();
        let failed = MediaSnapshot {
            error_code: Some(2),
            ..MediaSnapshot::default()
        };
        poller.observe(&failed, 0.0, 0.0, true);

        poller.reset();

        assert_eq!(
            vec![MediaEvent::Failed(media_error_message(2))],
            poller.observe(&failed, 0.0, 0.0, true)
        );
    }

    #[test]
    fn test_snapshot_deserialize() {
        let raw = r#"{"current_time": 12.5, "duration": 100, "paused": false, "ended": false, "error_code": null}"#;
        let expected_result = MediaSnapshot {
            current_time: 12.5,
            duration: 100.0,
            paused: false,
            ended: false,
            error_code: None,
        };

        let result: MediaSnapshot =
            serde_json::from_str(raw).expect("expected the snapshot to have been parsed");

        assert_eq!(expected_result, result)
    }

    #[test]
    fn test_media_error_message() {
        assert_eq!(
            "Network error while loading this track.",
            media_error_message(2)
        );
        assert_eq!("Unable to load this audio source.", media_error_message(42));
    }
}
