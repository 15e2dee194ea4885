use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const BUNDLED_SETTINGS: &str = include_str!("../../assets/settings.json");

const DEFAULT_SEEK_STEP_SECS: f64 = 15.0;
const DEFAULT_POLL_INTERVAL_MS: u32 = 250;
const MIN_POLL_INTERVAL_MS: u32 = 50;
const MAX_POLL_INTERVAL_MS: u32 = 2000;

/// What happens when the last track of a playlist ends without repeat-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EndOfPlaylist {
    /// Wrap to the first track and keep playing.
    #[default]
    Loop,
    /// Wrap to the first track and pause.
    Stop,
}

/// How the shuffle button picks its next track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleMode {
    /// Uniform over every track, the current one included.
    #[default]
    AllowRepeat,
    /// Uniform over every track except the current one.
    AvoidCurrent,
}

/// Player settings bundled with the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    #[serde(default = "default_seek_step_secs")]
    pub seek_step_secs: f64,
    #[serde(default)]
    pub end_of_playlist: EndOfPlaylist,
    #[serde(default)]
    pub shuffle: ShuffleMode,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u32,
    #[serde(default)]
    pub initial_playlist: usize,
}

fn default_seek_step_secs() -> f64 {
    DEFAULT_SEEK_STEP_SECS
}

fn default_poll_interval_ms() -> u32 {
    DEFAULT_POLL_INTERVAL_MS
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            seek_step_secs: default_seek_step_secs(),
            end_of_playlist: EndOfPlaylist::default(),
            shuffle: ShuffleMode::default(),
            poll_interval_ms: default_poll_interval_ms(),
            initial_playlist: 0,
        }
    }
}

impl PlayerSettings {
    /// Parse settings, falling back to the defaults when the document is malformed.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<PlayerSettings>(raw) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to parse player settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn bundled() -> Self {
        let settings = Self::from_json(BUNDLED_SETTINGS);
        debug!("Loaded player settings {:?}", settings);
        settings
    }

    /// Clamp every field into its usable range.
    /// `playlist_count` bounds `initial_playlist`.
    pub fn normalized(mut self, playlist_count: usize) -> Self {
        if !self.seek_step_secs.is_finite() || self.seek_step_secs <= 0.0 {
            self.seek_step_secs = DEFAULT_SEEK_STEP_SECS;
        }
        self.poll_interval_ms = self
            .poll_interval_ms
            .clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS);
        if self.initial_playlist >= playlist_count {
            warn!(
                "Initial playlist {} is out of range for {} playlists, using the first one",
                self.initial_playlist, playlist_count
            );
            self.initial_playlist = 0;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_settings() {
        let settings = PlayerSettings::bundled();

        assert_eq!(PlayerSettings::default(), settings);
    }

    #[test]
    fn test_from_json_partial() {
        let settings = PlayerSettings::from_json(
            r#"{ "end_of_playlist": "stop", "shuffle": "avoid_current" }"#,
        );

        assert_eq!(EndOfPlaylist::Stop, settings.end_of_playlist);
        assert_eq!(ShuffleMode::AvoidCurrent, settings.shuffle);
        assert_eq!(15.0, settings.seek_step_secs);
        assert_eq!(250, settings.poll_interval_ms);
    }

    #[test]
    fn test_from_json_malformed() {
        let settings = PlayerSettings::from_json(r#"{ "end_of_playlist": "forever" }"#);

        assert_eq!(PlayerSettings::default(), settings);
    }

    #[test]
    fn test_normalized() {
        let settings = PlayerSettings {
            seek_step_secs: -4.0,
            end_of_playlist: EndOfPlaylist::Loop,
            shuffle: ShuffleMode::AllowRepeat,
            poll_interval_ms: 5,
            initial_playlist: 7,
        }
        .normalized(3);

        assert_eq!(15.0, settings.seek_step_secs);
        assert_eq!(50, settings.poll_interval_ms);
        assert_eq!(0, settings.initial_playlist);
    }

    #[test]
    fn test_normalized_keeps_valid_values() {
        let settings = PlayerSettings {
            seek_step_secs: 30.0,
            poll_interval_ms: 500,
            initial_playlist: 2,
            ..PlayerSettings::default()
        }
        .normalized(3);

        assert_eq!(30.0, settings.seek_step_secs);
        assert_eq!(500, settings.poll_interval_ms);
        assert_eq!(2, settings.initial_playlist);
    }
}
