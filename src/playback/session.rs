/// A playback failure tied to the track that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackError {
    pub playlist: usize,
    pub track: usize,
    pub message: String,
}

/// Mutable state of what is currently loaded and playing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackSession {
    pub selected_playlist: usize,
    pub current_track: usize,
    pub is_playing: bool,
    pub repeat_one: bool,
    /// Display value for the scrub bar, 0-100. Follows the pointer while `scrubbing`.
    pub progress_percent: f64,
    /// Committed playback position in seconds.
    pub current_time: f64,
    /// Track length in seconds, 0 until the media element reports it.
    pub duration: f64,
    pub scrubbing: bool,
    pub track_error: Option<TrackError>,
    pub consecutive_failures: usize,
    /// Bumped every time a track is handed to the media element.
    pub load_count: u64,
}

impl PlaybackSession {
    pub fn new(selected_playlist: usize) -> Self {
        Self {
            selected_playlist,
            ..Self::default()
        }
    }

    /// Forget everything known about the position in the loaded track.
    pub(super) fn reset_position(&mut self) {
        self.progress_percent = 0.0;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.scrubbing = false;
    }

    pub fn has_error(&self, playlist: usize, track: usize) -> bool {
        self.track_error
            .as_ref()
            .is_some_and(|e| e.playlist == playlist && e.track == track)
    }
}
