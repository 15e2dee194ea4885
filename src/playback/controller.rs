use crate::api::{Catalog, Playlist, Track};
use crate::playback::session::{PlaybackSession, TrackError};
use crate::playback::transport::TransportAction;
use crate::playback::widget::{MediaEvent, MediaWidget};
use crate::settings::{EndOfPlaylist, PlayerSettings, ShuffleMode};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    #[error("playlist {index} is out of range, catalog has {count} playlists")]
    PlaylistOutOfRange { index: usize, count: usize },
    #[error("track {index} is out of range, playlist has {count} tracks")]
    TrackOutOfRange { index: usize, count: usize },
}

/// Owns the playback session and drives the media element.
///
/// Every transition keeps `current_track` valid for the selected playlist.
/// Widget commands are issued after the session has been updated.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackController {
    catalog: Catalog,
    settings: PlayerSettings,
    session: PlaybackSession,
}

impl PlaybackController {
    pub fn new(catalog: Catalog, settings: PlayerSettings) -> Self {
        let settings = settings.normalized(catalog.playlist_count());
        let session = PlaybackSession::new(settings.initial_playlist);
        Self {
            catalog,
            settings,
            session,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn playlist(&self) -> &Playlist {
        &self.catalog.playlists()[self.session.selected_playlist]
    }

    pub fn track_count(&self) -> usize {
        self.playlist().track_count()
    }

    pub fn current_track(&self) -> &Track {
        &self.playlist().tracks[self.session.current_track]
    }

    /// Load the current track into a freshly mounted media element.
    pub fn start<W: MediaWidget>(&mut self, widget: &mut W) {
        info!(
            "Starting playback session on playlist \"{}\"",
            self.playlist().name
        );
        self.load_current(widget);
    }

    pub fn select_playlist<W: MediaWidget>(
        &mut self,
        index: usize,
        widget: &mut W,
    ) -> Result<(), PlaybackError> {
        let count = self.catalog.playlist_count();
        if index >= count {
            return Err(PlaybackError::PlaylistOutOfRange { index, count });
        }

        debug!("Selecting playlist {}", index);
        self.session.selected_playlist = index;
        self.session.track_error = None;
        self.session.consecutive_failures = 0;
        self.change_track(0, widget);
        Ok(())
    }

    pub fn select_track<W: MediaWidget>(
        &mut self,
        index: usize,
        widget: &mut W,
    ) -> Result<(), PlaybackError> {
        let count = self.track_count();
        if index >= count {
            return Err(PlaybackError::TrackOutOfRange { index, count });
        }

        self.session.consecutive_failures = 0;
        self.change_track(index, widget);
        Ok(())
    }

    pub fn toggle_play_pause<W: MediaWidget>(&mut self, widget: &mut W) {
        self.session.is_playing = !self.session.is_playing;
        if self.session.is_playing {
            self.session.consecutive_failures = 0;
        }
        debug!("Playback toggled, playing: {}", self.session.is_playing);
        widget.set_playing(self.session.is_playing);
    }

    pub fn next_track<W: MediaWidget>(&mut self, widget: &mut W) {
        self.session.consecutive_failures = 0;
        self.advance(widget);
    }

    pub fn previous_track<W: MediaWidget>(&mut self, widget: &mut W) {
        self.session.consecutive_failures = 0;
        let count = self.track_count();
        let previous = (self.session.current_track + count - 1) % count;
        self.change_track(previous, widget);
    }

    /// Seek relative to the committed position. Positions past the end are left to the widget.
    pub fn seek_relative<W: MediaWidget>(&mut self, delta_secs: f64, widget: &mut W) {
        if !delta_secs.is_finite() {
            return;
        }
        let target = (self.session.current_time + delta_secs).max(0.0);
        trace!("Seeking by {}s to {}s", delta_secs, target);
        widget.seek(target);
    }

    pub fn seek_forward<W: MediaWidget>(&mut self, widget: &mut W) {
        self.seek_relative(self.settings.seek_step_secs, widget);
    }

    pub fn seek_backward<W: MediaWidget>(&mut self, widget: &mut W) {
        self.seek_relative(-self.settings.seek_step_secs, widget);
    }

    pub fn random_track<W: MediaWidget>(&mut self, widget: &mut W) {
        self.random_track_with(&mut rand::thread_rng(), widget);
    }

    pub fn random_track_with<R: Rng + ?Sized, W: MediaWidget>(
        &mut self,
        rng: &mut R,
        widget: &mut W,
    ) {
        let count = self.track_count();
        let current = self.session.current_track;
        let index = match self.settings.shuffle {
            ShuffleMode::AvoidCurrent if count > 1 => {
                let pick = rng.gen_range(0..count - 1);
                if pick >= current {
                    pick + 1
                } else {
                    pick
                }
            }
            _ => rng.gen_range(0..count),
        };
        debug!("Shuffle picked track {} of {}", index, count);
        self.session.consecutive_failures = 0;
        self.change_track(index, widget);
    }

    pub fn toggle_repeat_one(&mut self) {
        self.session.repeat_one = !self.session.repeat_one;
        debug!("Repeat-one toggled: {}", self.session.repeat_one);
    }

    pub fn on_progress(&mut self, played_fraction: f64, played_secs: f64) {
        if played_secs.is_finite() {
            self.session.current_time = played_secs.max(0.0);
        }
        if !self.session.scrubbing && played_fraction.is_finite() {
            self.session.progress_percent = (played_fraction * 100.0).clamp(0.0, 100.0);
        }
    }

    pub fn on_duration(&mut self, total_secs: f64) {
        if !total_secs.is_finite() || total_secs < 0.0 {
            return;
        }
        self.session.duration = total_secs;
        self.session.consecutive_failures = 0;
        let (playlist, track) = (self.session.selected_playlist, self.session.current_track);
        if self.session.has_error(playlist, track) {
            self.session.track_error = None;
        }
    }

    pub fn on_track_ended<W: MediaWidget>(&mut self, widget: &mut W) {
        if self.session.repeat_one {
            debug!("Track ended, repeating track {}", self.session.current_track);
            widget.seek(0.0);
            self.session.progress_percent = 0.0;
            self.session.current_time = 0.0;
            self.session.is_playing = true;
            widget.set_playing(true);
            return;
        }

        self.advance_after_end(widget);
    }

    /// Treat a failed load like an ended track, but stop once nothing in the playlist plays.
    pub fn on_playback_failed<W: MediaWidget>(&mut self, message: impl Into<String>, widget: &mut W) {
        let message = message.into();
        warn!(
            "Playback of \"{}\" failed: {}",
            self.current_track().name,
            message
        );
        self.session.track_error = Some(TrackError {
            playlist: self.session.selected_playlist,
            track: self.session.current_track,
            message,
        });
        self.session.consecutive_failures += 1;

        if self.session.repeat_one || self.session.consecutive_failures >= self.track_count() {
            self.session.is_playing = false;
            widget.set_playing(false);
            return;
        }

        self.advance_after_end(widget);
    }

    /// Adopt a play state the element reached on its own. No command is sent back.
    pub fn on_play_state(&mut self, playing: bool) {
        if self.session.is_playing != playing {
            debug!("Media element is now {}", if playing { "playing" } else { "paused" });
            self.session.is_playing = playing;
        }
    }

    pub fn handle_media_event<W: MediaWidget>(&mut self, event: MediaEvent, widget: &mut W) {
        match event {
            MediaEvent::Progress { fraction, seconds } => self.on_progress(fraction, seconds),
            MediaEvent::Duration(seconds) => self.on_duration(seconds),
            MediaEvent::Ended => self.on_track_ended(widget),
            MediaEvent::Failed(message) => self.on_playback_failed(message, widget),
            MediaEvent::PlayState(playing) => self.on_play_state(playing),
        }
    }

    pub fn begin_scrub_drag(&mut self, percent: f64) {
        self.session.scrubbing = true;
        self.update_scrub_drag(percent);
    }

    pub fn update_scrub_drag(&mut self, percent: f64) {
        if percent.is_finite() {
            self.session.progress_percent = percent.clamp(0.0, 100.0);
        }
    }

    pub fn commit_scrub_drag<W: MediaWidget>(&mut self, percent: f64, widget: &mut W) {
        self.session.scrubbing = false;
        let duration = self.session.duration;
        if !percent.is_finite() || duration <= 0.0 {
            self.session.progress_percent = if duration > 0.0 {
                (self.session.current_time / duration * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };
            return;
        }

        let percent = percent.clamp(0.0, 100.0);
        let target = percent / 100.0 * duration;
        trace!("Scrub committed at {}%, seeking to {}s", percent, target);
        widget.seek(target);
        self.session.current_time = target;
        self.session.progress_percent = percent;
    }

    pub fn apply<W: MediaWidget>(&mut self, action: TransportAction, widget: &mut W) {
        match action {
            TransportAction::ToggleRepeat => self.toggle_repeat_one(),
            TransportAction::Previous => self.previous_track(widget),
            TransportAction::SeekBackward => self.seek_backward(widget),
            TransportAction::TogglePlay => self.toggle_play_pause(widget),
            TransportAction::SeekForward => self.seek_forward(widget),
            TransportAction::Next => self.next_track(widget),
            TransportAction::Shuffle => self.random_track(widget),
        }
    }

    fn advance_after_end<W: MediaWidget>(&mut self, widget: &mut W) {
        let wraps = self.session.current_track + 1 == self.track_count();
        if wraps && self.settings.end_of_playlist == EndOfPlaylist::Stop {
            info!("Reached the end of \"{}\", stopping", self.playlist().name);
            self.session.is_playing = false;
            widget.set_playing(false);
        }
        self.advance(widget);
    }

    /// Step to the following track without touching the failure count.
    fn advance<W: MediaWidget>(&mut self, widget: &mut W) {
        let next = (self.session.current_track + 1) % self.track_count();
        self.change_track(next, widget);
    }

    fn change_track<W: MediaWidget>(&mut self, index: usize, widget: &mut W) {
        self.session.current_track = index;
        self.session.reset_position();
        self.load_current(widget);
    }

    fn load_current<W: MediaWidget>(&mut self, widget: &mut W) {
        self.session.load_count += 1;
        let track = self.current_track();
        debug!("Loading track \"{}\" from {}", track.name, track.url);
        widget.load(&track.url);
        if self.session.is_playing {
            widget.set_playing(true);
        }
    }
}
