use crate::playback::controller::PlaybackController;
use crate::playback::widget::{MediaEvent, MediaPoller, MediaSnapshot};
use tracing::trace;

/// Feeds media element snapshots into a [PlaybackController].
///
/// Snapshots are read asynchronously. One requested before the latest load
/// describes the previous source and is dropped.
#[derive(Debug, Default)]
pub struct MediaSync {
    poller: MediaPoller,
    observed_load: u64,
}

impl MediaSync {
    pub fn new(controller: &PlaybackController) -> Self {
        Self {
            poller: MediaPoller::new(),
            observed_load: controller.session().load_count,
        }
    }

    /// `requested_at` is the session's `load_count` when the snapshot was requested.
    pub fn observe(
        &mut self,
        requested_at: u64,
        snapshot: &MediaSnapshot,
        controller: &PlaybackController,
    ) -> Vec<MediaEvent> {
        let session = controller.session();
        if session.load_count != self.observed_load {
            self.observed_load = session.load_count;
            self.poller.reset();
        }
        if requested_at != session.load_count {
            trace!(
                "Dropping snapshot taken at load {}, now at load {}",
                requested_at,
                session.load_count
            );
            return Vec::new();
        }

        self.poller.observe(
            snapshot,
            session.current_time,
            session.duration,
            session.is_playing,
        )
    }
}
