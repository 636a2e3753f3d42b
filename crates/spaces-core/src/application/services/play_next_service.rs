//! Play Next Service - picks the video that follows the current one.

use tracing::{debug, instrument};

use crate::{
    application::ports::PlaybackStore,
    domain::{DomainError, VideoId},
};

/// Resolves what to play after the current video.
pub struct PlayNextService {
    store: Box<dyn PlaybackStore>,
}

impl PlayNextService {
    pub fn new(store: Box<dyn PlaybackStore>) -> Self {
        Self { store }
    }

    /// The video to play after `currently_playing`.
    ///
    /// `Ok(None)` means nothing should play: either play-next is turned off
    /// or the playlist has nothing after the current video.
    #[instrument(skip_all, fields(current = %currently_playing))]
    pub fn play_next(&self, currently_playing: &str) -> Result<Option<VideoId>, DomainError> {
        let current = VideoId::parse(currently_playing)?;

        if !self.store.is_play_next_enabled() {
            debug!("Play next disabled");
            return Ok(None);
        }

        Ok(self.store.next_after(&current))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::application::ports::MockPlaybackStore;

    fn video(raw: &str) -> VideoId {
        VideoId::parse(raw).unwrap()
    }

    #[test]
    fn rejects_an_empty_video_id_before_asking_the_store() {
        let mut store = MockPlaybackStore::new();
        store.expect_is_play_next_enabled().never();
        store.expect_next_after().never();

        let service = PlayNextService::new(Box::new(store));

        assert_eq!(
            service.play_next(""),
            Err(DomainError::InvalidVideoId(String::new()))
        );
    }

    #[test]
    fn plays_nothing_when_play_next_is_disabled() {
        let mut store = MockPlaybackStore::new();
        store.expect_is_play_next_enabled().times(1).return_const(false);
        store.expect_next_after().never();

        let service = PlayNextService::new(Box::new(store));

        assert_eq!(service.play_next("intro"), Ok(None));
    }

    #[test]
    fn plays_the_queued_video_when_enabled() {
        let mut store = MockPlaybackStore::new();
        store.expect_is_play_next_enabled().times(1).return_const(true);
        store
            .expect_next_after()
            .with(eq(video("intro")))
            .times(1)
            .return_const(Some(video("chapter-1")));

        let service = PlayNextService::new(Box::new(store));

        assert_eq!(service.play_next("intro"), Ok(Some(video("chapter-1"))));
    }

    #[test]
    fn plays_nothing_at_the_end_of_the_playlist() {
        let mut store = MockPlaybackStore::new();
        store.expect_is_play_next_enabled().return_const(true);
        store.expect_next_after().return_const(None::<VideoId>);

        let service = PlayNextService::new(Box::new(store));

        assert_eq!(service.play_next("outro"), Ok(None));
    }
}
