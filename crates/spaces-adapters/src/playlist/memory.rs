//! In-memory playlist.

use spaces_core::{application::ports::PlaybackStore, domain::VideoId};

use crate::snapshot::PlaylistRecord;

/// An ordered list of videos plus the user's play-next preference.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlaylist {
    videos: Vec<VideoId>,
    play_next: bool,
}

impl InMemoryPlaylist {
    pub fn new(videos: impl IntoIterator<Item = VideoId>, play_next: bool) -> Self {
        Self {
            videos: videos.into_iter().collect(),
            play_next,
        }
    }

    pub fn videos(&self) -> &[VideoId] {
        &self.videos
    }
}

impl From<PlaylistRecord> for InMemoryPlaylist {
    fn from(record: PlaylistRecord) -> Self {
        Self::new(record.videos, record.play_next)
    }
}

impl PlaybackStore for InMemoryPlaylist {
    fn is_play_next_enabled(&self) -> bool {
        self.play_next
    }

    /// The video after the first occurrence of `current`. Unknown videos
    /// have no successor.
    fn next_after(&self, current: &VideoId) -> Option<VideoId> {
        self.videos
            .iter()
            .position(|video| video == current)
            .and_then(|index| self.videos.get(index + 1))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(play_next: bool) -> InMemoryPlaylist {
        let videos = ["intro", "chapter-1", "outro"]
            .into_iter()
            .map(|raw| VideoId::parse(raw).unwrap());
        InMemoryPlaylist::new(videos, play_next)
    }

    #[test]
    fn next_after_follows_the_order() {
        let list = playlist(true);
        let intro = VideoId::parse("intro").unwrap();

        assert_eq!(
            list.next_after(&intro),
            Some(VideoId::parse("chapter-1").unwrap())
        );
    }

    #[test]
    fn last_and_unknown_videos_have_no_successor() {
        let list = playlist(true);

        assert_eq!(list.next_after(&VideoId::parse("outro").unwrap()), None);
        assert_eq!(list.next_after(&VideoId::parse("bonus").unwrap()), None);
    }

    #[test]
    fn preference_is_reported_as_given() {
        assert!(playlist(true).is_play_next_enabled());
        assert!(!playlist(false).is_play_next_enabled());
    }
}
