//! On-disk data model shared by the persistent adapters.
//!
//! A data file is a single JSON document:
//!
//! ```json
//! {
//!   "spaces": [
//!     { "id": "s-1", "owner_id": "alice", "name": "default", "resources": [] }
//!   ],
//!   "playlist": { "play_next": true, "videos": ["intro", "outro"] }
//! }
//! ```

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use spaces_core::domain::{Space, SpaceId, UserId, VideoId};

/// Errors raised while reading or writing a data file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to access data file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed data file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Space id '{id}' appears more than once")]
    DuplicateSpace { id: SpaceId },

    #[error("Owner '{owner}' has more than one default space")]
    DuplicateDefault { owner: UserId },
}

/// Serialized playlist state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    #[serde(default)]
    pub play_next: bool,
    #[serde(default)]
    pub videos: Vec<VideoId>,
}

/// Everything a data file holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub spaces: Vec<Space>,
    #[serde(default)]
    pub playlist: PlaylistRecord,
}

impl Snapshot {
    /// Read and validate a data file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let snapshot: Self = serde_json::from_str(&raw).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        snapshot.validate()?;
        debug!(
            path = %path.display(),
            spaces = snapshot.spaces.len(),
            videos = snapshot.playlist.videos.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Write the snapshot, replacing the file in one rename.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let io_err = |source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        };

        let json = serde_json::to_string_pretty(self).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, json).map_err(io_err)?;
        if let Err(source) = fs::rename(&staging, path) {
            // Best effort: the rename error is the one worth reporting.
            let _ = fs::remove_file(&staging);
            return Err(io_err(source));
        }
        Ok(())
    }

    /// Ids are unique and no owner has two default spaces.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut ids = HashSet::new();
        let mut owners_with_default = HashSet::new();

        for space in &self.spaces {
            if !ids.insert(space.id()) {
                return Err(SnapshotError::DuplicateSpace {
                    id: space.id().clone(),
                });
            }
            if space.is_the_default() && !owners_with_default.insert(space.owner_id()) {
                return Err(SnapshotError::DuplicateDefault {
                    owner: space.owner_id().clone(),
                });
            }
        }

        Ok(())
    }

    /// Seed data written by `spaces init`.
    pub fn demo() -> Self {
        let videos = ["intro", "chapter-1", "chapter-2", "outro"]
            .into_iter()
            .filter_map(|raw| VideoId::parse(raw).ok())
            .collect();

        Self {
            spaces: vec![
                Space::default_for("alice-default", "alice"),
                Space::new("alice-projects", "alice", "projects")
                    .with_resources(["design-doc", "roadmap"]),
                Space::new("alice-scratch", "alice", "scratch"),
                Space::default_for("bob-default", "bob"),
                Space::new("bob-archive", "bob", "archive"),
            ],
            playlist: PlaylistRecord {
                play_next: true,
                videos,
            },
        }
    }
}
