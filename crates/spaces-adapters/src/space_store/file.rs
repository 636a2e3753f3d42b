//! JSON-file backed space store.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tracing::{debug, warn};

use spaces_core::{
    application::{StoreError, ports::SpaceStore},
    domain::{Space, SpaceId, UserId},
};

use crate::snapshot::{PlaylistRecord, Snapshot, SnapshotError};

/// Space store persisted to a single JSON data file.
///
/// The file is read once on [`open`](Self::open). Reads are served from
/// memory; every successful removal rewrites the file before returning.
#[derive(Debug, Clone)]
pub struct JsonFileSpaceStore {
    path: PathBuf,
    inner: Arc<RwLock<Snapshot>>,
}

impl JsonFileSpaceStore {
    /// Open an existing data file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let path = path.into();
        let snapshot = Snapshot::load(&path)?;

        Ok(Self {
            path,
            inner: Arc::new(RwLock::new(snapshot)),
        })
    }

    /// Write `snapshot` to `path` and open it.
    pub fn create(path: impl Into<PathBuf>, snapshot: Snapshot) -> Result<Self, SnapshotError> {
        let path = path.into();
        snapshot.validate()?;
        snapshot.save(&path)?;

        Ok(Self {
            path,
            inner: Arc::new(RwLock::new(snapshot)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All spaces, in file order.
    pub fn list(&self) -> Result<Vec<Space>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.spaces.clone())
    }

    /// Spaces owned by `owner`, in file order.
    pub fn list_owned_by(&self, owner: &UserId) -> Result<Vec<Space>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|space| space.is_owned_by(owner))
            .collect())
    }

    /// The playlist section of the data file.
    pub fn playlist(&self) -> Result<PlaylistRecord, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.playlist.clone())
    }
}

impl SpaceStore for JsonFileSpaceStore {
    fn fetch_by_id(&self, id: &SpaceId) -> Option<Space> {
        let inner = self.inner.read().ok()?;
        inner.spaces.iter().find(|space| space.id() == id).cloned()
    }

    fn remove_by_id(&self, id: &SpaceId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        let position = inner
            .spaces
            .iter()
            .position(|space| space.id() == id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;

        let removed = inner.spaces.remove(position);

        if let Err(e) = inner.save(&self.path) {
            warn!(error = %e, path = %self.path.display(), "Persisting removal failed, restoring");
            inner.spaces.insert(position, removed);
            return Err(StoreError::Persistence {
                reason: format!("{e}"),
            });
        }

        debug!(space = %id, path = %self.path.display(), "Space removed from data file");
        Ok(())
    }
}
