//! In-memory space store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use spaces_core::{
    application::{StoreError, ports::SpaceStore},
    domain::{Space, SpaceId, UserId},
};

use crate::snapshot::Snapshot;

/// Thread-safe in-memory space store.
///
/// Clones share the same underlying map, so a test can hand one clone to a
/// service and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemorySpaceStore {
    inner: Arc<RwLock<HashMap<SpaceId, Space>>>,
}

impl InMemorySpaceStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given spaces. Later duplicates win.
    pub fn with_spaces(spaces: impl IntoIterator<Item = Space>) -> Self {
        let map = spaces
            .into_iter()
            .map(|space| (space.id().clone(), space))
            .collect();

        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Create a store with the demo spaces loaded.
    pub fn with_demo_data() -> Self {
        Self::with_spaces(Snapshot::demo().spaces)
    }

    /// Insert or replace a space.
    pub fn insert(&self, space: Space) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        inner.insert(space.id().clone(), space);
        Ok(())
    }

    /// All spaces, ordered by id.
    pub fn list(&self) -> Result<Vec<Space>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut spaces: Vec<Space> = inner.values().cloned().collect();
        spaces.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(spaces)
    }

    /// Spaces owned by `owner`, ordered by id.
    pub fn list_owned_by(&self, owner: &UserId) -> Result<Vec<Space>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|space| space.is_owned_by(owner))
            .collect())
    }

    /// Whether a space with this id is stored.
    pub fn contains(&self, id: &SpaceId) -> bool {
        self.inner
            .read()
            .map(|inner| inner.contains_key(id))
            .unwrap_or(false)
    }

    /// Get the number of spaces.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SpaceStore for InMemorySpaceStore {
    fn fetch_by_id(&self, id: &SpaceId) -> Option<Space> {
        // A poisoned lock reads as absence: the port has no error channel here.
        let inner = self.inner.read().ok()?;
        inner.get(id).cloned()
    }

    fn remove_by_id(&self, id: &SpaceId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        // Conditional delete: a second removal of the same id fails.
        inner
            .remove(id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;

        debug!(space = %id, remaining = inner.len(), "Space removed from memory");
        Ok(())
    }
}
