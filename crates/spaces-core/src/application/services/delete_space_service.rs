//! Delete Space Service - the validated deletion workflow.
//!
//! This service coordinates one deletion:
//! 1. Fetch the space through the store port
//! 2. Run the domain guard chain against that single snapshot
//! 3. Ask the store to remove it
//!
//! Every failure is returned as a [`DeletionError`]; nothing is retried,
//! swallowed or logged at error level here.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::SpaceStore,
    domain::{DeletionError, DeletionPolicy, Space, SpaceId, UserId},
};

/// Deletes spaces on behalf of a user, enforcing the deletion rules.
pub struct DeleteSpaceService {
    store: Box<dyn SpaceStore>,
}

impl DeleteSpaceService {
    /// Create a new service over the given store adapter.
    pub fn new(store: Box<dyn SpaceStore>) -> Self {
        Self { store }
    }

    /// Delete the space `id` acting as `acting_user`.
    ///
    /// The store is read once. It is written once, and only after every
    /// guard has passed.
    #[instrument(skip_all, fields(space = %id, user = %acting_user))]
    pub fn delete(&self, id: &SpaceId, acting_user: &UserId) -> Result<(), DeletionError> {
        self.check(id, acting_user)?;

        self.store
            .remove_by_id(id)
            .map_err(|source| DeletionError::RemovalFailed {
                id: id.clone(),
                source,
            })?;

        info!("Space removed");
        Ok(())
    }

    /// Run the guard chain without removing anything.
    ///
    /// Returns the fetched snapshot when the space could be deleted.
    #[instrument(skip_all, fields(space = %id, user = %acting_user))]
    pub fn check(&self, id: &SpaceId, acting_user: &UserId) -> Result<Space, DeletionError> {
        let space = self
            .store
            .fetch_by_id(id)
            .ok_or_else(|| DeletionError::NotFound { id: id.clone() })?;

        DeletionPolicy::check(&space, acting_user)?;

        debug!(name = space.name(), "Deletion guards passed");
        Ok(space)
    }
}
