use crate::domain::{entities::Space, error::DeletionError, value_objects::UserId};

/// The deletion rules, as an ordered chain of guard clauses.
///
/// Identity checks run before the destructive-precondition checks. The first
/// failing guard wins; nothing here touches a store.
pub struct DeletionPolicy;

impl DeletionPolicy {
    pub fn check(space: &Space, acting_user: &UserId) -> Result<(), DeletionError> {
        if !space.is_owned_by(acting_user) {
            return Err(DeletionError::NotOwned {
                id: space.id().clone(),
                acting_user: acting_user.clone(),
            });
        }

        if !space.is_empty() {
            return Err(DeletionError::NotEmpty {
                id: space.id().clone(),
                resources: space.resources().len(),
            });
        }

        if space.is_the_default() {
            return Err(DeletionError::ProtectedDefault {
                id: space.id().clone(),
            });
        }

        Ok(())
    }
}
