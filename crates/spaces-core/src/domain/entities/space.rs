//! The `Space` entity: an owned container of resources.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{ResourceId, SpaceId, UserId},
};

/// Name that marks the protected, non-deletable space of every owner.
pub const DEFAULT_SPACE_NAME: &str = "default";

/// An owned container of resources.
///
/// Fields are private: a space is created by its store and only read by the
/// application layer. The id never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    id: SpaceId,
    owner_id: UserId,
    name: String,
    #[serde(default)]
    resources: Vec<ResourceId>,
}

impl Space {
    /// An empty space.
    pub fn new(id: impl Into<SpaceId>, owner_id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            name: name.into(),
            resources: Vec::new(),
        }
    }

    /// The owner's protected default space.
    pub fn default_for(id: impl Into<SpaceId>, owner_id: impl Into<UserId>) -> Self {
        Self::new(id, owner_id, DEFAULT_SPACE_NAME)
    }

    /// The same space, holding the given resources instead.
    pub fn with_resources<I, R>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ResourceId>,
    {
        self.resources = resources.into_iter().map(Into::into).collect();
        self
    }

    pub fn builder() -> SpaceBuilder {
        SpaceBuilder::default()
    }

    pub fn id(&self) -> &SpaceId {
        &self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resources(&self) -> &[ResourceId] {
        &self.resources
    }

    pub fn is_owned_by(&self, user: &UserId) -> bool {
        self.owner_id == *user
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn is_the_default(&self) -> bool {
        self.name == DEFAULT_SPACE_NAME
    }
}

/// Builder for [`Space`]. `id` and `owner` are required.
#[derive(Debug, Default, Clone)]
pub struct SpaceBuilder {
    id: Option<SpaceId>,
    owner_id: Option<UserId>,
    name: Option<String>,
    resources: Vec<ResourceId>,
}

impl SpaceBuilder {
    pub fn id(mut self, id: impl Into<SpaceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn owner(mut self, owner_id: impl Into<UserId>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn resource(mut self, resource: impl Into<ResourceId>) -> Self {
        self.resources.push(resource.into());
        self
    }

    pub fn resources<I, R>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ResourceId>,
    {
        self.resources.extend(resources.into_iter().map(Into::into));
        self
    }

    /// Build the space. A missing name defaults to the empty string, which
    /// is a legal (non-default) display name.
    pub fn build(self) -> Result<Space, DomainError> {
        let id = self
            .id
            .ok_or(DomainError::MissingRequiredField { field: "id" })?;
        let owner_id = self
            .owner_id
            .ok_or(DomainError::MissingRequiredField { field: "owner" })?;

        Ok(Space {
            id,
            owner_id,
            name: self.name.unwrap_or_default(),
            resources: self.resources,
        })
    }
}
