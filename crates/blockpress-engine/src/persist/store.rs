use std::fmt;

use serde::Serialize;

use crate::model::Block;
use crate::properties::ContainerRequest;

/// Store-assigned identifier of a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two requests a block store accepts.
///
/// Implementations are synchronous: each call returns once the store has
/// acknowledged or rejected the whole request. Neither call is retried by
/// the implementation; retry policy belongs to
/// [`BatchPersister`](super::BatchPersister).
pub trait BlockStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates a container with `children` as its initial blocks.
    fn create_container(
        &mut self,
        request: &ContainerRequest,
        children: &[Block],
    ) -> Result<ContainerId, Self::Error>;

    /// Appends `children` after the container's existing blocks.
    fn append_children(
        &mut self,
        container: &ContainerId,
        children: &[Block],
    ) -> Result<(), Self::Error>;
}

impl<S: BlockStore + ?Sized> BlockStore for &mut S {
    type Error = S::Error;

    fn create_container(
        &mut self,
        request: &ContainerRequest,
        children: &[Block],
    ) -> Result<ContainerId, Self::Error> {
        (**self).create_container(request, children)
    }

    fn append_children(
        &mut self,
        container: &ContainerId,
        children: &[Block],
    ) -> Result<(), Self::Error> {
        (**self).append_children(container, children)
    }
}
