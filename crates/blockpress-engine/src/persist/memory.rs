use thiserror::Error;
use uuid::Uuid;

use super::{BlockStore, ContainerId, MAX_BATCH};
use crate::limit::SPAN_LIMIT;
use crate::model::Block;
use crate::properties::ContainerRequest;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryStoreError {
    #[error("Request has {count} children, more than the limit of {max}")]
    TooManyChildren { count: usize, max: usize },

    #[error("Child {index} has a span of {len} characters, more than the limit of {max}")]
    SpanTooLong { index: usize, len: usize, max: usize },

    #[error("No container with id {0}")]
    UnknownContainer(ContainerId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredContainer {
    pub id: ContainerId,
    pub request: ContainerRequest,
    pub blocks: Vec<Block>,
}

/// A block store held in process memory.
///
/// Enforces the same request limits as the remote store, so a dry run
/// rejects what the real store would. Containers get random v4 UUIDs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    containers: Vec<StoredContainer>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(&self, id: &ContainerId) -> Option<&StoredContainer> {
        self.containers.iter().find(|c| &c.id == id)
    }

    /// Containers in creation order.
    pub fn containers(&self) -> &[StoredContainer] {
        &self.containers
    }

    fn check(children: &[Block]) -> Result<(), MemoryStoreError> {
        if children.len() > MAX_BATCH {
            return Err(MemoryStoreError::TooManyChildren {
                count: children.len(),
                max: MAX_BATCH,
            });
        }
        for (index, block) in children.iter().enumerate() {
            if let Some(len) = block
                .spans
                .iter()
                .map(|s| s.char_len())
                .find(|&len| len > SPAN_LIMIT)
            {
                return Err(MemoryStoreError::SpanTooLong {
                    index,
                    len,
                    max: SPAN_LIMIT,
                });
            }
        }
        Ok(())
    }
}

impl BlockStore for MemoryStore {
    type Error = MemoryStoreError;

    fn create_container(
        &mut self,
        request: &ContainerRequest,
        children: &[Block],
    ) -> Result<ContainerId, Self::Error> {
        Self::check(children)?;
        let id = ContainerId::new(Uuid::new_v4().to_string());
        self.containers.push(StoredContainer {
            id: id.clone(),
            request: request.clone(),
            blocks: children.to_vec(),
        });
        Ok(id)
    }

    fn append_children(
        &mut self,
        container: &ContainerId,
        children: &[Block],
    ) -> Result<(), Self::Error> {
        Self::check(children)?;
        let stored = self
            .containers
            .iter_mut()
            .find(|c| &c.id == container)
            .ok_or_else(|| MemoryStoreError::UnknownContainer(container.clone()))?;
        stored.blocks.extend_from_slice(children);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Span;
    use crate::properties::PageProperties;
    use chrono::{FixedOffset, TimeZone};

    fn request() -> ContainerRequest {
        let created = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
            .unwrap();
        ContainerRequest::new("db", PageProperties::new("t", created))
    }

    fn para(text: &str) -> Block {
        Block::paragraph(vec![Span::plain(text)])
    }

    #[test]
    fn create_then_append_keeps_order() {
        let mut store = MemoryStore::new();
        let id = store.create_container(&request(), &[para("a")]).unwrap();
        store.append_children(&id, &[para("b"), para("c")]).unwrap();

        let texts: Vec<_> = store.container(&id).unwrap().blocks.iter().map(Block::text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn rejects_oversized_requests() {
        let mut store = MemoryStore::new();
        let too_many = vec![para("x"); MAX_BATCH + 1];
        assert_eq!(
            store.create_container(&request(), &too_many),
            Err(MemoryStoreError::TooManyChildren {
                count: MAX_BATCH + 1,
                max: MAX_BATCH
            })
        );

        let long = para(&"x".repeat(SPAN_LIMIT + 1));
        assert!(matches!(
            store.create_container(&request(), &[para("ok"), long]),
            Err(MemoryStoreError::SpanTooLong { index: 1, .. })
        ));
        assert!(store.containers().is_empty());
    }

    #[test]
    fn append_to_unknown_container_fails() {
        let mut store = MemoryStore::new();
        let missing = ContainerId::new("nope");
        assert_eq!(
            store.append_children(&missing, &[para("x")]),
            Err(MemoryStoreError::UnknownContainer(missing.clone()))
        );
    }
}
