//! The end-to-end path: resolve references, parse, limit, persist.

use serde::Serialize;

use crate::limit::{Limited, Limits, Truncation, limit_blocks};
use crate::model::Block;
use crate::parsing::{parse_markdown, resolve_references};
use crate::persist::{BatchPersister, BlockStore, PersistError, PersistOptions, PersistReport};
use crate::properties::ContainerRequest;

/// A document compiled to store-ready blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    pub blocks: Vec<Block>,
    pub truncation: Option<Truncation>,
}

/// Compiles markdown text into blocks within `limits`.
pub fn compile(text: &str, limits: &Limits) -> Compiled {
    let resolved = resolve_references(text);
    let blocks = parse_markdown(&resolved);
    let parsed = blocks.len();
    let Limited { blocks, truncation } = limit_blocks(blocks, limits);
    log::debug!("compiled {parsed} blocks, {} after limiting", blocks.len());
    Compiled { blocks, truncation }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStatus {
    /// Every block that survived limiting was written.
    Complete,
    /// The container exists but some block ranges were lost.
    Partial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    pub persist: PersistReport,
    /// Set when the document was cut at the block cap before persisting.
    pub truncation: Option<Truncation>,
}

impl PublishReport {
    pub fn status(&self) -> PublishStatus {
        if self.persist.is_complete() {
            PublishStatus::Complete
        } else {
            PublishStatus::Partial
        }
    }
}

/// Compiles and persists documents into one store.
pub struct Publisher<S> {
    persister: BatchPersister<S>,
    limits: Limits,
}

impl<S: BlockStore> Publisher<S> {
    pub fn new(store: S) -> Self {
        Self::with_options(store, Limits::default(), PersistOptions::default())
    }

    pub fn with_options(store: S, limits: Limits, options: PersistOptions) -> Self {
        Self {
            persister: BatchPersister::with_options(store, options),
            limits,
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn store(&self) -> &S {
        self.persister.store()
    }

    pub fn into_store(self) -> S {
        self.persister.into_store()
    }

    /// Compiles `text` and writes it into a new container.
    ///
    /// Title and summary are clamped to the span limit first.
    pub fn publish(
        &mut self,
        request: &ContainerRequest,
        text: &str,
    ) -> Result<PublishReport, PersistError<S::Error>> {
        let Compiled { blocks, truncation } = compile(text, &self.limits);
        let persist = self.publish_blocks(request, &blocks)?;
        Ok(PublishReport {
            persist,
            truncation,
        })
    }

    /// Writes already-built blocks into a new container.
    pub fn publish_blocks(
        &mut self,
        request: &ContainerRequest,
        blocks: &[Block],
    ) -> Result<PersistReport, PersistError<S::Error>> {
        let request = ContainerRequest {
            properties: request.properties.clamped(),
            ..request.clone()
        };
        self.persister.persist(&request, blocks)
    }
}
