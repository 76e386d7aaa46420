pub mod compose;
pub mod limit;
pub mod model;
pub mod parsing;
pub mod persist;
pub mod pipeline;
pub mod properties;
pub mod render;

// Re-export key types for easier usage
pub use limit::{Limited, Limits, MAX_BLOCKS, SPAN_LIMIT, Truncation, limit_blocks};
pub use model::{Block, BlockKind, Emphasis, Reference, Span};
pub use parsing::{format_inline, parse_markdown, resolve_references};
pub use persist::{
    BatchPersister, BlockStore, ContainerId, FailedBatch, MAX_BATCH, MIN_BATCH, MemoryStore,
    PersistError, PersistOptions, PersistReport,
};
pub use pipeline::{Compiled, PublishReport, PublishStatus, Publisher, compile};
pub use properties::{ContainerRequest, PageProperties, store_url};
pub use render::to_markdown;
