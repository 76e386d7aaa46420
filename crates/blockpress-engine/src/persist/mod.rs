//! # Batched Persistence
//!
//! Writes a block sequence into a store whose requests are capped at
//! [`MAX_BATCH`] children.
//!
//! ## Protocol
//!
//! - A sequence that fits one request is sent with the create call
//! - Otherwise the container is created empty and the blocks are appended in
//!   [`BatchPlan`] order, strictly one request at a time, with a blocking
//!   delay after each successful append
//! - A failed append above [`MIN_BATCH`] blocks is halved and both halves are
//!   retried in place; a failed batch at or below it is recorded and skipped
//!
//! Only the create call can fail the operation. Once the container exists,
//! the result is a [`PersistReport`] listing any lost block ranges.
//!
//! ## Modules
//!
//! - **`store`**: the [`BlockStore`] seam and container ids
//! - **`plan`**: the explicit work queue of block ranges
//! - **`persister`**: [`BatchPersister`], the loop driving the protocol
//! - **`memory`**: [`MemoryStore`], an in-process store for dry runs and tests
//! - **`error`**: [`PersistError`]

pub mod error;
pub mod memory;
pub mod persister;
pub mod plan;
pub mod store;

pub use error::PersistError;
pub use memory::{MemoryStore, MemoryStoreError, StoredContainer};
pub use persister::{BatchPersister, FailedBatch, PersistOptions, PersistReport};
pub use plan::BatchPlan;
pub use store::{BlockStore, ContainerId};

/// Maximum children in one write request.
pub const MAX_BATCH: usize = 100;
/// Batches at or below this size are not subdivided further.
pub const MIN_BATCH: usize = 10;
/// Default pause after each successful append.
pub const INTER_BATCH_DELAY_MS: u64 = 500;
