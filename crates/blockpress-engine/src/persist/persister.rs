use std::ops::Range;
use std::thread;
use std::time::Duration;

use serde::Serialize;

use super::{
    BlockStore, ContainerId, INTER_BATCH_DELAY_MS, MAX_BATCH, MIN_BATCH, PersistError,
    plan::BatchPlan,
};
use crate::model::Block;
use crate::properties::ContainerRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistOptions {
    /// Children per request.
    pub max_batch: usize,
    /// Failed batches of this size or smaller are skipped, not split.
    pub min_batch: usize,
    /// Blocking pause after each successful append when more work remains.
    pub inter_batch_delay: Duration,
}

impl Default for PersistOptions {
    fn default() -> Self {
        Self {
            max_batch: MAX_BATCH,
            min_batch: MIN_BATCH,
            inter_batch_delay: Duration::from_millis(INTER_BATCH_DELAY_MS),
        }
    }
}

/// A block range lost after subdivision could not make it succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedBatch {
    /// Positions in the persisted sequence.
    pub range: Range<usize>,
    /// The store's error for the last attempt.
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistReport {
    pub container: ContainerId,
    /// Blocks handed to the persister.
    pub total: usize,
    /// Blocks the store acknowledged.
    pub written: usize,
    pub failed: Vec<FailedBatch>,
    /// Store requests issued, the create call included.
    pub requests: usize,
}

impl PersistReport {
    fn new(container: ContainerId, total: usize) -> Self {
        Self {
            container,
            total,
            written: 0,
            failed: vec![],
            requests: 1,
        }
    }

    /// True if every block was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn lost_blocks(&self) -> usize {
        self.failed.iter().map(|f| f.range.len()).sum()
    }
}

/// Drives the batched write protocol against a [`BlockStore`].
///
/// Batches are sent one at a time on the calling thread. The persister
/// keeps no state between calls to [`persist`](Self::persist).
pub struct BatchPersister<S> {
    store: S,
    options: PersistOptions,
}

impl<S: BlockStore> BatchPersister<S> {
    pub fn new(store: S) -> Self {
        Self::with_options(store, PersistOptions::default())
    }

    pub fn with_options(store: S, options: PersistOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &PersistOptions {
        &self.options
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Creates a container for `request` and writes `blocks` into it.
    ///
    /// Fails only if the container cannot be created. Append failures are
    /// retried by halving and, when irreducible, listed in the report.
    pub fn persist(
        &mut self,
        request: &ContainerRequest,
        blocks: &[Block],
    ) -> Result<PersistReport, PersistError<S::Error>> {
        if blocks.len() <= self.options.max_batch {
            let container = self.create(request, blocks)?;
            log::info!("created container {container} with {} blocks", blocks.len());
            let mut report = PersistReport::new(container, blocks.len());
            report.written = blocks.len();
            return Ok(report);
        }

        let container = self.create(request, &[])?;
        log::info!(
            "created container {container}; appending {} blocks in batches of {}",
            blocks.len(),
            self.options.max_batch
        );
        let mut report = PersistReport::new(container, blocks.len());
        let mut plan = BatchPlan::new(blocks.len(), self.options.max_batch, self.options.min_batch);
        self.drain(&mut plan, blocks, &mut report);

        if report.is_complete() {
            log::info!("wrote all {} blocks to {}", report.total, report.container);
        } else {
            log::warn!(
                "wrote {} of {} blocks to {}; {} batches lost",
                report.written,
                report.total,
                report.container,
                report.failed.len()
            );
        }
        Ok(report)
    }

    fn create(
        &mut self,
        request: &ContainerRequest,
        children: &[Block],
    ) -> Result<ContainerId, PersistError<S::Error>> {
        self.store
            .create_container(request, children)
            .map_err(|source| {
                log::error!("container creation failed: {source}");
                PersistError::ContainerCreation { source }
            })
    }

    fn drain(&mut self, plan: &mut BatchPlan, blocks: &[Block], report: &mut PersistReport) {
        let mut attempt = 0usize;
        while let Some(range) = plan.next_batch() {
            attempt += 1;
            report.requests += 1;
            let batch = &blocks[range.clone()];
            match self.store.append_children(&report.container, batch) {
                Ok(()) => {
                    report.written += batch.len();
                    log::info!(
                        "batch {attempt}/{}, {} blocks ({}..{})",
                        plan.planned(),
                        batch.len(),
                        range.start,
                        range.end
                    );
                    if !plan.is_empty() && !self.options.inter_batch_delay.is_zero() {
                        thread::sleep(self.options.inter_batch_delay);
                    }
                }
                Err(e) => {
                    log::warn!(
                        "batch {attempt}/{} of blocks {}..{} failed: {e}",
                        plan.planned(),
                        range.start,
                        range.end
                    );
                    if plan.subdivide(range.clone()) {
                        log::info!(
                            "retrying blocks {}..{} as two halves",
                            range.start,
                            range.end
                        );
                    } else {
                        log::warn!(
                            "skipping blocks {}..{} ({} blocks)",
                            range.start,
                            range.end,
                            range.len()
                        );
                        report.failed.push(FailedBatch {
                            range,
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }
    }
}
