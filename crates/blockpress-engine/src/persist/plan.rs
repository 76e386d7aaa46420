use std::collections::VecDeque;
use std::ops::Range;

/// Ordered work queue of block ranges still to be written.
///
/// Starts as a partition of `0..len` into `max_batch`-sized ranges. A failed
/// range can be subdivided: its two halves go to the front of the queue, so
/// blocks are still attempted in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    queue: VecDeque<Range<usize>>,
    min_batch: usize,
    planned: usize,
}

impl BatchPlan {
    pub fn new(len: usize, max_batch: usize, min_batch: usize) -> Self {
        let max_batch = max_batch.max(1);
        let queue: VecDeque<_> = (0..len)
            .step_by(max_batch)
            .map(|start| start..(start + max_batch).min(len))
            .collect();
        let planned = queue.len();
        Self {
            queue,
            min_batch,
            planned,
        }
    }

    /// Takes the next range to attempt.
    pub fn next_batch(&mut self) -> Option<Range<usize>> {
        self.queue.pop_front()
    }

    /// Requeues a failed range as two halves, if it is above the minimum.
    ///
    /// Returns false when the range is too small to split; the caller then
    /// gives up on it.
    pub fn subdivide(&mut self, range: Range<usize>) -> bool {
        if range.len() <= self.min_batch || range.len() < 2 {
            return false;
        }
        let mid = range.start + range.len() / 2;
        self.queue.push_front(mid..range.end);
        self.queue.push_front(range.start..mid);
        self.planned += 2;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Every range ever queued, including halves added by subdivision.
    pub fn planned(&self) -> usize {
        self.planned
    }
}
