//! Background row population.
//!
//! The hosting page starts the widget with a small row count for a
//! fast first paint, then grows it to the full data set in fixed-size
//! batches on a fixed interval. The host owns the timer (and clears
//! it on teardown); the populator only tracks progress. A missed tick
//! is not retried — the next tick picks up where the last left off.

use std::time::Duration;

pub const INITIAL_ROW_COUNT: usize = 400;
pub const TARGET_ROW_COUNT: usize = 10_000;
pub const APPEND_BATCH_ROWS: usize = 200;
pub const APPEND_INTERVAL: Duration = Duration::from_millis(120);

/// A contiguous run of rows to append: `start..start + count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBatch {
    pub start: usize,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct RowPopulator {
    appended: usize,
    target: usize,
    batch: usize,
}

impl Default for RowPopulator {
    fn default() -> Self {
        Self::new(INITIAL_ROW_COUNT, TARGET_ROW_COUNT, APPEND_BATCH_ROWS)
    }
}

impl RowPopulator {
    pub fn new(initial: usize, target: usize, batch: usize) -> Self {
        Self {
            appended: initial,
            target,
            batch,
        }
    }

    /// Rows the widget holds so far (initial + everything appended).
    pub fn row_count(&self) -> usize {
        self.appended
    }

    pub fn is_done(&self) -> bool {
        self.appended >= self.target
    }

    /// Next batch to append, or `None` once the target is reached.
    /// The final batch is truncated to land exactly on the target.
    pub fn next_batch(&mut self) -> Option<RowBatch> {
        if self.batch == 0 || self.is_done() {
            return None;
        }
        let start = self.appended;
        let count = self.batch.min(self.target - self.appended);
        self.appended += count;
        Some(RowBatch { start, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batches_cover_initial_to_target_exactly() {
        let mut populator = RowPopulator::new(400, 1000, 250);
        let mut total = 0;
        let mut expected_start = 400;
        while let Some(batch) = populator.next_batch() {
            assert_eq!(batch.start, expected_start);
            expected_start += batch.count;
            total += batch.count;
        }
        assert_eq!(total, 600);
        assert_eq!(populator.row_count(), 1000);
        assert!(populator.is_done());
    }

    #[test]
    fn test_final_batch_is_truncated() {
        let mut populator = RowPopulator::new(0, 10, 4);
        assert_eq!(populator.next_batch(), Some(RowBatch { start: 0, count: 4 }));
        assert_eq!(populator.next_batch(), Some(RowBatch { start: 4, count: 4 }));
        assert_eq!(populator.next_batch(), Some(RowBatch { start: 8, count: 2 }));
        assert_eq!(populator.next_batch(), None);
        // Stays done; no restart on later ticks.
        assert_eq!(populator.next_batch(), None);
    }

    #[test]
    fn test_already_at_target_yields_nothing() {
        let mut populator = RowPopulator::new(1000, 1000, 100);
        assert!(populator.is_done());
        assert_eq!(populator.next_batch(), None);
    }

    #[test]
    fn test_default_constants_are_consistent() {
        let mut populator = RowPopulator::default();
        assert_eq!(populator.row_count(), INITIAL_ROW_COUNT);
        let batch = populator.next_batch().unwrap();
        assert_eq!(batch.start, INITIAL_ROW_COUNT);
        assert_eq!(batch.count, APPEND_BATCH_ROWS);
        assert!(INITIAL_ROW_COUNT < TARGET_ROW_COUNT);
    }
}
