//! Run summary.

use crate::download::item::ItemRecord;
use crate::download::transfer::TransferOutcome;
use crate::error::{exit_codes, ItemError};

/// An item that did not end up on disk, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedItem {
    pub name: String,
    pub reason: ItemError,
}

/// Aggregate result of one run.
#[derive(Debug, Default)]
pub struct RunResult {
    pub total: usize,
    pub succeeded: usize,

    /// Failures in listing order.
    pub failed: Vec<FailedItem>,

    pub bytes_written: u64,

    /// Final records in listing order.
    pub items: Vec<ItemRecord>,
}

impl RunResult {
    /// Apply transfer outcomes to their records and summarize.
    pub fn new(mut items: Vec<ItemRecord>, outcomes: &[TransferOutcome]) -> Self {
        let mut bytes_written = 0;
        for outcome in outcomes {
            if let Some(item) = items.get_mut(outcome.index) {
                item.record_outcome(outcome);
            }
            bytes_written += outcome.bytes_written;
        }

        let failed: Vec<FailedItem> = items
            .iter()
            .filter_map(|item| {
                item.failure().map(|reason| FailedItem {
                    name: item.name.clone(),
                    reason: reason.clone(),
                })
            })
            .collect();

        Self {
            total: items.len(),
            succeeded: items.len() - failed.len(),
            failed,
            bytes_written,
            items,
        }
    }

    /// Whether every listed item was written to disk.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Process exit code for this result.
    pub fn exit_code(&self) -> i32 {
        if self.is_complete() {
            exit_codes::SUCCESS
        } else {
            exit_codes::DOWNLOAD_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::item::ItemState;

    fn resolved(index: usize, name: &str) -> ItemRecord {
        let mut item = ItemRecord::new(index, name);
        item.record_resolution(Ok(format!("https://dl/{}", name)));
        item
    }

    #[test]
    fn test_all_succeeded() {
        let items = vec![resolved(0, "a.txt"), resolved(1, "b.txt")];
        let outcomes = [
            TransferOutcome::succeeded(1, 7),
            TransferOutcome::succeeded(0, 5),
        ];

        let result = RunResult::new(items, &outcomes);
        assert_eq!(result.total, 2);
        assert_eq!(result.succeeded, 2);
        assert_eq!(result.bytes_written, 12);
        assert!(result.is_complete());
        assert_eq!(result.exit_code(), exit_codes::SUCCESS);
        assert!(result
            .items
            .iter()
            .all(|item| item.state == ItemState::Transferred));
    }

    #[test]
    fn test_failures_are_listed_in_order() {
        let mut unresolved = ItemRecord::new(1, "b.txt");
        unresolved.record_resolution(Err(ItemError::ResolveStatus(404)));
        let items = vec![resolved(0, "a.txt"), unresolved, resolved(2, "c.txt")];
        let outcomes = [
            TransferOutcome::failed(2, ItemError::TransferStatus(500)),
            TransferOutcome::succeeded(0, 3),
            TransferOutcome::failed(1, ItemError::UpstreamUrlFailure),
        ];

        let result = RunResult::new(items, &outcomes);
        assert_eq!(result.succeeded, 1);
        assert_eq!(
            result.failed,
            [
                FailedItem {
                    name: "b.txt".into(),
                    reason: ItemError::ResolveStatus(404),
                },
                FailedItem {
                    name: "c.txt".into(),
                    reason: ItemError::TransferStatus(500),
                },
            ]
        );
        assert_eq!(result.exit_code(), exit_codes::DOWNLOAD_ERROR);
    }

    #[test]
    fn test_empty_run_is_complete() {
        let result = RunResult::new(Vec::new(), &[]);
        assert_eq!(result.total, 0);
        assert!(result.is_complete());
    }
}
