use super::Partition;
use crate::models::SelectionError;

/// Errors that can occur while running an evolution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Selection error: {0}")]
    SelectionError(#[from] SelectionError),
    /// Padding could not reach its minimum within the configured draw budget.
    ///
    /// Uniform sampling yields both valid and invalid dates with probability
    /// bounded away from zero, so this points at a misconfigured oracle.
    #[error(
        "PaddingExhausted: partition={partition}, found={found}, required={required}, attempts={attempts}"
    )]
    PaddingExhausted {
        partition: Partition,
        found: usize,
        required: usize,
        attempts: usize,
    },
}
