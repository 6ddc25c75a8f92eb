//! Error types for the receipt core.

use thiserror::Error;

/// Errors produced by the scoring engine and the receipt store.
///
/// None of these are retried and none are fatal: `AlreadyExists` and
/// `NotFound` are normal outcomes of duplicate submission and unknown
/// lookup, `InvalidTotal` is surfaced to the caller as bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReceiptError {
    #[error("total '{0}' is not a valid decimal amount")]
    InvalidTotal(String),

    #[error("receipt has already been submitted (digest {0})")]
    AlreadyExists(String),

    #[error("receipt not found: {0}")]
    NotFound(String),
}

/// Result type alias for core operations.
pub type ReceiptResult<T> = Result<T, ReceiptError>;
