//! Error handling for the sorting engine

use std::error::Error as StdError;
use thiserror::Error;

/// Alias for `Result<T, orst_engine::SortError>`.
pub type Result<T> = std::result::Result<T, SortError>;

/// Everything that can stop a sort before the array is in order.
#[derive(Error, Debug)]
pub enum SortError {
    /// An element cannot be ordered against itself (a float `NaN`, for example). Raised by the
    /// validation pass, before the array is touched or any step is reported.
    #[error("Invalid input: element at index {index} cannot be compared")]
    InvalidInput { index: usize },

    /// Two elements produced no ordering in the middle of a run.
    #[error("Elements at indices {i} and {j} cannot be compared")]
    Incomparable { i: usize, j: usize },

    /// A step referenced a position outside of the array. This is a bug in an algorithm and is
    /// never retried.
    #[error("Internal error: index {index} is out of range for an array of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Bogo sort ran out of shuffle rounds before the array came out sorted.
    #[error("Gave up after {rounds} shuffle rounds without reaching sorted order")]
    BudgetExhausted { rounds: u64 },

    /// A step sink refused a step.
    #[error("Step sink failed: {0}")]
    Sink(#[source] Box<dyn StdError + Send + Sync>),
}

impl SortError {
    /// Wraps an error raised by a [`StepSink`](crate::StepSink) implementation.
    pub fn sink<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        SortError::Sink(error.into())
    }

    /// Returns true for errors that point at a bug in the engine rather than at the input.
    pub fn is_internal(&self) -> bool {
        matches!(self, SortError::OutOfRange { .. })
    }
}
