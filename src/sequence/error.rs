//! Error types for sequence evaluation.
//!
//! Both errors are local and deterministic: evaluation is pure, so retrying
//! the same operation on the same chain reproduces the same failure.

use thiserror::Error;

/// Errors raised by sequence operations that require a value or a bound.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Sequence, SequenceError};
///
/// let mut empty = Sequence::<u64>::empty();
/// assert_eq!(empty.first(), Err(SequenceError::EmptySequence));
///
/// let error = Sequence::generate(1_u64, |n| n + 1).try_take(-1).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "invalid bound -1 for take: expected a non-negative count"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A value was required but the producer is exhausted.
    #[error("sequence is empty")]
    EmptySequence,

    /// A `take` or `drop` bound was negative.
    #[error("invalid bound {bound} for {operation}: expected a non-negative count")]
    InvalidBound {
        /// The operator that rejected the bound (`"take"` or `"drop"`).
        operation: &'static str,
        /// The rejected bound.
        bound: i64,
    },
}

/// Result alias for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;
