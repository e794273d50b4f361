//! Lazy sequence engine.
//!
//! This module provides [`Sequence`], a forward-only producer of values that
//! computes nothing until a value is pulled, and the operators that compose
//! sequences without evaluating them:
//!
//! - [`Sequence::generate`], [`Sequence::successors`], [`Sequence::from_fn`]:
//!   root producers
//! - [`Sequence::map`], [`Sequence::filter`], [`Sequence::drop`],
//!   [`Sequence::take`], [`Sequence::inspect`]: composition
//! - [`Sequence::pull`], [`Sequence::first`], [`Sequence::to_list`]:
//!   evaluation
//! - [`Shared`]: a cell giving predicates capture-by-reference semantics
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::sequence::Sequence;
//!
//! let odd_squares = Sequence::generate(1_u64, |n| n + 1)
//!     .filter(|n| n % 2 == 1)
//!     .map(|n| n * n)
//!     .drop(1)
//!     .take(3)
//!     .to_list();
//!
//! assert_eq!(odd_squares, vec![9, 25, 49]);
//! ```
//!
//! # Stack Safety
//!
//! Same-type operators are stored as a flat stage list rather than as
//! nested wrappers, so pulling through thousands of chained filters uses
//! constant stack space. Only `map` nests, one level per call.
//!
//! ```rust
//! use lazyseq::sequence::Sequence;
//!
//! let mut sequence = Sequence::generate(1_u64, |n| n + 1);
//! for _ in 0..10_000 {
//!     sequence = sequence.filter(|n| n % 2 == 1);
//! }
//!
//! assert_eq!(sequence.first(), Ok(1));
//! assert_eq!(sequence.first(), Ok(3));
//! ```

mod base;
mod error;
mod operators;
mod pipeline;
mod shared;
mod source;

pub use base::{IntoIter, Sequence};
pub use error::{SequenceError, SequenceResult};
pub use shared::Shared;
