//! # lazyseq
//!
//! Lazy, potentially infinite, composable sequences for Rust, and a
//! trial-division prime sieve built from nothing but deferred filters.
//!
//! ## Overview
//!
//! - **Sequence Core**: [`Sequence`](sequence::Sequence) produces values on
//!   demand through `pull`, `first` and `to_list`
//! - **Composition Operators**: `map`, `filter`, `drop`, `take` and `inspect`
//!   link sequences without evaluating them
//! - **Prime Sieve**: [`PrimeSieve`](sieve::PrimeSieve) rebuilds its
//!   candidate sequence with one more filter per discovered prime
//!
//! ## Feature Flags
//!
//! - `sieve`: The prime sieve application (enabled by default)
//! - `full`: Enable all features
//!
//! ## Diagnostics
//!
//! Evaluation emits [`tracing`] events: one `TRACE` event per pull (target
//! `lazyseq::pull`), one per filter rejection (target `lazyseq::filter`) and
//! a `DEBUG` event per discovered prime. No subscriber is installed by this
//! crate.
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let first_four = primes().take(4).to_list();
//! assert_eq!(first_four, vec![2, 3, 5, 7]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::*;

    #[cfg(feature = "sieve")]
    pub use crate::sieve::*;
}

pub mod sequence;

#[cfg(feature = "sieve")]
pub mod sieve;
