//! The `Sequence<T>` type and its pull-based evaluation.
//!
//! A [`Sequence`] is a forward-only producer of values. Nothing is computed
//! until a value is requested with [`Sequence::pull`], [`Sequence::first`]
//! or a terminal operation such as [`Sequence::to_list`].
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::sequence::Sequence;
//!
//! let mut naturals = Sequence::generate(1_u64, |n| n + 1);
//!
//! assert_eq!(naturals.pull(), Some(1));
//! assert_eq!(naturals.pull(), Some(2));
//! assert_eq!(naturals.first(), Ok(3));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use static_assertions::assert_not_impl_any;

use super::error::{SequenceError, SequenceResult};
use super::pipeline::{Pipeline, Stage};
use super::source::{FromFn, IterSource, Source, Successors};

/// A lazy, potentially infinite, forward-only sequence of values.
///
/// A sequence consists of a root producer and an ordered list of same-type
/// transform stages. Composition operators take `self` by value, so the
/// returned sequence owns its upstream exclusively; there is no way to pull
/// from a sequence once it has been composed into another.
///
/// # Thread Safety
///
/// `Sequence<T>` is neither `Send` nor `Sync`. Each stage holds position
/// state that belongs to a single consumer. Independent consumers build
/// independent chains.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::Sequence;
///
/// let evens = Sequence::generate(0_u64, |n| n + 1)
///     .filter(|n| n % 2 == 0)
///     .take(4)
///     .to_list();
///
/// assert_eq!(evens, vec![0, 2, 4, 6]);
/// ```
pub struct Sequence<T> {
    source: Box<dyn Source<T>>,
    pipeline: Pipeline<T>,
    exhausted: bool,
}

assert_not_impl_any!(Sequence<u64>: Send, Sync);

impl<T: 'static> Sequence<T> {
    pub(crate) fn from_source<S>(source: S) -> Self
    where
        S: Source<T> + 'static,
    {
        Self {
            source: Box::new(source),
            pipeline: Pipeline::new(),
            exhausted: false,
        }
    }

    /// Creates an infinite sequence starting at `seed`.
    ///
    /// Each subsequent value is `successor(&previous)`. The successor is only
    /// called when the following value is pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let powers = Sequence::generate(1_u64, |n| n * 2).take(5).to_list();
    /// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
    /// ```
    pub fn generate<F>(seed: T, mut successor: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> T + 'static,
    {
        Self::successors(seed, move |previous| Some(successor(previous)))
    }

    /// Creates a sequence starting at `seed` that ends when `successor`
    /// returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let countdown = Sequence::successors(3_u32, |n| n.checked_sub(1)).to_list();
    /// assert_eq!(countdown, vec![3, 2, 1, 0]);
    /// ```
    pub fn successors<F>(seed: T, successor: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> Option<T> + 'static,
    {
        Self::from_source(Successors::new(seed, successor))
    }

    /// Creates a sequence whose values are produced by calling `producer`.
    ///
    /// The sequence ends the first time `producer` returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let mut state = 1_u64;
    /// let doubling = Sequence::from_fn(move || {
    ///     let current = state;
    ///     state *= 2;
    ///     Some(current)
    /// });
    ///
    /// assert_eq!(doubling.take(3).to_list(), vec![1, 2, 4]);
    /// ```
    pub fn from_fn<F>(producer: F) -> Self
    where
        F: FnMut() -> Option<T> + 'static,
    {
        Self::from_source(FromFn(producer))
    }

    /// Lazily adapts any iterator, finite or not.
    pub fn from_iterator<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::from_source(IterSource(iterable.into_iter()))
    }

    /// Creates a sequence with no values.
    pub fn empty() -> Self {
        Self::from_iterator(std::iter::empty())
    }

    /// Creates a sequence with exactly one value.
    pub fn once(value: T) -> Self {
        Self::from_iterator(std::iter::once(value))
    }
}

impl<T> Sequence<T> {
    /// Advances the sequence by one step.
    ///
    /// Returns the produced value, or `None` if the sequence is finite and
    /// has ended. A sequence that returned `None` keeps returning `None`.
    ///
    /// Each pull produces values from the root source and walks them through
    /// the stage list until one survives; the work is done inline, and the
    /// call depth does not grow with the number of stages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let mut digits = Sequence::from_iterator(0..2);
    /// assert_eq!(digits.pull(), Some(0));
    /// assert_eq!(digits.pull(), Some(1));
    /// assert_eq!(digits.pull(), None);
    /// assert_eq!(digits.pull(), None);
    /// ```
    pub fn pull(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let value = self.advance();
        if value.is_none() {
            self.exhausted = true;
        }
        tracing::trace!(
            target: "lazyseq::pull",
            stages = self.pipeline.len(),
            exhausted = self.exhausted,
            "pull"
        );
        value
    }

    fn advance(&mut self) -> Option<T> {
        loop {
            if self.pipeline.is_closed() {
                return None;
            }
            let candidate = self.source.produce()?;
            if let Some(value) = self.pipeline.admit(candidate) {
                return Some(value);
            }
        }
    }

    /// Pulls exactly one value.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{Sequence, SequenceError};
    ///
    /// let mut single = Sequence::once("only");
    /// assert_eq!(single.first(), Ok("only"));
    /// assert_eq!(single.first(), Err(SequenceError::EmptySequence));
    /// ```
    pub fn first(&mut self) -> SequenceResult<T> {
        self.pull().ok_or(SequenceError::EmptySequence)
    }

    /// Returns `true` once a pull has observed the end of the sequence.
    ///
    /// This never forces evaluation, so a fresh `take(0)` reports `false`
    /// until it is pulled.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Number of same-type stages stacked over the root producer.
    #[inline]
    pub fn stage_count(&self) -> usize {
        self.pipeline.len()
    }

    pub(crate) fn push_stage(mut self, stage: Stage<T>) -> Self {
        self.pipeline.push(stage);
        self
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Sequence")
            .field("stages", &self.pipeline.len())
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Iterator interop
// =============================================================================

/// Owning iterator over a [`Sequence`].
///
/// Created by [`Sequence::into_iter`]. Each call to `next` is one pull.
#[derive(Debug)]
pub struct IntoIter<T>(Sequence<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.0.pull()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
