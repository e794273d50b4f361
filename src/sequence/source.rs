//! Root producers of a sequence pipeline.
//!
//! A [`Source`] sits at the bottom of every [`Sequence`]: it is the only
//! place where new values come into existence. Everything stacked on top of
//! it (filters, drops, takes) only decides which of those values survive.
//!
//! # Invariants
//!
//! - **Deferred**: constructing a source never calls the user's closures.
//! - **Fused by the owner**: sources may misbehave after returning `None`;
//!   [`Sequence`] stops polling them at that point.

use super::base::Sequence;

/// A producer of values at the root of a [`Sequence`] pipeline.
pub(crate) trait Source<T> {
    /// Produces the next value, or `None` once the source has ended.
    fn produce(&mut self) -> Option<T>;
}

// =============================================================================
// Successors
// =============================================================================

enum SuccessorsState<T> {
    /// Nothing emitted yet; holds the seed.
    Seed(T),
    /// Holds the last emitted value, the input of the next successor call.
    Emitted(T),
    Finished,
}

/// Seed-and-successor generator.
///
/// The successor runs when the *following* value is pulled, never when the
/// current one is emitted.
pub(crate) struct Successors<T, F> {
    state: SuccessorsState<T>,
    successor: F,
}

impl<T, F> Successors<T, F> {
    pub(crate) const fn new(seed: T, successor: F) -> Self {
        Self {
            state: SuccessorsState::Seed(seed),
            successor,
        }
    }
}

impl<T, F> Source<T> for Successors<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    fn produce(&mut self) -> Option<T> {
        let next = match std::mem::replace(&mut self.state, SuccessorsState::Finished) {
            SuccessorsState::Seed(seed) => seed,
            SuccessorsState::Emitted(previous) => (self.successor)(&previous)?,
            SuccessorsState::Finished => return None,
        };
        self.state = SuccessorsState::Emitted(next.clone());
        Some(next)
    }
}

// =============================================================================
// Closure and iterator adapters
// =============================================================================

/// Source driven by a closure, the builder behind [`Sequence::from_fn`].
pub(crate) struct FromFn<F>(pub(crate) F);

impl<T, F> Source<T> for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    #[inline]
    fn produce(&mut self) -> Option<T> {
        (self.0)()
    }
}

/// Source pulling from a std iterator one item at a time.
pub(crate) struct IterSource<I>(pub(crate) I);

impl<I: Iterator> Source<I::Item> for IterSource<I> {
    #[inline]
    fn produce(&mut self) -> Option<I::Item> {
        self.0.next()
    }
}

// =============================================================================
// Mapped
// =============================================================================

/// A whole upstream sequence re-rooted under a type-changing function.
///
/// `map` is the only operator that changes the element type, so it cannot
/// live in the same-type stage list. Instead the upstream sequence becomes
/// the source of a fresh pipeline. Each `map` therefore adds exactly one
/// level of call depth to a pull, independent of how many filters sit above
/// or below it.
pub(crate) struct Mapped<S, F> {
    upstream: Sequence<S>,
    function: F,
}

impl<S, F> Mapped<S, F> {
    pub(crate) const fn new(upstream: Sequence<S>, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<S, T, F> Source<T> for Mapped<S, F>
where
    F: FnMut(S) -> T,
{
    fn produce(&mut self) -> Option<T> {
        self.upstream.pull().map(&mut self.function)
    }
}
