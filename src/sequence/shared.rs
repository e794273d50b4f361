//! Capture-by-reference cells for predicates.
//!
//! Rust closures capture by value when moved into a `'static` sequence, so a
//! predicate normally keeps the value it was built with. [`Shared`] restores
//! reference semantics where they are wanted: every clone of a `Shared`
//! points at the same slot, and a predicate holding one reads the slot's
//! value at pull time.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::sequence::{Sequence, Shared};
//!
//! let divisor = Shared::new(2_u64);
//! let captured = divisor.clone();
//! let mut multiples = Sequence::generate(1_u64, |n| n + 1)
//!     .filter(move |n| n % captured.get() == 0);
//!
//! // Reassigned after the filter was built, before it is evaluated.
//! divisor.set(5);
//!
//! assert_eq!(multiples.first(), Ok(5));
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use static_assertions::assert_not_impl_any;

/// A single mutable slot shared by every clone.
///
/// Single-threaded by construction (`!Send`, `!Sync`), like the sequences
/// that capture it.
pub struct Shared<T> {
    slot: Rc<Cell<T>>,
}

assert_not_impl_any!(Shared<u64>: Send, Sync);

impl<T> Shared<T> {
    /// Creates a new slot holding `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(Cell::new(value)),
        }
    }

    /// Assigns `value`, visible to every clone.
    #[inline]
    pub fn set(&self, value: T) {
        self.slot.set(value);
    }

    /// Assigns `value` and returns the previous one.
    #[inline]
    pub fn replace(&self, value: T) -> T {
        self.slot.replace(value)
    }

    /// Returns `true` if both handles point at the same slot.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<T: Copy> Shared<T> {
    /// Reads the current value.
    #[inline]
    pub fn get(&self) -> T {
        self.slot.get()
    }

    /// Replaces the value with `function(current)` and returns the new value.
    pub fn update<F>(&self, function: F) -> T
    where
        F: FnOnce(T) -> T,
    {
        let updated = function(self.slot.get());
        self.slot.set(updated);
        updated
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Shared").field(&self.get()).finish()
    }
}
