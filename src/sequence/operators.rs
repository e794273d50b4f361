//! Composition operators.
//!
//! Every operator consumes its upstream sequence and returns a new one
//! without pulling anything. Closures passed to an operator run at pull
//! time, once per value that reaches them.
//!
//! | Operator    | Changes type | Stored as                      |
//! |-------------|--------------|--------------------------------|
//! | `map`       | yes          | new root wrapping the upstream |
//! | `filter`    | no           | `Filter` stage                 |
//! | `drop`      | no           | `Drop` stage                   |
//! | `take`      | no           | `Take` stage                   |
//! | `inspect`   | no           | `Inspect` stage                |

use super::base::Sequence;
use super::error::{SequenceError, SequenceResult};
use super::pipeline::Stage;
use super::source::Mapped;

impl<T: 'static> Sequence<T> {
    /// Returns a sequence whose n-th value is `function` applied to the n-th
    /// value of `self`.
    ///
    /// `function` runs exactly once per pulled value and never at
    /// composition time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let squares = Sequence::generate(1_u64, |n| n + 1)
    ///     .map(|n| n * n)
    ///     .take(4)
    ///     .to_list();
    ///
    /// assert_eq!(squares, vec![1, 4, 9, 16]);
    /// ```
    pub fn map<U, F>(self, function: F) -> Sequence<U>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        Sequence::from_source(Mapped::new(self, function))
    }

    /// Returns a sequence that skips values for which `predicate` is false.
    ///
    /// One pull on the result may pull the upstream any number of times,
    /// until a value passes or the upstream ends.
    ///
    /// The predicate sees whatever its captures hold at pull time. A `move`
    /// closure over a plain value keeps the value it was built with; a
    /// closure over a [`Shared`](super::Shared) cell observes every later
    /// assignment to that cell.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let divisor = 3;
    /// let multiples = Sequence::generate(1_u64, |n| n + 1)
    ///     .filter(move |n| n % divisor == 0)
    ///     .take(3)
    ///     .to_list();
    ///
    /// assert_eq!(multiples, vec![3, 6, 9]);
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        self.push_stage(Stage::Filter(Box::new(predicate)))
    }

    /// Returns a sequence without the first `count` values of `self`.
    ///
    /// The skipped values are pulled and discarded on the first pull of the
    /// result, not here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let tail = Sequence::generate(1_u64, |n| n + 1).drop(3).take(2).to_list();
    /// assert_eq!(tail, vec![4, 5]);
    /// ```
    pub fn drop(self, count: usize) -> Self {
        if count == 0 {
            return self;
        }
        self.push_stage(Stage::Drop { remaining: count })
    }

    /// Returns a sequence of at most `count` values of `self`.
    ///
    /// Once `count` values have passed, the result ends without pulling the
    /// upstream again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let head = Sequence::generate(1_u64, |n| n + 1).take(5).to_list();
    /// assert_eq!(head, vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn take(self, count: usize) -> Self {
        self.push_stage(Stage::Take { remaining: count })
    }

    /// [`drop`](Self::drop) with a signed bound.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidBound`] if `count` is negative. The
    /// upstream sequence is discarded in that case.
    pub fn try_drop(self, count: i64) -> SequenceResult<Self> {
        let count = checked_bound("drop", count)?;
        Ok(self.drop(count))
    }

    /// [`take`](Self::take) with a signed bound.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidBound`] if `count` is negative. The
    /// upstream sequence is discarded in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{Sequence, SequenceError};
    ///
    /// let naturals = || Sequence::generate(1_u64, |n| n + 1);
    ///
    /// assert_eq!(naturals().try_take(2).map(Sequence::to_list), Ok(vec![1, 2]));
    /// assert_eq!(
    ///     naturals().try_take(-2).map(Sequence::to_list),
    ///     Err(SequenceError::InvalidBound { operation: "take", bound: -2 })
    /// );
    /// ```
    pub fn try_take(self, count: i64) -> SequenceResult<Self> {
        let count = checked_bound("take", count)?;
        Ok(self.take(count))
    }

    /// Calls `observer` with every value that reaches this point of the
    /// chain, at pull time.
    pub fn inspect<F>(self, observer: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        self.push_stage(Stage::Inspect(Box::new(observer)))
    }

    /// Pulls every remaining value into a `Vec`.
    ///
    /// This never returns for an infinite sequence; bound it with
    /// [`take`](Self::take) first.
    pub fn to_list(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

fn checked_bound(operation: &'static str, bound: i64) -> SequenceResult<usize> {
    usize::try_from(bound).map_err(|_| SequenceError::InvalidBound { operation, bound })
}
