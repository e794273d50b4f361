//! Same-type transform stages and the iterative admission loop.
//!
//! # Design
//!
//! A naive lazy filter wraps its upstream and recursively pulls from it, so
//! pulling through `n` nested filters costs `n` stack frames. The prime
//! sieve adds one filter per discovered prime, which turns that into a stack
//! overflow after a few thousand primes.
//!
//! Instead, every operator that preserves the element type appends a
//! [`Stage`] to a flat list owned by the sequence. A pull produces one value
//! from the root source and walks it through the list in composition order.
//! If any stage discards the value the walk restarts with a fresh value from
//! the source. Stack usage is constant in the number of stages.
//!
//! # Invariants
//!
//! - **Composition order**: stage `i` sees exactly the values stage `i - 1`
//!   lets through, in the same order as nested evaluation would.
//! - **No upstream over-pull**: once any `Take` stage reaches zero the
//!   pipeline is closed and the source is not polled again.

use smallvec::SmallVec;

/// Boxed predicate of a `filter` stage.
pub(crate) type Predicate<T> = Box<dyn FnMut(&T) -> bool>;

/// Boxed observer of an `inspect` stage.
pub(crate) type Observer<T> = Box<dyn FnMut(&T)>;

/// One same-type transform step.
pub(crate) enum Stage<T> {
    /// Keeps values for which the predicate holds.
    Filter(Predicate<T>),
    /// Discards the next `remaining` values that reach it.
    Drop { remaining: usize },
    /// Lets `remaining` more values through, then closes the pipeline.
    Take { remaining: usize },
    /// Observes values as they pass.
    Inspect(Observer<T>),
}

/// The ordered list of stages stacked over a sequence's source.
pub(crate) struct Pipeline<T> {
    stages: SmallVec<[Stage<T>; 4]>,
    /// Number of `Take` stages; the closed check is skipped when zero.
    takes: usize,
}

impl<T> Pipeline<T> {
    pub(crate) fn new() -> Self {
        Self {
            stages: SmallVec::new(),
            takes: 0,
        }
    }

    pub(crate) fn push(&mut self, stage: Stage<T>) {
        if matches!(stage, Stage::Take { .. }) {
            self.takes += 1;
        }
        self.stages.push(stage);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if some `Take` stage has no budget left.
    pub(crate) fn is_closed(&self) -> bool {
        self.takes > 0
            && self
                .stages
                .iter()
                .any(|stage| matches!(stage, Stage::Take { remaining: 0 }))
    }

    /// Walks `value` through every stage.
    ///
    /// Returns `Some` if the value survives all of them and `None` if a stage
    /// discarded it. Callers must check [`Self::is_closed`] before producing
    /// the value.
    pub(crate) fn admit(&mut self, value: T) -> Option<T> {
        for (index, stage) in self.stages.iter_mut().enumerate() {
            match stage {
                Stage::Filter(predicate) => {
                    if !predicate(&value) {
                        tracing::trace!(target: "lazyseq::filter", stage = index, "value rejected");
                        return None;
                    }
                }
                Stage::Drop { remaining } => {
                    if *remaining > 0 {
                        *remaining -= 1;
                        return None;
                    }
                }
                Stage::Take { remaining } => {
                    debug_assert!(*remaining > 0, "admit called on a closed pipeline");
                    *remaining = remaining.saturating_sub(1);
                }
                Stage::Inspect(observer) => observer(&value),
            }
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_empty_pipeline_admits_everything() {
        let mut pipeline = Pipeline::<i32>::new();
        assert_eq!(pipeline.admit(7), Some(7));
        assert!(!pipeline.is_closed());
    }

    #[rstest]
    fn test_filter_then_drop_applies_in_order() {
        let mut pipeline = Pipeline::new();
        pipeline.push(Stage::Filter(Box::new(|value: &i32| value % 2 == 0)));
        pipeline.push(Stage::Drop { remaining: 1 });

        // 1 fails the filter, so it must not consume the drop budget.
        assert_eq!(pipeline.admit(1), None);
        assert_eq!(pipeline.admit(2), None);
        assert_eq!(pipeline.admit(3), None);
        assert_eq!(pipeline.admit(4), Some(4));
    }

    #[rstest]
    fn test_take_closes_pipeline() {
        let mut pipeline = Pipeline::new();
        pipeline.push(Stage::Take { remaining: 2 });

        assert_eq!(pipeline.admit(1), Some(1));
        assert!(!pipeline.is_closed());
        assert_eq!(pipeline.admit(2), Some(2));
        assert!(pipeline.is_closed());
    }

    #[rstest]
    fn test_take_counts_values_rejected_downstream() {
        let mut pipeline = Pipeline::new();
        pipeline.push(Stage::Take { remaining: 1 });
        pipeline.push(Stage::Filter(Box::new(|_: &i32| false)));

        assert_eq!(pipeline.admit(1), None);
        assert!(pipeline.is_closed());
    }

    #[rstest]
    fn test_len_counts_stages() {
        let mut pipeline = Pipeline::<i32>::new();
        for _ in 0..10 {
            pipeline.push(Stage::Drop { remaining: 0 });
        }
        assert_eq!(pipeline.len(), 10);
    }
}
