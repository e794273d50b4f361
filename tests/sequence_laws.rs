//! Property-based tests for Sequence<T> laws.
//!
//! This module verifies that Sequence implementations satisfy:
//!
//! - **Determinism**: identically built chains produce identical output
//! - **Functor Laws**: identity and composition for `map`
//! - **Agreement with std iterators** for `filter`, `drop` and `take`
//! - **Stack Safety**: deep filter chains do not overflow the stack

use lazyseq::sequence::Sequence;
use proptest::prelude::*;

fn chain(seed: u64, step: u64, divisor: u64, skip: usize, count: usize) -> Sequence<u64> {
    Sequence::generate(seed, move |n| n + step)
        .filter(move |n| n % divisor != 0)
        .drop(skip)
        .take(count)
}

// =============================================================================
// Determinism
// =============================================================================

proptest! {
    #[test]
    fn prop_reconstructed_chain_is_deterministic(
        seed in 0u64..1000,
        step in 1u64..10,
        divisor in 2u64..10,
        skip in 0usize..20,
        count in 0usize..50,
    ) {
        let first = chain(seed, step, divisor, skip, count).to_list();
        let second = chain(seed, step, divisor, skip, count).to_list();
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity: map(id) == id
    #[test]
    fn prop_map_identity(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let mapped = Sequence::from_iterator(values.clone()).map(|x| x).to_list();
        prop_assert_eq!(mapped, values);
    }

    /// Composition: map(f).map(g) == map(g . f)
    #[test]
    fn prop_map_composition(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let left = Sequence::from_iterator(values.clone())
            .map(function1)
            .map(function2)
            .to_list();
        let right = Sequence::from_iterator(values)
            .map(move |x| function2(function1(x)))
            .to_list();

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Agreement with std iterators
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_matches_iterator_filter(
        values in prop::collection::vec(any::<u16>(), 0..100),
        divisor in 1u16..20,
    ) {
        let expected: Vec<u16> = values.iter().copied().filter(|v| v % divisor == 0).collect();
        let actual = Sequence::from_iterator(values).filter(move |v| v % divisor == 0).to_list();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_drop_take_matches_skip_take(
        values in prop::collection::vec(any::<u8>(), 0..100),
        skip in 0usize..120,
        count in 0usize..120,
    ) {
        let expected: Vec<u8> = values.iter().copied().skip(skip).take(count).collect();
        let actual = Sequence::from_iterator(values).drop(skip).take(count).to_list();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_take_then_drop_matches_iterator(
        values in prop::collection::vec(any::<u8>(), 0..100),
        count in 0usize..120,
        skip in 0usize..120,
    ) {
        let expected: Vec<u8> = values.iter().copied().take(count).skip(skip).collect();
        let actual = Sequence::from_iterator(values).take(count).drop(skip).to_list();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_take_length_is_bounded(count in 0usize..500) {
        let taken = Sequence::generate(0u64, |n| n + 1).take(count).to_list();
        prop_assert_eq!(taken.len(), count);
    }
}

// =============================================================================
// Stack Safety
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]
    /// Stack safety: pulling through thousands of filters does not overflow
    #[test]
    fn prop_deep_filter_chain_is_stack_safe(depth in 5_000usize..20_000) {
        let mut sequence = Sequence::generate(0u64, |n| n + 1);
        for _ in 0..depth {
            sequence = sequence.filter(|n| n % 2 == 0);
        }
        prop_assert_eq!(sequence.stage_count(), depth);
        prop_assert_eq!(sequence.take(3).to_list(), vec![0, 2, 4]);
    }
}
