//! Trial-division prime sieve built from lazy filters.
//!
//! The sieve keeps a single candidate sequence, initially every integer
//! from 2 upward. Each round pulls the head of the candidates (the next
//! prime) and replaces the candidates with a filtered copy that drops the
//! prime's multiples. After `k` primes the candidate sequence is a chain of
//! `k` lazy filters over the base generator.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::sieve::primes;
//!
//! assert_eq!(primes().take(4).to_list(), vec![2, 3, 5, 7]);
//! ```
//!
//! # State Machine
//!
//! ```text
//! AwaitingCandidate --first()--> Emitting(p) --next call--> Rebuilding(p)
//!        ^                                                       |
//!        +-------------- candidates.filter(v % p != 0) ---------+
//! ```
//!
//! Rebuilding is deferred to the call after a prime was emitted, so the
//! filter for `p` is only built once the consumer asks for the next prime.

use crate::sequence::{Sequence, SequenceResult, Shared};

/// The phase a [`PrimeSieve`] is in between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SieveState {
    /// The next call pulls the head of the candidate sequence.
    AwaitingCandidate,
    /// The prime was handed to the caller; its filter is not built yet.
    Emitting(u64),
    /// The candidates are about to be replaced with a filter on the prime.
    Rebuilding(u64),
}

/// Driver of the trial-division sieve.
///
/// The candidate sequence lives in one owned slot that is replaced, never
/// edited, each time a prime is discovered. The superseded sequence moves
/// into its successor as the upstream of the new filter.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sieve::{PrimeSieve, SieveState};
///
/// let mut sieve = PrimeSieve::new();
/// assert_eq!(sieve.next_prime(), Ok(2));
/// assert_eq!(sieve.state(), SieveState::Emitting(2));
/// assert_eq!(sieve.next_prime(), Ok(3));
/// assert_eq!(sieve.discovered(), 2);
/// ```
pub struct PrimeSieve {
    candidates: Sequence<u64>,
    state: SieveState,
    discovered: usize,
}

impl PrimeSieve {
    /// Creates a sieve over every integer from 2 upward.
    pub fn new() -> Self {
        Self::with_candidates(Sequence::generate(2, |n| n + 1))
    }

    /// Creates a sieve over an arbitrary candidate sequence.
    ///
    /// The candidates should be increasing and start at 2 or above for the
    /// output to be the primes. A candidate of 0 filters out everything
    /// after it; it never divides by zero.
    pub fn with_candidates(candidates: Sequence<u64>) -> Self {
        Self {
            candidates,
            state: SieveState::AwaitingCandidate,
            discovered: 0,
        }
    }

    /// Current phase of the state machine.
    #[inline]
    pub const fn state(&self) -> SieveState {
        self.state
    }

    /// Number of primes emitted so far.
    #[inline]
    pub const fn discovered(&self) -> usize {
        self.discovered
    }

    /// Number of filters stacked on the base generator.
    #[inline]
    pub fn depth(&self) -> usize {
        self.candidates.stage_count()
    }

    /// Runs the state machine until the next prime is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`](crate::sequence::SequenceError::EmptySequence)
    /// if the candidate sequence is exhausted. The sieve then stays in
    /// [`SieveState::AwaitingCandidate`] and every further call fails the
    /// same way.
    pub fn next_prime(&mut self) -> SequenceResult<u64> {
        loop {
            match self.state {
                SieveState::Emitting(prime) => self.state = SieveState::Rebuilding(prime),
                SieveState::Rebuilding(prime) => {
                    self.rebuild(prime);
                    self.state = SieveState::AwaitingCandidate;
                }
                SieveState::AwaitingCandidate => {
                    let prime = self.candidates.first()?;
                    self.discovered += 1;
                    tracing::debug!(prime, discovered = self.discovered, "prime discovered");
                    self.state = SieveState::Emitting(prime);
                    return Ok(prime);
                }
            }
        }
    }

    fn rebuild(&mut self, prime: u64) {
        let superseded = std::mem::replace(&mut self.candidates, Sequence::empty());
        self.candidates =
            superseded.filter(move |value| value.checked_rem(prime).is_some_and(|rest| rest != 0));
    }

    /// Exposes the sieve as an infinite sequence of primes.
    ///
    /// The sequence ends if the candidates run out; the failure is logged at
    /// `warn` level.
    pub fn into_sequence(mut self) -> Sequence<u64> {
        Sequence::from_fn(move || match self.next_prime() {
            Ok(prime) => Some(prime),
            Err(error) => {
                tracing::warn!(%error, discovered = self.discovered, "prime sieve stopped");
                None
            }
        })
    }
}

impl Default for PrimeSieve {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PrimeSieve {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrimeSieve")
            .field("state", &self.state)
            .field("discovered", &self.discovered)
            .field("candidates", &self.candidates)
            .finish()
    }
}

/// The infinite sequence of primes, `2, 3, 5, 7, 11, ...`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sieve::primes;
///
/// let hundredth = primes().drop(99).first();
/// assert_eq!(hundredth, Ok(541));
/// ```
pub fn primes() -> Sequence<u64> {
    PrimeSieve::new().into_sequence()
}

/// A sieve whose filters all read one shared "latest prime" cell.
///
/// Every filter built here holds the same [`Shared`] slot instead of its own
/// copy of the prime it was built for. Each newly discovered prime is written
/// to the slot, so every earlier filter silently switches to testing
/// divisibility by the latest prime. Under forward-only evaluation the first
/// four values are `2, 3, 4, 5`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sieve::{capturing_primes, primes};
///
/// assert_eq!(capturing_primes().take(4).to_list(), vec![2, 3, 4, 5]);
/// assert_ne!(capturing_primes().take(4).to_list(), primes().take(4).to_list());
/// ```
pub fn capturing_primes() -> Sequence<u64> {
    let latest = Shared::new(0_u64);
    let mut candidates = Sequence::generate(2_u64, |n| n + 1);
    Sequence::from_fn(move || {
        let prime = candidates.first().ok()?;
        latest.set(prime);
        let shared = latest.clone();
        let superseded = std::mem::replace(&mut candidates, Sequence::empty());
        candidates = superseded.filter(move |value| value % shared.get() != 0);
        Some(prime)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceError;
    use rstest::rstest;

    #[rstest]
    fn test_first_four_primes() {
        assert_eq!(primes().take(4).to_list(), vec![2, 3, 5, 7]);
    }

    #[rstest]
    fn test_state_transitions() {
        let mut sieve = PrimeSieve::new();
        assert_eq!(sieve.state(), SieveState::AwaitingCandidate);
        assert_eq!(sieve.depth(), 0);

        assert_eq!(sieve.next_prime(), Ok(2));
        assert_eq!(sieve.state(), SieveState::Emitting(2));
        assert_eq!(sieve.depth(), 0);

        assert_eq!(sieve.next_prime(), Ok(3));
        assert_eq!(sieve.state(), SieveState::Emitting(3));
        assert_eq!(sieve.depth(), 1);
    }

    #[rstest]
    fn test_exhausted_candidates_surface_empty_sequence() {
        let mut sieve = PrimeSieve::with_candidates(Sequence::generate(2, |n| n + 1).take(3));
        assert_eq!(sieve.next_prime(), Ok(2));
        assert_eq!(sieve.next_prime(), Ok(3));
        assert_eq!(sieve.next_prime(), Err(SequenceError::EmptySequence));
        assert_eq!(sieve.state(), SieveState::AwaitingCandidate);
        assert_eq!(sieve.next_prime(), Err(SequenceError::EmptySequence));
    }

    #[rstest]
    fn test_zero_candidate_does_not_panic() {
        let mut sieve = PrimeSieve::with_candidates(Sequence::from_iterator([0, 1, 2]));
        assert_eq!(sieve.next_prime(), Ok(0));
        assert_eq!(sieve.next_prime(), Err(SequenceError::EmptySequence));
    }

    #[rstest]
    fn test_capturing_primes_diverges_from_sieve() {
        assert_eq!(capturing_primes().take(4).to_list(), vec![2, 3, 4, 5]);
    }
}
