use std::collections::BTreeMap;

use log::trace;
use rand::Rng;
use rand::prelude::IteratorRandom;
use rand::rngs::ThreadRng;

use super::builder::Builder;
use super::error::ChainError;
use super::sequence::{join, Pair, Sequence, DELIMITER};
use super::transitions::TransitionMap;

/// A word-level Markov chain.
///
/// The `Chain` stores, for every state of `pair_size` tokens seen during
/// training, how often each token followed it. It answers probability
/// queries and samples next tokens from those counts.
///
/// # Responsibilities
/// - Build the frequency matrix from token sequences
/// - Compute transition probabilities
/// - Sample the next token of a state with weighted randomness
/// - Spawn builders that generate new sequences
///
/// # Invariants
/// - `pair_size` is always >= 1
/// - Each key of `frequency_matrix` is the canonical key of a state observed
///   at least once, and its transition map is never empty
/// - The matrix only grows: nothing is ever removed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
	/// Number of tokens forming a state
	pair_size: usize, // always >= 1

	/// Mapping from a state key to its outgoing transitions
	frequency_matrix: BTreeMap<String, TransitionMap>,
}

impl Chain {
	/// Creates an empty chain whose states are `pair_size` tokens long.
	///
	/// A `pair_size` of 0 is silently raised to 1.
	pub fn new(pair_size: usize) -> Self {
		Self {
			pair_size: pair_size.max(1),
			frequency_matrix: BTreeMap::new(),
		}
	}

	/// Number of tokens forming a state.
	pub fn pair_size(&self) -> usize {
		self.pair_size
	}

	/// Number of distinct states recorded.
	pub fn len(&self) -> usize {
		self.frequency_matrix.len()
	}

	/// Returns `true` if the chain has not been trained yet.
	pub fn is_empty(&self) -> bool {
		self.frequency_matrix.is_empty()
	}

	/// Total number of transitions observed during training.
	pub fn observations(&self) -> usize {
		self.frequency_matrix.values().map(TransitionMap::total).sum()
	}

	/// Returns `true` if `state` was observed during training.
	pub fn contains(&self, state: &[String]) -> bool {
		self.frequency_matrix.contains_key(&join(state))
	}

	/// Outgoing transitions of `state`, if it was observed.
	pub fn transitions(&self, state: &[String]) -> Option<&TransitionMap> {
		self.frequency_matrix.get(&join(state))
	}

	/// Iterates the canonical keys of all states in lexicographic order.
	pub fn states(&self) -> impl Iterator<Item = &str> {
		self.frequency_matrix.keys().map(String::as_str)
	}

	/// Picks a uniformly random recorded state.
	///
	/// Returns `None` if the chain has not been trained.
	pub fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Sequence> {
		self.frequency_matrix
			.keys()
			.choose(rng)
			.map(|key| key.split(DELIMITER).collect())
	}

	/// Adds the transitions found in `sequence` to the chain.
	///
	/// # Notes
	/// - Sequences shorter than two tokens are ignored.
	/// - If the sequence is too short for the configured pair size, the
	///   window is shrunk to `len - 1` for this sequence only.
	pub fn add(&mut self, sequence: &Sequence) {
		let pairs = sequence.pairs(self.pair_size);
		if pairs.is_empty() {
			return;
		}

		trace!("training on {} pairs from a {} token sequence", pairs.len(), sequence.len());

		for pair in pairs {
			self.frequency_matrix
				.entry(pair.current.key())
				.or_default()
				.record(&pair.next);
		}
	}

	/// Probability of moving from `pair.current` to `pair.next`.
	///
	/// A state that was never observed has no transitions, so the ratio is
	/// `0 / 0` and the result is `NaN`. Callers must be ready for it.
	///
	/// # Errors
	/// Returns `ChainError::InvalidPairSize` if `pair.current` is not exactly
	/// `pair_size` tokens long.
	pub fn transition_probability(&self, pair: &Pair) -> Result<f64, ChainError> {
		if pair.current.len() != self.pair_size {
			return Err(ChainError::InvalidPairSize {
				expected: self.pair_size,
				actual: pair.current.len(),
			});
		}

		let (frequency, sum) = match self.frequency_matrix.get(&pair.current.key()) {
			Some(transitions) => (transitions.occurrences(&pair.next), transitions.total()),
			None => (0, 0),
		};

		Ok(frequency as f64 / sum as f64)
	}

	/// Samples the token following `seed` using the thread-local generator.
	///
	/// See [`Chain::next_with_rng`].
	pub fn next(&self, seed: &[String]) -> Option<&str> {
		self.next_with_rng(seed, &mut rand::rng())
	}

	/// Samples the token following `seed` with a weighted random decision.
	///
	/// Returns `None` when the chain cannot continue: `seed` is not exactly
	/// `pair_size` tokens long, or it was never observed.
	pub fn next_with_rng<R: Rng + ?Sized>(&self, seed: &[String], rng: &mut R) -> Option<&str> {
		if seed.len() != self.pair_size {
			return None;
		}
		self.frequency_matrix.get(&join(seed))?.sample(rng)
	}

	/// Creates a builder on top of this chain using the thread-local generator.
	///
	/// See [`Chain::builder_with_rng`].
	pub fn builder(&self, seed: Option<Sequence>) -> Result<Builder<'_, ThreadRng>, ChainError> {
		self.builder_with_rng(seed, rand::rng())
	}

	/// Creates a builder on top of this chain.
	///
	/// The seed is used as-is when it is a recorded state. Otherwise (absent,
	/// too short or unknown) a random recorded state is picked instead.
	///
	/// # Errors
	/// Returns `ChainError::Untrained` if a random state is needed and the
	/// chain is empty.
	pub fn builder_with_rng<R: Rng>(&self, seed: Option<Sequence>, rng: R) -> Result<Builder<'_, R>, ChainError> {
		Builder::new(self, seed, rng)
	}
}
