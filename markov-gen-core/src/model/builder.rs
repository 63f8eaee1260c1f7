use std::fmt;

use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;

use super::chain::Chain;
use super::error::ChainError;
use super::sequence::Sequence;

/// Generation session on top of a trained chain.
///
/// # Responsibilities
/// - Pick a valid starting state (the caller's seed or a random one)
/// - Extend its word sequence by repeatedly sampling the chain
/// - Render the generated words
///
/// The builder only borrows the chain, so the chain cannot be trained
/// while a builder is alive, and several builders can share one chain.
#[derive(Debug)]
pub struct Builder<'a, R: Rng = ThreadRng> {
	chain: &'a Chain,
	words: Sequence,
	rng: R,
}

impl<'a, R: Rng> Builder<'a, R> {
	/// Creates a builder starting from `seed`.
	///
	/// See [`Chain::builder_with_rng`].
	pub(crate) fn new(chain: &'a Chain, seed: Option<Sequence>, mut rng: R) -> Result<Self, ChainError> {
		let words = Self::resolve_seed(chain, seed, &mut rng)?;
		Ok(Self { chain, words, rng })
	}

	/// Keeps `seed` if it is a recorded state, otherwise picks a random one.
	///
	/// A seed shorter than the pair size, or not present in the frequency
	/// matrix, cannot start a generation and is replaced.
	fn resolve_seed(chain: &Chain, seed: Option<Sequence>, rng: &mut R) -> Result<Sequence, ChainError> {
		match seed {
			Some(seed) if seed.len() >= chain.pair_size() && chain.contains(&seed) => Ok(seed),
			seed => {
				debug!(
					"seed {:?} is not a trained state, starting from a random state",
					seed.map(|s| s.key())
				);
				chain.random_state(rng).ok_or(ChainError::Untrained)
			}
		}
	}

	/// Polls the chain for at most `count` new words and appends them.
	///
	/// The last `pair_size` words are used as the seed of each poll. Stops
	/// early as soon as the chain cannot continue.
	///
	/// # Returns
	/// The number of words actually appended, 0 meaning no new word could
	/// be generated.
	pub fn generate(&mut self, count: usize) -> usize {
		let chain = self.chain;
		let pair_size = chain.pair_size();

		let mut generated = 0;
		while generated < count {
			let start = self.words.len().saturating_sub(pair_size);
			let next = match chain.next_with_rng(&self.words[start..], &mut self.rng) {
				Some(next) => next,
				None => {
					debug!("chain cannot continue after {} of {} words", generated, count);
					break;
				}
			};

			self.words.push(next);
			generated += 1;
		}

		generated
	}

	/// Words accumulated so far, seed included.
	pub fn words(&self) -> &Sequence {
		&self.words
	}

	/// The chain this builder samples from.
	pub fn chain(&self) -> &'a Chain {
		self.chain
	}

	/// Consumes the builder and returns the generated words.
	pub fn into_sequence(self) -> Sequence {
		self.words
	}
}

impl<R: Rng> fmt::Display for Builder<'_, R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.words)
	}
}
