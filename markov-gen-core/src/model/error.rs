/// Hard failures of the chain API.
///
/// "Nothing to sample" is not an error: sampling and generation report it
/// through `Option` and short counts instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
	/// A probability query used a current state whose length differs from
	/// the chain's configured pair size.
	#[error("mismatch pair size from chain and given pair: expected {expected}, got {actual}")]
	InvalidPairSize { expected: usize, actual: usize },

	/// A builder had to fall back to a random state but the chain holds none.
	#[error("chain has no trained state to start from")]
	Untrained,
}
