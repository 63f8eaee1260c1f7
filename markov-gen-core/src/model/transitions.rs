use std::collections::BTreeMap;

use rand::Rng;

/// Outgoing transitions of a single chain state.
///
/// Maps every token observed right after the state to the number of times
/// it was observed. Conceptually, this is the set of weighted outgoing edges
/// of one node of the Markov chain.
///
/// ## Invariants
/// - Each occurrence count is strictly positive
/// - Tokens are kept in lexicographic order, which fixes the walk order of
///   weighted sampling
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionMap {
	/// Example: { "bike" => 1, "bus" => 3 }
	transitions: BTreeMap<String, usize>,
}

impl TransitionMap {
	/// Creates an empty transition map.
	pub fn new() -> Self {
		Self { transitions: BTreeMap::new() }
	}

	/// Records one more occurrence of a transition toward `next`.
	pub fn record(&mut self, next: &str) {
		*self.transitions.entry(next.to_owned()).or_insert(0) += 1;
	}

	/// Number of times `next` was observed, 0 if never.
	pub fn occurrences(&self, next: &str) -> usize {
		self.transitions.get(next).copied().unwrap_or(0)
	}

	/// Sum of all occurrence counts.
	pub fn total(&self) -> usize {
		self.transitions.values().sum()
	}

	/// Number of distinct next tokens.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	/// Returns `true` if no transition was recorded.
	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Iterates `(token, occurrences)` in lexicographic token order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.transitions.iter().map(|(token, count)| (token.as_str(), *count))
	}

	/// Picks a next token using weighted random sampling.
	///
	/// A value `luck` is drawn in `[0, total)` and the tokens are walked in
	/// lexicographic order, subtracting each count from `luck`. The first
	/// token that brings `luck` down to 0 or below is returned, so the
	/// first candidate also wins when `luck` is exactly its count.
	///
	/// Returns `None` if the map has no transitions.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		let total = self.total();
		if total == 0 {
			return None;
		}

		let mut luck = rng.random_range(0..total);

		self.transitions
			.iter()
			.find(|(_, occurrence)| {
				if luck <= **occurrence {
					return true;
				}
				luck -= **occurrence;
				false
			})
			.map(|(token, _)| token.as_str())
	}
}
