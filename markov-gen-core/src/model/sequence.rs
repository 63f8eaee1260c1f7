use std::fmt;
use std::ops::Deref;

/// Delimiter used to build the canonical key of a sequence.
pub const DELIMITER: &str = " ";

/// An ordered list of tokens.
///
/// A `Sequence` is both the training input of a chain and the output of a
/// builder. Its canonical key (tokens joined by a single space) is what the
/// chain uses to index states, so tokens must not contain the delimiter
/// themselves. Whitespace-split input never does.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
	tokens: Vec<String>,
}

impl Sequence {
	/// Creates an empty sequence.
	pub fn new() -> Self {
		Self { tokens: Vec::new() }
	}

	/// Splits text on whitespace.
	pub fn from_text(text: &str) -> Self {
		text.split_whitespace().collect()
	}

	/// Canonical key of the sequence, the form stored in the frequency matrix.
	pub fn key(&self) -> String {
		join(&self.tokens)
	}

	/// Appends a token at the end of the sequence.
	pub fn push<S: Into<String>>(&mut self, token: S) {
		self.tokens.push(token.into());
	}

	/// A sequence needs at least two tokens to produce any pair.
	pub(crate) fn is_valid(&self) -> bool {
		self.tokens.len() > 1
	}

	/// Extracts the pairs formed by windows of `size` tokens and the token
	/// following each window.
	///
	/// - Returns an empty list for sequences shorter than two tokens.
	/// - `size` is clamped into `[1, len - 1]` for this call only, so a
	///   sequence of length `len` always yields `len - size` pairs.
	pub fn pairs(&self, size: usize) -> Vec<Pair> {
		if !self.is_valid() {
			return Vec::new();
		}

		let size = clamp(size, 1, self.tokens.len() - 1);

		self.tokens
			.windows(size + 1)
			.map(|window| Pair {
				current: Sequence::from(window[..size].to_vec()),
				next: window[size].clone(),
			})
			.collect()
	}

	/// Consumes the sequence and returns its tokens.
	pub fn into_tokens(self) -> Vec<String> {
		self.tokens
	}
}

impl Deref for Sequence {
	type Target = [String];

	fn deref(&self) -> &Self::Target {
		&self.tokens
	}
}

impl fmt::Display for Sequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.key())
	}
}

impl From<Vec<String>> for Sequence {
	fn from(tokens: Vec<String>) -> Self {
		Self { tokens }
	}
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Sequence {
	fn from(tokens: [S; N]) -> Self {
		tokens.into_iter().collect()
	}
}

impl<S: Into<String>> FromIterator<S> for Sequence {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self { tokens: iter.into_iter().map(Into::into).collect() }
	}
}

/// A transition between a state of one or more tokens and the token that
/// follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair {
	/// The state the transition starts from.
	pub current: Sequence,
	/// The token observed right after `current`.
	pub next: String,
}

impl Pair {
	/// Creates a pair from a state and the token following it.
	pub fn new<C: Into<Sequence>, N: Into<String>>(current: C, next: N) -> Self {
		Self { current: current.into(), next: next.into() }
	}
}

/// Joins tokens into a canonical state key.
pub(crate) fn join(tokens: &[String]) -> String {
	tokens.join(DELIMITER)
}

/// Restricts `value` to `[min, max]`.
pub(crate) fn clamp(value: usize, min: usize, max: usize) -> usize {
	if value > max {
		max
	} else if value < min {
		min
	} else {
		value
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn key_joins_with_single_space() {
		let sequence = Sequence::from(["I", "ride", "a", "bike"]);
		assert_eq!(sequence.key(), "I ride a bike");
		assert_eq!(sequence.to_string(), "I ride a bike");
	}

	#[test]
	fn from_text_splits_on_any_whitespace() {
		let sequence = Sequence::from_text("  I\tride \n a   bike ");
		assert_eq!(sequence, Sequence::from(["I", "ride", "a", "bike"]));
	}

	#[test]
	fn short_sequences_have_no_pairs() {
		assert!(Sequence::new().pairs(1).is_empty());
		assert!(Sequence::from(["alone"]).pairs(1).is_empty());
	}

	#[test]
	fn pairs_slide_over_the_sequence() {
		let pairs = Sequence::from(["a", "b", "c", "d"]).pairs(2);
		assert_eq!(
			pairs,
			vec![Pair::new(["a", "b"], "c"), Pair::new(["b", "c"], "d")]
		);
	}

	#[test]
	fn oversized_window_is_clamped() {
		let pairs = Sequence::from(["a", "b", "c"]).pairs(10);
		assert_eq!(pairs, vec![Pair::new(["a", "b"], "c")]);
	}

	#[test]
	fn pair_count_is_length_minus_window() {
		let sequence: Sequence = (0..9).map(|i| i.to_string()).collect();
		for size in 0..12 {
			let window = clamp(size, 1, sequence.len() - 1);
			assert_eq!(sequence.pairs(size).len(), sequence.len() - window);
		}
	}

	#[test]
	fn clamp_bounds() {
		assert_eq!(clamp(0, 1, 5), 1);
		assert_eq!(clamp(3, 1, 5), 3);
		assert_eq!(clamp(9, 1, 5), 5);
	}
}
