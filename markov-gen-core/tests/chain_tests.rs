use markov_gen_core::{Chain, ChainError, Pair, Sequence};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn corpus() -> Chain {
	let mut chain = Chain::new(1);
	chain.add(&Sequence::from(["I", "ride", "a", "bike"]));
	chain.add(&Sequence::from(["I", "ride", "the", "bus"]));
	chain.add(&Sequence::from(["I", "drink", "water"]));
	chain
}

#[test]
fn markov_basic() {
	let chain = corpus();

	assert!(matches!(
		chain.transition_probability(&Pair::new(["invalid", "sequence"], "any")),
		Err(ChainError::InvalidPairSize { .. })
	));

	let prob = chain.transition_probability(&Pair::new(["I"], "ride")).unwrap();
	assert_eq!((prob * 100.0).round() / 100.0, 0.67);

	let mut builder = chain.builder(Some(Sequence::from(["I"]))).unwrap();
	assert_eq!(builder.generate(2), 2);
	assert!(builder.to_string().starts_with("I "));
}

#[test]
fn training_short_sequences_leaves_chain_unchanged() {
	let mut chain = corpus();
	let before = chain.clone();
	chain.add(&Sequence::from(["one"]));
	chain.add(&Sequence::new());
	assert_eq!(chain, before);
}

#[test]
fn training_records_length_minus_window_observations() {
	let tokens = Sequence::from_text("the quick brown fox jumps over the lazy dog");
	for pair_size in 0..12 {
		let mut chain = Chain::new(pair_size);
		chain.add(&tokens);
		let window = pair_size.clamp(1, tokens.len() - 1);
		assert_eq!(chain.observations(), tokens.len() - window, "pair size {}", pair_size);
	}
}

#[test]
fn sampling_with_wrong_seed_size_is_absent() {
	let mut chain = Chain::new(2);
	chain.add(&Sequence::from_text("a b c d e"));
	let mut rng = StdRng::seed_from_u64(0);
	for seed in [Sequence::new(), Sequence::from(["a"]), Sequence::from(["a", "b", "c"])] {
		assert_eq!(chain.next_with_rng(&seed, &mut rng), None);
	}
	assert_eq!(chain.next_with_rng(&Sequence::from(["a", "b"]), &mut rng), Some("c"));
}

#[test]
fn sampling_unknown_seed_is_absent() {
	let chain = corpus();
	assert_eq!(chain.next(&Sequence::from(["bike"])), None);
	assert_eq!(chain.next(&Sequence::from(["train"])), None);
}

#[test]
fn seeded_sampling_is_reproducible() {
	let chain = corpus();
	let seed = Sequence::from(["I"]);

	let mut first = StdRng::seed_from_u64(1234);
	let mut second = StdRng::seed_from_u64(1234);
	for _ in 0..25 {
		let a = chain.next_with_rng(&seed, &mut first).unwrap();
		let b = chain.next_with_rng(&seed, &mut second).unwrap();
		assert_eq!(a, b);
		assert!(chain.transitions(&seed).unwrap().occurrences(a) >= 1);
	}
}

#[test]
fn sampling_walk_stops_when_luck_runs_out() {
	let mut chain = Chain::new(1);
	chain.add(&Sequence::from(["go", "a"]));
	chain.add(&Sequence::from(["go", "b"]));

	// luck is 0 or 1, and both are used up by "a" alone
	let seed = Sequence::from(["go"]);
	let mut rng = StdRng::seed_from_u64(1);
	for _ in 0..1000 {
		assert_eq!(chain.next_with_rng(&seed, &mut rng), Some("a"));
	}
}

#[test]
fn sampling_follows_cumulative_counts() {
	let mut chain = Chain::new(1);
	chain.add(&Sequence::from(["go", "fast"]));
	for _ in 0..3 {
		chain.add(&Sequence::from(["go", "slow"]));
	}

	// luck in {0, 1} picks "fast", luck in {2, 3} picks "slow"
	let seed = Sequence::from(["go"]);
	let mut rng = StdRng::seed_from_u64(77);
	let fast = (0..2000)
		.filter(|_| chain.next_with_rng(&seed, &mut rng) == Some("fast"))
		.count();
	assert!((800..1200).contains(&fast), "fast picked {} times", fast);
}
