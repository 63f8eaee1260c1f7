//! Top-level module for the Markov chain system.
//!
//! - Token sequences and training pairs (`Sequence`, `Pair`)
//! - Per-state transition counts (`TransitionMap`)
//! - The trained model (`Chain`)
//! - A generation session on top of a chain (`Builder`)

/// Ordered token sequences and the pairs sliced out of them.
pub mod sequence;

/// Next-token occurrence counts for a single state.
///
/// Supports weighted random sampling over the recorded transitions.
pub mod transitions;

/// The trained Markov chain.
///
/// Handles training, probability queries and next-token sampling.
pub mod chain;

/// Stateful generation session borrowing a trained chain.
pub mod builder;

/// Errors surfaced by chain queries and builder construction.
pub mod error;
