//! Word-level Markov chain text generation library.
//!
//! This crate provides a small Markov chain system including:
//! - A trainable chain of configurable order (pair size)
//! - Transition probability queries
//! - Weighted random next-token sampling with an injectable random source
//! - A builder that extends a word sequence by polling a trained chain
//!
//! Tokenization is left to the caller: the chain only ever sees sequences
//! of already split tokens.

/// Chain model, sequences and generation logic.
pub mod model;

/// I/O helpers turning raw text into whitespace-tokenized sequences.
pub mod io;

pub use model::builder::Builder;
pub use model::chain::Chain;
pub use model::error::ChainError;
pub use model::sequence::{Pair, Sequence};
pub use model::transitions::TransitionMap;
