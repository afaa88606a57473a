//! Markov chain sentence generation.
//!
//! This module provides:
//! - The word-chain graph (`WordChainGraph`), a first-order Markov chain
//!   over tokens with START/END sentinels
//! - Generation parameters (`GenerationInput`)
//! - Internal per-node transition tables (`State`)

/// Word-chain graph: loading and weighted random walks.
pub mod word_chain;

/// Generation configuration: sentence count, novelty retries, seed.
pub mod generation_input;

/// Internal representation of one node's outgoing transitions.
///
/// Tracks transition weights and supports weighted random sampling.
/// This module is not exposed publicly.
mod state;

pub use generation_input::GenerationInput;
pub use word_chain::{Node, WordChainGraph};
