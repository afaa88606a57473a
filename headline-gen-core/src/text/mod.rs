//! Text normalization: raw headlines to token sequences.

/// Preserve / clean tokenization of raw sentences.
pub mod normalizer;

/// Stop-word sets used by the clean mode.
pub mod stop_words;

pub use normalizer::{fold_case, tokenize_sentence, Normalizer, Token, TokenizedSentence};
pub use stop_words::StopWords;
