//! Frequency statistics over tokens, n-grams and dates.
//!
//! Every operation here is a pure function of its input.

/// Per-date aggregates (articles per date, most common word per date).
pub mod dated;

/// Frequency distributions, n-gram counting and top-N extraction.
pub mod frequency;

/// `"HH:MM <date>"` timestamp contract.
pub mod timestamp;

pub use dated::{articles_for_date, most_common_word_for_date};
pub use frequency::{get_top_n, ngram_frequency_distribution, word_frequency_distribution, FrequencyDistribution};
pub use timestamp::date_key;
