use crate::error::{Error, Result};
use crate::model::GenerationInput;
use crate::text::StopWords;

/// Number of entries kept in every top-N table by default.
pub const DEFAULT_TOP_N: usize = 10;

/// N-gram orders reported by default (bigrams and trigrams).
pub const DEFAULT_NGRAM_ORDERS: [usize; 2] = [2, 3];

/// Default number of generated headlines in a report.
pub const DEFAULT_SENTENCE_COUNT: usize = 30;

/// Parameters of a full headline analysis run.
///
/// # Responsibilities
/// - Hold the stop-word set handed to the normalizer
/// - Track the size of the top-N tables and the reported n-gram orders
/// - Carry the generation parameters of the word-chain graph
///
/// # Invariants
/// - Every n-gram order is >= 1
pub struct AnalyticsConfig {
	/// Number of entries in every top-N table.
	pub top_n: usize,

	/// Generated headline parameters.
	pub generation: GenerationInput,

	/// Orders of the reported n-gram tables.
	ngram_orders: Vec<usize>,

	/// Words dropped by the clean normalization mode.
	stop_words: StopWords,
}

impl Default for AnalyticsConfig {
	/// Spanish stop words, top 10, bigrams and trigrams, 30 headlines.
	fn default() -> Self {
		Self {
			top_n: DEFAULT_TOP_N,
			generation: GenerationInput::new(DEFAULT_SENTENCE_COUNT),
			ngram_orders: DEFAULT_NGRAM_ORDERS.to_vec(),
			stop_words: StopWords::spanish(),
		}
	}
}

impl AnalyticsConfig {
	pub fn ngram_orders(&self) -> &[usize] {
		&self.ngram_orders
	}

	pub fn stop_words(&self) -> &StopWords {
		&self.stop_words
	}

	/// Sets the reported n-gram orders.
	///
	/// # Errors
	/// Returns an error if an order is 0.
	pub fn set_ngram_orders(&mut self, orders: Vec<usize>) -> Result<()> {
		if orders.contains(&0) {
			return Err(Error::InvalidConfig("n-gram orders must be >= 1".to_owned()));
		}
		self.ngram_orders = orders;
		Ok(())
	}

	pub fn set_stop_words(&mut self, stop_words: StopWords) {
		self.stop_words = stop_words;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_reference_run() {
		let config = AnalyticsConfig::default();
		assert_eq!(config.top_n, 10);
		assert_eq!(config.ngram_orders(), &[2, 3]);
		assert_eq!(config.generation.count, 30);
		assert!(config.stop_words().contains("de"));
	}

	#[test]
	fn zero_ngram_order_is_rejected() {
		let mut config = AnalyticsConfig::default();
		assert!(matches!(config.set_ngram_orders(vec![1, 0]), Err(Error::InvalidConfig(_))));
		assert_eq!(config.ngram_orders(), &[2, 3]);
		config.set_ngram_orders(vec![4]).unwrap();
		assert_eq!(config.ngram_orders(), &[4]);
	}
}
