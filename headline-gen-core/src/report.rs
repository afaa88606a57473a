use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::config::AnalyticsConfig;
use crate::error::Result;
use crate::model::WordChainGraph;
use crate::stats::{
	articles_for_date, most_common_word_for_date, ngram_frequency_distribution, word_frequency_distribution,
	FrequencyDistribution,
};
use crate::text::{Normalizer, TokenizedSentence};

/// Top-N table of one n-gram order.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NgramTable {
	pub n: usize,
	pub top: FrequencyDistribution,
}

/// Everything derived from one batch of `(timestamp, headline)` pairs.
///
/// Rendering (bar charts, timelines, word clouds) and persistence of the
/// generated headlines are left to the consumer.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HeadlineReport {
	/// Number of analysed headlines.
	pub headline_count: usize,
	/// Most frequent content words (clean mode).
	pub top_words: FrequencyDistribution,
	/// Most frequent n-grams per configured order (preserve mode).
	pub top_ngrams: Vec<NgramTable>,
	/// Headlines per date, in first-seen date order.
	pub articles_per_date: FrequencyDistribution,
	/// Most frequent content word of each date.
	pub most_common_word_per_date: IndexMap<String, String>,
	/// Synthetic headlines from the word-chain graph.
	pub generated: Vec<String>,
}

impl HeadlineReport {
	/// Runs the full analysis over `news`.
	///
	/// # Behavior
	/// - Headlines are normalized in clean mode (word statistics) and in
	///   preserve mode (n-grams and the word-chain graph)
	/// - Headline generation uses `config.generation`; an empty `news` batch
	///   or a zero sentence count skips generation instead of failing
	///
	/// # Errors
	/// Fails on a malformed timestamp, or if the headlines hold no token at
	/// all while at least one sentence was requested.
	pub fn build<T, H>(news: &[(T, H)], config: &AnalyticsConfig) -> Result<Self>
	where
		T: AsRef<str>,
		H: AsRef<str>,
	{
		let normalizer = Normalizer::new(config.stop_words().clone());
		let headlines: Vec<&str> = news.iter().map(|(_, headline)| headline.as_ref()).collect();
		let cleaned = normalizer.tokenize_and_clean(&headlines);
		let tokenized = normalizer.tokenize(&headlines);

		let mut graph = WordChainGraph::new();
		graph.load(&tokenized);

		let top_words = word_frequency_distribution(cleaned.iter().flatten()).top_n(config.top_n);

		let dated: Vec<(&str, TokenizedSentence)> = news
			.iter()
			.map(|(timestamp, _)| timestamp.as_ref())
			.zip(cleaned)
			.collect();
		let most_common_word_per_date = most_common_word_for_date(&dated)?;
		let articles_per_date = articles_for_date(news)?;

		let top_ngrams = config
			.ngram_orders()
			.iter()
			.map(|&n| -> Result<NgramTable> {
				Ok(NgramTable {
					n,
					top: ngram_frequency_distribution(&tokenized, n)?.top_n(config.top_n),
				})
			})
			.collect::<Result<Vec<_>>>()?;

		let generated = if news.is_empty() || config.generation.count == 0 {
			Vec::new()
		} else {
			graph.generate(&config.generation)?
		};

		debug!(
			"report built: {} headlines, {} dates, {} generated",
			news.len(),
			articles_per_date.len(),
			generated.len()
		);

		Ok(Self {
			headline_count: news.len(),
			top_words,
			top_ngrams,
			articles_per_date,
			most_common_word_per_date,
			generated,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;
	use crate::model::GenerationInput;

	fn news() -> Vec<(&'static str, &'static str)> {
		vec![
			("10:15 3 octubre 2022", "Elecciones en Brasil: Lula y Bolsonaro irán a segunda vuelta"),
			("08:40 3 octubre 2022", "Lula gana la primera vuelta en Brasil"),
			("21:05 2 octubre 2022", "Qué está en juego en las elecciones de Brasil"),
		]
	}

	fn config() -> AnalyticsConfig {
		let mut config = AnalyticsConfig::default();
		config.top_n = 3;
		config.generation = GenerationInput::new(5).with_seed(11);
		config
	}

	#[test]
	fn builds_statistics() {
		let report = HeadlineReport::build(&news(), &config()).unwrap();

		assert_eq!(report.headline_count, 3);
		let top_words: Vec<_> = report.top_words.iter().collect();
		assert_eq!(top_words, vec![("brasil", 3), ("elecciones", 2), ("lula", 2)]);

		let per_date: Vec<_> = report.articles_per_date.iter().collect();
		assert_eq!(per_date, vec![("3 octubre 2022", 2), ("2 octubre 2022", 1)]);
		assert_eq!(report.most_common_word_per_date["3 octubre 2022"], "brasil");
		assert_eq!(report.most_common_word_per_date["2 octubre 2022"], "juego");

		let orders: Vec<usize> = report.top_ngrams.iter().map(|table| table.n).collect();
		assert_eq!(orders, vec![2, 3]);
		assert_eq!(report.top_ngrams[0].top.count("en Brasil"), 2);
		assert_eq!(report.top_ngrams[0].top.count("primera vuelta"), 0);
	}

	#[test]
	fn generates_requested_headlines() {
		let report = HeadlineReport::build(&news(), &config()).unwrap();
		assert_eq!(report.generated.len(), 5);
		for sentence in &report.generated {
			assert!(sentence.ends_with('.'));
		}
		assert_eq!(report, HeadlineReport::build(&news(), &config()).unwrap());
	}

	#[test]
	fn empty_batch_is_an_empty_report() {
		let news: Vec<(String, String)> = Vec::new();
		let report = HeadlineReport::build(&news, &config()).unwrap();
		assert_eq!(report.headline_count, 0);
		assert!(report.top_words.is_empty());
		assert!(report.generated.is_empty());
		assert!(report.top_ngrams.iter().all(|table| table.top.is_empty()));
	}

	#[test]
	fn tokenless_headlines_keep_statistics_without_generation() {
		let news = vec![("10:00 1 mayo 2022", "¡¿...?!")];
		let mut config = config();
		config.generation = GenerationInput::new(0);

		let report = HeadlineReport::build(&news, &config).unwrap();
		assert_eq!(report.headline_count, 1);
		assert_eq!(report.articles_per_date.count("1 mayo 2022"), 1);
		assert!(report.top_words.is_empty());
		assert!(report.most_common_word_per_date.is_empty());
		assert!(report.generated.is_empty());

		config.generation = GenerationInput::new(1);
		assert_eq!(HeadlineReport::build(&news, &config), Err(Error::NoStartTransitions));
	}

	#[test]
	fn malformed_timestamp_is_reported() {
		let news = vec![("ayer", "Titular")];
		assert_eq!(
			HeadlineReport::build(&news, &config()),
			Err(Error::MalformedTimestamp("ayer".to_owned()))
		);
	}
}
