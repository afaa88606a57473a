use indexmap::IndexMap;

use super::frequency::FrequencyDistribution;
use super::timestamp::date_key;
use crate::error::Result;
use crate::text::TokenizedSentence;

/// Counts headlines per date.
///
/// Dates appear in first-seen order. Only the timestamp of each pair is
/// inspected; the value is ignored.
///
/// # Errors
/// Fails on the first timestamp that does not follow the `"HH:MM <date>"`
/// layout (see [`date_key`]).
pub fn articles_for_date<T, V>(news: &[(T, V)]) -> Result<FrequencyDistribution>
where
	T: AsRef<str>,
{
	let mut per_date = FrequencyDistribution::new();
	for (timestamp, _) in news {
		per_date.add(date_key(timestamp.as_ref())?);
	}
	Ok(per_date)
}

/// Most frequent token of each date.
///
/// Tokens of every sentence sharing a date key are counted together, then the
/// highest count wins, ties going to the token seen first on that date.
/// A date whose sentences are all empty never accumulates a token and is
/// absent from the result.
///
/// # Errors
/// Fails on the first malformed timestamp, like [`articles_for_date`].
pub fn most_common_word_for_date<T>(dated_sentences: &[(T, TokenizedSentence)]) -> Result<IndexMap<String, String>>
where
	T: AsRef<str>,
{
	let mut words_for_dates: IndexMap<&str, FrequencyDistribution> = IndexMap::new();
	for (timestamp, sentence) in dated_sentences {
		let date = date_key(timestamp.as_ref())?;
		if sentence.is_empty() {
			continue;
		}
		words_for_dates.entry(date).or_default().extend(sentence);
	}

	Ok(words_for_dates
		.into_iter()
		.filter_map(|(date, words)| {
			words
				.most_common()
				.map(|(word, _)| (date.to_owned(), word.to_owned()))
		})
		.collect())
}
