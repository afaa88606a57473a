use std::sync::LazyLock;

use regex::Regex;

use super::stop_words::StopWords;

/// Word boundaries: whitespace, separator punctuation and runs of dots.
///
/// A single `.`, `-` or `'` inside a fragment is not a boundary, so `EE.UU.`
/// and `COVID-19` stay one word.
static WORD_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"(?:[\s,;:?!¿¡()\[\]{}<>"«»“”…]|\.{2,})+"#).expect("valid word boundary pattern")
});

/// A normalized text unit: alphanumeric characters only, never empty.
pub type Token = String;

/// Ordered tokens derived from one input sentence. May be empty.
pub type TokenizedSentence = Vec<Token>;

/// Turns raw headlines into token sequences.
///
/// Two modes share the same word-boundary splitter:
/// - **preserve** (`tokenize`): punctuation stripped, case and stop words kept.
///   Used wherever the literal word forms matter (n-grams, word-chain graph).
/// - **clean** (`tokenize_and_clean`): additionally lower-cased, with purely
///   numeric tokens and stop words dropped. Used for human-facing statistics.
///
/// # Invariants
/// - One output sentence per input sentence, in input order.
/// - Clean output is a case-folded subsequence of preserve output.
/// - Normalization never fails; punctuation-only input yields an empty sentence.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
	stop_words: StopWords,
}

impl Normalizer {
	pub fn new(stop_words: StopWords) -> Self {
		Self { stop_words }
	}

	pub fn stop_words(&self) -> &StopWords {
		&self.stop_words
	}

	/// Preserve mode over a batch of sentences.
	pub fn tokenize<I>(&self, sentences: I) -> Vec<TokenizedSentence>
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		sentences
			.into_iter()
			.map(|sentence| tokenize_sentence(sentence.as_ref()))
			.collect()
	}

	/// Clean mode over a batch of sentences.
	pub fn tokenize_and_clean<I>(&self, sentences: I) -> Vec<TokenizedSentence>
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		sentences
			.into_iter()
			.map(|sentence| self.clean_sentence(sentence.as_ref()))
			.collect()
	}

	/// Clean mode for a single sentence.
	///
	/// Each preserved token is case-folded, then dropped if it is purely
	/// numeric or a stop word.
	pub fn clean_sentence(&self, sentence: &str) -> TokenizedSentence {
		tokenize_sentence(sentence)
			.iter()
			.map(|token| fold_case(token))
			.filter(|token| !token.is_empty())
			.filter(|token| !is_numeric(token))
			.filter(|token| !self.stop_words.contains(token))
			.collect()
	}
}

/// Preserve mode for a single sentence.
///
/// Splits on word boundaries (whitespace, separator punctuation, `..`) and
/// strips every non-alphanumeric character from each fragment; fragments
/// left empty are discarded.
pub fn tokenize_sentence(sentence: &str) -> TokenizedSentence {
	WORD_BOUNDARY
		.split(sentence)
		.map(strip_non_alphanumeric)
		.filter(|token| !token.is_empty())
		.collect()
}

/// Lower-cases a token, keeping it alphanumeric.
///
/// Some characters lower-case into a base letter plus a combining mark;
/// the mark is stripped again so the result stays a valid token.
pub fn fold_case(token: &str) -> Token {
	strip_non_alphanumeric(&token.to_lowercase())
}

fn strip_non_alphanumeric(fragment: &str) -> Token {
	fragment.chars().filter(|c| c.is_alphanumeric()).collect()
}

fn is_numeric(token: &str) -> bool {
	token.chars().all(char::is_numeric)
}
