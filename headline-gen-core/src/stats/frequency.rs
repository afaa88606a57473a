use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};

/// Occurrence counts keyed by token, n-gram or date.
///
/// Keys keep their first-seen order. Every ordering operation on the
/// distribution is a stable sort on the count, so equal counts always come
/// out in first-seen order.
///
/// # Invariants
/// - Keys are unique
/// - Every stored count is >= 1
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FrequencyDistribution {
	counts: IndexMap<String, usize>,
}

impl FrequencyDistribution {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `key`.
	pub fn add(&mut self, key: &str) {
		match self.counts.get_mut(key) {
			Some(count) => *count += 1,
			None => {
				self.counts.insert(key.to_owned(), 1);
			}
		}
	}

	/// Count for `key`, 0 if it was never seen.
	pub fn count(&self, key: &str) -> usize {
		self.counts.get(key).copied().unwrap_or(0)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.counts.contains_key(key)
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Entries in their current order (first-seen, or descending for a top-N subset).
	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.counts.iter().map(|(key, count)| (key.as_str(), *count))
	}

	/// Returns the `n` most frequent entries, descending.
	///
	/// Ties keep their first-seen order. If `n` exceeds the number of keys the
	/// whole distribution is returned (sorted); `n == 0` returns an empty one.
	pub fn top_n(&self, n: usize) -> Self {
		let mut entries: Vec<(&String, &usize)> = self.counts.iter().collect();
		// `sort_by` is stable
		entries.sort_by(|a, b| b.1.cmp(a.1));

		Self {
			counts: entries
				.into_iter()
				.take(n)
				.map(|(key, count)| (key.clone(), *count))
				.collect(),
		}
	}

	/// Highest-count entry; the first-seen key wins a tie.
	///
	/// Returns `None` for an empty distribution.
	pub fn most_common(&self) -> Option<(&str, usize)> {
		let mut best: Option<(&str, usize)> = None;
		for (key, count) in self.iter() {
			match best {
				Some((_, best_count)) if best_count >= count => (),
				_ => best = Some((key, count)),
			}
		}
		best
	}
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyDistribution {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let mut distribution = Self::new();
		for key in iter {
			distribution.add(key.as_ref());
		}
		distribution
	}
}

impl<S: AsRef<str>> Extend<S> for FrequencyDistribution {
	fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
		for key in iter {
			self.add(key.as_ref());
		}
	}
}

/// Counts each token of a flat token sequence.
///
/// The sum of the resulting counts equals the number of tokens.
pub fn word_frequency_distribution<I>(tokens: I) -> FrequencyDistribution
where
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	tokens.into_iter().collect()
}

/// Counts the contiguous n-grams of every sentence.
///
/// Each n-gram is keyed by its tokens joined with single spaces. N-grams
/// never span two sentences, and a sentence shorter than `n` contributes
/// nothing.
///
/// # Errors
/// Returns [`Error::InvalidNgramOrder`] if `n == 0`.
pub fn ngram_frequency_distribution<S>(sentences: &[S], n: usize) -> Result<FrequencyDistribution>
where
	S: AsRef<[String]>,
{
	if n == 0 {
		return Err(Error::InvalidNgramOrder(n));
	}

	let mut distribution = FrequencyDistribution::new();
	for sentence in sentences {
		for window in sentence.as_ref().windows(n) {
			distribution.add(&window.join(" "));
		}
	}
	Ok(distribution)
}

/// Free-function form of [`FrequencyDistribution::top_n`].
pub fn get_top_n(distribution: &FrequencyDistribution, n: usize) -> FrequencyDistribution {
	distribution.top_n(n)
}
