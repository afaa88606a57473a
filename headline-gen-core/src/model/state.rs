use std::collections::HashMap;

use rand::Rng;

/// Identifier of a node in the word-chain graph.
///
/// The two sentinels own the first two identifiers; interned tokens start
/// right after them, so no token can ever alias a sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
	pub(crate) const START: NodeId = NodeId(0);
	pub(crate) const END: NodeId = NodeId(1);

	pub(crate) fn new(index: usize) -> Self {
		Self(index)
	}

	pub(crate) fn index(self) -> usize {
		self.0
	}
}

/// Outgoing transitions of one node of the word-chain graph.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during loading
/// - Predict the next node using weighted random sampling
///
/// ## Invariants
/// - Each transition occurrence count is strictly positive
/// - Successors keep their first-observation order, so sampling with a
///   seeded RNG is reproducible
/// - `cumulative` mirrors `weights` once `seal` has run
#[derive(Clone, Debug, Default)]
pub(crate) struct State {
	/// Successors in first-observation order.
	successors: Vec<NodeId>,
	/// Occurrence count of each entry of `successors`.
	weights: Vec<usize>,
	/// Position of every successor in `successors`.
	slots: HashMap<NodeId, usize>,
	/// Running sums of `weights`, rebuilt by `seal`.
	cumulative: Vec<usize>,
}

impl State {
	/// Records an occurrence of a transition toward `next`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise, a new transition is created with an initial count of 1.
	pub(crate) fn add_transition(&mut self, next: NodeId) {
		match self.slots.get(&next) {
			Some(&slot) => self.weights[slot] += 1,
			None => {
				self.slots.insert(next, self.successors.len());
				self.successors.push(next);
				self.weights.push(1);
			}
		}
	}

	/// Rebuilds the cumulative weight table used by `predict`.
	///
	/// Must run after the last `add_transition` and before sampling.
	pub(crate) fn seal(&mut self) {
		self.cumulative.clear();
		let mut total = 0;
		for weight in &self.weights {
			total += weight;
			self.cumulative.push(total);
		}
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.successors.is_empty()
	}

	/// Number of distinct successors.
	pub(crate) fn len(&self) -> usize {
		self.successors.len()
	}

	pub(crate) fn weight(&self, next: NodeId) -> Option<usize> {
		self.slots.get(&next).map(|&slot| self.weights[slot])
	}

	/// Transitions in first-observation order.
	pub(crate) fn iter(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
		self.successors.iter().copied().zip(self.weights.iter().copied())
	}

	/// Predicts the next node using weighted random sampling.
	///
	/// Draws `r` uniformly in `[0, total)` and binary-searches the first
	/// cumulative sum above it, so successor `s` is chosen with probability
	/// `weight(s) / total` in O(log successors).
	///
	/// Returns `None` if the state has no transitions.
	pub(crate) fn predict<R: Rng>(&self, rng: &mut R) -> Option<NodeId> {
		debug_assert_eq!(self.cumulative.len(), self.successors.len(), "state not sealed");

		let total = *self.cumulative.last()?;
		let r = rng.random_range(0..total);
		let slot = self.cumulative.partition_point(|&sum| sum <= r);
		self.successors.get(slot).copied()
	}
}
