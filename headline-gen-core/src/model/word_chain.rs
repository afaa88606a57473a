use std::collections::{HashMap, HashSet};

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::generation_input::GenerationInput;
use super::state::{NodeId, State};
use crate::error::{Error, Result};

/// Node of the word-chain graph as seen from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Node<'a> {
	/// Sentinel every sentence starts from.
	Start,
	/// Sentinel every sentence ends on; it has no outgoing edges.
	End,
	/// An interned token.
	Token(&'a str),
}

/// First-order Markov chain over tokens, stored as a directed weighted graph.
///
/// Every loaded sentence `w1 .. wk` adds the transitions
/// `START -> w1 -> .. -> wk -> END`; the weight of an edge is the number of
/// times that transition was observed. Tokens are interned once and the
/// graph refers to them by [`NodeId`].
///
/// # Responsibilities
/// - Build the graph from tokenized sentences (`load`)
/// - Generate new sentences by weighted random walk from START to END
/// - Optionally avoid reproducing one of the loaded headlines
///
/// # Invariants
/// - START and END exist after every `load`, even for an empty input
/// - Every edge weight is >= 1
/// - END has no outgoing edges and every loaded token has at least one, so a
///   walk from START reaches END with probability 1
/// - Only `load` mutates the graph; generation borrows it immutably
#[derive(Clone, Debug)]
pub struct WordChainGraph {
	/// Token text by node index; the sentinel slots hold empty strings.
	labels: Vec<String>,
	/// Interning table, sentinels excluded.
	ids: HashMap<String, NodeId>,
	/// Outgoing transitions by node index.
	states: Vec<State>,
	/// Loaded headlines, rendered and lower-cased, for novelty checks.
	sentences: HashSet<String>,
	loaded: bool,
}

impl Default for WordChainGraph {
	fn default() -> Self {
		Self::new()
	}
}

impl WordChainGraph {
	/// Creates an empty, not yet loaded, graph.
	pub fn new() -> Self {
		let mut graph = Self {
			labels: Vec::new(),
			ids: HashMap::new(),
			states: Vec::new(),
			sentences: HashSet::new(),
			loaded: false,
		};
		graph.reset();
		graph
	}

	/// Drops every node and edge and re-seeds empty START and END nodes.
	fn reset(&mut self) {
		self.labels.clear();
		self.ids.clear();
		self.states.clear();
		self.sentences.clear();

		for _ in [NodeId::START, NodeId::END] {
			self.labels.push(String::new());
			self.states.push(State::default());
		}
	}

	/// Returns the node of `token`, creating it if needed.
	fn intern(&mut self, token: &str) -> NodeId {
		if let Some(&id) = self.ids.get(token) {
			return id;
		}

		let id = NodeId::new(self.states.len());
		self.labels.push(token.to_owned());
		self.ids.insert(token.to_owned(), id);
		self.states.push(State::default());
		id
	}

	/// Replaces the graph with one built from `sentences`.
	///
	/// Tokens are expected to be normalized already (preserve mode keeps the
	/// headlines' literal word forms). Empty sentences add no edge.
	///
	/// # Notes
	/// - Single pass, O(total tokens)
	/// - Memory is O(distinct tokens + distinct transitions)
	pub fn load<S: AsRef<[String]>>(&mut self, sentences: &[S]) {
		self.reset();

		let mut ids: Vec<NodeId> = Vec::new();
		for sentence in sentences {
			let tokens = sentence.as_ref();
			if tokens.is_empty() {
				continue;
			}

			ids.clear();
			ids.extend(tokens.iter().map(|token| self.intern(token)));

			self.states[NodeId::START.index()].add_transition(ids[0]);
			for (i, id) in ids.iter().enumerate() {
				let next = ids.get(i + 1).copied().unwrap_or(NodeId::END);
				self.states[id.index()].add_transition(next);
			}

			self.sentences.insert(render(tokens).to_lowercase());
		}

		for state in &mut self.states {
			state.seal();
		}
		self.loaded = true;

		debug!(
			"word-chain graph loaded: {} sentences, {} tokens, {} transitions",
			sentences.len(),
			self.ids.len(),
			self.states.iter().map(State::len).sum::<usize>()
		);
	}

	/// Whether `load` has been called at least once.
	pub fn is_loaded(&self) -> bool {
		self.loaded
	}

	/// Number of nodes, START and END included.
	pub fn node_count(&self) -> usize {
		self.states.len()
	}

	/// Number of distinct tokens.
	pub fn token_count(&self) -> usize {
		self.ids.len()
	}

	/// Weight of the edge `from -> to`, `None` if it was never observed.
	pub fn weight(&self, from: Node<'_>, to: Node<'_>) -> Option<usize> {
		let from = self.id_of(from)?;
		let to = self.id_of(to)?;
		self.states[from.index()].weight(to)
	}

	/// Outgoing edges of `from` in first-observation order.
	///
	/// Unknown nodes have no successors.
	pub fn successors(&self, from: Node<'_>) -> Vec<(Node<'_>, usize)> {
		match self.id_of(from) {
			Some(id) => self.states[id.index()]
				.iter()
				.map(|(next, weight)| (self.node(next), weight))
				.collect(),
			None => Vec::new(),
		}
	}

	/// Whether `sentence` matches one of the loaded headlines, ignoring case.
	///
	/// Loaded headlines are compared in their generated form: tokens joined
	/// by single spaces followed by a period.
	pub fn contains_sentence(&self, sentence: &str) -> bool {
		self.sentences.contains(&sentence.to_lowercase())
	}

	fn id_of(&self, node: Node<'_>) -> Option<NodeId> {
		match node {
			Node::Start => Some(NodeId::START),
			Node::End => Some(NodeId::END),
			Node::Token(token) => self.ids.get(token).copied(),
		}
	}

	fn node(&self, id: NodeId) -> Node<'_> {
		match id {
			NodeId::START => Node::Start,
			NodeId::END => Node::End,
			_ => Node::Token(&self.labels[id.index()]),
		}
	}

	/// Checks that a walk can leave START.
	///
	/// # Errors
	/// - [`Error::GraphNotLoaded`] before the first `load`
	/// - [`Error::NoStartTransitions`] if only empty sentences were loaded
	fn ensure_generable(&self) -> Result<()> {
		if !self.loaded {
			return Err(Error::GraphNotLoaded);
		}
		if self.states[NodeId::START.index()].is_empty() {
			return Err(Error::NoStartTransitions);
		}
		Ok(())
	}

	/// Walks from START to END once.
	fn walk<R: Rng>(&self, rng: &mut R) -> String {
		let mut words: Vec<&str> = Vec::new();
		let mut current = NodeId::START;

		// every loaded token has at least one successor
		while let Some(next) = self.states[current.index()].predict(rng) {
			if next == NodeId::END {
				break;
			}
			words.push(&self.labels[next.index()]);
			current = next;
		}

		let sentence = render(&words);
		trace!("generated {sentence:?}");
		sentence
	}

	/// Generates one sentence with the given random source.
	///
	/// # Errors
	/// Fails if the graph cannot be walked (see [`Self::generate_sentences`]).
	pub fn generate_sentence<R: Rng>(&self, rng: &mut R) -> Result<String> {
		self.ensure_generable()?;
		Ok(self.walk(rng))
	}

	/// Generates `n` independent sentences using the thread RNG.
	///
	/// Each sentence is its tokens joined by single spaces and terminated
	/// by a period. `n == 0` yields an empty list.
	///
	/// # Errors
	/// - [`Error::GraphNotLoaded`] if `load` was never called
	/// - [`Error::NoStartTransitions`] if no loaded sentence had a token
	pub fn generate_sentences(&self, n: usize) -> Result<Vec<String>> {
		self.generate_sentences_with(n, &mut rand::rng())
	}

	/// Same as [`Self::generate_sentences`] with a caller-supplied random
	/// source. A seeded RNG replays the exact same sentences.
	pub fn generate_sentences_with<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Vec<String>> {
		self.generate_novel_sentences_with(n, 0, rng)
	}

	/// Generates `n` sentences, retrying up to `nb_try` times each one that
	/// reproduces a loaded headline.
	///
	/// # Behavior
	/// - `nb_try == 0` returns the first walk, like `generate_sentences_with`
	/// - When every retry collides, the last attempt is kept
	pub fn generate_novel_sentences_with<R: Rng>(&self, n: usize, nb_try: usize, rng: &mut R) -> Result<Vec<String>> {
		self.ensure_generable()?;

		let mut generated = Vec::with_capacity(n);
		for _ in 0..n {
			let mut sentence = self.walk(rng);
			let mut tries = nb_try;
			while tries > 0 && self.contains_sentence(&sentence) {
				sentence = self.walk(rng);
				tries -= 1;
			}
			if nb_try > 0 && self.contains_sentence(&sentence) {
				warn!("kept a loaded headline after {nb_try} retries: {sentence:?}");
			}
			generated.push(sentence);
		}
		Ok(generated)
	}

	/// Generates sentences as described by `input`.
	///
	/// A seed in `input` selects a deterministic [`StdRng`]; otherwise the
	/// thread RNG is used.
	pub fn generate(&self, input: &GenerationInput) -> Result<Vec<String>> {
		match input.seed {
			Some(seed) => self.generate_novel_sentences_with(input.count, input.nb_try, &mut StdRng::seed_from_u64(seed)),
			None => self.generate_novel_sentences_with(input.count, input.nb_try, &mut rand::rng()),
		}
	}
}

/// Joins tokens with single spaces and terminates with a period.
fn render<S: AsRef<str>>(tokens: &[S]) -> String {
	let mut sentence = tokens
		.iter()
		.map(AsRef::as_ref)
		.collect::<Vec<&str>>()
		.join(" ");
	sentence.push('.');
	sentence
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sentences(raw: &[&[&str]]) -> Vec<Vec<String>> {
		raw.iter()
			.map(|words| words.iter().map(|w| w.to_string()).collect())
			.collect()
	}

	fn hola_graph() -> WordChainGraph {
		let mut graph = WordChainGraph::new();
		graph.load(&sentences(&[&["hola", "mundo"], &["hola", "amigo"]]));
		graph
	}

	#[test]
	fn builds_expected_transitions() {
		let graph = hola_graph();

		assert_eq!(graph.successors(Node::Start), vec![(Node::Token("hola"), 2)]);
		assert_eq!(
			graph.successors(Node::Token("hola")),
			vec![(Node::Token("mundo"), 1), (Node::Token("amigo"), 1)]
		);
		assert_eq!(graph.weight(Node::Token("mundo"), Node::End), Some(1));
		assert_eq!(graph.weight(Node::Token("amigo"), Node::End), Some(1));
		assert!(graph.successors(Node::End).is_empty());
		assert_eq!(graph.token_count(), 3);
		assert_eq!(graph.node_count(), 5);
	}

	#[test]
	fn generates_only_observed_sentences() {
		let graph = hola_graph();
		let generated = graph.generate_sentences(50).unwrap();
		assert_eq!(generated.len(), 50);
		for sentence in generated {
			assert!(
				sentence == "hola mundo." || sentence == "hola amigo.",
				"unexpected sentence {sentence:?}"
			);
		}
	}

	#[test]
	fn zero_sentences_is_an_empty_list() {
		assert!(hola_graph().generate_sentences(0).unwrap().is_empty());
	}

	#[test]
	fn empty_load_keeps_sentinels() {
		let mut graph = WordChainGraph::new();
		graph.load::<Vec<String>>(&[]);
		assert!(graph.is_loaded());
		assert_eq!(graph.node_count(), 2);
		assert!(graph.successors(Node::Start).is_empty());
		assert_eq!(graph.generate_sentences(1), Err(Error::NoStartTransitions));
	}

	#[test]
	fn unloaded_graph_cannot_generate() {
		let graph = WordChainGraph::new();
		assert!(!graph.is_loaded());
		assert_eq!(graph.generate_sentences(3), Err(Error::GraphNotLoaded));
		assert_eq!(graph.generate_sentences(0), Err(Error::GraphNotLoaded));
	}

	#[test]
	fn reload_replaces_previous_graph() {
		let mut graph = hola_graph();
		graph.load(&sentences(&[&["adiós"]]));
		assert_eq!(graph.weight(Node::Start, Node::Token("hola")), None);
		assert_eq!(graph.successors(Node::Start), vec![(Node::Token("adiós"), 1)]);
		assert_eq!(graph.generate_sentences(2).unwrap(), vec!["adiós.", "adiós."]);
	}

	#[test]
	fn repeated_tokens_form_cycles() {
		let mut graph = WordChainGraph::new();
		graph.load(&sentences(&[&["no", "no", "no"]]));
		assert_eq!(graph.weight(Node::Token("no"), Node::Token("no")), Some(2));
		assert_eq!(graph.weight(Node::Token("no"), Node::End), Some(1));

		let mut rng = StdRng::seed_from_u64(3);
		for sentence in graph.generate_sentences_with(20, &mut rng).unwrap() {
			assert!(sentence.starts_with("no") && sentence.ends_with("no."));
		}
	}

	#[test]
	fn seeded_generation_is_reproducible() {
		let graph = hola_graph();
		let input = GenerationInput::new(20).with_seed(99);
		assert_eq!(graph.generate(&input).unwrap(), graph.generate(&input).unwrap());
	}

	#[test]
	fn novelty_check_ignores_case() {
		let graph = hola_graph();
		assert!(graph.contains_sentence("Hola Mundo."));
		assert!(!graph.contains_sentence("hola mundo"));
	}

	#[test]
	fn exhausted_retries_keep_last_attempt() {
		let mut graph = WordChainGraph::new();
		graph.load(&sentences(&[&["solo"]]));
		let input = GenerationInput::new(3).with_nb_try(5).with_seed(1);
		assert_eq!(graph.generate(&input).unwrap(), vec!["solo.", "solo.", "solo."]);
	}

	#[test]
	fn retries_prefer_unseen_sentences() {
		let mut graph = WordChainGraph::new();
		graph.load(&sentences(&[&["a", "b"], &["b", "a"]]));
		// "a b." and "b a." are loaded; every other walk is new
		let input = GenerationInput::new(30).with_nb_try(200).with_seed(5);
		for sentence in graph.generate(&input).unwrap() {
			assert!(!graph.contains_sentence(&sentence), "{sentence:?} was loaded");
		}
	}
}
