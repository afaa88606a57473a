/// Default number of sentences per generation run.
pub const DEFAULT_COUNT: usize = 10;

/// Input parameters for generating sentences from a word-chain graph.
///
/// # Responsibilities
/// - Track how many sentences to generate (`count`)
/// - Track how many times a sentence reproducing a loaded headline is
///   regenerated (`nb_try`)
/// - Optionally pin the random source (`seed`) for reproducible runs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Number of sentences to generate.
	pub count: usize,

	/// Number of retries when a generated sentence already exists in the
	/// loaded headlines (case-insensitive). `0` disables the check and keeps
	/// the pure weighted walk.
	pub nb_try: usize,

	/// Seed of the deterministic random source; `None` uses the thread RNG.
	pub seed: Option<u64>,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self { count: DEFAULT_COUNT, nb_try: 0, seed: None }
	}
}

impl GenerationInput {
	/// `count` sentences, no retries, thread RNG.
	pub fn new(count: usize) -> Self {
		Self { count, ..Self::default() }
	}

	pub fn with_nb_try(mut self, nb_try: usize) -> Self {
		self.nb_try = nb_try;
		self
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}
}
