use thiserror::Error;

/// Errors raised by the headline analysis core.
///
/// Every variant is a caller-side contract violation: the core performs no
/// I/O, so there is no transient failure class. Empty inputs are never
/// reported here, they simply produce empty results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	/// An n-gram order of zero was requested.
	#[error("n-gram order must be >= 1, got {0}")]
	InvalidNgramOrder(usize),

	/// A timestamp does not follow the `"HH:MM <date>"` layout.
	#[error("malformed timestamp {0:?}: expected \"HH:MM <date>\"")]
	MalformedTimestamp(String),

	/// Generation was requested before any call to `load`.
	#[error("word-chain graph has not been loaded")]
	GraphNotLoaded,

	/// The graph was loaded but no sentence contributed a start transition.
	#[error("word-chain graph has no start transitions (only empty sentences were loaded)")]
	NoStartTransitions,

	/// A configuration value is out of its valid range.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
