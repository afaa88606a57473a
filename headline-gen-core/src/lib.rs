//! Headline analysis and fake-headline generation library.
//!
//! This crate provides:
//! - Text normalization of raw headlines (preserve and clean modes)
//! - Frequency statistics over words, n-grams and dates
//! - A first-order Markov chain ("word-chain graph") generating new headlines
//! - A report pipeline tying the three together
//!
//! The crate performs no I/O: headlines come in as `(timestamp, text)` pairs
//! and results go out as plain values for the caller to render or store.

/// Error type shared by every fallible operation.
pub mod error;

/// Raw sentence to token sequence normalization.
pub mod text;

/// Frequency distributions, top-N subsets and per-date aggregates.
pub mod stats;

/// Word-chain graph loading and sentence generation.
pub mod model;

/// Parameters of a full analysis run.
pub mod config;

/// End-to-end analysis of a batch of headlines.
pub mod report;

pub use config::AnalyticsConfig;
pub use error::{Error, Result};
pub use report::HeadlineReport;
