//! Error types for the corpscan core library.

use thiserror::Error;

/// Configuration errors, rejected before any traversal work starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `max_depth` must be at least 1.
    #[error("max_depth must be at least 1 (got {0})")]
    InvalidMaxDepth(u32),

    /// `max_workers` must be at least 1.
    #[error("max_workers must be at least 1 (got {0})")]
    InvalidMaxWorkers(usize),

    /// `delay_between_searches` must be a positive duration.
    #[error("delay_between_searches must be positive")]
    InvalidDelay,

    /// `lookup_timeout` must be a positive duration.
    #[error("lookup_timeout must be positive")]
    InvalidTimeout,
}

/// Errors a lookup provider may report for a single company.
///
/// Never fatal to a traversal: the search engine degrades any of these to
/// "no subsidiaries found" and continues with sibling companies.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Transport-level failure (connection, TLS, request timeout).
    #[error("lookup request failed: {0}")]
    Request(String),

    /// The lookup endpoint answered with a non-success status.
    #[error("lookup API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The endpoint answered but the body could not be interpreted.
    #[error("malformed lookup response: {0}")]
    Response(String),

    /// Provider construction or dataset loading failed.
    #[error("provider configuration error: {0}")]
    Config(String),
}
