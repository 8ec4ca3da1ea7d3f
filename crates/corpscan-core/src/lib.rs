//! Corpscan Core Library
//!
//! Shared functionality for corpscan components:
//! - Hierarchical concurrent frontier search over company-ownership graphs
//! - Globally shared, case-insensitive visited-set for traversal dedup
//! - Hierarchy tree model with post-order counting
//! - Text rendering for subsidiary reports
//! - Common error types

pub mod config;
pub mod error;
pub mod hierarchy;
pub mod provider;
pub mod render;
pub mod search;
pub mod tracing_init;
pub mod visited;

pub use config::SearchConfig;
pub use error::{ConfigError, LookupError};
pub use hierarchy::{Hierarchy, HierarchyNode};
pub use provider::LookupProvider;
pub use search::FrontierSearch;
pub use visited::{VisitedSet, normalize};
