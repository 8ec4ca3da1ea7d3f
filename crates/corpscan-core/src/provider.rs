//! Lookup provider interface consumed by the frontier search.

use async_trait::async_trait;

use crate::error::LookupError;

/// Capability to resolve a company name into candidate subsidiary names.
///
/// Implementations must return a deduplicated (exact match, first occurrence
/// wins), order-preserving list of non-empty names. A lookup may be slow and
/// may fail; failures are scoped to the one company being resolved and never
/// abort the surrounding traversal — the engine records an empty result and
/// moves on.
#[async_trait]
pub trait LookupProvider: Send + Sync {
    /// Resolve `company` into a list of candidate subsidiary names.
    async fn lookup(&self, company: &str) -> Result<Vec<String>, LookupError>;
}
