//! Globally shared visited-set for traversal deduplication.
//!
//! One [`VisitedSet`] is created per traversal and shared by every worker at
//! every depth level. A company name is claimed at most once for the whole
//! lifetime of the traversal, no matter how many parents discover it.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Normalize a raw company name into its dedup key.
///
/// The normalized form is only ever used for identity comparisons; the raw
/// form as first observed is what ends up in the result tree.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Set of normalized company names already claimed by some worker.
///
/// The set grows monotonically until the traversal ends. The check-and-insert
/// in [`try_mark`](Self::try_mark) is a single critical section, so for a
/// contested name exactly one concurrent caller receives `true`.
#[derive(Debug, Default)]
pub struct VisitedSet {
    inner: Mutex<HashSet<String>>,
}

impl VisitedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claim `raw` for searching.
    ///
    /// Returns `false` when the normalized form was already claimed, at any
    /// depth, by any worker; the caller must then contribute nothing for
    /// this name.
    pub fn try_mark(&self, raw: &str) -> bool {
        let key = normalize(raw);
        self.lock().insert(key)
    }

    /// Whether the normalized form of `raw` has already been claimed.
    ///
    /// A peek only; does not claim the name.
    pub fn contains(&self, raw: &str) -> bool {
        let key = normalize(raw);
        self.lock().contains(&key)
    }

    /// Number of names claimed so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no names have been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        // A poisoned lock means a panic inside this short critical section;
        // the set itself is still consistent, so recover the guard.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
