//! Static in-memory lookup provider.
//!
//! Backed by a map of company name to subsidiary list, loadable from a JSON
//! file. Used for offline runs and as a deterministic backend in tests.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use corpscan_core::{LookupError, LookupProvider, normalize};

use crate::clean_candidates;

/// Lookup provider answering from a fixed dataset.
///
/// Companies absent from the dataset resolve to an empty list, mirroring the
/// "nothing found" behavior of a live endpoint.
#[derive(Debug, Default)]
pub struct StaticLookupProvider {
    /// Subsidiary lists keyed by normalized company name.
    entries: HashMap<String, Vec<String>>,
}

impl StaticLookupProvider {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from `(company, subsidiaries)` pairs.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let mut provider = Self::new();
        for (company, subsidiaries) in entries {
            provider.insert(company, subsidiaries.iter().copied());
        }
        provider
    }

    /// Load a dataset from a JSON file mapping company names to subsidiary
    /// name arrays.
    pub fn from_json_file(path: &Path) -> Result<Self, LookupError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LookupError::Config(format!("failed to read dataset {}: {e}", path.display()))
        })?;
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(&content).map_err(|e| {
            LookupError::Config(format!("failed to parse dataset {}: {e}", path.display()))
        })?;

        let mut provider = Self::new();
        for (company, subsidiaries) in raw {
            provider.insert(&company, subsidiaries.iter().map(String::as_str));
        }
        debug!(
            path = %path.display(),
            companies = provider.entries.len(),
            "loaded static lookup dataset"
        );
        Ok(provider)
    }

    /// Add or replace one company's subsidiary list.
    pub fn insert<'a, I>(&mut self, company: &str, subsidiaries: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.entries
            .insert(normalize(company), clean_candidates(subsidiaries));
    }

    /// Number of companies in the dataset.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dataset holds no companies.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl LookupProvider for StaticLookupProvider {
    async fn lookup(&self, company: &str) -> Result<Vec<String>, LookupError> {
        Ok(self
            .entries
            .get(&normalize(company))
            .cloned()
            .unwrap_or_default())
    }
}
