//! Lookup provider implementations for corpscan.
//!
//! Concrete backends for the [`corpscan_core::LookupProvider`] trait:
//! - [`HttpLookupProvider`]: a subsidiary lookup endpoint over HTTP (reqwest)
//! - [`StaticLookupProvider`]: an in-memory dataset for tests and offline runs

use std::collections::HashSet;

pub mod dataset;
pub mod http;

pub use dataset::StaticLookupProvider;
pub use http::{HttpLookupProvider, HttpProviderConfig};

/// Clean a raw candidate list the way providers must hand it to the engine:
/// trim each name, drop empties, and deduplicate exact matches keeping the
/// first occurrence.
pub fn clean_candidates<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(|name| {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                return None;
            }
            seen.insert(trimmed.to_string())
                .then(|| trimmed.to_string())
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_and_order() {
        let cleaned = clean_candidates(["B Corp", "A Corp", "B Corp", "C Corp"]);
        assert_eq!(cleaned, vec!["B Corp", "A Corp", "C Corp"]);
    }

    #[test]
    fn trims_whitespace_before_dedup() {
        let cleaned = clean_candidates([" Acme ", "Acme"]);
        assert_eq!(cleaned, vec!["Acme"]);
    }

    #[test]
    fn drops_empty_and_blank_names() {
        let cleaned = clean_candidates(["", "   ", "Real Corp"]);
        assert_eq!(cleaned, vec!["Real Corp"]);
    }

    #[test]
    fn dedup_is_exact_not_case_insensitive() {
        // Case folding is the engine's job (via the visited set); providers
        // only drop exact duplicates.
        let cleaned = clean_candidates(["Acme", "ACME"]);
        assert_eq!(cleaned, vec!["Acme", "ACME"]);
    }
}
