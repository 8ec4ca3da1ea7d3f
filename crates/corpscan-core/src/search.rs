//! Hierarchical concurrent frontier search.
//!
//! Explores a company-ownership graph breadth-by-breadth: each depth level
//! dispatches its names as concurrent worker tasks, every worker claims its
//! name through the shared [`VisitedSet`] before doing any paid work, and a
//! single semaphore shared across all depth levels caps in-flight lookups.
//! A fresh pool per recursion level would let total concurrency grow
//! multiplicatively with depth; the shared semaphore keeps it at
//! `max_workers` for the whole traversal. Permits are held only for the
//! paced delay plus the lookup itself, never across recursion, so parent
//! levels awaiting children cannot starve the pool.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::hierarchy::{Hierarchy, HierarchyNode};
use crate::provider::LookupProvider;
use crate::visited::VisitedSet;

/// Multi-level, concurrent, globally deduplicated subsidiary search.
pub struct FrontierSearch {
    provider: Arc<dyn LookupProvider>,
    config: SearchConfig,
}

impl FrontierSearch {
    /// Create a search engine over `provider`.
    ///
    /// Fails fast on an invalid configuration; no traversal work is
    /// attempted.
    pub fn new(provider: Arc<dyn LookupProvider>, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    /// Run a full traversal from `root`.
    ///
    /// Always completes and always returns a hierarchy: individual lookup
    /// failures degrade to empty subtrees and never abort sibling branches.
    /// The root is claimed in the visited set as a side effect but is not
    /// counted among the companies found.
    pub async fn search(&self, root: &str) -> Hierarchy {
        info!(
            company = root,
            max_depth = self.config.max_depth,
            max_workers = self.config.max_workers,
            "starting hierarchical subsidiary search"
        );

        let traversal = Arc::new(Traversal {
            provider: Arc::clone(&self.provider),
            config: self.config.clone(),
            visited: VisitedSet::new(),
            lookups: Semaphore::new(self.config.max_workers),
        });

        let mut level = Arc::clone(&traversal)
            .process_level(vec![root.to_string()], 1)
            .await;

        // The level map holds at most the root's own node; its children
        // become the hierarchy's subsidiaries map.
        let subsidiaries = level
            .remove(root)
            .map(|node| node.subsidiaries)
            .unwrap_or_default();

        let hierarchy = Hierarchy::assemble(root.to_string(), subsidiaries);
        info!(
            company = %hierarchy.company,
            total = hierarchy.total_companies_found,
            searched = traversal.visited.len(),
            "subsidiary search complete"
        );
        hierarchy
    }
}

/// Per-traversal state shared by every worker at every depth.
///
/// The visited set and the lookup semaphore live exactly as long as one
/// `search` call; nothing here is persisted or reused across traversals.
struct Traversal {
    provider: Arc<dyn LookupProvider>,
    config: SearchConfig,
    visited: VisitedSet,
    lookups: Semaphore,
}

type LevelResults = BTreeMap<String, HierarchyNode>;

impl Traversal {
    /// Process one frontier of company names at `depth`.
    ///
    /// Dispatches a worker task per name, waits for all of them (the level
    /// barrier), and collects the non-skipped results keyed by the raw name
    /// as first observed. Boxed because the recursion through worker tasks
    /// makes the future self-referential in size.
    fn process_level(
        self: Arc<Self>,
        names: Vec<String>,
        depth: u32,
    ) -> Pin<Box<dyn Future<Output = LevelResults> + Send>> {
        Box::pin(async move {
            if depth > self.config.max_depth || names.is_empty() {
                return LevelResults::new();
            }

            let mut workers = JoinSet::new();
            for name in names {
                let traversal = Arc::clone(&self);
                workers.spawn(async move { traversal.expand(name, depth).await });
            }

            let mut results = LevelResults::new();
            while let Some(joined) = workers.join_next().await {
                match joined {
                    Ok(Some((name, node))) => {
                        results.insert(name, node);
                    }
                    // Another branch of the traversal already claimed the name.
                    Ok(None) => {}
                    Err(err) => warn!(depth, %err, "subsidiary worker task failed"),
                }
            }
            results
        })
    }

    /// One worker: claim the name, run the paced lookup, build the node.
    ///
    /// Returns `None` when the name was already claimed elsewhere in the
    /// traversal, at any depth, by any concurrent worker.
    async fn expand(self: Arc<Self>, name: String, depth: u32) -> Option<(String, HierarchyNode)> {
        if !self.visited.try_mark(&name) {
            debug!(company = %name, depth, "already searched, skipping");
            return None;
        }

        let subsidiaries = self.paced_lookup(&name, depth).await;

        let node = if subsidiaries.is_empty() {
            HierarchyNode::leaf()
        } else if depth < self.config.max_depth {
            let children = Arc::clone(&self)
                .process_level(subsidiaries, depth + 1)
                .await;
            HierarchyNode::with_subsidiaries(children)
        } else {
            // Depth exhausted: record discoveries as unexpanded leaves. They
            // are listed, never searched, and never claimed in the visited
            // set; names some other branch already claimed are dropped so a
            // company appears at most once in the tree.
            let children = subsidiaries
                .into_iter()
                .filter(|sub| !self.visited.contains(sub))
                .map(|sub| (sub, HierarchyNode::leaf()))
                .collect();
            HierarchyNode::with_subsidiaries(children)
        };

        Some((name, node))
    }

    /// Run one rate-paced, time-bounded lookup under a shared permit.
    ///
    /// Any failure degrades to an empty list; a failed lookup means "no
    /// subsidiaries found", not a failed traversal.
    async fn paced_lookup(&self, name: &str, depth: u32) -> Vec<String> {
        // The semaphore is never closed while a traversal is running.
        let Ok(_permit) = self.lookups.acquire().await else {
            return Vec::new();
        };

        debug!(company = name, depth, "searching for subsidiaries");
        sleep(self.config.delay_between_searches).await;

        match timeout(self.config.lookup_timeout, self.provider.lookup(name)).await {
            Ok(Ok(subsidiaries)) => {
                debug!(
                    company = name,
                    depth,
                    found = subsidiaries.len(),
                    "lookup finished"
                );
                subsidiaries
            }
            Ok(Err(err)) => {
                warn!(company = name, depth, %err, "lookup failed, recording no subsidiaries");
                Vec::new()
            }
            Err(_) => {
                warn!(
                    company = name,
                    depth,
                    timeout = ?self.config.lookup_timeout,
                    "lookup timed out, recording no subsidiaries"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use async_trait::async_trait;

    struct NoSubsidiaries;

    #[async_trait]
    impl LookupProvider for NoSubsidiaries {
        async fn lookup(&self, _company: &str) -> Result<Vec<String>, LookupError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn invalid_config_rejected_before_traversal() {
        let config = SearchConfig {
            max_workers: 0,
            ..SearchConfig::default()
        };
        let result = FrontierSearch::new(Arc::new(NoSubsidiaries), config);
        assert!(matches!(result, Err(ConfigError::InvalidMaxWorkers(0))));
    }

    #[tokio::test]
    async fn empty_result_still_returns_hierarchy() {
        let config = SearchConfig {
            delay_between_searches: std::time::Duration::from_millis(1),
            ..SearchConfig::default()
        };
        let search = FrontierSearch::new(Arc::new(NoSubsidiaries), config).unwrap();
        let hierarchy = search.search("Lone Corp").await;
        assert_eq!(hierarchy.company, "Lone Corp");
        assert!(hierarchy.subsidiaries.is_empty());
        assert_eq!(hierarchy.total_companies_found, 0);
    }
}
