//! Result tree model for a completed subsidiary traversal.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One company's position in the result tree.
///
/// The node itself carries no name; nodes are keyed in their parent's map by
/// the raw company name as first observed. An empty subsidiaries map marks a
/// leaf, either because the lookup found nothing or because the traversal
/// reached its depth limit there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    /// Child companies keyed by name.
    #[serde(default)]
    pub subsidiaries: BTreeMap<String, HierarchyNode>,
}

impl HierarchyNode {
    /// A node with no known subsidiaries.
    pub fn leaf() -> Self {
        Self::default()
    }

    /// A node wrapping an already-built child map.
    pub const fn with_subsidiaries(subsidiaries: BTreeMap<String, Self>) -> Self {
        Self { subsidiaries }
    }

    /// This node plus every node beneath it.
    fn count(&self) -> usize {
        1 + self.subsidiaries.values().map(Self::count).sum::<usize>()
    }
}

/// Completed traversal result. Immutable once returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    /// Root company name as given by the caller.
    pub company: String,
    /// The root's direct subsidiaries and their subtrees.
    pub subsidiaries: BTreeMap<String, HierarchyNode>,
    /// Total nodes in the subsidiaries tree, root excluded.
    pub total_companies_found: usize,
}

impl Hierarchy {
    /// Assemble a result and compute the total node count.
    pub fn assemble(company: String, subsidiaries: BTreeMap<String, HierarchyNode>) -> Self {
        let total_companies_found = subsidiaries.values().map(HierarchyNode::count).sum();
        Self {
            company,
            subsidiaries,
            total_companies_found,
        }
    }
}
