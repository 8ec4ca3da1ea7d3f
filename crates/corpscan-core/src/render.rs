//! Text rendering for subsidiary hierarchy reports.
//!
//! Produces the indented, connector-prefixed tree layout used both for
//! terminal output and for the TXT file export.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::hierarchy::{Hierarchy, HierarchyNode};

const RULE_WIDTH: usize = 60;

/// Render the full report: header block plus the indented tree.
pub fn render_report(hierarchy: &Hierarchy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SUBSIDIARY HIERARCHY FOR: {}", hierarchy.company);
    let _ = writeln!(
        out,
        "Total companies found: {}",
        hierarchy.total_companies_found
    );
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    render_level(&hierarchy.subsidiaries, 0, &mut out);
    out
}

/// Render just the tree, without the header block.
pub fn render_tree(hierarchy: &Hierarchy) -> String {
    let mut out = String::new();
    render_level(&hierarchy.subsidiaries, 0, &mut out);
    out
}

fn render_level(level: &BTreeMap<String, HierarchyNode>, indent: usize, out: &mut String) {
    let prefix = "  ".repeat(indent);
    for (company, node) in level {
        let _ = writeln!(out, "{prefix}├── {company}");
        if !node.subsidiaries.is_empty() {
            render_level(&node.subsidiaries, indent + 1, out);
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_hierarchy() -> Hierarchy {
        let mut inner = BTreeMap::new();
        inner.insert("B Corp".to_string(), HierarchyNode::leaf());
        let mut subsidiaries = BTreeMap::new();
        subsidiaries.insert("A Corp".to_string(), HierarchyNode::with_subsidiaries(inner));
        subsidiaries.insert("C Corp".to_string(), HierarchyNode::leaf());
        Hierarchy::assemble("RootCo".to_string(), subsidiaries)
    }

    #[test]
    fn report_header_carries_name_and_total() {
        let report = render_report(&sample_hierarchy());
        assert!(report.starts_with("SUBSIDIARY HIERARCHY FOR: RootCo\n"));
        assert!(report.contains("Total companies found: 3\n"));
        assert!(report.contains(&"=".repeat(60)));
    }

    #[test]
    fn tree_indents_two_spaces_per_depth() {
        let tree = render_tree(&sample_hierarchy());
        let lines: Vec<&str> = tree.lines().collect();
        assert_eq!(lines, vec!["├── A Corp", "  ├── B Corp", "├── C Corp"]);
    }

    #[test]
    fn empty_hierarchy_renders_header_only() {
        let hierarchy = Hierarchy::assemble("RootCo".to_string(), BTreeMap::new());
        let report = render_report(&hierarchy);
        assert!(report.contains("Total companies found: 0\n"));
        assert!(report.ends_with(&format!("{}\n", "=".repeat(60))));
    }
}
