//! Report file export.

use std::path::{Path, PathBuf};

use anyhow::Context;

use corpscan_core::Hierarchy;
use corpscan_core::render::render_report;

/// Default export path: `<company>_subsidiary_hierarchy.txt` in the current
/// directory.
pub fn default_report_path(company: &str) -> PathBuf {
    PathBuf::from(format!("{company}_subsidiary_hierarchy.txt"))
}

/// Write the text report for `hierarchy` to `path`.
pub fn save_report(hierarchy: &Hierarchy, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, render_report(hierarchy))
        .with_context(|| format!("failed to write report to {}", path.display()))
}

/// Write the hierarchy as pretty-printed JSON to `path`.
pub fn save_json(hierarchy: &Hierarchy, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(hierarchy).context("failed to serialize hierarchy")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write JSON to {}", path.display()))
}
