use std::path::Path;

use serde::Serialize;

use crate::model::{PanelDescriptor, Selection};
use crate::resolve::{Expansion, PanelLayout};

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct PanelEntry {
    pub title: String,
    pub subtitle: String,
    #[serde(flatten)]
    pub panel: PanelDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelReport {
    pub tool: String,
    pub version: String,
    pub selection: Selection,
    pub expansion: Expansion,
    pub layout: PanelLayout,
    pub n_panels: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_missing: Option<usize>,
    pub panels: Vec<PanelEntry>,
}

/// Wraps resolved panels with captions and, given `root`, whether each
/// image is present under it.
pub fn build_report(
    selection: &Selection,
    expansion: Expansion,
    panels: Vec<PanelDescriptor>,
    root: Option<&Path>,
) -> PanelReport {
    let entries: Vec<PanelEntry> = panels
        .into_iter()
        .map(|panel| PanelEntry {
            title: panel.title(),
            subtitle: panel.subtitle(),
            exists: root.map(|r| r.join(&panel.image_path).is_file()),
            panel,
        })
        .collect();

    let n_missing = root.map(|_| {
        entries
            .iter()
            .filter(|e| e.exists == Some(false))
            .count()
    });

    PanelReport {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        selection: selection.clone(),
        expansion,
        layout: expansion.layout(),
        n_panels: entries.len(),
        n_missing,
        panels: entries,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
