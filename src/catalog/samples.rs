use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::{CatalogError, read_json};

/// One sample and the sets computed for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SampleEntry {
    pub id: String,
    #[serde(rename = "value", default)]
    pub sets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SampleCatalog {
    entries: Vec<SampleEntry>,
}

impl SampleCatalog {
    pub fn new(entries: Vec<SampleEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SampleEntry] {
        &self.entries
    }

    pub fn sample_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    /// Sets offered once `sample_id` is chosen; empty for an unknown sample.
    pub fn sets_for(&self, sample_id: &str) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.id == sample_id)
            .map(|e| e.sets.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_set(&self, sample_id: &str, set_id: &str) -> bool {
        self.sets_for(sample_id).iter().any(|s| s == set_id)
    }
}

pub fn load_samples(path: &Path) -> Result<SampleCatalog, CatalogError> {
    let value = read_json(path)?;
    let catalog = parse_samples(value)?;
    debug!(
        path = %path.display(),
        samples = catalog.entries().len(),
        "loaded sample catalog"
    );
    Ok(catalog)
}

pub fn parse_samples(value: Value) -> Result<SampleCatalog, CatalogError> {
    let raw: Vec<SampleEntry> = serde_json::from_value(value).map_err(|e| {
        CatalogError::InvalidInput(format!("sample catalog must be a list of {{id, value}}: {e}"))
    })?;

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(raw.len());
    for (idx, entry) in raw.into_iter().enumerate() {
        if entry.id.trim().is_empty() {
            return Err(CatalogError::InvalidInput(format!(
                "sample entry {idx} has an empty id"
            )));
        }
        if entry.sets.iter().any(|s| s.trim().is_empty()) {
            return Err(CatalogError::InvalidInput(format!(
                "sample {} lists an empty set id",
                entry.id
            )));
        }
        if !seen.insert(entry.id.clone()) {
            warn!("duplicate sample {} in catalog; keeping first", entry.id);
            continue;
        }
        entries.push(entry);
    }

    Ok(SampleCatalog::new(entries))
}
