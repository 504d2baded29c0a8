use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::{CatalogError, read_json};
use crate::model::{ALL_CHROMOSOMES, ChromosomeUniverse};

pub fn load_chromosomes(path: &Path) -> Result<ChromosomeUniverse, CatalogError> {
    let value = read_json(path)?;
    let universe = parse_chromosomes(&value)?;
    debug!(
        path = %path.display(),
        chromosomes = universe.len(),
        "loaded chromosome list"
    );
    Ok(universe)
}

/// Accepts an array of names or an object whose values are names; document
/// order is kept either way. Names are taken verbatim; repeated names keep
/// their first position and the wildcard `all` is refused.
pub fn parse_chromosomes(value: &Value) -> Result<ChromosomeUniverse, CatalogError> {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => {
            return Err(CatalogError::InvalidInput(
                "chromosome list must be a JSON array or object".to_string(),
            ));
        }
    };

    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        let name = match item {
            Value::String(s) => s.as_str(),
            other => {
                return Err(CatalogError::InvalidInput(format!(
                    "chromosome entry {idx} is not a string: {other}"
                )));
            }
        };
        if name.is_empty() {
            return Err(CatalogError::InvalidInput(format!(
                "chromosome entry {idx} is empty"
            )));
        }
        if name == ALL_CHROMOSOMES {
            return Err(CatalogError::InvalidInput(format!(
                "chromosome entry {idx} uses the reserved name {ALL_CHROMOSOMES:?}"
            )));
        }
        if !seen.insert(name.to_string()) {
            warn!("duplicate chromosome {name} in list; keeping first");
            continue;
        }
        names.push(name.to_string());
    }

    Ok(ChromosomeUniverse::new(names))
}
