use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use thiserror::Error;

pub mod chroms;
pub mod samples;

pub use chroms::{load_chromosomes, parse_chromosomes};
pub use samples::{SampleCatalog, SampleEntry, load_samples, parse_samples};

pub const CHROM_FILE: &str = "chrom.json";
pub const SAMPLES_FILE: &str = "samples.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Locations of the two catalog files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub chrom_json: PathBuf,
    pub samples_json: PathBuf,
}

impl CatalogPaths {
    pub fn in_dir(conf_dir: &Path) -> Self {
        Self {
            chrom_json: conf_dir.join(CHROM_FILE),
            samples_json: conf_dir.join(SAMPLES_FILE),
        }
    }

    pub fn with_overrides(
        conf_dir: &Path,
        chrom_json: Option<PathBuf>,
        samples_json: Option<PathBuf>,
    ) -> Self {
        let defaults = Self::in_dir(conf_dir);
        Self {
            chrom_json: chrom_json.unwrap_or(defaults.chrom_json),
            samples_json: samples_json.unwrap_or(defaults.samples_json),
        }
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, CatalogError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn read_json(path: &Path) -> Result<serde_json::Value, CatalogError> {
    let reader = open_maybe_gz(path)?;
    serde_json::from_reader(reader).map_err(|source| CatalogError::Json {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/tests.rs"]
mod tests;
