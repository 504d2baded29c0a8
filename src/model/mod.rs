pub mod chrom;
pub mod experiment;
pub mod panel;
pub mod selection;

use thiserror::Error;

pub use chrom::{ALL_CHROMOSOMES, ChromSelector, ChromosomeUniverse};
pub use experiment::ExperimentKind;
pub use panel::{PanelDescriptor, image_path};
pub use selection::{Selection, middle_token};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("invalid selection: missing {0}")]
    InvalidSelection(String),
    #[error("unknown experiment kind: {0:?}")]
    UnknownExperimentKind(String),
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
