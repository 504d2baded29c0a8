//! Resolves chromosome/sample/set selections into the pre-rendered Hi-C
//! heatmap images that match them.
//!
//! The core is [`resolve::resolve`]: a pure function from a [`Selection`]
//! and the known chromosome list to an ordered list of
//! [`PanelDescriptor`]s. Catalog loading and reporting are thin adapters
//! around it.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod report;
pub mod resolve;

pub use model::{
    ChromosomeUniverse, ExperimentKind, PanelDescriptor, ResolveError, Selection,
};
pub use resolve::{Expansion, available_kinds, resolve};
