use serde::Serialize;

use crate::model::ResolveError;
use crate::model::chrom::ChromSelector;
use crate::model::experiment::ExperimentKind;

pub const SET_PREFIX: &str = "bin.";

/// The user's current choice, passed in as primitive strings by the view
/// layer. `sample_id` may be empty; every other field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub experiment_kind: String,
    pub chrom1: String,
    pub chrom2: String,
    pub sample_id: String,
    pub set_id: String,
}

impl Selection {
    pub fn new(
        experiment_kind: impl Into<String>,
        chrom1: impl Into<String>,
        chrom2: impl Into<String>,
        sample_id: impl Into<String>,
        set_id: impl Into<String>,
    ) -> Self {
        Self {
            experiment_kind: experiment_kind.into(),
            chrom1: chrom1.into(),
            chrom2: chrom2.into(),
            sample_id: sample_id.into(),
            set_id: set_id.into(),
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.experiment_kind.is_empty() {
            missing.push("experiment kind");
        }
        if self.chrom1.is_empty() {
            missing.push("chrom1");
        }
        if self.chrom2.is_empty() {
            missing.push("chrom2");
        }
        if self.set_id.is_empty() {
            missing.push("set");
        }
        missing
    }

    /// Checks required fields, then the experiment kind.
    pub fn validate(&self) -> Result<ExperimentKind, ResolveError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ResolveError::InvalidSelection(missing.join(", ")));
        }
        self.experiment_kind.parse()
    }

    pub fn chrom1_selector(&self) -> ChromSelector<'_> {
        ChromSelector::parse(&self.chrom1)
    }

    pub fn chrom2_selector(&self) -> ChromSelector<'_> {
        ChromSelector::parse(&self.chrom2)
    }
}

/// Naming token of a set inside image file names: the set id without its
/// leading `bin.`.
pub fn middle_token(set_id: &str) -> &str {
    set_id.strip_prefix(SET_PREFIX).unwrap_or(set_id)
}
