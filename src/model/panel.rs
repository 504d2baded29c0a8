use serde::Serialize;

use crate::model::experiment::ExperimentKind;
use crate::model::selection::middle_token;

pub const RESULTS_DIR_PREFIX: &str = "results.";

/// One heatmap image to display for a chromosome pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelDescriptor {
    pub experiment_kind: ExperimentKind,
    pub chrom_a: String,
    pub chrom_b: String,
    pub sample_id: String,
    pub set_id: String,
    pub image_path: String,
}

impl PanelDescriptor {
    pub fn new(
        experiment_kind: ExperimentKind,
        chrom_a: &str,
        chrom_b: &str,
        sample_id: &str,
        set_id: &str,
    ) -> Self {
        Self {
            experiment_kind,
            chrom_a: chrom_a.to_string(),
            chrom_b: chrom_b.to_string(),
            sample_id: sample_id.to_string(),
            set_id: set_id.to_string(),
            image_path: image_path(experiment_kind, chrom_a, chrom_b, sample_id, set_id),
        }
    }

    pub fn title(&self) -> String {
        format!("{}-{} ({})", self.chrom_a, self.chrom_b, self.experiment_kind)
    }

    pub fn subtitle(&self) -> String {
        format!("{} - {}", self.sample_id, self.set_id)
    }
}

/// `results.<sample>/<set>/<kind>/<a>-<b>.<middle>.<suffix>`
pub fn image_path(
    kind: ExperimentKind,
    chrom_a: &str,
    chrom_b: &str,
    sample_id: &str,
    set_id: &str,
) -> String {
    format!(
        "{RESULTS_DIR_PREFIX}{sample_id}/{set_id}/{kind}/{chrom_a}-{chrom_b}.{}.{}",
        middle_token(set_id),
        kind.suffix()
    )
}
