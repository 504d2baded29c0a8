use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::model::ResolveError;

/// Analysis type of a pre-rendered heatmap. Each kind owns one fixed
/// file suffix under the results tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ExperimentKind {
    #[serde(rename = "correlation")]
    Correlation,
    #[serde(rename = "coverage-correction")]
    CoverageCorrection,
    #[serde(rename = "observed")]
    Observed,
    #[serde(rename = "expected")]
    Expected,
    #[serde(rename = "observed.vs.expected")]
    ObservedVsExpected,
}

const ALL_KINDS: &[ExperimentKind] = &[
    ExperimentKind::Correlation,
    ExperimentKind::CoverageCorrection,
    ExperimentKind::Observed,
    ExperimentKind::Expected,
    ExperimentKind::ObservedVsExpected,
];

impl ExperimentKind {
    pub fn all() -> &'static [ExperimentKind] {
        ALL_KINDS
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperimentKind::Correlation => "correlation",
            ExperimentKind::CoverageCorrection => "coverage-correction",
            ExperimentKind::Observed => "observed",
            ExperimentKind::Expected => "expected",
            ExperimentKind::ObservedVsExpected => "observed.vs.expected",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            ExperimentKind::Correlation => "heatmap.correlation.png",
            ExperimentKind::CoverageCorrection => "heatmap.cvg.png",
            ExperimentKind::Observed => "heatmap.observed.png",
            ExperimentKind::Expected => "heatmap.expected.png",
            ExperimentKind::ObservedVsExpected => "heatmap.intra-interaction.png",
        }
    }

    /// Kinds only rendered for a chromosome against itself.
    pub fn is_intra_only(self) -> bool {
        matches!(
            self,
            ExperimentKind::Expected | ExperimentKind::ObservedVsExpected
        )
    }
}

impl FromStr for ExperimentKind {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ResolveError::UnknownExperimentKind(s.to_string()))
    }
}

impl fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
