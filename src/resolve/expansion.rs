use serde::Serialize;

use crate::model::ChromSelector;

/// Which side(s) of the chromosome pair expand over the universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expansion {
    Single,
    FullGrid,
    Chrom1Wildcard,
    Chrom2Wildcard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelLayout {
    Regular,
    Compact,
}

impl Expansion {
    /// Both-wildcard is tested before the single-wildcard cases so a pair of
    /// `all` never expands twice.
    pub fn classify(chrom1: ChromSelector<'_>, chrom2: ChromSelector<'_>) -> Self {
        match (chrom1.is_all(), chrom2.is_all()) {
            (true, true) => Expansion::FullGrid,
            (true, false) => Expansion::Chrom1Wildcard,
            (false, true) => Expansion::Chrom2Wildcard,
            (false, false) => Expansion::Single,
        }
    }

    pub fn is_full_grid(self) -> bool {
        self == Expansion::FullGrid
    }

    pub fn layout(self) -> PanelLayout {
        match self {
            Expansion::FullGrid => PanelLayout::Compact,
            _ => PanelLayout::Regular,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Expansion::Single => "single",
            Expansion::FullGrid => "full_grid",
            Expansion::Chrom1Wildcard => "chrom1_wildcard",
            Expansion::Chrom2Wildcard => "chrom2_wildcard",
        }
    }
}
