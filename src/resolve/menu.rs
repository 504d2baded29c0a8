use crate::model::{ChromSelector, ExperimentKind};

/// Experiment kinds offered for a chromosome pair before the user picks one.
///
/// Nothing is offered until both chromosomes are chosen. Distinct concrete
/// chromosomes (or one wildcard against a concrete name) hide the
/// intra-only kinds; identical chromosomes and the full grid offer all.
pub fn available_kinds(chrom1: &str, chrom2: &str) -> Vec<ExperimentKind> {
    if chrom1.is_empty() || chrom2.is_empty() {
        return Vec::new();
    }
    let c1 = ChromSelector::parse(chrom1);
    let c2 = ChromSelector::parse(chrom2);
    let same = c1 == c2;

    ExperimentKind::all()
        .iter()
        .copied()
        .filter(|kind| same || !kind.is_intra_only())
        .collect()
}
