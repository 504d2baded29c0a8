pub mod expansion;
pub mod menu;

use tracing::debug;

use crate::model::{ChromosomeUniverse, PanelDescriptor, ResolveError, Selection};

pub use expansion::{Expansion, PanelLayout};
pub use menu::available_kinds;

/// Resolves a selection into the ordered list of panels to display.
///
/// Wildcard sides iterate the universe in its own order; for the full grid
/// chrom A is the outer loop. Intra-only kinds keep just the self-pairs of
/// the full grid. Panels are produced for names as given, without checking
/// them against the universe.
pub fn resolve(
    selection: &Selection,
    universe: &ChromosomeUniverse,
) -> Result<Vec<PanelDescriptor>, ResolveError> {
    let kind = selection.validate()?;
    let expansion = Expansion::classify(selection.chrom1_selector(), selection.chrom2_selector());
    let sample = selection.sample_id.as_str();
    let set = selection.set_id.as_str();

    let panels = match expansion {
        Expansion::Single => vec![PanelDescriptor::new(
            kind,
            &selection.chrom1,
            &selection.chrom2,
            sample,
            set,
        )],
        Expansion::FullGrid if kind.is_intra_only() => universe
            .iter()
            .map(|c| PanelDescriptor::new(kind, c, c, sample, set))
            .collect(),
        Expansion::FullGrid => {
            let mut out = Vec::with_capacity(universe.len().saturating_mul(universe.len()));
            for a in universe.iter() {
                for b in universe.iter() {
                    out.push(PanelDescriptor::new(kind, a, b, sample, set));
                }
            }
            out
        }
        Expansion::Chrom1Wildcard => universe
            .iter()
            .map(|a| PanelDescriptor::new(kind, a, &selection.chrom2, sample, set))
            .collect(),
        Expansion::Chrom2Wildcard => universe
            .iter()
            .map(|b| PanelDescriptor::new(kind, &selection.chrom1, b, sample, set))
            .collect(),
    };

    debug!(
        kind = %kind,
        expansion = expansion.as_str(),
        universe = universe.len(),
        panels = panels.len(),
        "resolved selection"
    );
    Ok(panels)
}

#[cfg(test)]
#[path = "../../tests/src_inline/resolve/tests.rs"]
mod tests;
