use crate::report::{PanelEntry, PanelReport};
use crate::resolve::PanelLayout;

pub fn render_report_text(report: &PanelReport) -> String {
    let mut out = String::new();

    out.push_str("Hi-C Heatmap Panels\n");
    out.push_str("===================\n\n");

    let sel = &report.selection;
    out.push_str(&format!("Experiment: {}\n", sel.experiment_kind));
    out.push_str(&format!("Chromosomes: {} x {}\n", sel.chrom1, sel.chrom2));
    out.push_str(&format!("Sample: {}\n", display_or_dash(&sel.sample_id)));
    out.push_str(&format!("Set: {}\n", sel.set_id));
    out.push_str(&format!(
        "Expansion: {} ({} layout)\n",
        report.expansion.as_str(),
        layout_label(report.layout)
    ));
    out.push_str(&format!("Panels: {}\n", report.n_panels));
    if let Some(missing) = report.n_missing {
        out.push_str(&format!("Missing images: {missing}\n"));
    }
    out.push('\n');

    for entry in &report.panels {
        push_entry(&mut out, entry);
    }

    out
}

fn push_entry(out: &mut String, entry: &PanelEntry) {
    out.push_str(&entry.title);
    out.push('\n');
    out.push_str(&format!("  {}\n", entry.subtitle));
    match entry.exists {
        Some(false) => out.push_str(&format!("  {} [missing]\n", entry.panel.image_path)),
        _ => out.push_str(&format!("  {}\n", entry.panel.image_path)),
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn layout_label(layout: PanelLayout) -> &'static str {
    match layout {
        PanelLayout::Regular => "regular",
        PanelLayout::Compact => "compact",
    }
}
