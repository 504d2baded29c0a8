use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info, warn};

use kira_hicpanels::catalog::{CatalogPaths, load_chromosomes, load_samples};
use kira_hicpanels::logging;
use kira_hicpanels::model::{ChromosomeUniverse, ResolveError, Selection};
use kira_hicpanels::report::json::render_report_json;
use kira_hicpanels::report::text::render_report_text;
use kira_hicpanels::report::build_report;
use kira_hicpanels::resolve::{Expansion, available_kinds, resolve};

/// Lists the pre-rendered Hi-C heatmaps matching a chromosome/sample/set selection
#[derive(Parser, Debug)]
#[command(name = "kira-hicpanels")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding chrom.json and samples.json
    #[arg(long, global = true, default_value = "conf")]
    conf_dir: PathBuf,

    /// Chromosome list (overrides <conf-dir>/chrom.json)
    #[arg(long, global = true)]
    chrom_json: Option<PathBuf>,

    /// Sample catalog (overrides <conf-dir>/samples.json)
    #[arg(long, global = true)]
    samples_json: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a selection into heatmap panels
    Resolve(ResolveArgs),
    /// Experiment kinds offered for a chromosome pair
    Menu {
        #[arg(long)]
        chrom1: String,
        #[arg(long)]
        chrom2: String,
    },
    /// List chromosomes and samples, or the sets of one sample
    Catalog {
        #[arg(long)]
        sample: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
struct ResolveArgs {
    /// Experiment kind (correlation, coverage-correction, observed, expected, observed.vs.expected)
    #[arg(long)]
    kind: String,

    /// First chromosome, or "all"
    #[arg(long)]
    chrom1: String,

    /// Second chromosome, or "all"
    #[arg(long)]
    chrom2: String,

    #[arg(long, default_value = "")]
    sample: String,

    #[arg(long)]
    set: String,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Check that every image exists under this directory
    #[arg(long)]
    root: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let paths = CatalogPaths::with_overrides(&cli.conf_dir, cli.chrom_json, cli.samples_json);
    match cli.command {
        Command::Resolve(args) => run_resolve(&args, &paths),
        Command::Menu { chrom1, chrom2 } => {
            let kinds = available_kinds(&chrom1, &chrom2);
            if kinds.is_empty() {
                return Err("select both chromosomes".to_string());
            }
            for kind in kinds {
                println!("{kind}");
            }
            Ok(())
        }
        Command::Catalog { sample } => run_catalog(sample.as_deref(), &paths),
    }
}

fn run_resolve(args: &ResolveArgs, paths: &CatalogPaths) -> Result<(), String> {
    let selection = selection_from_args(args);
    match selection.validate() {
        Ok(_) => {}
        Err(ResolveError::InvalidSelection(_)) => {
            return Err("select all the options".to_string());
        }
        Err(err) => return Err(err.to_string()),
    }

    let expansion = Expansion::classify(selection.chrom1_selector(), selection.chrom2_selector());
    let universe = if expansion == Expansion::Single {
        ChromosomeUniverse::default()
    } else {
        load_chromosomes(&paths.chrom_json).map_err(|e| e.to_string())?
    };

    if !selection.sample_id.is_empty() && paths.samples_json.is_file() {
        let catalog = load_samples(&paths.samples_json).map_err(|e| e.to_string())?;
        if !catalog.contains_set(&selection.sample_id, &selection.set_id) {
            warn!(
                "set {} is not listed for sample {}",
                selection.set_id, selection.sample_id
            );
        }
    }

    let panels = resolve(&selection, &universe).map_err(|e| e.to_string())?;
    if expansion.is_full_grid() {
        warn!(
            "selecting all chromosomes will take a while ({} panels)",
            panels.len()
        );
    }

    let report = build_report(&selection, expansion, panels, args.root.as_deref());
    if let Some(missing) = report.n_missing {
        if missing > 0 {
            warn!("{missing} of {} images are missing", report.n_panels);
        } else {
            debug!("all {} images present", report.n_panels);
        }
    }

    let rendered = match args.format {
        ReportFormat::Text => render_report_text(&report),
        ReportFormat::Json => render_report_json(&report).map_err(|e| e.to_string())?,
    };
    print!("{rendered}");
    info!("{} panels resolved", report.n_panels);
    Ok(())
}

fn run_catalog(sample: Option<&str>, paths: &CatalogPaths) -> Result<(), String> {
    let catalog = load_samples(&paths.samples_json).map_err(|e| e.to_string())?;
    match sample {
        Some(id) => {
            let sets = catalog.sets_for(id);
            if sets.is_empty() {
                return Err(format!("no sets listed for sample {id}"));
            }
            for set in sets {
                println!("{set}");
            }
        }
        None => {
            let universe = load_chromosomes(&paths.chrom_json).map_err(|e| e.to_string())?;
            println!("chromosomes: {}", universe.names().join(", "));
            for id in catalog.sample_ids() {
                println!("{id}: {}", catalog.sets_for(id).join(", "));
            }
        }
    }
    Ok(())
}

fn selection_from_args(args: &ResolveArgs) -> Selection {
    Selection::new(
        args.kind.trim(),
        args.chrom1.trim(),
        args.chrom2.trim(),
        args.sample.trim(),
        args.set.trim(),
    )
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
