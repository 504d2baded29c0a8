use super::*;

#[test]
fn test_parse_resolve_defaults() {
    let cli = Cli::try_parse_from([
        "kira-hicpanels",
        "resolve",
        "--kind",
        "observed",
        "--chrom1",
        "chr1",
        "--chrom2",
        "all",
        "--set",
        "bin.100000",
    ])
    .unwrap();
    assert_eq!(cli.conf_dir, PathBuf::from("conf"));
    assert!(!cli.verbose);
    let Command::Resolve(args) = cli.command else {
        panic!("expected resolve");
    };
    assert_eq!(args.format, ReportFormat::Text);
    assert_eq!(args.sample, "");
    assert!(args.root.is_none());
}

#[test]
fn test_parse_global_overrides_after_subcommand() {
    let cli = Cli::try_parse_from([
        "kira-hicpanels",
        "catalog",
        "--sample",
        "S1",
        "--conf-dir",
        "/srv/conf",
        "--samples-json",
        "/tmp/s.json",
        "-v",
    ])
    .unwrap();
    assert_eq!(cli.conf_dir, PathBuf::from("/srv/conf"));
    assert_eq!(cli.samples_json, Some(PathBuf::from("/tmp/s.json")));
    assert!(cli.verbose);
    assert!(matches!(cli.command, Command::Catalog { sample: Some(ref s) } if s == "S1"));
}

#[test]
fn test_parse_rejects_unknown_format() {
    let res = Cli::try_parse_from([
        "kira-hicpanels",
        "resolve",
        "--kind",
        "observed",
        "--chrom1",
        "chr1",
        "--chrom2",
        "chr2",
        "--set",
        "bin.1",
        "--format",
        "html",
    ]);
    assert!(res.is_err());
}

#[test]
fn test_selection_from_args_trims() {
    let args = ResolveArgs {
        kind: " expected ".to_string(),
        chrom1: "all ".to_string(),
        chrom2: " all".to_string(),
        sample: "".to_string(),
        set: "bin.100000\n".to_string(),
        format: ReportFormat::Json,
        root: None,
    };
    let sel = selection_from_args(&args);
    assert_eq!(sel, Selection::new("expected", "all", "all", "", "bin.100000"));
}

#[test]
fn test_resolve_requires_all_options() {
    let args = ResolveArgs {
        kind: "observed".to_string(),
        chrom1: "chr1".to_string(),
        chrom2: "chr2".to_string(),
        sample: "S1".to_string(),
        set: " ".to_string(),
        format: ReportFormat::Text,
        root: None,
    };
    let paths = CatalogPaths::in_dir(std::path::Path::new("/nonexistent"));
    assert_eq!(
        run_resolve(&args, &paths),
        Err("select all the options".to_string())
    );
}

#[test]
fn test_resolve_rejects_unknown_kind_before_loading_catalog() {
    let args = ResolveArgs {
        kind: "bogus".to_string(),
        chrom1: "all".to_string(),
        chrom2: "chr1".to_string(),
        sample: "".to_string(),
        set: "bin.1".to_string(),
        format: ReportFormat::Text,
        root: None,
    };
    let paths = CatalogPaths::in_dir(std::path::Path::new("/nonexistent"));
    assert_eq!(
        run_resolve(&args, &paths),
        Err("unknown experiment kind: \"bogus\"".to_string())
    );
}
