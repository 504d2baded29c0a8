use std::fs::{self, File};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;
use serde_json::json;

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_hicpanels_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_chromosomes_from_array() {
    let dir = make_temp_dir();
    let path = dir.join(CHROM_FILE);
    fs::write(&path, r#"["chr1", "chr2", "chrX"]"#).unwrap();

    let universe = load_chromosomes(&path).unwrap();
    assert_eq!(universe.names(), &["chr1", "chr2", "chrX"]);
}

#[test]
fn test_chromosomes_from_object_keep_document_order() {
    let value: serde_json::Value =
        serde_json::from_str(r#"{"b": "chr10", "a": "chr2", "c": "chr1"}"#).unwrap();
    let universe = parse_chromosomes(&value).unwrap();
    assert_eq!(universe.names(), &["chr10", "chr2", "chr1"]);
}

#[test]
fn test_chromosomes_duplicates_and_bad_entries() {
    let dup = parse_chromosomes(&json!(["chr1", "chr2", "chr1"])).unwrap();
    assert_eq!(dup.names(), &["chr1", "chr2"]);

    assert!(matches!(
        parse_chromosomes(&json!(["chr1", ""])),
        Err(CatalogError::InvalidInput(_))
    ));
    assert!(matches!(
        parse_chromosomes(&json!(["chr1", 2])),
        Err(CatalogError::InvalidInput(_))
    ));
    assert!(matches!(
        parse_chromosomes(&json!("chr1")),
        Err(CatalogError::InvalidInput(_))
    ));
}

#[test]
fn test_chromosomes_gzipped() {
    let dir = make_temp_dir();
    let path = dir.join("chrom.json.gz");
    write_gz(&path, r#"["chr3", "chr4"]"#);

    let universe = load_chromosomes(&path).unwrap();
    assert_eq!(universe.names(), &["chr3", "chr4"]);
}

#[test]
fn test_malformed_json_reports_path() {
    let dir = make_temp_dir();
    let path = dir.join(CHROM_FILE);
    fs::write(&path, "[\"chr1\",").unwrap();

    let err = load_chromosomes(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Json { .. }));
    assert!(err.to_string().contains(CHROM_FILE));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = make_temp_dir();
    let err = load_samples(&dir.join(SAMPLES_FILE)).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn test_samples_sets_lookup() {
    let dir = make_temp_dir();
    let path = dir.join(SAMPLES_FILE);
    fs::write(
        &path,
        r#"[
            {"id": "S1", "value": ["bin.100000", "bin.500000"]},
            {"id": "S2", "value": ["bin.1000000"]}
        ]"#,
    )
    .unwrap();

    let catalog = load_samples(&path).unwrap();
    assert_eq!(catalog.sample_ids().collect::<Vec<_>>(), vec!["S1", "S2"]);
    assert_eq!(catalog.sets_for("S1"), &["bin.100000", "bin.500000"]);
    assert!(catalog.sets_for("S3").is_empty());
    assert!(catalog.contains_set("S2", "bin.1000000"));
    assert!(!catalog.contains_set("S2", "bin.100000"));
}

#[test]
fn test_samples_validation() {
    let dup = parse_samples(json!([
        {"id": "S1", "value": ["bin.1"]},
        {"id": "S1", "value": ["bin.2"]}
    ]))
    .unwrap();
    assert_eq!(dup.entries().len(), 1);
    assert_eq!(dup.sets_for("S1"), &["bin.1"]);

    let no_sets = parse_samples(json!([{"id": "S9"}])).unwrap();
    assert!(no_sets.sets_for("S9").is_empty());

    assert!(matches!(
        parse_samples(json!([{"id": " ", "value": []}])),
        Err(CatalogError::InvalidInput(_))
    ));
    assert!(matches!(
        parse_samples(json!([{"id": "S1", "value": [""]}])),
        Err(CatalogError::InvalidInput(_))
    ));
    assert!(matches!(
        parse_samples(json!({"id": "S1"})),
        Err(CatalogError::InvalidInput(_))
    ));
}

#[test]
fn test_catalog_paths_overrides() {
    let conf = Path::new("/srv/hic/conf");
    let defaults = CatalogPaths::in_dir(conf);
    assert_eq!(defaults.chrom_json, conf.join("chrom.json"));
    assert_eq!(defaults.samples_json, conf.join("samples.json"));

    let custom = CatalogPaths::with_overrides(conf, Some(PathBuf::from("/tmp/c.json.gz")), None);
    assert_eq!(custom.chrom_json, PathBuf::from("/tmp/c.json.gz"));
    assert_eq!(custom.samples_json, conf.join("samples.json"));
}

#[test]
fn test_chromosomes_reserved_wildcard_rejected() {
    let err = parse_chromosomes(&json!(["chr1", "all", "chr2"])).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput(_)));
    assert!(err.to_string().contains("\"all\""));
}

#[test]
fn test_chromosome_names_taken_verbatim() {
    let universe = parse_chromosomes(&json!(["chr1", " chr2", "chr1 "])).unwrap();
    assert_eq!(universe.names(), &["chr1", " chr2", "chr1 "]);
}
