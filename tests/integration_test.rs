//! Integration tests for yamltidy
//!
//! These tests verify that discovery, normalization and the per-file
//! rewrite cycle work together correctly over a real directory tree.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use yamltidy::process::fix_file;
use yamltidy::{discover_files, normalize_content, Config};

/// Run the driver loop the way main does: fix every discovered file,
/// collecting per-file outcomes instead of aborting on the first error.
fn fix_tree(root: &Path, config: &Config) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut fixed = Vec::new();
    let mut failed = Vec::new();
    for path in discover_files(root, &[], &[]) {
        match fix_file(&path, config, false) {
            Ok(_) => fixed.push(path),
            Err(_) => failed.push(path),
        }
    }
    (fixed, failed)
}

#[test]
fn test_fixes_whole_tree_in_place() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("apps/web")).unwrap();
    fs::write(dir.path().join("top.yaml"), "key: value").unwrap();
    fs::write(
        dir.path().join("apps/svc.yml"),
        "# service\nname: svc   \n",
    )
    .unwrap();
    fs::write(
        dir.path().join("apps/web/deploy.yaml"),
        "---\nreplicas: 3\t\n",
    )
    .unwrap();
    fs::write(dir.path().join("apps/notes.txt"), "not yaml  ").unwrap();

    let (fixed, failed) = fix_tree(dir.path(), &Config::default());
    assert_eq!(fixed.len(), 3);
    assert!(failed.is_empty());

    assert_eq!(
        fs::read_to_string(dir.path().join("top.yaml")).unwrap(),
        "---\nkey: value\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("apps/svc.yml")).unwrap(),
        "# service\n---\nname: svc\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("apps/web/deploy.yaml")).unwrap(),
        "---\nreplicas: 3\n"
    );
    // Non-YAML files are never touched
    assert_eq!(
        fs::read_to_string(dir.path().join("apps/notes.txt")).unwrap(),
        "not yaml  "
    );
}

#[test]
fn test_second_run_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.yaml"), "# header\nkey: value  ").unwrap();
    fs::write(dir.path().join("b.yml"), "list:\n  - one\n  - two\n\n\n").unwrap();

    let config = Config::default();
    fix_tree(dir.path(), &config);

    let after_first: Vec<String> = ["a.yaml", "b.yml"]
        .iter()
        .map(|name| fs::read_to_string(dir.path().join(name)).unwrap())
        .collect();

    for path in discover_files(dir.path(), &[], &[]) {
        let changed = fix_file(&path, &config, false).unwrap();
        assert!(!changed, "second run modified {}", path.display());
    }

    let after_second: Vec<String> = ["a.yaml", "b.yml"]
        .iter()
        .map(|name| fs::read_to_string(dir.path().join(name)).unwrap())
        .collect();
    assert_eq!(after_first, after_second);
}

#[test]
fn test_one_bad_file_does_not_abort_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.yaml");
    fs::write(&good, "key: value").unwrap();
    // Undecodable bytes make the read step fail for this file only
    fs::write(dir.path().join("bad.yaml"), [0xff, 0xfe]).unwrap();

    let (fixed, failed) = fix_tree(dir.path(), &Config::default());

    assert_eq!(fixed, vec![good.clone()]);
    assert_eq!(failed.len(), 1);
    assert!(failed[0].ends_with("bad.yaml"));

    // The well-formed file was still corrected
    assert_eq!(fs::read_to_string(&good).unwrap(), "---\nkey: value\n");
    // The failed file kept its original bytes, no partial write
    assert_eq!(fs::read(dir.path().join("bad.yaml")).unwrap(), vec![0xff, 0xfe]);
}

#[test]
fn test_invalid_utf8_is_a_per_file_failure() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("good.yaml"), "key: value\n").unwrap();
    fs::write(dir.path().join("binary.yaml"), [0xc0, 0xaf, 0x00]).unwrap();

    let (fixed, failed) = fix_tree(dir.path(), &Config::default());
    assert_eq!(fixed.len(), 1);
    assert_eq!(failed.len(), 1);
    assert!(failed[0].ends_with("binary.yaml"));
    // Undecodable bytes are left exactly as they were
    assert_eq!(
        fs::read(dir.path().join("binary.yaml")).unwrap(),
        vec![0xc0, 0xaf, 0x00]
    );
}

#[test]
fn test_missing_root_is_nothing_to_do() {
    let files = discover_files(Path::new("/nonexistent/gitops"), &[], &[]);
    assert!(files.is_empty());
}

#[test]
fn test_exclude_pattern_skips_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("charts")).unwrap();
    fs::write(dir.path().join("app.yaml"), "a: 1").unwrap();
    fs::write(dir.path().join("charts/dep.yaml"), "b: 2").unwrap();

    let exclude = vec![Pattern::new("charts").unwrap()];
    let files = discover_files(dir.path(), &[], &exclude);
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("app.yaml"));
}

#[test]
fn test_dry_run_reports_without_rewriting() {
    let dir = tempfile::tempdir().unwrap();
    let needs_fix = dir.path().join("dirty.yaml");
    let already_fixed = dir.path().join("clean.yaml");
    fs::write(&needs_fix, "key: value  ").unwrap();
    fs::write(&already_fixed, "---\nkey: value\n").unwrap();

    let config = Config::default();
    assert!(fix_file(&needs_fix, &config, true).unwrap());
    assert!(!fix_file(&already_fixed, &config, true).unwrap());

    assert_eq!(fs::read_to_string(&needs_fix).unwrap(), "key: value  ");
    assert_eq!(
        fs::read_to_string(&already_fixed).unwrap(),
        "---\nkey: value\n"
    );
}

#[test]
fn test_normalizer_properties_over_sample_corpus() {
    let config = Config::default();
    let samples = [
        "apiVersion: v1\nkind: Namespace\nmetadata:\n  name: dev   \n",
        "# Flux kustomization\n# generated, do not edit\napiVersion: kustomize.toolkit.fluxcd.io/v1\n",
        "---\n# already marked\nspec: {}\n",
        "",
        "just-a-scalar",
    ];
    for sample in samples {
        let once = normalize_content(sample, &config);
        assert!(once.ends_with('\n'));
        assert_eq!(normalize_content(&once, &config), once);
        // A marker line appears at or before the first non-comment, non-empty line
        let first_content = once
            .split('\n')
            .position(|l| !l.starts_with('#') && !l.trim().is_empty())
            .unwrap();
        assert!(once
            .split('\n')
            .take(first_content + 1)
            .any(|l| l.starts_with("---")));
    }
}
