//! End-to-end driver tests: JSONL shape, id sequencing, append semantics.

use badcase_cli::{run, RunConfig};
use badcase_core::Domain;
use std::fs;

fn config(domain: Domain, dir: &std::path::Path, seed: u64) -> RunConfig {
    RunConfig {
        domain,
        count: 100,
        paragraphs: 5,
        out_dir: dir.to_path_buf(),
        seed: Some(seed),
    }
}

#[test]
fn hundred_table_records_parse_back_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = run(&config(Domain::Table, dir.path(), 7)).unwrap();
    assert_eq!(path.file_name().unwrap(), "badcase_table.jsonl");

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 100);

    for (i, line) in lines.iter().enumerate() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["id"].as_u64().unwrap(), i as u64 + 1);
        assert!(!object["content"].as_str().unwrap().is_empty());
    }
}

#[test]
fn rerunning_appends_instead_of_overwriting() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(Domain::Code, dir.path(), 8);
    run(&cfg).unwrap();
    let path = run(&cfg).unwrap();

    let contents = fs::read_to_string(path).unwrap();
    assert_eq!(contents.lines().count(), 200);
}

#[test]
fn each_domain_writes_its_own_file() {
    let dir = tempfile::tempdir().unwrap();
    for domain in Domain::ALL {
        let mut cfg = config(domain, dir.path(), 9);
        cfg.count = 3;
        let path = run(&cfg).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            format!("badcase_{domain}.jsonl")
        );
        assert!(path.exists());
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let mut cfg_a = config(Domain::Formula, dir_a.path(), 11);
    let mut cfg_b = config(Domain::Formula, dir_b.path(), 11);
    cfg_a.count = 10;
    cfg_b.count = 10;

    let a = fs::read_to_string(run(&cfg_a).unwrap()).unwrap();
    let b = fs::read_to_string(run(&cfg_b).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_output_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config(Domain::Code, &dir.path().join("does-not-exist"), 12);
    cfg.count = 1;
    let err = run(&cfg).unwrap_err();
    assert!(err.to_string().contains("failed to write"));
}
