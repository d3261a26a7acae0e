//! End-to-end conversion: OBO text → term / term2term / graph_path files.

use std::fs;

use obo_graph_path::{convert_file, convert_str, ConversionConfig, Error, OutputLayout, TermId};
use pretty_assertions::assert_eq;

const BRAIN_OBO: &str = "\
format-version: 1.2
ontology: brain

[Term]
id: Allen:4005
name: Br_Brain
namespace: Brain

[Term]
id: Allen:4006
name: GM_Grey Matter
namespace: Brain
relationship: part_of Allen:4005 ! Br_Brain

[Term]
id: Allen:4007
name: Tel_Telencephalon
namespace: Brain
relationship: part_of Allen:4006 ! GM_Grey Matter

[Typedef]
id: part_of
name: part_of
";

fn brain_config() -> ConversionConfig {
    ConversionConfig::default().with_root_nodes(["Br_Brain"])
}

/// Write `text` to a temp file and convert it into a fresh output dir.
fn run(text: &str, config: &ConversionConfig) -> (tempfile::TempDir, obo_graph_path::Result<obo_graph_path::ConversionStats>) {
    let dir = tempfile::tempdir().unwrap();
    let obo = dir.path().join("input.obo");
    fs::write(&obo, text).unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    let result = convert_file(&obo, &out, config);
    (dir, result)
}

#[test]
fn test_writes_all_three_tables() {
    let (dir, result) = run(BRAIN_OBO, &brain_config());
    let stats = result.unwrap();
    let out = dir.path().join("out");

    assert_eq!(stats.terms, 5);
    assert_eq!(stats.roots, 1);
    assert_eq!(stats.relations, 2);
    assert_eq!(stats.graph_paths, 6);

    assert_eq!(
        fs::read_to_string(out.join("term.txt")).unwrap(),
        "1\tis_a\trelationship\tis_a\t0\t0\t1\n\
         2\tBr_Brain\tBrain\tAllen:4005\t0\t1\t0\n\
         3\tGM_Grey Matter\tBrain\tAllen:4006\t0\t0\t0\n\
         4\tTel_Telencephalon\tBrain\tAllen:4007\t0\t0\t0\n\
         5\tpart_of\tBr_Brain\tpart_of\t0\t0\t1\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("term2term.txt")).unwrap(),
        "1\t5\t2\t3\t0\n2\t5\t3\t4\t0\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("graph_path.txt")).unwrap(),
        "1\t2\t2\t1\t0\t0\n\
         2\t2\t3\t1\t1\t1\n\
         3\t2\t4\t1\t2\t2\n\
         4\t3\t3\t1\t0\t0\n\
         5\t3\t4\t1\t1\t1\n\
         6\t4\t4\t1\t0\t0\n"
    );
}

#[test]
fn test_missing_roots_write_nothing() {
    let config = ConversionConfig::default();
    let (dir, result) = run(BRAIN_OBO, &config);

    let err = result.unwrap_err();
    assert!(matches!(err, Error::NoRootNodes { .. }));
    assert!(err.to_string().contains("molecular_function, biological_process, cellular_component"));
    assert_eq!(fs::read_dir(dir.path().join("out")).unwrap().count(), 0);
}

#[test]
fn test_cyclic_ontology_writes_nothing() {
    let text = "\
[Term]
id: X:1
name: root

[Term]
id: X:2
name: a
is_a: X:1
is_a: X:3

[Term]
id: X:3
name: b
is_a: X:2
";
    let config = ConversionConfig::default().with_root_nodes(["root"]);
    let (dir, result) = run(text, &config);

    assert!(matches!(result, Err(Error::CycleDetected { .. })));
    assert_eq!(fs::read_dir(dir.path().join("out")).unwrap().count(), 0);
}

#[test]
fn test_custom_output_layout() {
    let config = ConversionConfig {
        output: OutputLayout {
            term_file: "brain_term.tsv".into(),
            term2term_file: "brain_term2term.tsv".into(),
            graph_path_file: "brain_graph_path.tsv".into(),
        },
        ..brain_config()
    };
    let (dir, result) = run(BRAIN_OBO, &config);
    result.unwrap();

    let out = dir.path().join("out");
    for name in ["brain_term.tsv", "brain_term2term.tsv", "brain_graph_path.tsv"] {
        assert!(out.join(name).is_file(), "missing {name}");
    }
    assert!(!out.join("term.txt").exists());
}

#[test]
fn test_unwritable_last_table_leaves_no_files() {
    let config = ConversionConfig {
        output: OutputLayout {
            graph_path_file: "missing/graph_path.txt".into(),
            ..OutputLayout::default()
        },
        ..brain_config()
    };
    let (dir, result) = run(BRAIN_OBO, &config);

    assert!(matches!(result, Err(Error::Io(_))));
    let left: Vec<_> = fs::read_dir(dir.path().join("out")).unwrap().collect();
    assert!(left.is_empty(), "tables left behind: {left:?}");
}

#[test]
fn test_failed_rename_removes_published_tables() {
    // The graph_path destination is an existing directory, so the last
    // rename fails after term.txt and term2term.txt are already in place.
    let dir = tempfile::tempdir().unwrap();
    let obo = dir.path().join("input.obo");
    fs::write(&obo, BRAIN_OBO).unwrap();
    let out = dir.path().join("out");
    fs::create_dir_all(out.join("taken")).unwrap();

    let config = ConversionConfig {
        output: OutputLayout {
            graph_path_file: "taken".into(),
            ..OutputLayout::default()
        },
        ..brain_config()
    };
    let result = convert_file(&obo, &out, &config);

    assert!(matches!(result, Err(Error::Io(_))));
    let mut left: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    left.sort();
    assert_eq!(left, vec!["taken".to_string()]);
}

#[test]
fn test_missing_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let obo = dir.path().join("input.obo");
    fs::write(&obo, BRAIN_OBO).unwrap();

    let err = convert_file(&obo, &dir.path().join("nope"), &brain_config()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = convert_file(&dir.path().join("absent.obo"), dir.path(), &brain_config()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_closure_over_mixed_relation_types() {
    // is_a and part_of edges between the same pair both feed the closure,
    // yielding one row per distinct distance.
    let text = "\
[Term]
id: X:1
name: root

[Term]
id: X:2
name: mid
is_a: X:1

[Term]
id: X:3
name: leaf
is_a: X:2
relationship: part_of X:1

[Typedef]
id: part_of
name: part_of
";
    let config = ConversionConfig::default().with_root_nodes(["root"]);
    let tables = convert_str(text, &config).unwrap();

    let root = tables.ontology.resolve("X:1").unwrap();
    let leaf = tables.ontology.resolve("X:3").unwrap();
    let distances: Vec<usize> = tables
        .closure
        .iter()
        .filter(|t| t.ancestor == root && t.descendant == leaf)
        .map(|t| t.distance)
        .collect();
    assert_eq!(distances, vec![1, 2]);
    assert_eq!(tables.ontology.root_ids, vec![TermId(2)]);
}

#[test]
fn test_limits_from_config() {
    let config = ConversionConfig::from_json_str(
        r#"{"root_nodes": ["Br_Brain"], "limits": {"max_depth": 1}}"#,
    ).unwrap();
    assert!(matches!(convert_str(BRAIN_OBO, &config), Err(Error::LimitExceeded(_))));
}
