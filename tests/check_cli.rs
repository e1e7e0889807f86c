//! Integration tests for `kitrubric check`

mod common;

use common::{kitrubric, write_doc};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_check_valid_rubric() {
    kitrubric()
        .arg("check")
        .write_stdin(r#"[{"label": "A", "weight": 0.5}, {"label": "B", "weight": 0.3}, {"label": "C", "weight": 0.2}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 3 criteria, weights sum to 1.00"));
}

#[test]
fn test_check_yaml_rubric_file() {
    let dir = tempdir().unwrap();
    let doc = write_doc(
        dir.path(),
        "rubric.yaml",
        "criteria:\n  - label: Ownership\n    weight: 0.7\n  - label: Curiosity\n    weight: 0.3\n",
    );

    kitrubric().arg("check").arg(&doc).assert().success();
}

#[test]
fn test_check_bad_sum_fails_with_data_code() {
    kitrubric()
        .arg("check")
        .write_stdin(r#"[{"label": "A", "weight": 0.5}, {"label": "B", "weight": 0.4}]"#)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("weights sum to 0.900"));
}

#[test]
fn test_check_missing_weight_fails() {
    kitrubric()
        .arg("check")
        .write_stdin(r#"[{"label": "A", "weight": 1.0}, {"label": "B"}]"#)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("weight for 'B' is missing"));
}

#[test]
fn test_check_normalized_output_passes() {
    let output = kitrubric()
        .args(["--format", "json", "normalize"])
        .write_stdin(r#"[{"label": "A", "weight": 0.336}, {"label": "B", "weight": 0.336}, {"label": "C", "weight": 0.326}, {"label": "D", "weight": 0.002}]"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    kitrubric()
        .args(["--format", "json", "check"])
        .write_stdin(output.stdout)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"));
}

#[test]
fn test_check_quiet_prints_nothing() {
    kitrubric()
        .args(["--quiet", "check"])
        .write_stdin(r#"[{"label": "A", "weight": 1.0}]"#)
        .assert()
        .success()
        .stdout("");
}
