//! Integration tests for `kitrubric score`

mod common;

use common::{kitrubric, write_doc};
use predicates::prelude::*;
use tempfile::tempdir;

const RUBRIC: &str =
    r#"[{"label": "Depth", "weight": 3}, {"label": "Clarity", "weight": 1}]"#;

#[test]
fn test_score_human() {
    let dir = tempdir().unwrap();
    let scores = write_doc(
        dir.path(),
        "scores.json",
        r#"{"Depth": 0.8, "Clarity": 0.4}"#,
    );

    kitrubric()
        .arg("score")
        .arg("--scores")
        .arg(&scores)
        .write_stdin(RUBRIC)
        .assert()
        .success()
        .stdout(predicate::str::contains("Weighted score: 0.700"))
        .stdout(predicate::str::contains("Depth    0.75 x 0.80 = 0.600"));
}

#[test]
fn test_score_json_from_judge_response() {
    let dir = tempdir().unwrap();
    let rubric = write_doc(dir.path(), "rubric.json", RUBRIC);
    let scores = write_doc(
        dir.path(),
        "judge.json",
        r#"{"scores": {"Depth": 1.0, "Clarity": 0.0, "Extra": 0.5}, "weighted_score": 0.9, "confidence": 0.8}"#,
    );

    let output = kitrubric()
        .args(["--format", "json", "score"])
        .arg(&rubric)
        .arg("--scores")
        .arg(&scores)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 0.75);
    assert_eq!(json["unused"][0], "Extra");
    assert_eq!(json["breakdown"][1]["label"], "Clarity");
}

#[test]
fn test_score_missing_criterion_fails() {
    let dir = tempdir().unwrap();
    let scores = write_doc(dir.path(), "scores.json", r#"{"Depth": 0.8}"#);

    kitrubric()
        .arg("score")
        .arg("--scores")
        .arg(&scores)
        .write_stdin(RUBRIC)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no score given for criterion: Clarity"));
}
