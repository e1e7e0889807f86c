//! Reading rubric documents and score files

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use kitrubric_core::error::{KitError, Result};
use kitrubric_core::kit::{parse_document, InterviewKit};

/// Read a document from `path`, or stdin when `path` is absent or `-`
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p)
            .map_err(|e| KitError::io_operation("read", p.display(), e)),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Read and decode a rubric or kit document
pub fn read_kit(path: Option<&Path>) -> Result<InterviewKit> {
    let text = read_text(path)?;
    debug!(bytes = text.len(), "read_document");
    parse_document(&text)
}

/// Read per-criterion scores.
///
/// Accepts `{"label": score, ...}` or a judge response carrying a `scores`
/// object of that shape.
pub fn read_scores(path: &Path) -> Result<HashMap<String, f64>> {
    let text =
        fs::read_to_string(path).map_err(|e| KitError::io_operation("read", path.display(), e))?;
    parse_scores(&text)
}

fn parse_scores(text: &str) -> Result<HashMap<String, f64>> {
    let value: Value = serde_json::from_str(text)?;
    let mut map = match value {
        Value::Object(map) => map,
        other => {
            return Err(KitError::invalid_value(
                "scores",
                format!("expected an object, got {}", other),
            ))
        }
    };
    if matches!(map.get("scores"), Some(Value::Object(_))) {
        if let Some(Value::Object(inner)) = map.remove("scores") {
            map = inner;
        }
    }

    map.into_iter()
        .map(|(label, v)| {
            v.as_f64()
                .map(|score| (label.clone(), score))
                .ok_or_else(|| KitError::invalid_value("score", format!("{label}: {v}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_scores() {
        let scores = parse_scores(r#"{"Depth": 0.8, "Clarity": 1}"#).unwrap();
        assert_eq!(scores["Depth"], 0.8);
        assert_eq!(scores["Clarity"], 1.0);
    }

    #[test]
    fn test_parse_judge_response_scores() {
        let scores = parse_scores(
            r#"{"scores": {"Depth": 0.5}, "weighted_score": 0.5, "confidence": 0.9}"#,
        )
        .unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores["Depth"], 0.5);
    }

    #[test]
    fn test_parse_scores_rejects_non_numbers() {
        let err = parse_scores(r#"{"Depth": "high"}"#).unwrap_err();
        assert!(matches!(err, KitError::InvalidValue { .. }));
        assert!(parse_scores("[0.5]").is_err());
    }
}
