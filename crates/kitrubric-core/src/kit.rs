//! Interview-kit documents as they arrive from a model response
//!
//! Only the rubric is interpreted; competencies and questions are carried
//! through so callers can re-emit the kit after normalizing it.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::NormalizerConfig;
use crate::criterion::{Criterion, RawCriterion};
use crate::error::{KitError, Result};
use crate::normalize::normalize_with;

/// Keys under which a kit object may carry its rubric, in lookup order
pub const RUBRIC_KEYS: [&str; 3] = ["rubric", "scoringRubric", "criteria"];

static CODE_FENCE: OnceLock<Option<Regex>> = OnceLock::new();

fn code_fence() -> Option<&'static Regex> {
    CODE_FENCE
        .get_or_init(|| match Regex::new(r"(?s)```[A-Za-z0-9_-]*[ \t]*\r?\n(.*?)```") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile code fence regex");
                None
            }
        })
        .as_ref()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Competency {
    #[serde(default, alias = "title")]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, alias = "question")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competency: Option<String>,
}

/// A drafted or customized interview kit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterviewKit {
    pub title: Option<String>,
    pub competencies: Vec<Competency>,
    pub questions: Vec<Question>,
    pub rubric: Vec<RawCriterion>,
}

impl InterviewKit {
    /// A kit consisting of nothing but a rubric
    pub fn from_rubric(rubric: Vec<RawCriterion>) -> Self {
        Self {
            rubric,
            ..Default::default()
        }
    }

    /// The rubric with weights normalized
    pub fn normalized_rubric(&self, config: &NormalizerConfig) -> Vec<Criterion> {
        normalize_with(&self.rubric, config)
    }

    /// Kit as JSON with the rubric replaced by `rubric`
    pub fn to_json_with_rubric(&self, rubric: &[Criterion]) -> Value {
        let mut obj = serde_json::Map::new();
        if let Some(title) = &self.title {
            obj.insert("title".to_string(), Value::String(title.clone()));
        }
        obj.insert("competencies".to_string(), serde_json::json!(self.competencies));
        obj.insert("questions".to_string(), serde_json::json!(self.questions));
        obj.insert("rubric".to_string(), serde_json::json!(rubric));
        Value::Object(obj)
    }

    fn from_object(map: &serde_json::Map<String, Value>) -> Result<Self> {
        let rubric_value = RUBRIC_KEYS
            .iter()
            .find_map(|key| map.get(*key))
            .ok_or_else(|| {
                KitError::invalid_rubric(format!(
                    "document has no rubric (expected one of: {})",
                    RUBRIC_KEYS.join(", ")
                ))
            })?;

        let title = map.get("title").and_then(Value::as_str).map(str::to_string);
        let competencies = decode_list(map.get("competencies"))?;
        let questions = decode_list(map.get("questions"))?;

        Ok(Self {
            title,
            competencies,
            questions,
            rubric: decode_rubric(rubric_value)?,
        })
    }
}

fn decode_list<T: serde::de::DeserializeOwned>(value: Option<&Value>) -> Result<Vec<T>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(v) => Ok(serde_json::from_value(v.clone())?),
    }
}

fn decode_rubric(value: &Value) -> Result<Vec<RawCriterion>> {
    let entries = value
        .as_array()
        .ok_or_else(|| KitError::invalid_rubric("rubric must be a list of criteria"))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            RawCriterion::from_value(entry).ok_or_else(|| {
                KitError::invalid_rubric(format!("entry {} is not a criterion: {}", i + 1, entry))
            })
        })
        .collect()
}

/// Body of the first fenced code block, or the whole text if there is none
pub fn strip_code_fence(text: &str) -> &str {
    code_fence()
        .and_then(|re| re.captures(text))
        .and_then(|cap| cap.get(1))
        .map_or(text, |m| m.as_str())
}

/// Decode a rubric document.
///
/// Accepts a bare list of criteria or a kit object carrying one, as JSON or
/// YAML, optionally wrapped in a Markdown code fence.
pub fn parse_document(text: &str) -> Result<InterviewKit> {
    let body = strip_code_fence(text).trim();
    if body.is_empty() {
        return Err(KitError::invalid_rubric("document is empty"));
    }

    let value: Value = if body.starts_with('{') || body.starts_with('[') {
        serde_json::from_str(body)?
    } else {
        serde_yaml::from_str(body)?
    };

    let kit = match &value {
        Value::Array(_) => InterviewKit::from_rubric(decode_rubric(&value)?),
        Value::Object(map) => InterviewKit::from_object(map)?,
        other => {
            return Err(KitError::invalid_rubric(format!(
                "expected a list of criteria or a kit object, got {}",
                other
            )))
        }
    };

    debug!(criteria = kit.rubric.len(), "parse_document");
    Ok(kit)
}
