//! Criterion records on both sides of the normalizer
//!
//! `RawCriterion` is what upstream hands us (model output or edited form
//! state) and may carry any weight at all. `Criterion` is what the normalizer
//! returns.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Keys accepted as the criterion label, in lookup order
pub const LABEL_KEYS: [&str; 4] = ["label", "name", "criterion", "title"];

/// A named scoring dimension with a normalized weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub label: String,
    pub weight: f64,
}

impl Criterion {
    pub fn new(label: impl Into<String>, weight: f64) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }
}

/// An untrusted weight as decoded from upstream
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawWeight {
    /// Field absent or `null`
    #[default]
    Missing,
    /// A finite number, not yet range-checked
    Number(f64),
    /// Present but unreadable as a finite number; keeps a rendering for logs
    Invalid(String),
}

impl RawWeight {
    /// Interpret an arbitrary JSON value as a weight
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => RawWeight::Missing,
            Value::Number(n) => n.as_f64().map_or_else(
                || RawWeight::Invalid(n.to_string()),
                RawWeight::from_f64,
            ),
            Value::String(s) => Self::parse_str(s),
            other => RawWeight::Invalid(other.to_string()),
        }
    }

    /// Wrap a float, demoting NaN and infinities to `Invalid`
    pub fn from_f64(x: f64) -> Self {
        if x.is_finite() {
            RawWeight::Number(x)
        } else {
            RawWeight::Invalid(x.to_string())
        }
    }

    /// Numeric strings ("0.3") and percent strings ("40%")
    fn parse_str(s: &str) -> Self {
        let trimmed = s.trim();
        let (digits, divisor) = match trimmed.strip_suffix('%') {
            Some(rest) => (rest.trim_end(), 100.0),
            None => (trimmed, 1.0),
        };
        match digits.parse::<f64>() {
            Ok(x) if x.is_finite() => RawWeight::Number(x / divisor),
            _ => RawWeight::Invalid(s.to_string()),
        }
    }

    /// The finite number carried, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawWeight::Number(x) => Some(*x),
            RawWeight::Missing | RawWeight::Invalid(_) => None,
        }
    }
}

impl From<f64> for RawWeight {
    fn from(x: f64) -> Self {
        RawWeight::from_f64(x)
    }
}

impl From<Option<f64>> for RawWeight {
    fn from(x: Option<f64>) -> Self {
        x.map_or(RawWeight::Missing, RawWeight::from_f64)
    }
}

impl<'de> Deserialize<'de> for RawWeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().map_or(RawWeight::Missing, RawWeight::from_value))
    }
}

/// A criterion as supplied by upstream, before normalization
#[derive(Debug, Clone, PartialEq)]
pub struct RawCriterion {
    pub label: String,
    pub weight: RawWeight,
}

impl RawCriterion {
    pub fn new(label: impl Into<String>, weight: impl Into<RawWeight>) -> Self {
        Self {
            label: label.into(),
            weight: weight.into(),
        }
    }

    /// A criterion whose weight field was left out entirely
    pub fn missing(label: impl Into<String>) -> Self {
        Self::new(label, RawWeight::Missing)
    }

    /// Decode one criterion object; `None` if `value` is not an object.
    ///
    /// A bare string is accepted as a label with no weight.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => {
                let label = LABEL_KEYS
                    .iter()
                    .find_map(|key| map.get(*key))
                    .map(label_text)
                    .unwrap_or_default();
                let weight = map
                    .get("weight")
                    .map_or(RawWeight::Missing, RawWeight::from_value);
                Some(Self { label, weight })
            }
            Value::String(label) => Some(Self::missing(label.clone())),
            _ => None,
        }
    }
}

fn label_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl From<&Criterion> for RawCriterion {
    fn from(c: &Criterion) -> Self {
        RawCriterion::new(c.label.clone(), c.weight)
    }
}

impl<'de> Deserialize<'de> for RawCriterion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        RawCriterion::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("expected a criterion object, got {value}")))
    }
}
