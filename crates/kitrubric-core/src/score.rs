//! Weighted evaluation scores over a normalized rubric

use std::collections::HashMap;

use serde::Serialize;

use crate::criterion::Criterion;
use crate::error::{KitError, Result};

/// Contribution of one criterion to a weighted score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionScore {
    pub label: String,
    pub weight: f64,
    pub score: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedScore {
    /// Sum of weight * score, in [0, 1] for a normalized rubric
    pub total: f64,
    pub breakdown: Vec<CriterionScore>,
    /// Scores given for labels the rubric does not contain, sorted
    pub unused: Vec<String>,
}

/// Combine per-criterion scores using the rubric's weights.
///
/// Scores are clamped to [0, 1]; a non-finite score counts as 0. Every
/// criterion must have a score.
pub fn weighted_score(rubric: &[Criterion], scores: &HashMap<String, f64>) -> Result<WeightedScore> {
    let mut breakdown = Vec::with_capacity(rubric.len());
    for criterion in rubric {
        let raw = scores
            .get(&criterion.label)
            .ok_or_else(|| KitError::MissingScore {
                label: criterion.label.clone(),
            })?;
        let score = if raw.is_finite() {
            raw.clamp(0.0, 1.0)
        } else {
            0.0
        };
        breakdown.push(CriterionScore {
            label: criterion.label.clone(),
            weight: criterion.weight,
            score,
            contribution: criterion.weight * score,
        });
    }

    let mut unused: Vec<String> = scores
        .keys()
        .filter(|label| !rubric.iter().any(|c| &c.label == *label))
        .cloned()
        .collect();
    unused.sort();

    Ok(WeightedScore {
        total: breakdown.iter().map(|b| b.contribution).sum(),
        breakdown,
        unused,
    })
}
