//! Rubric-weight normalization
//!
//! Turns an untrusted list of criterion weights into one that is
//! non-negative, reported at two decimal places, and sums to 1.0 within
//! [`SUM_TOLERANCE`]. Order and cardinality are preserved. Normalization is
//! total: there is no error path, only clamping, defaulting and
//! deterministic remainder assignment.
//!
//! Pipeline for two or more entries:
//! 1. clamp every raw weight into [0, 1] (see [`clamp_weights`])
//! 2. all zero: uniform split, remainder on the last entry
//! 3. otherwise scale proportionally, rounding all but the last entry,
//!    and give the last entry `1.0 - sum(previous)`
//! 4. repeat step 3 on the rounded weights while the sum drifts, up to
//!    `max_passes` times
//! 5. any weight still negative is zeroed and its deficit taken from the
//!    largest entries
//!
//! A single entry is always weighted exactly 1.0.

mod passes;

use std::time::Instant;

use tracing::debug;

use crate::config::NormalizerConfig;
use crate::criterion::{Criterion, RawCriterion};
use crate::error::{KitError, Result};
use crate::trace_time;

pub use passes::{clamp_weights, settle_deficit};

/// Decimal places every output weight is rounded to
pub const WEIGHT_DECIMALS: i32 = 2;

/// Largest accepted distance between a weight sum and 1.0
pub const SUM_TOLERANCE: f64 = 0.001;

/// Round half away from zero to [`WEIGHT_DECIMALS`] places.
pub fn round_weight(x: f64) -> f64 {
    let scale = 10f64.powi(WEIGHT_DECIMALS);
    // + 0.0 folds -0.0 into 0.0
    (x * scale).round() / scale + 0.0
}

/// Normalize with default settings
pub fn normalize(raw: &[RawCriterion]) -> Vec<Criterion> {
    normalize_with(raw, &NormalizerConfig::default())
}

/// Normalize already-typed weights, e.g. after a user edits a rubric
pub fn normalize_weights(criteria: &[Criterion]) -> Vec<Criterion> {
    let raw: Vec<RawCriterion> = criteria.iter().map(RawCriterion::from).collect();
    normalize(&raw)
}

/// Normalize a weight set.
///
/// The output has the same labels in the same order as `raw`.
pub fn normalize_with(raw: &[RawCriterion], config: &NormalizerConfig) -> Vec<Criterion> {
    let start = Instant::now();

    let weights = match raw.len() {
        0 => Vec::new(),
        1 => vec![1.0],
        n => {
            let clamped = clamp_weights(raw, config);
            let mut weights = if clamped.iter().all(|w| *w == 0.0) {
                debug!(entries = n, "all weights zero, splitting uniformly");
                passes::uniform(n)
            } else {
                passes::converge(clamped, config.max_passes)
            };
            settle_deficit(&mut weights);
            weights
        }
    };

    trace_time!(start, "normalize", entries = raw.len());

    raw.iter()
        .zip(weights)
        .map(|(c, weight)| Criterion::new(c.label.clone(), weight))
        .collect()
}

/// Check that a rubric already satisfies the normalized-output invariants.
///
/// Reports the first violation found. An empty rubric is valid.
pub fn validate(criteria: &[Criterion]) -> Result<()> {
    for c in criteria {
        if !c.weight.is_finite() || c.weight < 0.0 {
            return Err(KitError::invalid_rubric(format!(
                "weight for '{}' is not a non-negative number: {}",
                c.label, c.weight
            )));
        }
        if (c.weight - round_weight(c.weight)).abs() > 1e-9 {
            return Err(KitError::invalid_rubric(format!(
                "weight for '{}' has more than {} decimal places: {}",
                c.label, WEIGHT_DECIMALS, c.weight
            )));
        }
    }

    if criteria.is_empty() {
        return Ok(());
    }

    let total: f64 = criteria.iter().map(|c| c.weight).sum();
    if (total - 1.0).abs() > SUM_TOLERANCE {
        return Err(KitError::invalid_rubric(format!(
            "weights sum to {:.3}, expected 1.0",
            total
        )));
    }

    Ok(())
}
