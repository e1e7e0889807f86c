//! Individual normalization stages

use tracing::{debug, trace, warn};

use super::{round_weight, SUM_TOLERANCE};
use crate::config::NormalizerConfig;
use crate::criterion::RawCriterion;

fn non_negative(x: f64) -> f64 {
    if x > 0.0 {
        x
    } else {
        0.0
    }
}

fn unit_interval(x: f64) -> f64 {
    non_negative(x).min(1.0)
}

/// Map raw weights into [0, 1].
///
/// Missing and unreadable weights take `config.missing_weight`. If the
/// largest number exceeds 1.0 the whole set is divided by it first, so
/// weights given as percentages or points keep their proportions.
/// Negative numbers become 0.
pub fn clamp_weights(raw: &[RawCriterion], config: &NormalizerConfig) -> Vec<f64> {
    let scale = raw
        .iter()
        .filter_map(|c| c.weight.as_number())
        .fold(1.0_f64, f64::max);
    let missing = unit_interval(config.missing_weight);

    if scale > 1.0 {
        debug!(scale, "weights exceed 1.0, rescaling");
    }

    raw.iter()
        .map(|c| match c.weight.as_number() {
            Some(x) => unit_interval(x / scale),
            None => {
                trace!(label = %c.label, weight = ?c.weight, "defaulting weight");
                missing
            }
        })
        .collect()
}

/// Equal shares for `n` entries, the last absorbing the rounding remainder
pub(super) fn uniform(n: usize) -> Vec<f64> {
    let share = round_weight(1.0 / n as f64);
    let mut weights = vec![share; n];
    let others: f64 = weights[..n - 1].iter().sum();
    weights[n - 1] = round_weight(1.0 - others);
    weights
}

/// One proportional scaling pass with remainder assignment to the last entry
///
/// Each weight is divided by the total rather than multiplied by
/// `1.0 / total`: the reciprocal of a subnormal total is infinite.
pub(super) fn scale_pass(weights: &[f64]) -> Vec<f64> {
    let n = weights.len();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return uniform(n);
    }

    let mut scaled: Vec<f64> = weights[..n - 1]
        .iter()
        .map(|w| non_negative(round_weight(w / total)))
        .collect();
    let previous: f64 = scaled.iter().sum();
    scaled.push(round_weight(1.0 - previous));
    scaled
}

/// Repeat scaling passes until the sum is within tolerance or passes run out
///
/// The last entry takes exactly `1.0 - sum(previous)`, so one pass already
/// lands within tolerance. A negative remainder left on the last entry is
/// not corrected here; `settle_deficit` handles it.
pub(super) fn converge(mut weights: Vec<f64>, max_passes: u32) -> Vec<f64> {
    let passes = max_passes.max(1);
    for pass in 1..=passes {
        weights = scale_pass(&weights);
        let drift = (weights.iter().sum::<f64>() - 1.0).abs();
        trace!(pass, drift, "scale_pass");
        if drift <= SUM_TOLERANCE {
            break;
        }
        if pass == passes {
            warn!(drift, passes, "weight sum still drifting after final pass");
        }
    }
    weights
}

/// Index of the largest weight, first occurrence on ties
fn largest_index(weights: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, w) in weights.iter().enumerate() {
        match best {
            Some(b) if *w <= weights[b] => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Zero out negative weights and take the deficit from the largest entries.
///
/// The largest entry gives up as much as it holds; if that is not enough
/// the next largest continues, so every weight ends non-negative.
pub fn settle_deficit(weights: &mut [f64]) {
    let deficit: f64 = weights.iter().filter(|w| **w < 0.0).map(|w| -w).sum();
    if deficit <= 0.0 {
        return;
    }

    for w in weights.iter_mut() {
        *w = non_negative(*w);
    }

    let mut remaining = round_weight(deficit);
    debug!(deficit = remaining, "settling negative weights");

    while remaining > 0.0 {
        let Some(idx) = largest_index(weights) else {
            break;
        };
        let take = weights[idx].min(remaining);
        if take <= 0.0 {
            break;
        }
        weights[idx] = round_weight(weights[idx] - take);
        remaining = round_weight(remaining - take);
    }
}
