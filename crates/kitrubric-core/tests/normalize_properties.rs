//! Property tests for weight normalization

use kitrubric_core::criterion::{RawCriterion, RawWeight};
use kitrubric_core::normalize::{normalize, normalize_weights, validate, SUM_TOLERANCE};
use proptest::prelude::*;

fn raw_weight_strategy() -> impl Strategy<Value = RawWeight> {
    prop_oneof![
        Just(RawWeight::Missing),
        Just(RawWeight::Number(0.0)),
        Just(RawWeight::Invalid("n/a".to_string())),
        (0.0..=1.0f64).prop_map(RawWeight::Number),
        (-5.0..5.0f64).prop_map(RawWeight::Number),
        (0.0..1000.0f64).prop_map(RawWeight::Number),
        prop::num::f64::ANY.prop_map(RawWeight::from_f64),
    ]
}

fn weight_set_strategy(max_len: usize) -> impl Strategy<Value = Vec<RawCriterion>> {
    prop::collection::vec(("[a-z]{0,6}", raw_weight_strategy()), 0..max_len).prop_map(
        |entries| {
            entries
                .into_iter()
                .map(|(label, weight)| RawCriterion::new(label, weight))
                .collect()
        },
    )
}

proptest! {
    /// Property: non-empty output sums to 1.0 within tolerance.
    #[test]
    fn sums_to_one(input in weight_set_strategy(40)) {
        let out = normalize(&input);
        if !input.is_empty() {
            let total: f64 = out.iter().map(|c| c.weight).sum();
            prop_assert!((total - 1.0).abs() <= SUM_TOLERANCE, "sum was {}", total);
        }
    }

    /// Property: no output weight is negative.
    #[test]
    fn never_negative(input in weight_set_strategy(40)) {
        for c in normalize(&input) {
            prop_assert!(c.weight >= 0.0, "{} had weight {}", c.label, c.weight);
        }
    }

    /// Property: labels come back in the same order, none added or removed.
    #[test]
    fn preserves_labels_and_order(input in weight_set_strategy(40)) {
        let out = normalize(&input);
        prop_assert_eq!(out.len(), input.len());
        for (before, after) in input.iter().zip(&out) {
            prop_assert_eq!(&before.label, &after.label);
        }
    }

    /// Property: normalized output is a fixed point.
    #[test]
    fn idempotent(input in weight_set_strategy(40)) {
        let once = normalize(&input);
        let twice = normalize_weights(&once);
        prop_assert_eq!(once, twice);
    }

    /// Property: output always passes the rubric check.
    #[test]
    fn output_validates(input in weight_set_strategy(40)) {
        prop_assert!(validate(&normalize(&input)).is_ok());
    }

    /// Property: a single entry always gets exactly 1.0.
    #[test]
    fn singleton_is_one(weight in raw_weight_strategy()) {
        let out = normalize(&[RawCriterion::new("only", weight)]);
        prop_assert_eq!(out[0].weight, 1.0);
    }

    /// Property: sets larger than one hundred entries still settle.
    #[test]
    fn wide_sets_settle(input in weight_set_strategy(260)) {
        let out = normalize(&input);
        prop_assert!(validate(&out).is_ok());
    }
}
