// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for update validation

use intensity_segments::{validate_intensity_params, ErrorCode, IntensitySegments};
use proptest::prelude::*;
use serde_json::json;

fn finite() -> impl Strategy<Value = f64> {
    -1e12f64..1e12
}

fn non_finite() -> impl Strategy<Value = f64> {
    prop_oneof![Just(f64::INFINITY), Just(f64::NEG_INFINITY), Just(f64::NAN)]
}

proptest! {
    /// Property: from >= to is INVALID_RANGE whatever the amount
    #[test]
    fn prop_rejects_non_increasing_interval(to in finite(), gap in 0.0f64..1e6, amount in finite()) {
        let from = to + gap;
        let err = validate_intensity_params(from, to, amount).unwrap_err();
        prop_assert_eq!(err.code(), ErrorCode::InvalidRange);
    }

    /// Property: a non-finite operand is reported before the interval rule
    #[test]
    fn prop_non_finite_precedes_interval(bad in non_finite(), position in 0usize..3) {
        let mut operands = [10.0, 0.0, 1.0];
        operands[position] = bad;

        let err = validate_intensity_params(operands[0], operands[1], operands[2]).unwrap_err();
        prop_assert_eq!(err.code(), ErrorCode::NotFinite);
        let param = ["from", "to", "amount"][position];
        let prefix = format!("{} must be a finite number", param);
        prop_assert!(err.to_string().starts_with(&prefix));
    }

    /// Property: a type error on an earlier operand hides later failures
    #[test]
    fn prop_type_error_reported_in_order(to in non_finite(), amount in non_finite()) {
        let err = validate_intensity_params(json!("0"), to, amount).unwrap_err();
        prop_assert_eq!(err.to_string(), "from must be a number, got string");
    }

    /// Property: rejected updates never mutate the store
    #[test]
    fn prop_rejected_updates_leave_store_unchanged(bad in non_finite(), from in -50i32..50) {
        let mut segments = IntensitySegments::new();
        segments.add(from, from + 10, 3).unwrap();
        let before = segments.clone();

        prop_assert!(segments.add(from, from + 10, bad).is_err());
        prop_assert!(segments.set(from, from + 10, bad).is_err());
        prop_assert!(segments.set(from + 10, from, 1).is_err());
        prop_assert_eq!(segments, before);
    }
}
