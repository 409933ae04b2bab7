// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for add / set / dump
//!
//! Every store built from a random update script is compared against a
//! direct evaluation of the script at probe points on and between the
//! integer coordinates.

use proptest::prelude::*;

use crate::fixtures::{build, probes, reference_value_at, value_at, Op};

// ============================================================================
// Strategies
// ============================================================================

/// Valid `[from, to)` interval with an integral amount
fn interval() -> impl Strategy<Value = (f64, f64, f64)> {
    (-20i32..20, 1i32..15, -10i32..10)
        .prop_map(|(from, len, amount)| (from as f64, (from + len) as f64, amount as f64))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        interval().prop_map(|(from, to, amount)| Op::Add(from, to, amount)),
        interval().prop_map(|(from, to, amount)| Op::Set(from, to, amount)),
    ]
}

fn script() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op(), 0..25)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: The store agrees with the reference evaluation everywhere
    #[test]
    fn prop_matches_reference(ops in script()) {
        let dump = build(&ops).unwrap().dump();
        for x in probes(-25, 40) {
            prop_assert_eq!(value_at(&dump, x), reference_value_at(&ops, x), "at x = {}", x);
        }
    }

    /// Property: Dump is strictly ascending with no duplicate coordinates
    #[test]
    fn prop_dump_strictly_ascending(ops in script()) {
        let dump = build(&ops).unwrap().dump();
        for pair in dump.windows(2) {
            prop_assert!(pair[0].point < pair[1].point);
        }
    }

    /// Property: Adding zero leaves the serialized output unchanged
    #[test]
    fn prop_zero_add_is_noop(ops in script(), (from, to, _) in interval()) {
        let mut segments = build(&ops).unwrap();
        let before = segments.to_json_string().unwrap();
        let len = segments.len();

        segments.add(from, to, 0.0).unwrap();

        prop_assert_eq!(segments.to_json_string().unwrap(), before);
        prop_assert_eq!(segments.len(), len);
    }

    /// Property: add(f, t, a) then add(f, t, -a) restores the function
    #[test]
    fn prop_add_inverse_restores_function(ops in script(), (from, to, amount) in interval()) {
        let mut segments = build(&ops).unwrap();
        let before = segments.dump();

        segments.add(from, to, amount).unwrap();
        segments.add(from, to, -amount).unwrap();

        let after = segments.dump();
        for x in probes(-25, 40) {
            prop_assert_eq!(value_at(&after, x), value_at(&before, x), "at x = {}", x);
        }
    }

    /// Property: set makes [f, t) exactly v and leaves everything else alone
    #[test]
    fn prop_set_overwrites_only_interval(ops in script(), (from, to, amount) in interval()) {
        let mut segments = build(&ops).unwrap();
        let before = segments.dump();

        segments.set(from, to, amount).unwrap();
        let after = segments.dump();

        for breakpoint in after.iter().filter(|b| from <= b.point && b.point < to) {
            prop_assert_eq!(breakpoint.value, amount);
        }
        for x in probes(-25, 40) {
            let expected = if from <= x && x < to { amount } else { value_at(&before, x) };
            prop_assert_eq!(value_at(&after, x), expected, "at x = {}", x);
        }
    }

    /// Property: set leaves no breakpoints strictly inside (f, t)
    #[test]
    fn prop_set_clears_interior(ops in script(), (from, to, amount) in interval()) {
        let mut segments = build(&ops).unwrap();
        segments.set(from, to, amount).unwrap();

        let interior = segments.deltas().filter(|(point, _)| from < *point && *point < to).count();
        prop_assert_eq!(interior, 0);
    }

    /// Property: add never removes breakpoints
    #[test]
    fn prop_add_never_shrinks(ops in script(), (from, to, amount) in interval()) {
        let mut segments = build(&ops).unwrap();
        let len = segments.len();
        segments.add(from, to, amount).unwrap();
        prop_assert!(segments.len() >= len);
        prop_assert!(segments.len() <= len + 2);
    }
}
