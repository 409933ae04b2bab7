// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for intensity-segments
//!
//! Shared helpers for the integration suites: a reference evaluator for the
//! dumped step function and a scripted way to build stores.
#![allow(dead_code)]

use intensity_segments::{Breakpoint, IntensitySegments, SegmentResult};

/// Scripted update used to build stores in tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Add(f64, f64, f64),
    Set(f64, f64, f64),
}

/// Install a test subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Apply a script of updates to a fresh store
pub fn build(ops: &[Op]) -> SegmentResult<IntensitySegments> {
    let mut segments = IntensitySegments::new();
    for op in ops {
        match *op {
            Op::Add(from, to, amount) => segments.add(from, to, amount)?,
            Op::Set(from, to, amount) => segments.set(from, to, amount)?,
        }
    }
    Ok(segments)
}

/// Textual dump of a store that is expected to serialize
pub fn rendered(segments: &IntensitySegments) -> String {
    segments
        .to_json_string()
        .expect("segments should serialize")
}

/// Value of the dumped step function at `x`
pub fn value_at(dump: &[Breakpoint], x: f64) -> f64 {
    dump.iter()
        .take_while(|breakpoint| breakpoint.point <= x)
        .last()
        .map_or(0.0, |breakpoint| breakpoint.value)
}

/// Value at `x` computed directly from the update script
pub fn reference_value_at(ops: &[Op], x: f64) -> f64 {
    ops.iter().fold(0.0, |value, op| match *op {
        Op::Add(from, to, amount) if from <= x && x < to => value + amount,
        Op::Set(from, to, amount) if from <= x && x < to => amount,
        _ => value,
    })
}

/// Probe coordinates on and between the integers of `[lo, hi)`
pub fn probes(lo: i32, hi: i32) -> Vec<f64> {
    (lo..hi)
        .flat_map(|k| [k as f64, k as f64 + 0.5])
        .collect()
}
