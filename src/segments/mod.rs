// Copyright (c) 2025 - Cowboy AI, Inc.
//! Intensity Segments - Sparse Breakpoint Store
//!
//! Models a piecewise-constant intensity function over the real line. The
//! function is zero everywhere until updated, and is stored as a sparse map
//! from coordinate to signed delta:
//!
//! ```text
//! value(x) = Σ delta(p)  for all stored p ≤ x
//! ```
//!
//! Left of the smallest breakpoint the function is zero; from the largest
//! breakpoint on it holds the total sum, which need not be zero.
//!
//! # Operations
//!
//! | Operation | Effect | Cost |
//! |---|---|---|
//! | [`add`](IntensitySegments::add) | `+amount` on `[from, to)` | O(log n) |
//! | [`set`](IntensitySegments::set) | `=amount` on `[from, to)` | O(n) |
//! | [`dump`](IntensitySegments::dump) | `(point, value)` steps | O(n) |
//!
//! The map is a `BTreeMap`, so entries are always ascending and neither
//! `set` nor `dump` has to sort. Redundant entries (zero deltas, equal
//! neighbouring values) are kept; only `set` removes breakpoints, and only
//! those within `[from, to]`.
//!
//! # Example
//!
//! ```rust
//! use intensity_segments::IntensitySegments;
//!
//! let mut segments = IntensitySegments::new();
//! segments.add(0, 20, 5).unwrap();
//! segments.set(5, 15, 3).unwrap();
//! assert_eq!(segments.to_json_string().unwrap(), "[[0,5],[5,3],[15,5],[20,0]]");
//! ```

pub mod breakpoint;

pub use breakpoint::{to_json_text, Breakpoint, NumberFormatter};

use ordered_float::OrderedFloat;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::{debug, error, trace};

use crate::domain::{validate_intensity_params, IntensityUpdate, Operand};
use crate::errors::{SegmentError, SegmentResult};

type Point = OrderedFloat<f64>;

/// Piecewise-constant intensity function backed by a breakpoint map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntensitySegments {
    /// Coordinate → net change in intensity at that coordinate
    breakpoints: BTreeMap<Point, f64>,
}

impl IntensitySegments {
    /// Intensity of the untouched line; an `add` of this amount is a no-op
    pub const BASE_INTENSITY: f64 = 0.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the intensity over `[from, to)`
    ///
    /// An amount of zero leaves the store untouched. Otherwise at most two
    /// breakpoints are created and none are removed.
    ///
    /// # Errors
    /// Validation errors only; on error the store is unchanged.
    pub fn add(
        &mut self,
        from: impl Operand,
        to: impl Operand,
        amount: impl Operand,
    ) -> SegmentResult<()> {
        let update = validate_intensity_params(from, to, amount)?;
        self.add_update(update);
        Ok(())
    }

    /// Overwrite the intensity over `[from, to)` with `amount`
    ///
    /// Breakpoints in `[from, to]` are dropped and replaced by two endpoint
    /// deltas that splice the new constant segment between the unchanged
    /// values before `from` and from `to` on. Unlike `add`, a zero amount is
    /// still written.
    ///
    /// # Errors
    /// Validation errors only; on error the store is unchanged.
    pub fn set(
        &mut self,
        from: impl Operand,
        to: impl Operand,
        amount: impl Operand,
    ) -> SegmentResult<()> {
        let update = validate_intensity_params(from, to, amount)?;
        self.set_update(update);
        Ok(())
    }

    /// Apply an already validated update additively
    pub fn add_update(&mut self, update: IntensityUpdate) {
        let (from, to, amount) = (update.from(), update.to(), update.amount());
        if amount == Self::BASE_INTENSITY {
            debug!("Skipped zero add over [{}, {})", from, to);
            return;
        }

        *self.breakpoints.entry(OrderedFloat(from)).or_insert(0.0) += amount;
        *self.breakpoints.entry(OrderedFloat(to)).or_insert(0.0) -= amount;

        debug!("Added {} over [{}, {})", amount, from, to);
    }

    /// Apply an already validated update as an overwrite
    pub fn set_update(&mut self, update: IntensityUpdate) {
        let (from, to, amount) = (update.from(), update.to(), update.amount());

        // Partition into [.., from) | [from, to) | {to} | (to, ..)
        let mut inside = self.breakpoints.split_off(&OrderedFloat(from));
        let mut after = inside.split_off(&OrderedFloat(to));
        let at_to = after.remove(&OrderedFloat(to));

        // Accumulate in ascending order, including the deltas being dropped
        let baseline_before = self.breakpoints.values().fold(0.0, |sum, delta| sum + delta);
        let baseline_after = inside
            .values()
            .chain(at_to.iter())
            .fold(baseline_before, |sum, delta| sum + delta);

        trace!(
            "Splicing [{}, {}) between baselines {} and {}, dropping {} breakpoints",
            from,
            to,
            baseline_before,
            baseline_after,
            inside.len() + usize::from(at_to.is_some())
        );

        self.breakpoints.append(&mut after);
        self.breakpoints.insert(OrderedFloat(from), amount - baseline_before);
        self.breakpoints.insert(OrderedFloat(to), baseline_after - amount);

        debug!("Set {} over [{}, {})", amount, from, to);
    }

    /// Serialize the function as ascending `(point, value)` steps
    ///
    /// Each value is the running sum of deltas up to and including its point.
    /// Consecutive equal values are not merged.
    pub fn dump(&self) -> Vec<Breakpoint> {
        self.breakpoints
            .iter()
            .scan(0.0, |running, (point, delta)| {
                *running += delta;
                Some(Breakpoint::new(point.into_inner(), *running))
            })
            .collect()
    }

    /// Textual form of [`dump`](Self::dump), e.g. `[[0,5],[10,0]]`
    ///
    /// # Errors
    /// `SERIALIZATION_ERROR` when a cumulative value is not finite.
    pub fn to_json_string(&self) -> SegmentResult<String> {
        to_json_text(self).map_err(|err| {
            error!("Failed to serialize intensity segments: {}", err);
            SegmentError::from(err)
        })
    }

    /// Raw `(point, delta)` entries in ascending order
    pub fn deltas(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.breakpoints
            .iter()
            .map(|(point, delta)| (point.into_inner(), *delta))
    }

    /// Number of stored breakpoints
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }
}

impl Serialize for IntensitySegments {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.dump())
    }
}
