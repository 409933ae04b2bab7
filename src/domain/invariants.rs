// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Update Invariants
//!
//! Every update (`add` or `set`) passes through [`validate_intensity_params`]
//! before the breakpoint map is touched. Validation is pure: no I/O, no state
//! retained between calls, and the first violated rule decides the error.
//!
//! # Rule Order
//!
//! 1. `from` is numeric, then finite
//! 2. `to` is numeric, then finite
//! 3. `amount` is numeric, then finite
//! 4. `from < to`
//!
//! The interval rule runs only after all three operands are known to be
//! finite numbers, so `from >= to` is rejected with `INVALID_RANGE` whatever
//! the amount.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::operand::Operand;
use crate::errors::{Param, RangeError, SegmentError, SegmentResult, TypeError};

/// Validated update over the half-open interval `[from, to)`
///
/// Can only be built through validation, so holding one guarantees finite
/// operands and `from < to`.
///
/// # Examples
///
/// ```rust
/// use intensity_segments::domain::IntensityUpdate;
///
/// let update = IntensityUpdate::new(0, 10, 5).unwrap();
/// assert_eq!(update.from(), 0.0);
/// assert_eq!(update.to(), 10.0);
/// assert_eq!(update.amount(), 5.0);
///
/// assert!(IntensityUpdate::new(10, 10, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntensityUpdate {
    from: f64,
    to: f64,
    amount: f64,
}

impl IntensityUpdate {
    /// Validate operands into an update
    pub fn new(
        from: impl Operand,
        to: impl Operand,
        amount: impl Operand,
    ) -> SegmentResult<Self> {
        validate_intensity_params(from, to, amount)
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl<'de> Deserialize<'de> for IntensityUpdate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            from: f64,
            to: f64,
            amount: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        validate_intensity_params(raw.from, raw.to, raw.amount).map_err(serde::de::Error::custom)
    }
}

/// Validate the three operands of an update
///
/// # Errors
/// - `INVALID_TYPE` when an operand is not numeric
/// - `NOT_FINITE` when an operand is infinite or NaN
/// - `INVALID_RANGE` when `from >= to`
pub fn validate_intensity_params(
    from: impl Operand,
    to: impl Operand,
    amount: impl Operand,
) -> SegmentResult<IntensityUpdate> {
    check_params(&from, &to, &amount)
        .inspect_err(|err| debug!("Rejected intensity update ({}): {}", err.code(), err))
}

fn check_params(
    from: &impl Operand,
    to: &impl Operand,
    amount: &impl Operand,
) -> SegmentResult<IntensityUpdate> {
    let from = validate_finite_number(Param::From, from)?;
    let to = validate_finite_number(Param::To, to)?;
    let amount = validate_finite_number(Param::Amount, amount)?;
    validate_interval(from, to)?;

    Ok(IntensityUpdate { from, to, amount })
}

/// Validate a single operand: type first, then finiteness
pub fn validate_finite_number(param: Param, value: &impl Operand) -> SegmentResult<f64> {
    let number = value.to_number().map_err(|observed| TypeError {
        param,
        observed: observed.to_string(),
    })?;

    if !number.is_finite() {
        return Err(SegmentError::Range(RangeError::NotFinite {
            param,
            observed: describe_non_finite(number).to_string(),
        }));
    }

    Ok(number)
}

/// Validate that `[from, to)` is non-empty
pub fn validate_interval(from: f64, to: f64) -> SegmentResult<()> {
    if from >= to {
        return Err(RangeError::InvalidRange.into());
    }
    Ok(())
}

fn describe_non_finite(number: f64) -> &'static str {
    if number.is_nan() {
        "NaN"
    } else if number.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}
