// Copyright (c) 2025 - Cowboy AI, Inc.
//! Update Domain Models
//!
//! Value objects and pure validation for intensity updates.
//!
//! - [`Operand`] - dynamically typed argument with a numeric view
//! - [`IntensityUpdate`] - validated `[from, to)` interval plus amount
//! - [`validate_intensity_params`] - the single validation entry point

pub mod invariants;
pub mod operand;

pub use invariants::{
    validate_finite_number, validate_intensity_params, validate_interval, IntensityUpdate,
};
pub use operand::Operand;
