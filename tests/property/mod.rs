// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Coordinates and amounts are drawn from small integer ranges so every sum
//! is exact in f64 and values can be compared with `==`.

mod segment_properties;
mod validation_properties;
