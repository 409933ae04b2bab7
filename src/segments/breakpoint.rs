// Copyright (c) 2025 - Cowboy AI, Inc.
//! Breakpoint - one step of the serialized intensity function
//!
//! A dumped breakpoint pairs a coordinate with the cumulative intensity that
//! holds from that coordinate up to the next one. Its textual form is a
//! two-element array, `[point, value]`.
//!
//! # Number Rendering
//!
//! Numbers are written the way `Number.prototype.toString` writes them:
//!
//! | Value | Text |
//! |---|---|
//! | `5.0`, `-0.0` | `5`, `0` |
//! | `2^53`, `1e16` | `9007199254740992`, `10000000000000000` |
//! | `0.25`, `1e-6` | `0.25`, `0.000001` |
//! | `1e-7`, `1e21` | `1e-7`, `1e+21` |
//!
//! Integral values that fit an `i64` go through `serialize_i64`. Everything
//! else reaches the serializer as an `f64`, and [`to_json_text`] lays out its
//! shortest round-trip digits with [`NumberFormatter`]. Non-finite values
//! have no textual form and fail serialization.

use serde::ser::{Error as _, SerializeTuple};
use serde::{Serialize, Serializer};
use serde_json::ser::Formatter;
use std::io;

/// 2^63, the first integral magnitude that no longer fits an `i64`
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Scientific exponents written in fixed notation
const FIXED_EXPONENTS: std::ops::Range<i32> = -6..21;

/// Coordinate paired with the intensity in effect from that coordinate on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub point: f64,
    pub value: f64,
}

impl Breakpoint {
    pub fn new(point: f64, value: f64) -> Self {
        Self { point, value }
    }
}

impl From<(f64, f64)> for Breakpoint {
    fn from((point, value): (f64, f64)) -> Self {
        Self::new(point, value)
    }
}

impl From<Breakpoint> for (f64, f64) {
    fn from(breakpoint: Breakpoint) -> Self {
        (breakpoint.point, breakpoint.value)
    }
}

impl Serialize for Breakpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&Number(self.point))?;
        pair.serialize_element(&Number(self.value))?;
        pair.end()
    }
}

struct Number(f64);

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.0;
        if !value.is_finite() {
            return Err(S::Error::custom(format!(
                "{} is not representable as a number",
                value
            )));
        }

        if value.fract() == 0.0 && value.abs() < I64_LIMIT {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

/// `serde_json` formatter that writes floats in ECMAScript notation
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFormatter;

impl Formatter for NumberFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_number(value).as_bytes())
    }
}

/// Serialize `value` to JSON text using [`NumberFormatter`]
pub fn to_json_text<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut writer: Vec<u8> = Vec::with_capacity(128);
    value.serialize(&mut serde_json::Serializer::with_formatter(
        &mut writer,
        NumberFormatter,
    ))?;
    String::from_utf8(writer).map_err(serde_json::Error::custom)
}

fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits as d[.ddd]e<exp>
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let body = if (0..FIXED_EXPONENTS.end).contains(&exponent) {
        let integral = (exponent + 1) as usize;
        if digits.len() <= integral {
            format!("{}{}", digits, "0".repeat(integral - digits.len()))
        } else {
            let (whole, fraction) = digits.split_at(integral);
            format!("{}.{}", whole, fraction)
        }
    } else if FIXED_EXPONENTS.contains(&exponent) {
        format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if exponent < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, exponent.abs())
        }
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}
