// Copyright (c) 2025 - Cowboy AI, Inc.
//! Operand Value Abstraction
//!
//! Update operations accept dynamically typed operands so that values read
//! from JSON documents, optional fields and plain Rust numbers all flow
//! through the same validation path. An operand either yields a number or
//! reports the name of the type it actually holds.
//!
//! # Observed type names
//!
//! Names follow the `typeof` vocabulary of JSON-producing callers, so `null`,
//! arrays and maps all report `object`.
//!
//! | Operand | Observed |
//! |---|---|
//! | `bool` | `boolean` |
//! | `&str`, `String` | `string` |
//! | `Option::None` | `undefined` |
//! | `Value::Null`, `Value::Array`, `Value::Object` | `object` |
//!
//! # Examples
//!
//! ```rust
//! use intensity_segments::domain::Operand;
//! use serde_json::json;
//!
//! assert_eq!(5i32.to_number(), Ok(5.0));
//! assert_eq!(json!(2.5).to_number(), Ok(2.5));
//! assert_eq!(json!("5").to_number(), Err("string"));
//! assert_eq!(None::<f64>.to_number(), Err("undefined"));
//! ```

use serde_json::Value;

/// A value that may or may not be numeric
///
/// Every number is viewed as an `f64`. Integers wider than 53 bits (`i64`,
/// `u64`, `usize` and friends) are rounded to the nearest representable
/// value, exactly as a JSON number of that size would be.
pub trait Operand {
    /// Numeric view of the operand, or the observed type name
    fn to_number(&self) -> Result<f64, &'static str>;
}

macro_rules! numeric_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Operand for $ty {
                fn to_number(&self) -> Result<f64, &'static str> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

numeric_operand!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Operand for bool {
    fn to_number(&self) -> Result<f64, &'static str> {
        Err("boolean")
    }
}

impl Operand for str {
    fn to_number(&self) -> Result<f64, &'static str> {
        Err("string")
    }
}

impl Operand for String {
    fn to_number(&self) -> Result<f64, &'static str> {
        Err("string")
    }
}

impl Operand for Value {
    fn to_number(&self) -> Result<f64, &'static str> {
        match self {
            // Only arbitrary-precision numbers can miss an f64 view
            Value::Number(number) => Ok(number.as_f64().unwrap_or(f64::NAN)),
            Value::Bool(_) => Err("boolean"),
            Value::String(_) => Err("string"),
            Value::Null | Value::Array(_) | Value::Object(_) => Err("object"),
        }
    }
}

impl<T: Operand> Operand for Option<T> {
    fn to_number(&self) -> Result<f64, &'static str> {
        match self {
            Some(value) => value.to_number(),
            None => Err("undefined"),
        }
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn to_number(&self) -> Result<f64, &'static str> {
        (**self).to_number()
    }
}
