// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for intensity segment operations
//!
//! Every failure carries a stable, machine-readable [`ErrorCode`] next to its
//! human-readable message. The error kinds mirror the three ways an update or
//! a dump can fail:
//!
//! - [`ErrorKind::Type`] - an operand is not numeric
//! - [`ErrorKind::Range`] - an operand is not finite, or `from >= to`
//! - [`ErrorKind::Serialization`] - the textual form could not be produced

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for intensity segment operations
pub type SegmentResult<T> = Result<T, SegmentError>;

/// Errors that can occur while updating or serializing segments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// Non-numeric operand
    #[error(transparent)]
    Type(#[from] TypeError),

    /// Non-finite operand or empty/inverted interval
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Failure while producing the textual form
    #[error("Failed to convert to string: {0}")]
    Serialization(String),
}

impl SegmentError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> ErrorCode {
        match self {
            SegmentError::Type(_) => ErrorCode::InvalidType,
            SegmentError::Range(err) => err.code(),
            SegmentError::Serialization(_) => ErrorCode::SerializationError,
        }
    }

    /// Broad error category
    pub fn kind(&self) -> ErrorKind {
        match self {
            SegmentError::Type(_) => ErrorKind::Type,
            SegmentError::Range(_) => ErrorKind::Range,
            SegmentError::Serialization(_) => ErrorKind::Serialization,
        }
    }
}

impl From<serde_json::Error> for SegmentError {
    fn from(err: serde_json::Error) -> Self {
        SegmentError::Serialization(err.to_string())
    }
}

/// Operand was not a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{param} must be a number, got {observed}")]
pub struct TypeError {
    /// Offending parameter
    pub param: Param,
    /// Observed type name (e.g. `string`, `undefined`)
    pub observed: String,
}

/// Operand outside the accepted numeric range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("{param} must be a finite number, got {observed}")]
    NotFinite { param: Param, observed: String },

    #[error("from must be less than to")]
    InvalidRange,
}

impl RangeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RangeError::NotFinite { .. } => ErrorCode::NotFinite,
            RangeError::InvalidRange => ErrorCode::InvalidRange,
        }
    }
}

/// Broad error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Type,
    Range,
    Serialization,
}

/// Machine-readable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidType,
    NotFinite,
    InvalidRange,
    SerializationError,
}

impl ErrorCode {
    /// All codes, in declaration order
    pub const ALL: [ErrorCode; 4] = [
        ErrorCode::InvalidType,
        ErrorCode::NotFinite,
        ErrorCode::InvalidRange,
        ErrorCode::SerializationError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidType => "INVALID_TYPE",
            ErrorCode::NotFinite => "NOT_FINITE",
            ErrorCode::InvalidRange => "INVALID_RANGE",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Update parameter, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Param {
    From,
    To,
    Amount,
}

impl Param {
    pub fn as_str(&self) -> &'static str {
        match self {
            Param::From => "from",
            Param::To => "to",
            Param::Amount => "amount",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
