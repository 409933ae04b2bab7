//! Piecewise-constant intensity segments over the real line
//!
//! The intensity function is zero everywhere until updated. Two interval
//! updates are supported over half-open ranges `[from, to)`:
//!
//! - `add` - shift the intensity by an amount
//! - `set` - overwrite the intensity with an amount
//!
//! The function is stored as sparse breakpoints and rendered on demand as
//! `(point, value)` steps, e.g. `[[0,5],[10,0]]`.

pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod segments;

// Re-export commonly used types
pub use commands::{replay, CommandFailure, ReplayOutcome, SegmentCommand};
pub use config::ReplayConfig;
pub use domain::{validate_intensity_params, IntensityUpdate, Operand};
pub use errors::{ErrorCode, ErrorKind, Param, RangeError, SegmentError, SegmentResult, TypeError};
pub use segments::{Breakpoint, IntensitySegments};
