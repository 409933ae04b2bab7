// Copyright (c) 2025 - Cowboy AI, Inc.
//! Segment Commands and Replay
//!
//! Commands carry an update request as data, typically parsed from JSON.
//! Their operands stay untyped until validation, so a command such as
//! `{"op": "add", "from": "0", "to": 10, "amount": 5}` parses fine and is
//! then rejected with `INVALID_TYPE` when applied.
//!
//! ```text
//! Command → IntensitySegments::apply → Result<(), SegmentError>
//! [Command] → replay(config) → ReplayOutcome
//! ```
//!
//! A field left out of the document is reported as `undefined`; an explicit
//! `null` is reported as `object`.
//!
//! # Example
//!
//! ```rust
//! use intensity_segments::commands::{replay, SegmentCommand};
//! use intensity_segments::ReplayConfig;
//!
//! let commands: Vec<SegmentCommand> = serde_json::from_str(r#"[
//!     {"op": "add", "from": 0, "to": 20, "amount": 5},
//!     {"op": "set", "from": 5, "to": 15, "amount": 3}
//! ]"#).unwrap();
//!
//! let outcome = replay(commands, &ReplayConfig::default()).unwrap();
//! assert_eq!(outcome.segments.to_json_string().unwrap(), "[[0,5],[5,3],[15,5],[20,0]]");
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ReplayConfig;
use crate::errors::{SegmentError, SegmentResult};
use crate::segments::IntensitySegments;

/// Untyped command operand; `None` when the field was absent
pub type RawOperand = Option<Value>;

/// Update request with unvalidated operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum SegmentCommand {
    /// Add `amount` over `[from, to)`
    Add {
        #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
        from: RawOperand,
        #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
        to: RawOperand,
        #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
        amount: RawOperand,
    },

    /// Overwrite `[from, to)` with `amount`
    Set {
        #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
        from: RawOperand,
        #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
        to: RawOperand,
        #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
        amount: RawOperand,
    },
}

impl SegmentCommand {
    /// Build an add command from numeric operands
    pub fn add(from: f64, to: f64, amount: f64) -> Self {
        SegmentCommand::Add {
            from: Some(Value::from(from)),
            to: Some(Value::from(to)),
            amount: Some(Value::from(amount)),
        }
    }

    /// Build a set command from numeric operands
    pub fn set(from: f64, to: f64, amount: f64) -> Self {
        SegmentCommand::Set {
            from: Some(Value::from(from)),
            to: Some(Value::from(to)),
            amount: Some(Value::from(amount)),
        }
    }

    /// Operation name as it appears in the `op` tag
    pub fn op(&self) -> &'static str {
        match self {
            SegmentCommand::Add { .. } => "add",
            SegmentCommand::Set { .. } => "set",
        }
    }
}

/// Keep an explicit `null` distinct from a missing field
fn present<'de, D>(deserializer: D) -> Result<RawOperand, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl IntensitySegments {
    /// Validate and apply a single command
    pub fn apply(&mut self, command: &SegmentCommand) -> SegmentResult<()> {
        match command {
            SegmentCommand::Add { from, to, amount } => self.add(from, to, amount),
            SegmentCommand::Set { from, to, amount } => self.set(from, to, amount),
        }
    }
}

/// A command that was skipped during replay
#[derive(Debug, Clone, PartialEq)]
pub struct CommandFailure {
    /// Position of the command in the replayed sequence
    pub index: usize,
    pub error: SegmentError,
}

/// Result of replaying a command sequence into a fresh store
#[derive(Debug, Clone, Default)]
pub struct ReplayOutcome {
    pub segments: IntensitySegments,
    /// Number of commands applied successfully
    pub applied: usize,
    /// Skipped commands, only populated with `continue_on_error`
    pub failures: Vec<CommandFailure>,
}

/// Fold commands into a new store
///
/// # Errors
/// Without `continue_on_error`, the first failing command's error. Each
/// command is all-or-nothing, so skipped commands leave no trace in the store.
pub fn replay<I>(commands: I, config: &ReplayConfig) -> SegmentResult<ReplayOutcome>
where
    I: IntoIterator<Item = SegmentCommand>,
{
    let outcome = commands.into_iter().enumerate().try_fold(
        ReplayOutcome::default(),
        |mut outcome, (index, command)| {
            match outcome.segments.apply(&command) {
                Ok(()) => outcome.applied += 1,
                Err(error) if config.continue_on_error => {
                    warn!("Skipping {} command #{}: {}", command.op(), index, error);
                    outcome.failures.push(CommandFailure { index, error });
                }
                Err(error) => return Err(error),
            }
            Ok(outcome)
        },
    )?;

    debug!(
        "Replayed {} commands ({} skipped) into {} breakpoints",
        outcome.applied + outcome.failures.len(),
        outcome.failures.len(),
        outcome.segments.len()
    );
    Ok(outcome)
}
