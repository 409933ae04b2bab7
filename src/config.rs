// Copyright (c) 2025 - Cowboy AI, Inc.
//! Replay configuration

use serde::{Deserialize, Serialize};

/// Options for [`replay`](crate::commands::replay)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Skip failing commands instead of aborting on the first one
    pub continue_on_error: bool,
}

impl ReplayConfig {
    /// Create a configuration that aborts on the first failure
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether failing commands are skipped
    pub fn with_continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }
}
