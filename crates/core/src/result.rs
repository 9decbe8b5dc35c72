// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-command and per-batch outcomes

use crate::osc::{Batch, Command};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one attempted command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    pub command: Command,
    pub status: CommandStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResult {
    pub fn success(command: Command) -> Self {
        Self { command, status: CommandStatus::Success, error: None }
    }

    pub fn error(command: Command, error: impl Into<String>) -> Self {
        Self { command, status: CommandStatus::Error, error: Some(error.into()) }
    }

    /// Record the outcome of a send.
    pub fn from_outcome<E: fmt::Display>(command: Command, outcome: Result<(), E>) -> Self {
        match outcome {
            Ok(()) => Self::success(command),
            Err(e) => Self::error(command, e.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CommandStatus::Success
    }
}

/// Overall outcome of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    /// Every attempted command succeeded
    Success,
    /// The batch ran but at least one command failed
    Partial,
    /// The batch could not be attempted
    Error,
}

impl BatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::Success => "success",
            BatchStatus::Partial => "partial",
            BatchStatus::Error => "error",
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub status: BatchStatus,
    pub message: String,
    pub description: String,
    pub commands: Vec<Command>,
    pub results: Vec<CommandResult>,
    pub summary: Summary,
}

impl BatchResult {
    /// Result for a batch with no commands. Nothing was sent.
    pub fn empty(description: impl Into<String>) -> Self {
        Self {
            status: BatchStatus::Success,
            message: "No commands to execute".to_string(),
            description: description.into(),
            commands: Vec::new(),
            results: Vec::new(),
            summary: Summary::default(),
        }
    }

    /// Result for a batch that could not be attempted at all.
    pub fn failed(batch: Batch, error: impl fmt::Display) -> Self {
        let total = batch.commands.len();
        Self {
            status: BatchStatus::Error,
            message: format!("Error executing commands: {error}"),
            description: batch.description,
            commands: batch.commands,
            results: Vec::new(),
            summary: Summary { total, success: 0, failed: 0 },
        }
    }

    /// Aggregate the per-command results of a batch that ran.
    pub fn completed(batch: Batch, results: Vec<CommandResult>) -> Self {
        let success = results.iter().filter(|r| r.is_success()).count();
        let failed = results.len() - success;
        let total = batch.commands.len();
        let status = if failed == 0 { BatchStatus::Success } else { BatchStatus::Partial };
        Self {
            status,
            message: format!("Executed {success}/{total} commands successfully"),
            description: batch.description,
            commands: batch.commands,
            results,
            summary: Summary { total, success, failed },
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &CommandResult> {
        self.results.iter().filter(|r| !r.is_success())
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
