// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! so `main()` owns process termination.

use ob_core::BatchStatus;
use std::fmt;

/// Exit code for a batch where some commands failed
pub const EXIT_PARTIAL: i32 = 2;

/// Exit code for bad arguments, kept distinct from [`EXIT_PARTIAL`]
pub const EXIT_USAGE: i32 = 1;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    /// Printed to stderr by `main` unless empty
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Exit with `code` after the command already reported on stdout
    pub fn silent(code: i32) -> Self {
        Self::new(code, "")
    }

    /// Exit status for a finished batch, `None` on full success
    pub fn for_batch(status: BatchStatus) -> Option<Self> {
        match status {
            BatchStatus::Success => None,
            BatchStatus::Partial => Some(Self::silent(EXIT_PARTIAL)),
            BatchStatus::Error => Some(Self::silent(1)),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}
