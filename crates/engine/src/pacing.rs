// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pacing between commands of a batch

use async_trait::async_trait;
use std::time::Duration;

/// Decides how long to wait after each command before sending the next.
#[async_trait]
pub trait Pacer: Send + Sync + 'static {
    /// Called once after every command, whatever its outcome.
    async fn pause(&self);
}

/// Sleep a fixed duration after every command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.0
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::from_millis(ob_core::config::DEFAULT_PACING_MS)
    }
}

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

/// Send back to back
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

#[async_trait]
impl Pacer for NoPacing {
    async fn pause(&self) {}
}

#[cfg(test)]
#[path = "pacing_tests.rs"]
mod tests;
