// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch executor

use crate::pacing::{FixedDelay, Pacer};
use ob_adapters::{OscConnector, OscTransport};
use ob_core::{Batch, BatchResult, CommandResult};

/// Sends a batch of commands in order over one short-lived client.
///
/// A failed send is recorded and the batch moves on; only a failure to open
/// the client fails the whole batch. The pacer runs after every command,
/// including the last one.
pub struct BatchExecutor<C, P = FixedDelay> {
    connector: C,
    pacer: P,
}

impl<C: OscConnector> BatchExecutor<C, FixedDelay> {
    /// Executor with the default 100ms pacing
    pub fn new(connector: C) -> Self {
        Self { connector, pacer: FixedDelay::default() }
    }
}

impl<C, P> BatchExecutor<C, P>
where
    C: OscConnector,
    P: Pacer,
{
    pub fn with_pacer(connector: C, pacer: P) -> Self {
        Self { connector, pacer }
    }

    /// Execute a batch. Never fails: every outcome is in the result.
    pub async fn execute(&self, batch: Batch) -> BatchResult {
        tracing::info!(
            description = %batch.description,
            commands = batch.commands.len(),
            "executing batch"
        );

        if batch.is_empty() {
            return BatchResult::empty(batch.description);
        }

        let start = std::time::Instant::now();
        let transport = match self.connector.connect().await {
            Ok(t) => t,
            Err(e) => {
                tracing::error!(error = %e, "failed to open OSC client");
                return BatchResult::failed(batch, e);
            }
        };

        let mut results = Vec::with_capacity(batch.commands.len());
        for (index, command) in batch.commands.iter().enumerate() {
            tracing::debug!(index, command = %command, "sending");
            let outcome = transport.send(command).await;
            if let Err(e) = &outcome {
                tracing::warn!(
                    index,
                    path = %command.path,
                    error = %e,
                    "command failed, continuing"
                );
            }
            results.push(CommandResult::from_outcome(command.clone(), outcome));
            self.pacer.pause().await;
        }

        transport.close();

        let result = BatchResult::completed(batch, results);
        tracing::info!(
            status = %result.status,
            success = result.summary.success,
            failed = result.summary.failed,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "batch complete"
        );
        result
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
