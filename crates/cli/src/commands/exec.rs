// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run a batch of OSC commands

use anyhow::{Context, Result};
use clap::Args;
use ob_adapters::UdpConnector;
use ob_core::{Batch, OscConfig};
use ob_engine::{BatchExecutor, FixedDelay};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct ExecArgs {
    /// Batch JSON: {"commands": [{"path": "...", "args": [...]}], "description": "..."}
    /// Reads stdin when omitted or "-"
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

pub async fn handle(args: ExecArgs, config: &OscConfig, format: OutputFormat) -> Result<()> {
    let batch = read_batch(args.file.as_deref())?;
    let executor = BatchExecutor::with_pacer(
        UdpConnector::for_commands(config),
        FixedDelay(config.pacing()),
    );
    let result = executor.execute(batch).await;
    output::print_batch_result(&result, format)?;

    match ExitError::for_batch(result.status) {
        Some(exit) => Err(exit.into()),
        None => Ok(()),
    }
}

fn read_batch(file: Option<&Path>) -> Result<Batch> {
    let text = match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read batch from {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("failed to read batch from stdin")?;
            buf
        }
    };
    parse_batch(&text)
}

const BATCH_SHAPE: &str =
    r#"{"commands": [{"path": "/live/...", "args": [...]}], "description": "..."}"#;

pub fn parse_batch(text: &str) -> Result<Batch> {
    Batch::from_json(text)
        .map_err(|e| anyhow::anyhow!("invalid batch: {e}. Expected: {BATCH_SHAPE}"))
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
