// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use ob_core::{BatchResult, CommandStatus};
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Human-readable batch report: a status line, then one line per command.
pub fn format_batch_text(result: &BatchResult) -> String {
    let mut out = format!("{}: {}", result.status, result.message);
    if !result.description.is_empty() {
        out.push_str(&format!(" ({})", result.description));
    }
    for (index, r) in result.results.iter().enumerate() {
        match (&r.status, &r.error) {
            (CommandStatus::Success, _) => {
                out.push_str(&format!("\n  {index:>3} ok     {}", r.command));
            }
            (CommandStatus::Error, err) => {
                out.push_str(&format!(
                    "\n  {index:>3} error  {}: {}",
                    r.command,
                    err.as_deref().unwrap_or("unknown error")
                ));
            }
        }
    }
    out
}

pub fn print_batch_result(result: &BatchResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", format_batch_text(result)),
        OutputFormat::Json => print_json(result)?,
    }
    Ok(())
}
