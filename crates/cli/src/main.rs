// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ob: drive Ableton Live over OSC

mod commands;
mod env;
mod exit_error;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ob_core::OscConfig;
use std::path::PathBuf;

use commands::exec::ExecArgs;
use exit_error::{ExitError, EXIT_USAGE};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "ob", version, about = "Send OSC command batches to Ableton Live")]
struct Cli {
    /// Config file (default: $OB_CONFIG, then <config dir>/ob/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Host running AbletonOSC
    #[arg(long, global = true)]
    host: Option<String>,

    /// AbletonOSC listen port
    #[arg(long, global = true)]
    port: Option<u16>,

    #[arg(short = 'o', long = "output", value_enum, global = true, default_value_t)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a batch of OSC commands in order
    Exec(ExecArgs),
    /// Check whether AbletonOSC answers
    Ping,
    /// Show tempo, signature, transport and set size
    Info,
    /// Start playback
    Play,
    /// Stop playback
    Stop,
    /// Set the song tempo
    Tempo {
        /// Beats per minute
        #[arg(allow_negative_numbers = true)]
        bpm: f32,
    },
}

impl Cli {
    fn config(&self) -> Result<OscConfig> {
        let mut config = env::resolve_config(self.config.as_deref())?;
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        Ok(config)
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.config()?;
    tracing::debug!(?config, "resolved config");
    let format = cli.output;

    match cli.command {
        Command::Exec(args) => commands::exec::handle(args, &config, format).await,
        Command::Ping => commands::live::ping(&config, format).await,
        Command::Info => commands::live::info(&config, format).await,
        Command::Play => commands::live::set_playing(&config, true).await,
        Command::Stop => commands::live::set_playing(&config, false).await,
        Command::Tempo { bpm } => commands::live::set_tempo(&config, bpm).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout with exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(EXIT_USAGE);
        }
    };
    let log_guard = logging::init();

    if let Err(e) = run(cli).await {
        let code = match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("error: {}", exit.message);
                }
                exit.code
            }
            None => {
                eprintln!("error: {e:#}");
                1
            }
        };
        drop(log_guard);
        std::process::exit(code);
    }
}
