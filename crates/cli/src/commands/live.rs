// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live transport and song queries

use anyhow::Result;
use ob_adapters::UdpConnector;
use ob_core::OscConfig;
use ob_engine::LiveController;

use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

/// Queries listen on the reply port
fn controller(config: &OscConfig) -> LiveController<UdpConnector> {
    LiveController::new(UdpConnector::for_queries(config), config.reply_timeout())
}

/// Fire-and-forget commands send from an ephemeral port
fn sender(config: &OscConfig) -> LiveController<UdpConnector> {
    LiveController::new(UdpConnector::for_commands(config), config.reply_timeout())
}

pub async fn ping(config: &OscConfig, format: OutputFormat) -> Result<()> {
    let connected = controller(config).ping().await;
    match format {
        OutputFormat::Text => {
            if connected {
                println!("connected to AbletonOSC at {}", config.destination());
            } else {
                println!("no reply from AbletonOSC at {}", config.destination());
            }
        }
        OutputFormat::Json => print_json(&serde_json::json!({ "connected": connected }))?,
    }
    if connected {
        Ok(())
    } else {
        Err(ExitError::silent(1).into())
    }
}

pub async fn info(config: &OscConfig, format: OutputFormat) -> Result<()> {
    let info = controller(config).song_info().await?;
    match format {
        OutputFormat::Text => println!("{info}"),
        OutputFormat::Json => print_json(&info)?,
    }
    Ok(())
}

pub async fn set_playing(config: &OscConfig, playing: bool) -> Result<()> {
    sender(config).set_playing(playing).await?;
    Ok(())
}

pub async fn set_tempo(config: &OscConfig, bpm: f32) -> Result<()> {
    if !bpm.is_finite() || bpm <= 0.0 {
        return Err(ExitError::new(1, format!("invalid tempo: {bpm}")).into());
    }
    sender(config).set_tempo(bpm).await?;
    Ok(())
}
