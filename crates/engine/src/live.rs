// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request/reply operations against AbletonOSC

use ob_adapters::{OscConnector, OscError, OscTransport};
use ob_core::{Command, OscArg, Reply, SongInfo};
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

pub mod paths {
    pub const TEST: &str = "/live/test";
    pub const TEMPO: &str = "/live/song/get/tempo";
    pub const IS_PLAYING: &str = "/live/song/get/is_playing";
    pub const CURRENT_TIME: &str = "/live/song/get/current_song_time";
    pub const SIGNATURE_NUMERATOR: &str = "/live/song/get/signature_numerator";
    pub const SIGNATURE_DENOMINATOR: &str = "/live/song/get/signature_denominator";
    pub const NUM_SCENES: &str = "/live/song/get/num_scenes";
    pub const NUM_TRACKS: &str = "/live/song/get/num_tracks";
    pub const START_PLAYING: &str = "/live/song/start_playing";
    pub const STOP_PLAYING: &str = "/live/song/stop_playing";
    pub const SET_TEMPO: &str = "/live/song/set/tempo";
}

#[derive(Debug, Error)]
pub enum LiveError {
    #[error(transparent)]
    Osc(#[from] OscError),
    #[error("unexpected reply to {query}: expected {expected}")]
    UnexpectedReply { query: &'static str, expected: &'static str },
}

/// Talks to Live through short-lived clients, one per operation.
pub struct LiveController<C> {
    connector: C,
    reply_timeout: Duration,
}

impl<C: OscConnector> LiveController<C> {
    pub fn new(connector: C, reply_timeout: Duration) -> Self {
        Self { connector, reply_timeout }
    }

    /// Whether AbletonOSC answers at all.
    ///
    /// Tries `/live/test` first, then a tempo query. Any decodable reply
    /// counts, including a late answer to the first probe. Failing to open
    /// the client or to send counts as not connected.
    pub async fn ping(&self) -> bool {
        let transport = match self.connector.connect().await {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!(error = %e, "ping: could not open client");
                return false;
            }
        };
        let mut connected = false;
        for probe in [paths::TEST, paths::TEMPO] {
            let answered = match transport.send(&Command::new(probe)).await {
                Ok(()) => self.await_reply(&transport, None).await,
                Err(e) => Err(e.into()),
            };
            match answered {
                Ok(_) => {
                    connected = true;
                    break;
                }
                Err(LiveError::Osc(OscError::Timeout(_))) => continue,
                Err(e) => {
                    tracing::debug!(probe, error = %e, "ping failed");
                    break;
                }
            }
        }
        transport.close();
        connected
    }

    pub async fn song_info(&self) -> Result<SongInfo, LiveError> {
        let transport = self.connector.connect().await?;
        let info = self.read_song_info(&transport).await;
        transport.close();
        info
    }

    pub async fn set_playing(&self, playing: bool) -> Result<(), LiveError> {
        let path = if playing { paths::START_PLAYING } else { paths::STOP_PLAYING };
        self.send_one(Command::new(path)).await
    }

    pub async fn set_tempo(&self, bpm: f32) -> Result<(), LiveError> {
        self.send_one(Command::new(paths::SET_TEMPO).arg(bpm)).await
    }

    async fn send_one(&self, command: Command) -> Result<(), LiveError> {
        let transport = self.connector.connect().await?;
        let sent = transport.send(&command).await;
        transport.close();
        tracing::info!(command = %command, ok = sent.is_ok(), "sent live command");
        Ok(sent?)
    }

    async fn read_song_info(&self, transport: &C::Transport) -> Result<SongInfo, LiveError> {
        let tempo = self.query_value(transport, paths::TEMPO, OscArg::as_f32, "float").await?;
        let is_playing =
            self.query_value(transport, paths::IS_PLAYING, OscArg::as_bool, "bool").await?;
        let current_time =
            self.query_value(transport, paths::CURRENT_TIME, OscArg::as_f32, "float").await?;
        let signature_numerator = self
            .query(transport, paths::SIGNATURE_NUMERATOR)
            .await?
            .first()
            .and_then(OscArg::as_i32)
            .unwrap_or(4);
        let signature_denominator = self
            .query(transport, paths::SIGNATURE_DENOMINATOR)
            .await?
            .first()
            .and_then(OscArg::as_i32)
            .unwrap_or(4);
        let scene_count =
            self.query_value(transport, paths::NUM_SCENES, OscArg::as_i32, "integer").await?;
        let track_count =
            self.query_value(transport, paths::NUM_TRACKS, OscArg::as_i32, "integer").await?;

        Ok(SongInfo {
            tempo,
            is_playing,
            current_time,
            scene_count,
            track_count,
            signature_numerator,
            signature_denominator,
        })
    }

    async fn query_value<T>(
        &self,
        transport: &C::Transport,
        query: &'static str,
        extract: fn(&OscArg) -> Option<T>,
        expected: &'static str,
    ) -> Result<T, LiveError> {
        let reply = self.query(transport, query).await?;
        reply.first().and_then(extract).ok_or(LiveError::UnexpectedReply { query, expected })
    }

    /// Send `address` and wait for the reply carrying the same address.
    async fn query(&self, transport: &C::Transport, address: &str) -> Result<Reply, LiveError> {
        transport.send(&Command::new(address)).await?;
        self.await_reply(transport, Some(address)).await
    }

    /// Wait for a reply, addressed to `address` when given. Unrelated or
    /// undecodable datagrams are skipped until the timeout.
    async fn await_reply(
        &self,
        transport: &C::Transport,
        address: Option<&str>,
    ) -> Result<Reply, LiveError> {
        let deadline = Instant::now() + self.reply_timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(OscError::Timeout(self.reply_timeout).into());
            }
            match transport.recv(remaining).await {
                Ok(reply) if address.is_none_or(|a| reply.address == a) => return Ok(reply),
                Ok(reply) => {
                    tracing::trace!(expected = ?address, got = %reply.address, "skipping reply")
                }
                Err(OscError::Decode(e)) => {
                    tracing::debug!(error = %e, "skipping undecodable datagram")
                }
                Err(OscError::Timeout(_)) => {
                    return Err(OscError::Timeout(self.reply_timeout).into())
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
#[path = "live_tests.rs"]
mod tests;
