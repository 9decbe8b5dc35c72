// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! OSC link adapters

pub mod codec;
mod udp;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake;

use async_trait::async_trait;
use ob_core::{Command, Reply};
use std::time::Duration;
use thiserror::Error;

pub use udp::{UdpConnector, UdpTransport};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ConnectorCall, FakeOscConnector, FakeOscTransport};

/// Errors from OSC operations
#[derive(Debug, Error)]
pub enum OscError {
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
    #[error("failed to resolve {target}: {reason}")]
    Resolve { target: String, reason: String },
    #[error("failed to encode {address}: {reason}")]
    Encode { address: String, reason: String },
    #[error("send failed: {0}")]
    Send(String),
    #[error("receive failed: {0}")]
    Receive(String),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("no reply within {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("empty OSC address")]
    EmptyAddress,
}

/// Opens short-lived OSC clients against a fixed destination
#[async_trait]
pub trait OscConnector: Clone + Send + Sync + 'static {
    type Transport: OscTransport;

    /// Open a client. Failure here means nothing can be sent.
    async fn connect(&self) -> Result<Self::Transport, OscError>;
}

/// An open OSC client
#[async_trait]
pub trait OscTransport: Send + Sync + 'static {
    /// Send one command as a single OSC message.
    ///
    /// Returns once the datagram has been handed to the network stack.
    async fn send(&self, command: &Command) -> Result<(), OscError>;

    /// Wait up to `timeout` for the next inbound message.
    async fn recv(&self, timeout: Duration) -> Result<Reply, OscError>;

    /// Release the client.
    fn close(self);
}
