// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! UDP OSC client

use super::{codec, OscConnector, OscError, OscTransport};
use async_trait::async_trait;
use ob_core::{Command, OscConfig, Reply};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;

/// Largest datagram we accept from the device
const MAX_DATAGRAM: usize = 65_536;

/// Connector that opens a fresh UDP socket per client.
///
/// The destination is resolved on every connect so a host name that stops
/// resolving surfaces as a connect failure rather than a send failure.
#[derive(Clone, Debug)]
pub struct UdpConnector {
    destination: String,
    bind: SocketAddr,
}

impl UdpConnector {
    /// Send to `destination` (`host:port`) from an ephemeral local port.
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
        }
    }

    /// Bind the local socket to `bind` instead of an ephemeral port.
    pub fn bind_to(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    /// Connector for fire-and-forget batches.
    pub fn for_commands(config: &OscConfig) -> Self {
        Self::new(config.destination())
    }

    /// Connector for request/reply queries: listens on the reply port.
    pub fn for_queries(config: &OscConfig) -> Self {
        Self::new(config.destination())
            .bind_to(SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.reply_port)))
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    async fn resolve(&self) -> Result<SocketAddr, OscError> {
        let resolve_err = |reason: String| OscError::Resolve {
            target: self.destination.clone(),
            reason,
        };
        let addrs: Vec<SocketAddr> = tokio::net::lookup_host(&self.destination)
            .await
            .map_err(|e| resolve_err(e.to_string()))?
            .collect();
        // Stay in the bind socket's address family
        addrs
            .iter()
            .find(|a| a.is_ipv4() == self.bind.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| resolve_err("no addresses".to_string()))
    }
}

#[async_trait]
impl OscConnector for UdpConnector {
    type Transport = UdpTransport;

    async fn connect(&self) -> Result<UdpTransport, OscError> {
        let destination = self.resolve().await?;
        let socket = UdpSocket::bind(self.bind)
            .await
            .map_err(|e| OscError::Bind { addr: self.bind.to_string(), reason: e.to_string() })?;
        tracing::debug!(
            local = ?socket.local_addr().ok(),
            %destination,
            "opened OSC client"
        );
        Ok(UdpTransport { socket, destination })
    }
}

/// An open UDP socket paired with its destination
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    destination: SocketAddr,
}

#[async_trait]
impl OscTransport for UdpTransport {
    async fn send(&self, command: &Command) -> Result<(), OscError> {
        let datagram = codec::encode(command)?;
        let sent = self
            .socket
            .send_to(&datagram, self.destination)
            .await
            .map_err(|e| OscError::Send(e.to_string()))?;
        if sent != datagram.len() {
            return Err(OscError::Send(format!(
                "short write: {sent} of {} bytes",
                datagram.len()
            )));
        }
        Ok(())
    }

    async fn recv(&self, timeout: Duration) -> Result<Reply, OscError> {
        let mut buf = vec![0u8; MAX_DATAGRAM];
        let (len, from) = tokio::time::timeout(timeout, self.socket.recv_from(&mut buf))
            .await
            .map_err(|_| OscError::Timeout(timeout))?
            .map_err(|e| OscError::Receive(e.to_string()))?;
        let reply = codec::decode(&buf[..len])?;
        tracing::trace!(%from, address = %reply.address, "received OSC reply");
        Ok(reply)
    }

    fn close(self) {
        tracing::debug!(destination = %self.destination, "closed OSC client");
    }
}

#[cfg(test)]
#[path = "udp_tests.rs"]
mod tests;
