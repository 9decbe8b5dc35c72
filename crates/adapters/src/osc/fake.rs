// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scriptable in-memory OSC link for tests

use super::{OscConnector, OscError, OscTransport};
use async_trait::async_trait;
use ob_core::{Command, OscArg, Reply};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use std::time::Duration;

/// Recorded connector activity, in order
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectorCall {
    Connect,
    Send(Command),
    Close,
}

#[derive(Default)]
struct FakeOscState {
    calls: Vec<ConnectorCall>,
    connect_error: Option<String>,
    failing_paths: HashMap<String, String>,
    failing_sends: HashSet<usize>,
    sends_attempted: usize,
    responders: HashMap<String, Vec<OscArg>>,
    inbox: VecDeque<Reply>,
}

/// Fake connector for testing
#[derive(Clone, Default)]
pub struct FakeOscConnector {
    inner: Arc<Mutex<FakeOscState>>,
}

impl FakeOscConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every connect attempt fail
    pub fn fail_connect(&self, reason: &str) {
        self.inner.lock().connect_error = Some(reason.to_string());
    }

    /// Make every send to `path` fail with `reason`
    pub fn fail_path(&self, path: &str, reason: &str) {
        self.inner.lock().failing_paths.insert(path.to_string(), reason.to_string());
    }

    /// Make the nth send (0-based, across all clients) fail
    pub fn fail_send(&self, index: usize) {
        self.inner.lock().failing_sends.insert(index);
    }

    /// Answer each successful send to `path` with a reply carrying `args`
    pub fn respond(&self, path: &str, args: Vec<OscArg>) {
        self.inner.lock().responders.insert(path.to_string(), args);
    }

    /// Queue an unsolicited inbound message
    pub fn push_reply(&self, reply: Reply) {
        self.inner.lock().inbox.push_back(reply);
    }

    pub fn calls(&self) -> Vec<ConnectorCall> {
        self.inner.lock().calls.clone()
    }

    /// Commands that were sent successfully
    pub fn sent(&self) -> Vec<Command> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                ConnectorCall::Send(cmd) => Some(cmd.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn connect_count(&self) -> usize {
        self.count(|c| matches!(c, ConnectorCall::Connect))
    }

    pub fn close_count(&self) -> usize {
        self.count(|c| matches!(c, ConnectorCall::Close))
    }

    fn count(&self, pred: impl Fn(&ConnectorCall) -> bool) -> usize {
        self.inner.lock().calls.iter().filter(|c| pred(c)).count()
    }
}

#[async_trait]
impl OscConnector for FakeOscConnector {
    type Transport = FakeOscTransport;

    async fn connect(&self) -> Result<FakeOscTransport, OscError> {
        let mut state = self.inner.lock();
        if let Some(reason) = &state.connect_error {
            return Err(OscError::Bind { addr: "fake".to_string(), reason: reason.clone() });
        }
        state.calls.push(ConnectorCall::Connect);
        Ok(FakeOscTransport { inner: Arc::clone(&self.inner) })
    }
}

/// Transport handed out by [`FakeOscConnector`]
pub struct FakeOscTransport {
    inner: Arc<Mutex<FakeOscState>>,
}

#[async_trait]
impl OscTransport for FakeOscTransport {
    async fn send(&self, command: &Command) -> Result<(), OscError> {
        let mut state = self.inner.lock();
        let index = state.sends_attempted;
        state.sends_attempted += 1;

        if command.path.is_empty() {
            return Err(OscError::EmptyAddress);
        }
        if let Some(reason) = state.failing_paths.get(&command.path) {
            return Err(OscError::Send(reason.clone()));
        }
        if state.failing_sends.contains(&index) {
            return Err(OscError::Send(format!("send {index} failed")));
        }

        state.calls.push(ConnectorCall::Send(command.clone()));
        if let Some(args) = state.responders.get(&command.path).cloned() {
            state.inbox.push_back(Reply::new(command.path.clone(), args));
        }
        Ok(())
    }

    async fn recv(&self, timeout: Duration) -> Result<Reply, OscError> {
        self.inner.lock().inbox.pop_front().ok_or(OscError::Timeout(timeout))
    }

    fn close(self) {
        self.inner.lock().calls.push(ConnectorCall::Close);
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
