// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for the outside world: the OSC link to Ableton Live

pub mod osc;

pub use osc::{OscConnector, OscError, OscTransport, UdpConnector, UdpTransport};

#[cfg(any(test, feature = "test-support"))]
pub use osc::{ConnectorCall, FakeOscConnector, FakeOscTransport};
