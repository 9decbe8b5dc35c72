// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ob-core: data model for driving Ableton Live over OSC

pub mod config;
pub mod osc;
pub mod result;
pub mod song;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{default_config_path, ConfigError, OscConfig};
pub use osc::{Batch, Command, OscArg, Reply};
pub use result::{BatchResult, BatchStatus, CommandResult, CommandStatus, Summary};
pub use song::SongInfo;
