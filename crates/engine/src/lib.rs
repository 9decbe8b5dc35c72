// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ob-engine: runs command batches and live queries against the OSC link

mod executor;
mod live;
mod pacing;

pub use executor::BatchExecutor;
pub use live::{LiveController, LiveError};
pub use pacing::{FixedDelay, NoPacing, Pacer};
