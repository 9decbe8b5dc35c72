// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Batch, Command};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for commands and batches.
pub mod strategies {
    use crate::{Batch, Command, OscArg};
    use proptest::prelude::*;

    pub fn arb_osc_arg() -> impl Strategy<Value = OscArg> {
        prop_oneof![
            any::<i32>().prop_map(OscArg::Int),
            (-1.0e4f32..1.0e4f32).prop_map(OscArg::Float),
            "[a-zA-Z0-9 ]{0,12}".prop_map(OscArg::Str),
            any::<bool>().prop_map(OscArg::Bool),
        ]
    }

    pub fn arb_command() -> impl Strategy<Value = Command> {
        ("/live/[a-z_]{1,8}/[a-z_]{1,12}", prop::collection::vec(arb_osc_arg(), 0..4))
            .prop_map(|(path, args)| Command::with_args(path, args))
    }

    pub fn arb_batch(max_len: usize) -> impl Strategy<Value = Batch> {
        prop::collection::vec(arb_command(), 0..max_len)
            .prop_map(|commands| Batch::new("generated", commands))
    }
}

// ── Command factory functions ───────────────────────────────────────────────

pub fn create_audio_track() -> Command {
    Command::new("/live/song/create_audio_track").arg(-1)
}

pub fn set_track_name(track: i32, name: &str) -> Command {
    Command::new("/live/track/set/name").arg(track).arg(name)
}

pub fn set_tempo(bpm: f32) -> Command {
    Command::new("/live/song/set/tempo").arg(bpm)
}

pub fn batch(description: &str, commands: Vec<Command>) -> Batch {
    Batch::new(description, commands)
}
