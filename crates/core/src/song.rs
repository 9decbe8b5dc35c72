// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live set state read back from the device

use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of song-level properties of the running Live set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongInfo {
    pub tempo: f32,
    pub is_playing: bool,
    pub current_time: f32,
    pub scene_count: i32,
    pub track_count: i32,
    pub signature_numerator: i32,
    pub signature_denominator: i32,
}

impl SongInfo {
    /// Time signature as `4/4`
    pub fn time_signature(&self) -> String {
        format!("{}/{}", self.signature_numerator, self.signature_denominator)
    }
}

impl fmt::Display for SongInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tempo:     {:.2} bpm", self.tempo)?;
        writeln!(f, "signature: {}", self.time_signature())?;
        writeln!(f, "playing:   {}", if self.is_playing { "yes" } else { "no" })?;
        writeln!(f, "position:  {:.2} beats", self.current_time)?;
        writeln!(f, "tracks:    {}", self.track_count)?;
        write!(f, "scenes:    {}", self.scene_count)
    }
}
