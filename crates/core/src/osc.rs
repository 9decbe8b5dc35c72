// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! OSC commands, arguments, and replies

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single OSC argument.
///
/// JSON numbers become `Int` when they are integral and fit in an `i32`,
/// and `Float` otherwise. This matches how the device-side tooling types
/// plain numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum OscArg {
    Int(i32),
    Float(f32),
    Str(String),
    Bool(bool),
}

impl OscArg {
    /// Map a JSON-style number onto the OSC numeric types.
    pub fn from_number(n: f64) -> Self {
        if n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX) {
            OscArg::Int(n as i32)
        } else {
            OscArg::Float(n as f32)
        }
    }

    /// Numeric value as `f32`, accepting ints.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            OscArg::Float(f) => Some(*f),
            OscArg::Int(i) => Some(*i as f32),
            _ => None,
        }
    }

    /// Numeric value as `i32`, truncating floats.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            OscArg::Int(i) => Some(*i),
            OscArg::Float(f) => Some(*f as i32),
            _ => None,
        }
    }

    /// Truthiness: bools as-is, ints non-zero.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OscArg::Bool(b) => Some(*b),
            OscArg::Int(i) => Some(*i != 0),
            _ => None,
        }
    }
}

impl fmt::Display for OscArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OscArg::Int(i) => write!(f, "{i}"),
            OscArg::Float(v) => write!(f, "{v}"),
            OscArg::Str(s) => write!(f, "{s:?}"),
            OscArg::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<i32> for OscArg {
    fn from(v: i32) -> Self {
        OscArg::Int(v)
    }
}

impl From<f32> for OscArg {
    fn from(v: f32) -> Self {
        OscArg::Float(v)
    }
}

impl From<bool> for OscArg {
    fn from(v: bool) -> Self {
        OscArg::Bool(v)
    }
}

impl From<&str> for OscArg {
    fn from(v: &str) -> Self {
        OscArg::Str(v.to_string())
    }
}

impl From<String> for OscArg {
    fn from(v: String) -> Self {
        OscArg::Str(v)
    }
}

impl Serialize for OscArg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OscArg::Int(i) => serializer.serialize_i32(*i),
            OscArg::Float(f) => serializer.serialize_f32(*f),
            OscArg::Str(s) => serializer.serialize_str(s),
            OscArg::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

struct OscArgVisitor;

impl<'de> Visitor<'de> for OscArgVisitor {
    type Value = OscArg;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, or boolean")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<OscArg, E> {
        Ok(OscArg::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<OscArg, E> {
        Ok(match i32::try_from(v) {
            Ok(i) => OscArg::Int(i),
            Err(_) => OscArg::Float(v as f32),
        })
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<OscArg, E> {
        Ok(match i32::try_from(v) {
            Ok(i) => OscArg::Int(i),
            Err(_) => OscArg::Float(v as f32),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<OscArg, E> {
        Ok(OscArg::from_number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<OscArg, E> {
        Ok(OscArg::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<OscArg, E> {
        Ok(OscArg::Str(v))
    }
}

impl<'de> Deserialize<'de> for OscArg {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OscArgVisitor)
    }
}

/// One OSC message to send: an address pattern plus ordered arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub path: String,
    #[serde(default)]
    pub args: Vec<OscArg>,
}

impl Command {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), args: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<OscArg>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_args(path: impl Into<String>, args: Vec<OscArg>) -> Self {
        Self { path: path.into(), args }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// An ordered group of commands submitted together with a statement of intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub commands: Vec<Command>,
    pub description: String,
}

impl Batch {
    pub fn new(description: impl Into<String>, commands: Vec<Command>) -> Self {
        Self { commands, description: description.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Parse a batch from its inbound JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// An OSC message received from the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub address: String,
    #[serde(default)]
    pub args: Vec<OscArg>,
}

impl Reply {
    pub fn new(address: impl Into<String>, args: Vec<OscArg>) -> Self {
        Self { address: address.into(), args }
    }

    pub fn first(&self) -> Option<&OscArg> {
        self.args.first()
    }
}

#[cfg(test)]
#[path = "osc_tests.rs"]
mod tests;
