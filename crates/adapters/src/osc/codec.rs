// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conversion between commands/replies and OSC datagrams.
//!
//! Wire format: one OSC 1.0 message per UDP datagram.

use super::OscError;
use ob_core::{Command, OscArg, Reply};
use rosc::{OscMessage, OscPacket, OscType};

pub fn to_osc_type(arg: &OscArg) -> OscType {
    match arg {
        OscArg::Int(i) => OscType::Int(*i),
        OscArg::Float(f) => OscType::Float(*f),
        OscArg::Str(s) => OscType::String(s.clone()),
        OscArg::Bool(b) => OscType::Bool(*b),
    }
}

pub fn from_osc_type(arg: OscType) -> Result<OscArg, OscError> {
    match arg {
        OscType::Int(i) => Ok(OscArg::Int(i)),
        OscType::Float(f) => Ok(OscArg::Float(f)),
        OscType::String(s) => Ok(OscArg::Str(s)),
        OscType::Bool(b) => Ok(OscArg::Bool(b)),
        OscType::Double(d) => Ok(OscArg::Float(d as f32)),
        OscType::Long(l) => Ok(match i32::try_from(l) {
            Ok(i) => OscArg::Int(i),
            Err(_) => OscArg::Float(l as f32),
        }),
        other => Err(OscError::Decode(format!("unsupported argument type: {other:?}"))),
    }
}

/// Encode a command as a single OSC message datagram.
pub fn encode(command: &Command) -> Result<Vec<u8>, OscError> {
    if command.path.is_empty() {
        return Err(OscError::EmptyAddress);
    }
    let packet = OscPacket::Message(OscMessage {
        addr: command.path.clone(),
        args: command.args.iter().map(to_osc_type).collect(),
    });
    rosc::encoder::encode(&packet)
        .map_err(|e| OscError::Encode { address: command.path.clone(), reason: format!("{e:?}") })
}

/// Decode a datagram into a reply. Bundles yield their first message.
pub fn decode(datagram: &[u8]) -> Result<Reply, OscError> {
    let (_, packet) =
        rosc::decoder::decode_udp(datagram).map_err(|e| OscError::Decode(format!("{e:?}")))?;
    let message = first_message(packet)
        .ok_or_else(|| OscError::Decode("bundle contains no messages".to_string()))?;
    let args = message.args.into_iter().map(from_osc_type).collect::<Result<Vec<_>, _>>()?;
    Ok(Reply::new(message.addr, args))
}

fn first_message(packet: OscPacket) -> Option<OscMessage> {
    match packet {
        OscPacket::Message(msg) => Some(msg),
        OscPacket::Bundle(bundle) => bundle.content.into_iter().find_map(first_message),
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
