// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Strict decoder and canonical encoder for the agent box tuple.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size of the tuple head segment: two string offsets, three inline
/// uint64 words, one more string offset.
pub const TUPLE_HEAD_LEN: usize = 2 + 2 + 8 + 8 + 8 + 2;

/// Decoded agent box tuple, fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentTuple {
    pub name: String,
    pub details: String,
    pub fixed_pricing: u64,
    pub created_at: u64,
    pub app_id: u64,
    pub creator_name: String,
}

impl AgentTuple {
    /// Application id in decimal string form.
    pub fn app_id_decimal(&self) -> String {
        self.app_id.to_string()
    }

    /// Fixed pricing in decimal string form.
    pub fn fixed_pricing_decimal(&self) -> String {
        self.fixed_pricing.to_string()
    }
}

/// Errors from strict tuple decoding or encoding
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AbiError {
    #[error("buffer too short for tuple head: {len} bytes, need {TUPLE_HEAD_LEN}")]
    TooShort { len: usize },
    #[error("string offset {offset} out of bounds (buffer is {len} bytes)")]
    OffsetOutOfBounds { offset: usize, len: usize },
    #[error("string at offset {offset} overruns buffer ({payload_len} payload bytes, buffer is {len} bytes)")]
    StringOverrun {
        offset: usize,
        payload_len: usize,
        len: usize,
    },
    #[error("tuple tail ends at byte {end} but buffer is {len} bytes")]
    TailMismatch { end: usize, len: usize },
    #[error("string at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },
    #[error("string of {len} bytes exceeds the u16 length prefix")]
    StringTooLong { len: usize },
    #[error("encoded tuple of {len} bytes exceeds the u16 offset range")]
    TupleTooLarge { len: usize },
}

/// Decode a box value against the fixed agent tuple schema.
///
/// Every offset and string payload must land inside the buffer and the
/// furthest tail byte must be the last byte of the buffer; anything
/// else is a malformed box and the caller falls back to the heuristic
/// scanner.
pub fn decode_agent_tuple(buf: &[u8]) -> Result<AgentTuple, AbiError> {
    if buf.len() < TUPLE_HEAD_LEN {
        return Err(AbiError::TooShort { len: buf.len() });
    }

    let name_off = read_u16(buf, 0) as usize;
    let details_off = read_u16(buf, 2) as usize;
    let fixed_pricing = read_u64(buf, 4);
    let created_at = read_u64(buf, 12);
    let app_id = read_u64(buf, 20);
    let creator_off = read_u16(buf, 28) as usize;

    let (name, name_end) = read_string(buf, name_off)?;
    let (details, details_end) = read_string(buf, details_off)?;
    let (creator_name, creator_end) = read_string(buf, creator_off)?;

    let end = name_end.max(details_end).max(creator_end);
    if end != buf.len() {
        return Err(AbiError::TailMismatch { end, len: buf.len() });
    }

    Ok(AgentTuple {
        name,
        details,
        fixed_pricing,
        created_at,
        app_id,
        creator_name,
    })
}

/// Encode a tuple into the canonical box layout.
///
/// Tails are laid out in declaration order directly after the head.
pub fn encode_agent_tuple(tuple: &AgentTuple) -> Result<Vec<u8>, AbiError> {
    for s in [&tuple.name, &tuple.details, &tuple.creator_name] {
        if s.len() > u16::MAX as usize {
            return Err(AbiError::StringTooLong { len: s.len() });
        }
    }

    let name_off = TUPLE_HEAD_LEN;
    let details_off = name_off + 2 + tuple.name.len();
    let creator_off = details_off + 2 + tuple.details.len();
    let total = creator_off + 2 + tuple.creator_name.len();
    if creator_off > u16::MAX as usize {
        return Err(AbiError::TupleTooLarge { len: total });
    }

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&(name_off as u16).to_be_bytes());
    out.extend_from_slice(&(details_off as u16).to_be_bytes());
    out.extend_from_slice(&tuple.fixed_pricing.to_be_bytes());
    out.extend_from_slice(&tuple.created_at.to_be_bytes());
    out.extend_from_slice(&tuple.app_id.to_be_bytes());
    out.extend_from_slice(&(creator_off as u16).to_be_bytes());
    for s in [&tuple.name, &tuple.details, &tuple.creator_name] {
        out.extend_from_slice(&(s.len() as u16).to_be_bytes());
        out.extend_from_slice(s.as_bytes());
    }
    Ok(out)
}

// Callers guarantee `at + 2 <= buf.len()`.
fn read_u16(buf: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([buf[at], buf[at + 1]])
}

// Callers guarantee `at + 8 <= buf.len()`.
fn read_u64(buf: &[u8], at: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&buf[at..at + 8]);
    u64::from_be_bytes(word)
}

fn read_string(buf: &[u8], off: usize) -> Result<(String, usize), AbiError> {
    if off + 2 > buf.len() {
        return Err(AbiError::OffsetOutOfBounds {
            offset: off,
            len: buf.len(),
        });
    }
    let payload_len = read_u16(buf, off) as usize;
    let end = off + 2 + payload_len;
    if end > buf.len() {
        return Err(AbiError::StringOverrun {
            offset: off,
            payload_len,
            len: buf.len(),
        });
    }
    let text = std::str::from_utf8(&buf[off + 2..end])
        .map_err(|_| AbiError::InvalidUtf8 { offset: off })?;
    Ok((text.to_string(), end))
}

#[cfg(test)]
#[path = "tuple_tests.rs"]
mod tests;
