// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ABI tuple codec for agent-registry box values.
//!
//! Box layout: `(string,string,uint64,uint64,uint64,string)` read
//! positionally as `[name, details, fixed_pricing, created_at, app_id,
//! creator_name]`. Strings are u16 big-endian length-prefixed tails
//! addressed by u16 big-endian offsets in the head segment; the three
//! uint64 fields sit inline in the head as 8-byte big-endian words.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod tuple;

pub use tuple::{decode_agent_tuple, encode_agent_tuple, AbiError, AgentTuple, TUPLE_HEAD_LEN};
