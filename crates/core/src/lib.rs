// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! adx-core: domain model for the agent-registry decoder

pub mod address;
pub mod clock;
pub mod record;
pub mod time_fmt;

pub use address::{app_address, hex_fallback_id};
pub use clock::{Clock, FakeClock, SystemClock};
pub use record::{
    placeholder_name, AgentRecord, AgentStatus, DEFAULT_CREATOR, DEFAULT_DESCRIPTION,
};
pub use time_fmt::{iso_instant_ms, iso_instant_secs};
