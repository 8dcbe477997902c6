// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! adx-registry: agent listing over box storage.
//!
//! Bridges the box-source boundary (keys and raw values fetched from
//! chain storage) to `AgentRecord` values: strict ABI decode first,
//! heuristic string scan as the fallback, placeholder defaults last.
//! A single undecodable or unfetchable box never fails the listing.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod assemble;
mod heuristic;
mod listing;
mod source;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use assemble::assemble_record;
pub use heuristic::scan_strings;
pub use listing::Registry;
pub use source::{box_index, BoxSource, SourceError};
