// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assembly of one `AgentRecord` per box entry.
//!
//! Strategy order: strict ABI decode, then heuristic scan merged over
//! the placeholder defaults. The id and address are always populated —
//! from the decoded app id when the strict decode succeeds, otherwise
//! from the hex-encoded box key, so repeated decoding of the same
//! entry is stable.

use adx_abi::decode_agent_tuple;
use adx_core::{
    app_address, hex_fallback_id, iso_instant_ms, iso_instant_secs, AgentRecord, AgentStatus,
    Clock,
};

use crate::heuristic::scan_strings;

/// Decode a single box entry into a record.
///
/// Pure function of `(key, value, clock)`; the clock only supplies the
/// `created_at` default when the box carries no usable timestamp.
pub fn assemble_record(key: &[u8], value: &[u8], clock: &impl Clock) -> AgentRecord {
    let now_iso = || {
        iso_instant_ms(clock.epoch_ms())
            .unwrap_or_else(|| "1970-01-01T00:00:00.000Z".to_string())
    };

    match decode_agent_tuple(value) {
        Ok(tuple) => {
            let address = app_address(tuple.app_id);
            let created_at = iso_instant_secs(tuple.created_at).unwrap_or_else(now_iso);
            let mut record =
                AgentRecord::placeholder(tuple.app_id_decimal(), address, created_at);
            if !tuple.name.is_empty() {
                record.name = tuple.name;
            }
            if !tuple.details.is_empty() {
                record.description = tuple.details;
            }
            if !tuple.creator_name.is_empty() {
                record.creator_name = tuple.creator_name;
            }
            record
        }
        Err(err) => {
            tracing::debug!(
                key = %hex_fallback_id(key),
                error = %err,
                "strict decode failed, falling back to heuristic scan"
            );
            let id = fallback_id(key);
            let mut record = AgentRecord::placeholder(id.clone(), id, now_iso());
            merge_found_strings(&mut record, scan_strings(value));
            record
        }
    }
}

// Hex of the box key; "0" for the degenerate empty key so the id and
// address invariant holds on any input.
fn fallback_id(key: &[u8]) -> String {
    let id = hex_fallback_id(key);
    if id.is_empty() {
        "0".to_string()
    } else {
        id
    }
}

fn merge_found_strings(record: &mut AgentRecord, found: Vec<String>) {
    let mut found = found.into_iter();
    if let Some(name) = found.next() {
        record.name = name;
    }
    if let Some(description) = found.next() {
        record.description = description;
    }
    if let Some(status) = found.next() {
        if let Some(status) = AgentStatus::parse(&status) {
            record.status = status;
        }
    }
}

#[cfg(test)]
#[path = "assemble_tests.rs"]
mod tests;
