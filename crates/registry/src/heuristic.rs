// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort string extraction from a box whose layout is unknown.
//!
//! The registry contract never confirmed the strict tuple schema
//! against real chain data, so this scanner exists as an independent
//! strategy: walk the buffer looking for u16-BE length-prefixed runs
//! of printable ASCII and collect them in scan order.

/// Candidate lengths must stay below this; longer runs are treated as
/// coincidental binary data, not text.
const MAX_CANDIDATE_LEN: usize = 200;

const PRINTABLE_MIN: u8 = 32;
const PRINTABLE_MAX: u8 = 126;

/// Scan a buffer for length-prefixed printable strings.
///
/// At each position the next two bytes are read as a big-endian length
/// `L`. The candidate is accepted only if `0 < L < 200`, the payload
/// fits in the buffer, and every payload byte is printable ASCII. On
/// accept the scan skips past the consumed bytes; on reject it
/// advances one byte. Total function: any input yields a (possibly
/// empty) list, never a panic.
pub fn scan_strings(buf: &[u8]) -> Vec<String> {
    let mut found = Vec::new();
    let mut pos = 0;

    while pos + 2 <= buf.len() {
        let candidate_len = u16::from_be_bytes([buf[pos], buf[pos + 1]]) as usize;
        if candidate_len > 0
            && candidate_len < MAX_CANDIDATE_LEN
            && pos + 2 + candidate_len <= buf.len()
        {
            let payload = &buf[pos + 2..pos + 2 + candidate_len];
            if payload.iter().all(|b| (PRINTABLE_MIN..=PRINTABLE_MAX).contains(b)) {
                // Printable ASCII is always valid UTF-8
                found.push(String::from_utf8_lossy(payload).into_owned());
                pos += 2 + candidate_len;
                continue;
            }
        }
        pos += 1;
    }

    found
}

#[cfg(test)]
#[path = "heuristic_tests.rs"]
mod tests;
