// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application address derivation.
//!
//! An application's pseudo-account address is SHA-512/256 over the
//! literal prefix `appID` plus the 8-byte big-endian app id, rendered
//! in the standard checksum-encoded base32 text form.

use data_encoding::BASE32_NOPAD;
use sha2::{Digest, Sha512_256};

const APP_ID_PREFIX: &[u8] = b"appID";
const CHECKSUM_LEN: usize = 4;

/// Derive the canonical text address for an application id.
///
/// Deterministic and pure; the same id always yields the same
/// 58-character address.
pub fn app_address(app_id: u64) -> String {
    let mut hasher = Sha512_256::new();
    hasher.update(APP_ID_PREFIX);
    hasher.update(app_id.to_be_bytes());
    encode_address(&hasher.finalize())
}

/// Hex form of a box key, the stable identifier used when no app id
/// can be decoded from the box value.
pub fn hex_fallback_id(key: &[u8]) -> String {
    hex::encode(key)
}

fn encode_address(public_key: &[u8]) -> String {
    let checksum = Sha512_256::digest(public_key);
    let mut bytes = Vec::with_capacity(public_key.len() + CHECKSUM_LEN);
    bytes.extend_from_slice(public_key);
    bytes.extend_from_slice(&checksum[checksum.len() - CHECKSUM_LEN..]);
    BASE32_NOPAD.encode(&bytes)
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod tests;
