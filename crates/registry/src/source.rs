// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Boundary toward the chain fetch layer.
//!
//! The actual network clients live outside this workspace; the
//! registry only needs something that lists box keys and fetches box
//! values, injected so tests can substitute an in-memory double.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the box fetch layer
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("box source unavailable: {0}")]
    Unavailable(String),
    #[error("box not found: {0}")]
    NotFound(String),
}

/// Adapter over an application's box storage.
#[async_trait]
pub trait BoxSource: Send + Sync {
    /// List the raw box keys of the registry application.
    async fn list_keys(&self) -> Result<Vec<Vec<u8>>, SourceError>;

    /// Fetch the raw value stored under a box key.
    async fn fetch_value(&self, key: &[u8]) -> Result<Vec<u8>, SourceError>;
}

/// Parse a box key as the registry's 8-byte big-endian box index.
///
/// Keys of any other length yield `None`.
pub fn box_index(key: &[u8]) -> Option<u64> {
    let bytes: [u8; 8] = key.try_into().ok()?;
    Some(u64::from_be_bytes(bytes))
}
