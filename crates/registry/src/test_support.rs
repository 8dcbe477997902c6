// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory box source double for tests.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::source::{BoxSource, SourceError};

/// In-memory `BoxSource` with scriptable failures.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    boxes: Vec<(Vec<u8>, Vec<u8>)>,
    failing_keys: HashSet<Vec<u8>>,
    listing_fails: bool,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a box entry, keyed in insertion order.
    pub fn with_box(mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        self.boxes.push((key.into(), value.into()));
        self
    }

    /// The key is listed, but fetching its value fails.
    pub fn with_failing_key(mut self, key: impl Into<Vec<u8>>) -> Self {
        let key = key.into();
        self.failing_keys.insert(key.clone());
        self.boxes.push((key, Vec::new()));
        self
    }

    /// `list_keys` itself fails.
    pub fn with_failing_listing(mut self) -> Self {
        self.listing_fails = true;
        self
    }
}

#[async_trait]
impl BoxSource for MemorySource {
    async fn list_keys(&self) -> Result<Vec<Vec<u8>>, SourceError> {
        if self.listing_fails {
            return Err(SourceError::Unavailable("listing offline".to_string()));
        }
        Ok(self.boxes.iter().map(|(key, _)| key.clone()).collect())
    }

    async fn fetch_value(&self, key: &[u8]) -> Result<Vec<u8>, SourceError> {
        if self.failing_keys.contains(key) {
            return Err(SourceError::Unavailable("fetch offline".to_string()));
        }
        self.boxes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| SourceError::NotFound(hex::encode(key)))
    }
}
