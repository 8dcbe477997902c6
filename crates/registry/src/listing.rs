// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort agent listing over an injected box source.

use adx_core::{AgentRecord, Clock, SystemClock};

use crate::assemble::assemble_record;
use crate::source::BoxSource;

/// Agent registry view over a box source.
///
/// Owns its source and clock as injected dependencies; no process-wide
/// clients. Listing follows partial-failure semantics: a box whose
/// fetch fails is skipped with a warning, and an unavailable source
/// degrades to an empty listing rather than an error.
pub struct Registry<S, C = SystemClock> {
    source: S,
    clock: C,
}

impl<S: BoxSource> Registry<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            clock: SystemClock,
        }
    }
}

impl<S: BoxSource, C: Clock> Registry<S, C> {
    pub fn with_clock(source: S, clock: C) -> Self {
        Self { source, clock }
    }

    /// Decode every listed box into a record.
    ///
    /// Results are sorted by `(created_at, id)` so the presentation
    /// order is deterministic regardless of listing order.
    pub async fn list_agents(&self) -> Vec<AgentRecord> {
        let keys = match self.source.list_keys().await {
            Ok(keys) => keys,
            Err(err) => {
                tracing::warn!(error = %err, "box listing unavailable");
                return Vec::new();
            }
        };

        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            match self.source.fetch_value(&key).await {
                Ok(value) => records.push(assemble_record(&key, &value, &self.clock)),
                Err(err) => {
                    tracing::warn!(
                        key = %hex::encode(&key),
                        error = %err,
                        "skipping unfetchable box"
                    );
                }
            }
        }

        records.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        records
    }
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
