// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The agent record served to the dashboard.
//!
//! One `AgentRecord` is assembled per box storage entry. The struct is
//! immutable once built; every field is always populated, with the
//! defaults below standing in for anything the box bytes did not carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Creator shown when the box carries no creator name.
pub const DEFAULT_CREATOR: &str = "Algorand";

/// Description shown when the box carries no details string.
pub const DEFAULT_DESCRIPTION: &str = "Autonomous Agent on Algorand Testnet";

/// A decoded agent-registry entry.
///
/// Serializes with camelCase field names so the JSON matches the
/// dashboard API shape (`creatorName`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    /// Application id in decimal form, or the hex box key when no id
    /// could be decoded. Never empty.
    pub id: String,
    pub name: String,
    pub creator_name: String,
    pub description: String,
    /// ISO-8601 instant with millisecond precision.
    pub created_at: String,
    pub status: AgentStatus,
    /// Derived application address, or the hex box key fallback.
    /// Never empty.
    pub address: String,
}

impl AgentRecord {
    /// A record carrying only the identifying fields plus defaults.
    ///
    /// The fallback paths merge whatever they recover over this.
    pub fn placeholder(id: String, address: String, created_at: String) -> Self {
        let name = placeholder_name(&address);
        Self {
            id,
            name,
            creator_name: DEFAULT_CREATOR.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            created_at,
            status: AgentStatus::Active,
            address,
        }
    }
}

/// Placeholder label derived from an address, `Agent ABCDEF...WXYZ`.
pub fn placeholder_name(address: &str) -> String {
    if address.len() <= 10 {
        format!("Agent {address}")
    } else {
        format!("Agent {}...{}", &address[..6], &address[address.len() - 4..])
    }
}

/// Lifecycle status of an agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    #[default]
    Active,
    Inactive,
}

impl AgentStatus {
    /// Parse a status string case-insensitively; unknown values are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
