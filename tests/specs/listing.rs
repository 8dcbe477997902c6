// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listing specs: partial failure and deterministic ordering.

use crate::prelude::*;

fn entry(app_id: u64, name: &str, created_at: u64) -> Vec<u8> {
    encode_agent_tuple(&AgentTuple {
        name: name.to_string(),
        details: "https://example.com".to_string(),
        fixed_pricing: 5,
        created_at,
        app_id,
        creator_name: "ORCA Team".to_string(),
    })
    .expect("fixture tuple encodes")
}

#[tokio::test]
async fn one_failing_fetch_of_three_returns_two_records() {
    let source = MemorySource::new()
        .with_box(1u64.to_be_bytes(), entry(101, "alpha", 1_000))
        .with_failing_key(2u64.to_be_bytes())
        .with_box(3u64.to_be_bytes(), entry(103, "gamma", 3_000));

    let records = Registry::with_clock(source, FakeClock::new())
        .list_agents()
        .await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "alpha");
    assert_eq!(records[1].name, "gamma");
}

#[tokio::test]
async fn mixed_strict_and_fallback_boxes_all_produce_records() {
    let source = MemorySource::new()
        .with_box(1u64.to_be_bytes(), entry(101, "alpha", 1_000))
        .with_box(2u64.to_be_bytes(), vec![0xBA, 0xD0]);

    let records = Registry::with_clock(source, FakeClock::new())
        .list_agents()
        .await;

    assert_eq!(records.len(), 2);
    for record in &records {
        assert!(!record.id.is_empty());
        assert!(!record.address.is_empty());
    }
}

#[tokio::test]
async fn listing_order_is_independent_of_source_order() {
    let forward = MemorySource::new()
        .with_box(1u64.to_be_bytes(), entry(101, "alpha", 2_000))
        .with_box(2u64.to_be_bytes(), entry(102, "beta", 1_000));
    let reversed = MemorySource::new()
        .with_box(2u64.to_be_bytes(), entry(102, "beta", 1_000))
        .with_box(1u64.to_be_bytes(), entry(101, "alpha", 2_000));

    let clock = FakeClock::new();
    let a = Registry::with_clock(forward, clock.clone()).list_agents().await;
    let b = Registry::with_clock(reversed, clock).list_agents().await;
    assert_eq!(a, b);
}
