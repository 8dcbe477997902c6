// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end decoding of a single registry box.

use crate::prelude::*;

const KEY: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 0];

#[test]
fn oracle_box_decodes_end_to_end() {
    let record = assemble_record(&KEY, &oracle_box(), &FakeClock::new());

    assert_eq!(record.name, "OracleBot");
    assert_eq!(record.description, "https://example.com");
    assert_eq!(record.created_at, "2023-10-08T21:20:00.000Z");
    assert_eq!(record.id, "749655317");
    assert_eq!(record.creator_name, "ORCA Team");
    assert_eq!(record.status, AgentStatus::Active);
    assert_eq!(
        record.address,
        "V7S3ZUZ5SG3RPW2K5YXIZHS6NVDMSHXM7QOWDU35BN3YXF7J6QO5R23I6Y"
    );
}

#[test]
fn record_json_matches_dashboard_shape() {
    let record = assemble_record(&KEY, &oracle_box(), &FakeClock::new());
    let json = serde_json::to_value(&record).expect("record serializes");

    assert_eq!(json["id"], "749655317");
    assert_eq!(json["creatorName"], "ORCA Team");
    assert_eq!(json["createdAt"], "2023-10-08T21:20:00.000Z");
    assert_eq!(json["status"], "active");
}

#[test]
fn truncated_box_degrades_without_error() {
    let record = assemble_record(&KEY, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], &FakeClock::new());
    assert!(!record.id.is_empty());
    assert!(!record.address.is_empty());
}

#[test]
fn decoding_twice_is_byte_identical() {
    let clock = FakeClock::new();
    let a = serde_json::to_vec(&assemble_record(&KEY, &oracle_box(), &clock))
        .expect("record serializes");
    let b = serde_json::to_vec(&assemble_record(&KEY, &oracle_box(), &clock))
        .expect("record serializes");
    assert_eq!(a, b);
}
