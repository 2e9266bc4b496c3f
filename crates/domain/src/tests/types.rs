// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AttendanceRecord, ContributionRecord, ListItem, Operation, ResourceType};
use chrono::NaiveDate;
use serde_json::json;
use std::str::FromStr;

#[test]
fn test_operation_round_trips_through_wire_strings() {
    for op in [
        Operation::Insert,
        Operation::Update,
        Operation::Delete,
        Operation::Archive,
        Operation::Restore,
    ] {
        assert_eq!(Operation::from_str(op.as_str()).unwrap(), op);
    }
}

#[test]
fn test_operation_rejects_unknown_string() {
    let result = Operation::from_str("UPSERT");
    assert!(result.is_err());
}

#[test]
fn test_resource_type_round_trips_through_wire_strings() {
    for rt in [
        ResourceType::Concerts,
        ResourceType::Bands,
        ResourceType::Locations,
        ResourceType::FestivalRoots,
        ResourceType::ConcertBands,
        ResourceType::BandGenres,
    ] {
        assert_eq!(ResourceType::from_str(rt.as_str()).unwrap(), rt);
    }
}

#[test]
fn test_related_resource_types() {
    assert_eq!(
        ResourceType::Concerts.related(),
        &[ResourceType::ConcertBands]
    );
    assert_eq!(ResourceType::Bands.related(), &[ResourceType::BandGenres]);
    assert!(ResourceType::Locations.related().is_empty());
    assert!(ResourceType::ConcertBands.related().is_empty());
}

#[test]
fn test_contribution_record_deserializes_from_audit_row() {
    let row = json!({
        "timestamp": "2024-05-03T18:30:00Z",
        "user_id": "user-1",
        "ressource_type": "bands",
        "ressource_id": 42,
        "operation": "UPDATE",
        "state_old": { "name": "Slayer" },
        "state_new": { "name": "Slayer (US)" }
    });

    let record: ContributionRecord = serde_json::from_value(row).unwrap();
    assert_eq!(record.user_id.as_deref(), Some("user-1"));
    assert_eq!(record.resource_type, ResourceType::Bands);
    assert_eq!(record.resource_id, Some(42));
    assert_eq!(record.operation, Operation::Update);
    assert_eq!(record.state_old.unwrap()["name"], json!("Slayer"));
}

#[test]
fn test_contribution_record_tolerates_null_user_and_states() {
    let row = json!({
        "timestamp": "2024-05-03T18:30:00Z",
        "user_id": null,
        "ressource_type": "concerts",
        "ressource_id": null,
        "operation": "DELETE",
        "state_old": null,
        "state_new": null
    });

    let record: ContributionRecord = serde_json::from_value(row).unwrap();
    assert_eq!(record.user_id, None);
    assert_eq!(record.resource_id, None);
    assert_eq!(record.state_old, None);
    assert_eq!(record.state_new, None);
}

#[test]
fn test_attendance_record_deserializes_from_nested_join_row() {
    let row = json!({
        "band": { "id": 7 },
        "concert": { "id": 3, "date_start": "2023-06-17", "is_festival": true }
    });

    let record: AttendanceRecord = serde_json::from_value(row).unwrap();
    assert_eq!(record.user_id, "");
    assert_eq!(record.band.id, 7);
    assert_eq!(record.concert.id, 3);
    assert_eq!(
        record.concert.date_start,
        NaiveDate::from_ymd_opt(2023, 6, 17).unwrap()
    );
    assert!(record.concert.is_festival);
}

#[test]
fn test_list_item_creation() {
    let item: ListItem = ListItem::new(1, String::from("München"));
    assert_eq!(item.id, 1);
    assert_eq!(item.name, "München");
}
