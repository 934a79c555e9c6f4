//! Serde roundtrip and JsonSchema validation tests for the persisted types.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use schemars::schema_for;
use todo_core::{Item, Status};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_item() -> Item {
    Item {
        id: 1,
        description: "Buy milk".into(),
        status: Status::NotStarted,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn item_roundtrip_and_schema() {
    let item = sample_item();

    let json_str = serde_json::to_string_pretty(&item).unwrap();
    let recovered: Item = serde_json::from_str(&json_str).unwrap();
    assert_eq!(recovered, item);

    let schema = serde_json::to_value(schema_for!(Vec<Item>)).unwrap();
    let instance = serde_json::to_value(vec![item]).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "Schema validation failed: {errors:?}");
}

#[test]
fn item_uses_documented_field_names() {
    let value = serde_json::to_value(sample_item()).unwrap();
    assert_eq!(value["id"], 1);
    assert_eq!(value["description"], "Buy milk");
    assert_eq!(value["status"], "not started");
    assert_eq!(value["created_at"], "2024-01-01T00:00:00Z");
}

#[test]
fn item_parses_documented_file_shape() {
    let raw = r#"{"id": 1, "description": "Buy milk", "status": "not started", "created_at": "2024-01-01T00:00:00Z"}"#;
    let item: Item = serde_json::from_str(raw).unwrap();
    assert_eq!(item, sample_item());
}

#[test]
fn schema_rejects_unknown_status() {
    let schema = serde_json::to_value(schema_for!(Item)).unwrap();
    let instance = serde_json::json!({
        "id": 1,
        "description": "x",
        "status": "done",
        "created_at": "2024-01-01T00:00:00Z"
    });
    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty(), "unknown status should fail validation");
}
