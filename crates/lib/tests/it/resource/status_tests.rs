//! Status documents

use kratix_sdk::{Status, document::Value};

use crate::helpers::*;

fn test_status() -> Status {
    Status::from_value(status_doc())
}

#[test]
fn test_new_status_is_empty() {
    let status = Status::new();

    assert!(status.is_empty());
    assert_eq!(status, Status::default());
    assert_eq!(status.into_value(), Value::mapping());
}

#[test]
fn test_get_nested_and_indexed_values() {
    let status = test_status();

    assert_eq!(status.get("phase").unwrap().unwrap(), "Ready");
    assert_eq!(status.get("observedGeneration").unwrap().unwrap(), 1);
    assert_eq!(status.get("pods[0].containers[0].name").unwrap().unwrap(), "app");
    assert_eq!(status.get("pods[0].containers[1].ready").unwrap().unwrap(), false);
    assert_eq!(status.get("pods[5]").unwrap(), None);
}

#[test]
fn test_set_and_remove() {
    let mut status = test_status();

    status.set("conditions.available.status", "False").unwrap();
    status.set("newField.nested.deep", "value").unwrap();
    status.remove("events").unwrap();

    assert_eq!(status.get("conditions.available.status").unwrap().unwrap(), "False");
    assert_eq!(status.get("newField.nested.deep").unwrap().unwrap(), "value");
    assert_eq!(status.get("events").unwrap(), None);
}

#[test]
fn test_set_index_on_root_is_rejected() {
    let mut status = Status::new();

    assert!(status.set("[0]", 1).unwrap_err().is_type_error());
    assert!(status.is_empty());
}

#[test]
fn test_failed_write_keeps_existing_fields() {
    let mut status = test_status();
    let before = status.clone();

    assert!(status.set("[2].name", "x").unwrap_err().is_type_error());
    assert!(status.remove("[0]").unwrap_err().is_type_error());
    assert!(status.set("phase[0]", "x").unwrap_err().is_type_error());

    assert_eq!(status, before);
}

#[test]
fn test_get_with_leading_index_is_none() {
    let status = test_status();

    assert_eq!(status.get("[0]").unwrap(), None);
    assert!(status.get("pods[").unwrap_err().is_invalid_path());
}

#[test]
fn test_merge_statuses() {
    let mut existing = Status::from_value(yaml(
        "phase: Provisioning\nconditions: {ready: \"False\"}\nendpoints: [a]",
    ));
    let incoming = Status::from_value(yaml(
        "phase: Ready\nconditions: {healthy: \"True\"}\nendpoints: [b, c]",
    ));

    existing.merge(incoming);

    assert_eq!(
        existing.into_value(),
        yaml("phase: Ready\nconditions: {ready: \"False\", healthy: \"True\"}\nendpoints: [b, c]")
    );
}

#[test]
fn test_from_non_mapping_is_empty() {
    assert!(Status::from_value(yaml("[1]")).is_empty());
    assert!(Status::from_value(Value::Null).is_empty());
}

#[test]
fn test_map_conversions() {
    let status = test_status();
    let map = status.as_map().clone();

    assert!(map.contains_key("pods"));
    assert_eq!(Status::from(map.clone()), status);
    assert_eq!(status.into_map(), map);
}
