//! Re-rooted mutable handles

use kratix_sdk::document::{Scope, Value};

use crate::helpers::*;

#[test]
fn test_scope_paths_are_relative() {
    let mut doc = status_doc();

    {
        let mut pod = doc.scope_mut("pods[1]").unwrap();
        assert_eq!(pod.get("name").unwrap().unwrap(), "pod-2");
        pod.set("status", "Running").unwrap();
        pod.set("containers[0].ready", true).unwrap();
        assert_eq!(pod.base().unwrap().to_string(), "pods[1]");
    }

    assert_eq!(doc.get("pods[1].status").unwrap().unwrap(), "Running");
    assert_eq!(doc.get("pods[1].containers[0].ready").unwrap().unwrap(), true);
}

#[test]
fn test_scope_creates_missing_mapping() {
    let mut doc = Value::mapping();

    {
        let scope = doc.scope_mut("status.conditions").unwrap();
        assert_eq!(scope.value(), &Value::mapping());
    }

    assert_eq!(doc, yaml("status: {conditions: {}}"));
}

#[test]
fn test_scope_keeps_existing_value() {
    let mut doc = status_doc();

    let scope = doc.scope_mut("events").unwrap();

    assert_eq!(scope.value(), &yaml("[Started, Running, Completed]"));
}

#[test]
fn test_nested_scope_tracks_full_base() {
    let mut doc = status_doc();

    let mut conditions = doc.scope_mut("conditions").unwrap();
    let mut available = conditions.scope_mut("available").unwrap();
    available.remove("reason").unwrap();

    assert_eq!(available.base().unwrap().to_string(), "conditions.available");
    assert_eq!(available.value(), &yaml("{status: \"True\"}"));
}

#[test]
fn test_scope_merge() {
    let mut doc = status_doc();

    {
        let mut conditions = doc.scope_mut("conditions").unwrap();
        conditions.merge(yaml("available: {status: \"False\"}\nprogressing: {status: \"True\"}"));
    }

    assert_eq!(doc.get("conditions.available.status").unwrap().unwrap(), "False");
    assert_eq!(
        doc.get("conditions.available.reason").unwrap().unwrap(),
        "ReconciliationSucceeded"
    );
    assert_eq!(doc.get("conditions.progressing.status").unwrap().unwrap(), "True");
}

#[test]
fn test_scope_on_root() {
    let mut doc = Value::mapping();

    let mut scope = Scope::new(&mut doc);
    scope.set("a", 1).unwrap();
    assert!(scope.base().is_none());
    *scope.value_mut().entry("b").unwrap() = Value::from("x");

    assert_eq!(doc, yaml("{a: 1, b: x}"));
}

#[test]
fn test_scope_through_scalar_index_fails() {
    let mut doc = yaml("a: x");

    assert!(doc.scope_mut("a[0]").unwrap_err().is_type_error());
}
