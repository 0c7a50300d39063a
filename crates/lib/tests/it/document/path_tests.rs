//! Parsed paths used through the accessor API

use kratix_sdk::document::{PathExpr, Step, Value};

use crate::helpers::*;

#[test]
fn test_parsed_path_reused_across_documents() {
    let path = PathExpr::parse("pods[0].name").unwrap();
    let mut first = status_doc();
    let mut second = Value::mapping();

    first.set(&path, "renamed").unwrap();
    second.set(&path, "created").unwrap();

    assert_eq!(first.get(&path).unwrap().unwrap(), "renamed");
    assert_eq!(second, yaml("pods: [{name: created}]"));
}

#[test]
fn test_path_from_steps_matches_parsed_path() {
    let built = PathExpr::from_steps([
        Step::from("pods"),
        Step::Index(1),
        Step::from("containers"),
        Step::Index(0),
    ])
    .unwrap();

    assert_eq!(built, PathExpr::parse("pods[1].containers[0]").unwrap());
    assert_eq!(built.to_string(), "pods[1].containers[0]");
    assert!(PathExpr::from_steps(Vec::new()).unwrap_err().is_invalid_path());
}

#[test]
fn test_leading_dot_paths_address_same_node() {
    let doc = status_doc();

    assert_eq!(
        doc.get(".conditions.available.status").unwrap(),
        doc.get("conditions.available.status").unwrap()
    );
}

#[test]
fn test_joined_path_walks_both_parts() {
    let doc = status_doc();
    let pod = PathExpr::parse("pods[0]").unwrap();
    let ready = PathExpr::parse("containers[1].ready").unwrap();

    assert_eq!(doc.get(pod.join(&ready)).unwrap().unwrap(), false);
}

#[test]
fn test_bare_index_on_root_sequence() {
    let mut doc = yaml("[a, b]");

    assert_eq!(doc.get("[1]").unwrap().unwrap(), "b");
    doc.set("[3]", "d").unwrap();
    assert_eq!(doc, yaml("[a, b, null, d]"));
}
