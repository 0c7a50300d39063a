//! Promise wrapper

use kratix_sdk::{Promise, resource::ResourceError};

use crate::helpers::*;

#[test]
fn test_promise_accessors() {
    let promise = Promise::from_yaml_str(PROMISE_YAML).unwrap();

    assert_eq!(promise.name(), "redis");
    assert_eq!(promise.group_version_kind().group, "platform.kratix.io");
    assert_eq!(
        promise.api().unwrap().get("metadata.name").unwrap().unwrap(),
        "redis.marketplace.kratix.io"
    );
    assert_eq!(promise.dependencies().len(), 1);
    assert_eq!(
        promise.dependencies()[0].get("metadata.name").unwrap().unwrap(),
        "redis-operator"
    );
    assert_eq!(
        promise
            .workflows()
            .unwrap()
            .get("resource.configure[0].metadata.name")
            .unwrap()
            .unwrap(),
        "instance-configure"
    );
    assert!(promise.spec().unwrap().is_mapping());
}

#[test]
fn test_promise_deref_to_resource() {
    let promise = Promise::from_yaml_str(PROMISE_YAML).unwrap();

    assert_eq!(
        promise.get_value("metadata.labels").unwrap(),
        &yaml("{kratix.io/promise-version: v1.0.0}")
    );
    assert_eq!(
        promise.labels().get("kratix.io/promise-version").map(String::as_str),
        Some("v1.0.0")
    );

    let resource = promise.into_resource();
    assert_eq!(resource.group_version_kind().kind, "Promise");
}

#[test]
fn test_promise_without_spec_sections() {
    let promise = Promise::from_yaml_str("kind: Promise\nmetadata: {name: empty}").unwrap();

    assert!(promise.spec().is_none());
    assert!(promise.api().is_none());
    assert!(promise.dependencies().is_empty());
    assert!(promise.workflows().is_none());
}

#[test]
fn test_other_kind_is_rejected() {
    let err = Promise::from_value(yaml(RESOURCE_YAML)).unwrap_err();

    assert_eq!(
        err,
        ResourceError::UnexpectedKind {
            expected: "Promise",
            actual: "MyResource".to_string(),
        }
    );
    assert!(Promise::try_from(test_resource()).is_err());
}

#[test]
fn test_promise_spec_of_wrong_shape() {
    let promise =
        Promise::from_yaml_str("kind: Promise\nmetadata: {name: odd}\nspec: [api, dependencies]")
            .unwrap();

    assert!(promise.spec().unwrap().is_sequence());
    assert!(promise.api().is_none());
    assert!(promise.dependencies().is_empty());
    assert!(promise.workflows().is_none());
}
