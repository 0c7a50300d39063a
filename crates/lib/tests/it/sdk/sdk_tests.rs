//! Pipeline file I/O and status publication

use std::fs;

use kratix_sdk::{
    Error, Status,
    document::Value,
    resource::ObjectRef,
    sdk::{DestinationSelector, Sdk, SdkConfig, SdkError, WorkflowContext},
};
use tempfile::TempDir;

use crate::helpers::*;

/// Temporary pipeline directories with the resource fixture as input.
struct Pipeline {
    root: TempDir,
}

impl Pipeline {
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        for dir in ["input", "metadata", "output"] {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        fs::write(root.path().join("input/object.yaml"), RESOURCE_YAML).unwrap();
        Self { root }
    }

    fn config(&self) -> SdkConfig {
        SdkConfig::default()
            .with_input_dir(self.root.path().join("input"))
            .with_metadata_dir(self.root.path().join("metadata"))
            .with_output_dir(self.root.path().join("output"))
            .with_workflow(WorkflowContext {
                action: "configure".to_string(),
                workflow_type: "resource".to_string(),
                promise_name: "my-promise".to_string(),
                pipeline_name: "my-pipeline".to_string(),
                crd_plural: "myresources".to_string(),
            })
    }

    fn sdk(&self) -> Sdk {
        Sdk::new(self.config())
    }

    fn write_metadata(&self, name: &str, content: &str) {
        fs::write(self.root.path().join("metadata").join(name), content).unwrap();
    }

    fn read_metadata(&self, name: &str) -> String {
        fs::read_to_string(self.root.path().join("metadata").join(name)).unwrap()
    }
}

#[test]
fn test_read_resource_input() {
    let pipeline = Pipeline::new();

    let resource = pipeline.sdk().read_resource_input().unwrap();

    assert_eq!(resource.name(), "my-resource");
    assert_eq!(resource.namespace(), "my-namespace");
    assert_eq!(resource.group_version_kind().kind, "MyResource");
    assert_eq!(resource.get_value("spec.dbConfig.engine").unwrap(), "postgres");
}

#[test]
fn test_read_resource_with_custom_object_name() {
    let pipeline = Pipeline::new();
    fs::write(pipeline.root.path().join("input/resource.yaml"), PROMISE_YAML).unwrap();

    let sdk = Sdk::new(pipeline.config().with_input_object("resource.yaml"));

    assert_eq!(sdk.read_resource_input().unwrap().name(), "redis");
    assert_eq!(sdk.read_promise_input().unwrap().dependencies().len(), 1);
}

#[test]
fn test_read_promise_input_rejects_other_kinds() {
    let pipeline = Pipeline::new();

    let err = pipeline.sdk().read_promise_input().unwrap_err();

    assert!(err.is_resource_error());
}

#[test]
fn test_missing_input_is_read_error() {
    let pipeline = Pipeline::new();
    let sdk = Sdk::new(pipeline.config().with_input_object("absent.yaml"));

    let err = sdk.read_resource_input().unwrap_err();

    assert!(err.is_not_found());
    assert!(err.is_io_error());
    assert!(matches!(err, Error::Sdk(SdkError::Read { .. })));
}

#[test]
fn test_malformed_input_is_decode_error() {
    let pipeline = Pipeline::new();
    fs::write(pipeline.root.path().join("input/object.yaml"), "a: [1, 2").unwrap();

    let err = pipeline.sdk().read_resource_input().unwrap_err();

    assert!(err.is_serialization_error());
    assert!(matches!(err, Error::Sdk(SdkError::Decode { .. })));
}

#[test]
fn test_status_round_trip() {
    let pipeline = Pipeline::new();
    pipeline.write_metadata("status.yaml", STATUS_YAML);
    let sdk = pipeline.sdk();

    let mut status = sdk.read_status().unwrap();
    assert_eq!(status.get("pods[1].name").unwrap().unwrap(), "pod-2");

    status.set("phase", "Degraded").unwrap();
    status.remove("events").unwrap();
    sdk.write_status(&status).unwrap();

    let reread = sdk.read_status().unwrap();
    assert_eq!(reread, status);
    assert_eq!(reread.get("phase").unwrap().unwrap(), "Degraded");
    assert_eq!(reread.get("events").unwrap(), None);
}

#[test]
fn test_empty_status_file_is_empty_status() {
    let pipeline = Pipeline::new();
    pipeline.write_metadata("status.yaml", "");

    let status = pipeline.sdk().read_status().unwrap();

    assert!(status.is_empty());
}

#[test]
fn test_write_status_replaces_file() {
    let pipeline = Pipeline::new();
    pipeline.write_metadata("status.yaml", "old: value\n");
    let sdk = pipeline.sdk();

    let mut status = Status::new();
    status.set("message", "fresh").unwrap();
    sdk.write_status(&status).unwrap();

    assert_eq!(yaml(&pipeline.read_metadata("status.yaml")), yaml("message: fresh"));
}

#[test]
fn test_destination_selectors_round_trip() {
    let pipeline = Pipeline::new();
    let sdk = pipeline.sdk();
    let selectors = vec![
        DestinationSelector::matching([("environment", "dev")]),
        DestinationSelector::matching([("zone", "eu"), ("tier", "db")]).in_directory("db"),
    ];

    sdk.write_destination_selectors(&selectors).unwrap();

    assert!(
        pipeline
            .read_metadata("destination_selectors.yaml")
            .contains("matchLabels")
    );
    assert_eq!(sdk.read_destination_selectors().unwrap(), selectors);
}

#[test]
fn test_empty_destination_selectors_file() {
    let pipeline = Pipeline::new();
    pipeline.write_metadata("destination_selectors.yaml", "");

    assert!(pipeline.sdk().read_destination_selectors().unwrap().is_empty());
}

#[test]
fn test_write_output_creates_directories() {
    let pipeline = Pipeline::new();
    let sdk = pipeline.sdk();

    sdk.write_output("namespace.yaml", "kind: Namespace\n").unwrap();
    sdk.write_output("nested/dir/deployment.yaml", b"kind: Deployment\n")
        .unwrap();

    let output = pipeline.root.path().join("output");
    assert_eq!(
        fs::read_to_string(output.join("namespace.yaml")).unwrap(),
        "kind: Namespace\n"
    );
    assert_eq!(
        fs::read_to_string(output.join("nested/dir/deployment.yaml")).unwrap(),
        "kind: Deployment\n"
    );
}

#[test]
fn test_write_output_rejects_escaping_paths() {
    let pipeline = Pipeline::new();
    let sdk = pipeline.sdk();

    for path in ["/etc/passwd", "../escape.yaml", "a/../../b.yaml", ""] {
        let err = sdk.write_output(path, "x").unwrap_err();
        assert!(err.is_invalid_path(), "'{path}' should be rejected");
    }
    assert!(!pipeline.root.path().join("escape.yaml").exists());
}

#[test]
fn test_workflow_values() {
    let pipeline = Pipeline::new();
    let sdk = pipeline.sdk();

    assert_eq!(sdk.workflow_action(), "configure");
    assert_eq!(sdk.workflow_type(), "resource");
    assert_eq!(sdk.promise_name(), "my-promise");
    assert_eq!(sdk.pipeline_name(), "my-pipeline");
}

#[test]
fn test_publish_status_merges_and_calls_updater() {
    let pipeline = Pipeline::new();
    let updater = RecordingUpdater::new();
    let sdk = pipeline.sdk().with_status_updater(updater.clone());
    let resource = sdk.read_resource_input().unwrap();

    let mut incoming = Status::new();
    incoming.set("phase", "Ready").unwrap();
    incoming.set("conditions.healthy", "True").unwrap();
    incoming.set("endpoints", vec!["b.internal"]).unwrap();
    sdk.publish_status(&resource, incoming).unwrap();

    let calls = updater.calls();
    assert_eq!(calls.len(), 1);
    let (target, object) = &calls[0];

    assert_eq!(
        target,
        &ObjectRef {
            group_version_kind: resource.group_version_kind().clone(),
            name: "my-resource".to_string(),
            namespace: "my-namespace".to_string(),
            plural: Some("myresources".to_string()),
        }
    );
    assert_eq!(
        object.get("status").unwrap().unwrap(),
        &yaml("phase: Ready\nconditions: {ready: \"False\", healthy: \"True\"}\nendpoints: [b.internal]")
    );
    assert_eq!(object.get("spec").unwrap(), resource.object().get("spec").unwrap());

    // The caller's resource keeps its original status
    assert_eq!(resource.get_value("status.phase").unwrap(), "Provisioning");
}

#[test]
fn test_publish_status_with_closure_updater() {
    let pipeline = Pipeline::new();
    let sdk = pipeline
        .sdk()
        .with_status_updater(|target: &ObjectRef, _object: &Value| -> kratix_sdk::Result<()> {
            Err(SdkError::UpdateFailed {
                target: target.to_string(),
                reason: "conflict".to_string(),
            }
            .into())
        });
    let resource = sdk.read_resource_input().unwrap();

    let err = sdk.publish_status(&resource, Status::new()).unwrap_err();

    assert!(matches!(
        err,
        Error::Sdk(SdkError::UpdateFailed { ref reason, .. }) if reason == "conflict"
    ));
}

#[test]
fn test_publish_status_without_updater_fails() {
    let pipeline = Pipeline::new();
    let sdk = pipeline.sdk();
    let resource = sdk.read_resource_input().unwrap();

    let err = sdk.publish_status(&resource, Status::new()).unwrap_err();

    assert!(matches!(err, Error::Sdk(SdkError::NoStatusUpdater)));
}
