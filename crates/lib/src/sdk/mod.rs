//! Helpers for code running inside a Kratix workflow pipeline.
//!
//! A pipeline container reads the object it was started for from the input
//! directory, writes documents into the output directory and records status
//! and destination selectors in the metadata directory. [`Sdk`] wraps that
//! file layout, described by an [`SdkConfig`], and publishes a merged status
//! through a [`StatusUpdater`] supplied by the caller.
//!
//! # Usage
//!
//! ```no_run
//! use kratix_sdk::sdk::{Sdk, SdkConfig};
//!
//! let sdk = Sdk::new(SdkConfig::from_env());
//! let resource = sdk.read_resource_input()?;
//!
//! let size = resource.get_value("spec.size")?;
//! sdk.write_output("deployment.yaml", format!("size: {size}\n"))?;
//!
//! let mut status = sdk.read_status()?;
//! status.set("message", "deployed")?;
//! sdk.write_status(&status)?;
//! # Ok::<(), kratix_sdk::Error>(())
//! ```

use std::{
    fmt, fs,
    path::{Component, Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::{
    Result,
    constants::{DESTINATION_SELECTORS_FILE, STATUS_FILE},
    document::Value,
    resource::{ObjectRef, Promise, Resource, Status},
};

pub mod config;
pub mod errors;
mod selectors;

pub use config::{SdkConfig, WorkflowContext};
pub use errors::SdkError;
pub use selectors::DestinationSelector;

/// Persists the status of an object somewhere outside the pipeline.
///
/// `object` is the full object with its `status` already replaced by the
/// merged status. Implementations typically call the cluster API's status
/// sub-resource for `target`.
pub trait StatusUpdater: Send + Sync {
    fn update_status(&self, target: &ObjectRef, object: &Value) -> Result<()>;
}

impl<F> StatusUpdater for F
where
    F: Fn(&ObjectRef, &Value) -> Result<()> + Send + Sync,
{
    fn update_status(&self, target: &ObjectRef, object: &Value) -> Result<()> {
        self(target, object)
    }
}

/// Entry point for pipeline file I/O and status publication.
pub struct Sdk {
    config: SdkConfig,
    updater: Option<Box<dyn StatusUpdater>>,
}

impl fmt::Debug for Sdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sdk")
            .field("config", &self.config)
            .field("has_status_updater", &self.updater.is_some())
            .finish()
    }
}

impl Sdk {
    pub fn new(config: SdkConfig) -> Self {
        Self {
            config,
            updater: None,
        }
    }

    /// Sets the collaborator used by [`Sdk::publish_status`].
    pub fn with_status_updater(mut self, updater: impl StatusUpdater + 'static) -> Self {
        self.updater = Some(Box::new(updater));
        self
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Reads the input object as a [`Resource`].
    pub fn read_resource_input(&self) -> Result<Resource> {
        let object: Value = read_yaml(&self.config.input_object_path())?;
        Ok(Resource::from_value(object)?)
    }

    /// Reads the input object as a [`Promise`].
    pub fn read_promise_input(&self) -> Result<Promise> {
        let object: Value = read_yaml(&self.config.input_object_path())?;
        Ok(Promise::from_value(object)?)
    }

    /// Reads the destination selectors file; an empty file yields no selectors.
    pub fn read_destination_selectors(&self) -> Result<Vec<DestinationSelector>> {
        let selectors: Option<Vec<DestinationSelector>> =
            read_yaml(&self.config.metadata_file(DESTINATION_SELECTORS_FILE))?;
        Ok(selectors.unwrap_or_default())
    }

    /// Reads the status file; an empty file yields an empty status.
    pub fn read_status(&self) -> Result<Status> {
        let data: Value = read_yaml(&self.config.metadata_file(STATUS_FILE))?;
        Ok(Status::from_value(data))
    }

    /// Writes `content` to `rel_path` under the output directory, creating
    /// parent directories as needed.
    ///
    /// # Errors
    /// Returns [`SdkError::InvalidOutputPath`] for absolute paths and paths
    /// containing `..`.
    pub fn write_output(&self, rel_path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Result<()> {
        let rel_path = rel_path.as_ref();
        let is_plain_relative = rel_path.components().next().is_some()
            && rel_path
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !is_plain_relative {
            return Err(SdkError::InvalidOutputPath {
                path: rel_path.display().to_string(),
            }
            .into());
        }

        write_file(&self.config.output_dir.join(rel_path), content.as_ref())
    }

    /// Replaces the status file with `status`.
    pub fn write_status(&self, status: &Status) -> Result<()> {
        write_yaml(&self.config.metadata_file(STATUS_FILE), status.as_map())
    }

    /// Replaces the destination selectors file with `selectors`.
    pub fn write_destination_selectors(&self, selectors: &[DestinationSelector]) -> Result<()> {
        write_yaml(
            &self.config.metadata_file(DESTINATION_SELECTORS_FILE),
            selectors,
        )
    }

    pub fn workflow_action(&self) -> &str {
        &self.config.workflow.action
    }

    pub fn workflow_type(&self) -> &str {
        &self.config.workflow.workflow_type
    }

    pub fn promise_name(&self) -> &str {
        &self.config.workflow.promise_name
    }

    pub fn pipeline_name(&self) -> &str {
        &self.config.workflow.pipeline_name
    }

    /// Merges `incoming` onto the resource's current status and persists the
    /// resulting object through the configured [`StatusUpdater`].
    ///
    /// The resource itself is left untouched.
    pub fn publish_status(&self, resource: &Resource, incoming: Status) -> Result<()> {
        let updater = self.updater.as_deref().ok_or(SdkError::NoStatusUpdater)?;

        let mut status = resource.status();
        status.merge(incoming);

        let mut object = resource.clone();
        object.set_status(status);

        let target = resource.object_ref(Some(&self.config.workflow.crd_plural));
        debug!(object = %target, "Publishing merged status");
        updater.update_status(&target, object.object())?;
        info!(object = %target, "Published status");
        Ok(())
    }
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "Reading pipeline file");
    let data = fs::read(path).map_err(|source| SdkError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = serde_yaml::from_slice(&data).map_err(|source| SdkError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parsed)
}

fn write_yaml<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let data = serde_yaml::to_string(value)?;
    write_file(path, data.as_bytes())
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    let write_error = |source: std::io::Error| SdkError::Write {
        path: PathBuf::from(path),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)?;
    debug!(path = %path.display(), bytes = content.len(), "Wrote pipeline file");
    Ok(())
}
