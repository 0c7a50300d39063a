//! Pipeline SDK configuration.
//!
//! Everything the SDK would otherwise read ad hoc from the environment or
//! hard-code lives here, so callers and tests can substitute their own values.

use std::path::{Path, PathBuf};

use crate::constants::{
    ENV_CRD_PLURAL, ENV_PIPELINE_NAME, ENV_PROMISE_NAME, ENV_WORKFLOW_ACTION, ENV_WORKFLOW_TYPE,
    INPUT_DIR, INPUT_OBJECT, METADATA_DIR, OUTPUT_DIR,
};

/// Values describing the workflow a pipeline runs in.
///
/// Unset variables read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowContext {
    /// `configure` or `delete`
    pub action: String,
    /// `resource` or `promise`
    pub workflow_type: String,
    pub promise_name: String,
    pub pipeline_name: String,
    /// Plural name of the resource's CRD
    pub crd_plural: String,
}

impl WorkflowContext {
    /// Reads the context from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the context through an arbitrary variable lookup.
    ///
    /// ```
    /// # use kratix_sdk::sdk::WorkflowContext;
    /// let ctx = WorkflowContext::from_lookup(|name| {
    ///     (name == "KRATIX_PROMISE_NAME").then(|| "redis".to_string())
    /// });
    /// assert_eq!(ctx.promise_name, "redis");
    /// assert_eq!(ctx.action, "");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).unwrap_or_default();
        Self {
            action: read(ENV_WORKFLOW_ACTION),
            workflow_type: read(ENV_WORKFLOW_TYPE),
            promise_name: read(ENV_PROMISE_NAME),
            pipeline_name: read(ENV_PIPELINE_NAME),
            crd_plural: read(ENV_CRD_PLURAL),
        }
    }
}

/// File layout and workflow context used by [`crate::sdk::Sdk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    pub input_dir: PathBuf,
    pub metadata_dir: PathBuf,
    pub output_dir: PathBuf,
    /// File name of the input object inside `input_dir`
    pub input_object: String,
    pub workflow: WorkflowContext,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(INPUT_DIR),
            metadata_dir: PathBuf::from(METADATA_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
            input_object: INPUT_OBJECT.to_string(),
            workflow: WorkflowContext::default(),
        }
    }
}

impl SdkConfig {
    /// Default layout with the workflow context read from the environment.
    pub fn from_env() -> Self {
        Self::default().with_workflow(WorkflowContext::from_env())
    }

    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_metadata_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.metadata_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_input_object(mut self, name: impl Into<String>) -> Self {
        self.input_object = name.into();
        self
    }

    pub fn with_workflow(mut self, workflow: WorkflowContext) -> Self {
        self.workflow = workflow;
        self
    }

    /// Full path of the input object
    pub fn input_object_path(&self) -> PathBuf {
        self.input_dir.join(&self.input_object)
    }

    pub(crate) fn metadata_file(&self, name: impl AsRef<Path>) -> PathBuf {
        self.metadata_dir.join(name)
    }
}
