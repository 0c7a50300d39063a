//! Constants used throughout the Kratix SDK.
//!
//! Central definitions for the pipeline file layout and the environment
//! variables a workflow container is started with.

/// Directory holding the pipeline's input object.
pub const INPUT_DIR: &str = "/kratix/input";

/// Directory holding status and destination selector files.
pub const METADATA_DIR: &str = "/kratix/metadata";

/// Directory whose contents are scheduled to destinations.
pub const OUTPUT_DIR: &str = "/kratix/output";

/// File name of the input object inside [`INPUT_DIR`].
pub const INPUT_OBJECT: &str = "object.yaml";

/// File name of the status document inside [`METADATA_DIR`].
pub const STATUS_FILE: &str = "status.yaml";

/// File name of the destination selectors inside [`METADATA_DIR`].
pub const DESTINATION_SELECTORS_FILE: &str = "destination_selectors.yaml";

pub const ENV_WORKFLOW_ACTION: &str = "KRATIX_WORKFLOW_ACTION";
pub const ENV_WORKFLOW_TYPE: &str = "KRATIX_WORKFLOW_TYPE";
pub const ENV_PROMISE_NAME: &str = "KRATIX_PROMISE_NAME";
pub const ENV_PIPELINE_NAME: &str = "KRATIX_PIPELINE_NAME";

/// Plural of the resource's CRD, used to address status updates.
pub const ENV_CRD_PLURAL: &str = "KRATIX_CRD_PLURAL";
