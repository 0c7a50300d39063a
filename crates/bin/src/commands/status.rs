//! Status commands operating on the pipeline's metadata directory.

use std::path::PathBuf;

use kratix_sdk::{
    document::{DocumentError, Value, codec},
    resource::ObjectRef,
    sdk::{Sdk, SdkConfig, SdkError, StatusUpdater, WorkflowContext},
};
use tracing::info;

use super::parse_value;
use crate::cli::{PipelineArgs, StatusArgs, StatusCommands};
use crate::output::{OutputFormat, print_value};

/// Writes the published object as YAML to a file, or stdout.
struct FileStatusUpdater {
    out: Option<PathBuf>,
}

impl StatusUpdater for FileStatusUpdater {
    fn update_status(&self, target: &ObjectRef, object: &Value) -> kratix_sdk::Result<()> {
        let text = codec::to_yaml_string(object)?;
        match &self.out {
            Some(path) => std::fs::write(path, text).map_err(|err| SdkError::UpdateFailed {
                target: target.to_string(),
                reason: err.to_string(),
            })?,
            None => print!("{text}"),
        }
        Ok(())
    }
}

fn sdk_config(args: &PipelineArgs) -> SdkConfig {
    SdkConfig::default()
        .with_input_dir(&args.input_dir)
        .with_metadata_dir(&args.metadata_dir)
        .with_output_dir(&args.output_dir)
        .with_input_object(&args.input_object)
        .with_workflow(WorkflowContext::from_env())
}

/// Run a status subcommand
pub fn run(args: &StatusArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let sdk = Sdk::new(sdk_config(&args.pipeline));

    match &args.command {
        StatusCommands::Get { path } => {
            let status = sdk.read_status()?;
            let value = match path {
                Some(path) => status
                    .get(path)?
                    .cloned()
                    .ok_or_else(|| DocumentError::NotFound { path: path.clone() })?,
                None => status.into_value(),
            };
            print_value(&value, format)?;
        }
        StatusCommands::Set { path, value } => {
            let mut status = sdk.read_status()?;
            status.set(path, parse_value(value)?)?;
            sdk.write_status(&status)?;
        }
        StatusCommands::Remove { path } => {
            let mut status = sdk.read_status()?;
            status.remove(path)?;
            sdk.write_status(&status)?;
        }
        StatusCommands::Publish { object_out } => {
            let resource = sdk.read_resource_input()?;
            let status = sdk.read_status()?;
            let sdk = sdk.with_status_updater(FileStatusUpdater {
                out: object_out.clone(),
            });
            sdk.publish_status(&resource, status)?;
            info!(name = resource.name(), "Status published");
        }
    }

    Ok(())
}
