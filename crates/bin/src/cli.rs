//! CLI argument definitions for the kratix binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kratix_sdk::constants::{INPUT_DIR, INPUT_OBJECT, METADATA_DIR, OUTPUT_DIR};

use crate::output::OutputFormat;

/// Path-based access to YAML documents and Kratix pipeline files
#[derive(Parser, Debug)]
#[command(name = "kratix")]
#[command(about = "Read, write and merge fields of YAML documents and Kratix pipeline files")]
#[command(version)]
pub struct Cli {
    /// Output format for printed documents
    #[arg(short, long, global = true, value_enum, default_value = "yaml")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Set the value at a path, creating missing levels
    Set(SetArgs),
    /// Remove the value at a path
    Remove(RemoveArgs),
    /// Deep merge one document onto another and print the result
    Merge(MergeArgs),
    /// Operate on the pipeline status file
    Status(StatusArgs),
}

/// Document source shared by the document commands
#[derive(clap::Args, Debug)]
pub struct FileArgs {
    /// Document to read; `-` reads stdin
    #[arg(short, long, default_value = "-")]
    pub file: PathBuf,
}

impl FileArgs {
    pub fn is_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Path such as `spec.containers[0].image`
    pub path: String,

    #[command(flatten)]
    pub source: FileArgs,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    pub path: String,

    /// New value, parsed as YAML so `3`, `true` and `{a: 1}` keep their types
    pub value: String,

    #[command(flatten)]
    pub source: FileArgs,

    /// Rewrite the file instead of printing the result
    #[arg(short, long)]
    pub in_place: bool,
}

#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    pub path: String,

    #[command(flatten)]
    pub source: FileArgs,

    /// Rewrite the file instead of printing the result
    #[arg(short, long)]
    pub in_place: bool,
}

#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// Document merged into
    pub dst: PathBuf,
    /// Document whose fields win
    pub src: PathBuf,
}

/// Pipeline directory layout
#[derive(clap::Args, Debug)]
pub struct PipelineArgs {
    #[arg(long, default_value = INPUT_DIR, env = "KRATIX_INPUT_DIR")]
    pub input_dir: PathBuf,

    #[arg(long, default_value = METADATA_DIR, env = "KRATIX_METADATA_DIR")]
    pub metadata_dir: PathBuf,

    #[arg(long, default_value = OUTPUT_DIR, env = "KRATIX_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// File name of the input object inside the input directory
    #[arg(long, default_value = INPUT_OBJECT)]
    pub input_object: String,
}

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[command(subcommand)]
    pub command: StatusCommands,
}

#[derive(Subcommand, Debug)]
pub enum StatusCommands {
    /// Print the status, or the value at a path inside it
    Get {
        path: Option<String>,
    },
    /// Set a status field, parsed as YAML
    Set {
        path: String,
        value: String,
    },
    /// Remove a status field
    Remove {
        path: String,
    },
    /// Merge the status file into the input object's status and write the object
    Publish {
        /// Where to write the updated object; stdout when omitted
        #[arg(long)]
        object_out: Option<PathBuf>,
    },
}
