//! Document commands: get, set, remove and merge on plain YAML files.

use kratix_sdk::document::{DocumentError, Value, codec, merge};
use tracing::debug;

use super::{parse_value, read_document};
use crate::cli::{FileArgs, GetArgs, MergeArgs, RemoveArgs, SetArgs};
use crate::output::{OutputFormat, print_value};

/// Run the get command
pub fn get(args: &GetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let doc = read_document(&args.source.file)?;
    let value = doc.get(&args.path)?.ok_or_else(|| DocumentError::NotFound {
        path: args.path.clone(),
    })?;
    print_value(value, format)
}

/// Run the set command
pub fn set(args: &SetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = read_document(&args.source.file)?;
    let value = parse_value(&args.value)?;
    debug!(path = %args.path, kind = value.type_name(), "Setting value");
    doc.set(&args.path, value)?;
    finish(doc, &args.source, args.in_place, format)
}

/// Run the remove command
pub fn remove(args: &RemoveArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = read_document(&args.source.file)?;
    if doc.remove(&args.path)?.is_none() {
        debug!(path = %args.path, "Nothing to remove");
    }
    finish(doc, &args.source, args.in_place, format)
}

/// Run the merge command
pub fn merge_files(args: &MergeArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let dst = read_document(&args.dst)?;
    let src = read_document(&args.src)?;

    let merged = match (dst, src) {
        (Value::Mapping(dst), Value::Mapping(src)) => Value::Mapping(merge(dst, src)),
        (mut dst, src) => {
            dst.merge(src);
            dst
        }
    };
    print_value(&merged, format)
}

fn finish(
    doc: Value,
    source: &FileArgs,
    in_place: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if !in_place {
        return print_value(&doc, format);
    }
    if source.is_stdin() {
        return Err("--in-place needs a file, not stdin".into());
    }
    std::fs::write(&source.file, codec::to_yaml_string(&doc)?)?;
    debug!(file = %source.file.display(), "Rewrote document");
    Ok(())
}
