//! Output formatting helpers for YAML and JSON output.

use kratix_sdk::document::{Value, codec};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Render a document in the selected format, ending with a newline.
pub fn render(value: &Value, format: OutputFormat) -> Result<String, Box<dyn std::error::Error>> {
    let text = match format {
        OutputFormat::Yaml => codec::to_yaml_string(value)?,
        OutputFormat::Json => {
            let json = serde_json::Value::from(value.clone());
            format!("{}\n", serde_json::to_string_pretty(&json)?)
        }
    };
    Ok(text)
}

/// Print a document to stdout in the selected format.
pub fn print_value(value: &Value, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", render(value, format)?);
    Ok(())
}
