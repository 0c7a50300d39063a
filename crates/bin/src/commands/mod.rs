pub mod document;
pub mod status;

use std::{
    io::{self, Read},
    path::Path,
};

use kratix_sdk::document::{Value, codec};

/// Read a YAML document from a file, or stdin for `-`.
pub fn read_document(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(codec::from_yaml_str(&text)?)
}

/// Parse a command-line value as YAML.
pub fn parse_value(raw: &str) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(codec::from_yaml_str(raw)?)
}
