//! JSON output

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Render the collected records as a 2-space-indented JSON array
pub fn render(records: &[Value]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write rendered JSON text to a file (overwrite, UTF-8)
pub fn write_file(path: &Path, json_text: &str) -> Result<()> {
    fs::write(path, json_text)
        .map_err(|e| Error::output(format!("failed to write {}: {e}", path.display())))
}
