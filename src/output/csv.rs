//! Flattened CSV output
//!
//! Records are schema-less, so the header row is taken from the first
//! record's keys in their natural order. Later records with extra keys
//! have them dropped; missing keys leave blank cells. Nested values are
//! flattened to their compact JSON text.

use crate::error::{Error, Result};
use csv::Writer;
use serde_json::Value;
use std::path::Path;

/// Write the collected records as a CSV file
///
/// Returns whether a file was written: an empty collection is a silent
/// no-op and creates nothing.
pub fn write_file(path: &Path, records: &[Value]) -> Result<bool> {
    let Some(first) = records.first() else {
        return Ok(false);
    };

    // Header comes from the first record only, not the union of all keys.
    let headers: Vec<&str> = first
        .as_object()
        .ok_or_else(|| Error::output("first record is not an object"))?
        .keys()
        .map(String::as_str)
        .collect();

    let mut writer = Writer::from_path(path)
        .map_err(|e| Error::output(format!("failed to create {}: {e}", path.display())))?;
    writer.write_record(&headers)?;

    for record in records {
        let fields = record.as_object();
        let row: Vec<String> = headers
            .iter()
            .map(|key| {
                fields
                    .and_then(|obj| obj.get(*key))
                    .map(cell_text)
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(true)
}

/// Render one value as a CSV cell
///
/// Nested objects and arrays become their compact JSON text; strings are
/// written as-is; numbers and booleans use their natural text form; null
/// leaves the cell blank.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => serde_json::to_string(value).unwrap_or_default(),
        other => other.to_string(),
    }
}
