//! Schema command implementation.

use trellis_config::ConfigDocument;

use crate::error::Result;

/// Print the JSON Schema of the document format to stdout.
pub fn execute() -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&ConfigDocument::json_schema())?
    );
    Ok(())
}
