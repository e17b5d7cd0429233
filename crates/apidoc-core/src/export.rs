use serde_json::Value;

use crate::error::ExportError;

/// File name offered when the document is downloaded.
pub const EXPORT_FILE_NAME: &str = "api-config.json";

/// Serialize a document as indented JSON, keeping key order.
pub fn to_json(document: &Value) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(document)?)
}
