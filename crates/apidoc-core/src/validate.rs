use serde::Serialize;

use crate::parse::document::Document;

/// Outcome of advisory validation. `valid` is false when any warning was
/// raised; generation runs either way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub warnings: Vec<String>,
}

/// Check a document for the fields the documentation relies on.
pub fn validate(doc: &Document) -> ValidationReport {
    let mut warnings = Vec::new();

    match &doc.info {
        None => warnings.push("Missing info section".to_string()),
        Some(info) => {
            if is_blank(info.title.as_deref()) {
                warnings.push("Missing info.title".to_string());
            }
            if is_blank(info.version.as_deref()) {
                warnings.push("Missing info.version".to_string());
            }
        }
    }

    if doc.paths.as_ref().is_none_or(|paths| paths.is_empty()) {
        warnings.push("Missing or empty paths section".to_string());
    }

    for warning in &warnings {
        log::warn!("configuration validation warning: {warning}");
    }

    ValidationReport {
        valid: warnings.is_empty(),
        warnings,
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
