pub mod document;
pub mod lenient;
/// Minimal indentation-based YAML reader covering the subset API descriptions
/// use: nested mappings, scalars, comments, and `{}`/`[]` placeholders.
pub mod yaml_lite;

use serde_json::Value;

use crate::error::ParseError;
use document::Document;

/// Raw input handed to the generator: either text to parse or an already
/// structured value.
#[derive(Debug, Clone)]
pub enum Source {
    Text(String),
    Structured(Value),
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Text(text.to_string())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

impl From<Value> for Source {
    fn from(value: Value) -> Self {
        Source::Structured(value)
    }
}

/// A parsed document together with the order-preserving value it came from.
/// The value is kept for export; the typed document drives generation.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub raw: Value,
    pub document: Document,
}

/// Parse JSON text into a value.
pub fn from_json(input: &str) -> Result<Value, ParseError> {
    Ok(serde_json::from_str(input)?)
}

/// Parse YAML text with the minimal parser.
pub fn from_yaml(input: &str) -> Result<Value, ParseError> {
    yaml_lite::parse(input)
}

/// Parse text, treating it as JSON when it starts with `{` or `[` and as YAML
/// otherwise.
pub fn from_str(input: &str) -> Result<Value, ParseError> {
    match input.trim_start().chars().next() {
        Some('{') | Some('[') => from_json(input),
        _ => from_yaml(input),
    }
}

/// Convert a structured value into the typed document.
pub fn from_value(raw: Value) -> Result<ParsedDocument, ParseError> {
    if !raw.is_object() {
        return Err(ParseError::NotAMapping(value_kind(&raw)));
    }
    let document: Document =
        serde_json::from_value(raw.clone()).map_err(|e| ParseError::Shape(e.to_string()))?;
    Ok(ParsedDocument { raw, document })
}

/// Parse any source into a typed document.
pub fn load(source: Source) -> Result<ParsedDocument, ParseError> {
    let raw = match source {
        Source::Text(text) => from_str(&text)?,
        Source::Structured(value) => value,
    };
    from_value(raw)
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
