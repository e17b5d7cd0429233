use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML at line {line}: {message}")]
    Yaml { line: usize, message: String },

    #[error("document root must be a mapping, found {0}")]
    NotAMapping(&'static str),

    #[error("malformed document: {0}")]
    Shape(String),
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema nesting exceeds {max_depth} levels at `{path}` (cyclic or pathological schema)")]
    TooDeep { path: String, max_depth: usize },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render {target} sample: {message}")]
    Template { target: String, message: String },
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("schema error in {operation}: {source}")]
    Schema {
        operation: String,
        #[source]
        source: SchemaError,
    },

    #[error("render error in {operation}: {source}")]
    Render {
        operation: String,
        #[source]
        source: RenderError,
    },

    #[error("no document loaded")]
    NoDocument,

    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,
}

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("malformed assistant response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("question is empty")]
    EmptyQuestion,
}
