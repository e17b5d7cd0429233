pub mod method;

pub use method::HttpMethod;

use serde::Serialize;

use crate::parse::document::{ParameterLocation, Schema};

/// A fully populated, generator-ready view of a document. Defaults are
/// already applied, so nothing downstream checks for presence.
#[derive(Debug, Clone)]
pub struct ApiModel {
    pub info: ApiInfo,
    /// First declared server URL, or the default.
    pub server_url: String,
    /// First declared server URL exactly as written; try-it requests use it
    /// without a fallback.
    pub declared_server_url: Option<String>,
    pub has_auth: bool,
    pub operations: Vec<ApiOperation>,
}

/// API metadata with display defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiInfo {
    pub title: String,
    pub version: String,
    pub description: String,
}

/// The identifiers correlating one operation across sidebar, content, and
/// code panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OperationIds {
    pub operation_id: String,
    pub content_section_id: String,
    pub code_request_id: String,
    pub code_response_id: String,
}

/// One HTTP method handler on one path.
#[derive(Debug, Clone)]
pub struct ApiOperation {
    pub ids: OperationIds,
    pub path: String,
    pub method: HttpMethod,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub parameters: Vec<ApiParameter>,
    pub request_body: Option<ApiRequestBody>,
    pub response_codes: Vec<String>,
}

impl ApiOperation {
    /// Sidebar label: the summary, or the raw path.
    pub fn label(&self) -> &str {
        self.summary.as_deref().unwrap_or(&self.path)
    }

    /// Section heading: the summary, or `METHOD /path`.
    pub fn title(&self) -> String {
        self.summary
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.method, self.path))
    }

    /// Whether samples and forms should carry a request body.
    pub fn sends_body(&self) -> bool {
        self.method.accepts_body() && self.request_body.is_some()
    }
}

/// A resolved parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiParameter {
    pub name: String,
    pub location: ParameterLocation,
    #[serde(rename = "type")]
    pub type_name: String,
    pub required: bool,
    pub description: Option<String>,
}

/// A resolved request body. Only the `application/json` schema is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequestBody {
    pub required: bool,
    pub description: Option<String>,
    pub schema: Option<Schema>,
}
