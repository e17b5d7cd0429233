use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use super::lenient::{display_string, or_default, seq_or_empty};
use crate::model::HttpMethod;

/// Info object describing the API. Every field is optional; absence is a
/// validation warning, not a parse failure. Numeric values such as
/// `version: 1` are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Info {
    #[serde(deserialize_with = "display_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "display_string")]
    pub version: Option<String>,
    #[serde(deserialize_with = "display_string")]
    pub description: Option<String>,
}

/// A server URL definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Server {
    #[serde(deserialize_with = "display_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "display_string")]
    pub description: Option<String>,
}

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

/// A JSON-Schema-like node. Only the keywords the documentation consumes are
/// modelled; everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Schema {
    #[serde(rename = "type", deserialize_with = "or_default")]
    pub schema_type: Option<String>,

    #[serde(deserialize_with = "display_string")]
    pub description: Option<String>,

    #[serde(deserialize_with = "or_default")]
    pub format: Option<String>,

    // `Some` even when empty: an empty `properties` still opens a group.
    #[serde(deserialize_with = "or_default")]
    pub properties: Option<IndexMap<String, Schema>>,

    /// Names of required properties. A boolean `required` on a property
    /// (draft-3 style) is ignored.
    #[serde(deserialize_with = "seq_or_empty")]
    pub required: Vec<String>,

    #[serde(deserialize_with = "or_default")]
    pub items: Option<Box<Schema>>,

    #[serde(rename = "enum", deserialize_with = "seq_or_empty")]
    pub enum_values: Vec<serde_json::Value>,
}

impl Schema {
    pub fn is_array(&self) -> bool {
        self.schema_type.as_deref() == Some("array")
    }
}

/// An API parameter. Entries without a name or with an unknown `in` are
/// skipped by the owning operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(default, deserialize_with = "or_default")]
    pub required: bool,

    #[serde(default, deserialize_with = "or_default")]
    pub schema: Option<Schema>,

    #[serde(default, deserialize_with = "display_string")]
    pub description: Option<String>,
}

/// A media type entry of a request body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MediaType {
    #[serde(deserialize_with = "or_default")]
    pub schema: Option<Schema>,
    pub example: Option<serde_json::Value>,
}

/// A request body definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequestBody {
    #[serde(deserialize_with = "display_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "or_default")]
    pub required: bool,
    #[serde(deserialize_with = "or_default")]
    pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
    /// The `application/json` schema, the only media type the docs consume.
    pub fn json_schema(&self) -> Option<&Schema> {
        self.content
            .get("application/json")
            .and_then(|mt| mt.schema.as_ref())
    }
}

/// An API operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Operation {
    #[serde(deserialize_with = "display_string")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "display_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "seq_or_empty")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "seq_or_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(rename = "requestBody", deserialize_with = "or_default")]
    pub request_body: Option<RequestBody>,
    #[serde(deserialize_with = "or_default")]
    pub responses: IndexMap<String, serde_json::Value>,
}

/// Operations of one path, keyed by method in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    pub operations: IndexMap<HttpMethod, Operation>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => return Ok(PathItem::default()),
            other => {
                log::warn!(
                    "path item is {}, not a mapping; ignoring it",
                    super::value_kind(&other)
                );
                return Ok(PathItem::default());
            }
        };
        let mut operations = IndexMap::new();

        for (key, value) in raw {
            let Ok(method) = key.parse::<HttpMethod>() else {
                log::debug!("skipping non-operation key `{key}` in path item");
                continue;
            };
            let value_is_null = value.is_null();
            let operation = match Operation::deserialize(value) {
                Ok(op) => op,
                Err(_) if value_is_null => Operation::default(),
                Err(_) => {
                    log::warn!("`{key}` operation is not a mapping; documenting it as empty");
                    Operation::default()
                }
            };
            if operations.insert(method, operation).is_some() {
                log::warn!("duplicate `{key}` operation, keeping the last one");
            }
        }

        Ok(PathItem { operations })
    }
}

/// Top-level API description document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(deserialize_with = "or_default")]
    pub info: Option<Info>,
    #[serde(deserialize_with = "seq_or_empty")]
    pub servers: Vec<Server>,
    #[serde(deserialize_with = "seq_or_empty")]
    pub security: Vec<serde_json::Value>,
    #[serde(deserialize_with = "or_default")]
    pub paths: Option<IndexMap<String, PathItem>>,
}

impl Document {
    /// URL of the first declared server, if any.
    pub fn server_url(&self) -> Option<&str> {
        self.servers.first().and_then(|s| s.url.as_deref())
    }

    /// Whether `security[0]` is present and non-empty.
    pub fn has_auth(&self) -> bool {
        match self.security.first() {
            None | Some(serde_json::Value::Null) | Some(serde_json::Value::Bool(false)) => false,
            Some(serde_json::Value::Object(map)) => !map.is_empty(),
            Some(serde_json::Value::Array(items)) => !items.is_empty(),
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_item_skips_non_method_keys() {
        let item: PathItem = serde_json::from_value(serde_json::json!({
            "summary": "Orders",
            "parameters": [],
            "GET": { "summary": "List" },
            "post": null
        }))
        .unwrap();
        let methods: Vec<_> = item.operations.keys().copied().collect();
        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post]);
        assert_eq!(
            item.operations[&HttpMethod::Get].summary.as_deref(),
            Some("List")
        );
    }

    #[test]
    fn test_numeric_display_fields_become_text() {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "info": { "title": "Orders", "version": 2, "description": true },
            "servers": [{ "url": "https://x.test", "description": 3 }]
        }))
        .unwrap();
        let info = doc.info.unwrap();
        assert_eq!(info.version.as_deref(), Some("2"));
        assert_eq!(info.description.as_deref(), Some("true"));
        assert_eq!(doc.servers[0].description.as_deref(), Some("3"));
    }

    #[test]
    fn test_wrong_shaped_lists_fall_back_to_empty() {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "servers": { "- url": "https://x.test" },
            "security": "bearer",
            "paths": {
                "/a": {
                    "get": { "tags": {}, "parameters": { "name": "id" } }
                },
                "/b": "not an item"
            }
        }))
        .unwrap();
        assert!(doc.servers.is_empty());
        assert!(doc.security.is_empty());
        let paths = doc.paths.unwrap();
        let get = &paths["/a"].operations[&HttpMethod::Get];
        assert!(get.tags.is_empty());
        assert!(get.parameters.is_empty());
        assert!(paths["/b"].operations.is_empty());
    }

    #[test]
    fn test_unusable_parameters_are_skipped() {
        let op: Operation = serde_json::from_value(serde_json::json!({
            "parameters": [
                { "name": "payload", "in": "body" },
                { "in": "query" },
                { "name": "id", "in": "path", "required": "yes" },
                { "name": "limit", "in": "query", "description": 10 }
            ]
        }))
        .unwrap();
        let names: Vec<_> = op.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["id", "limit"]);
        assert!(!op.parameters[0].required);
        assert_eq!(op.parameters[1].description.as_deref(), Some("10"));
    }

    #[test]
    fn test_boolean_required_on_property_is_ignored() {
        let schema: Schema = serde_json::from_value(serde_json::json!({
            "type": "object",
            "required": "name",
            "properties": {
                "name": { "type": "string", "required": true },
                "tags": { "type": "array", "items": "string" }
            }
        }))
        .unwrap();
        assert!(schema.required.is_empty());
        let props = schema.properties.unwrap();
        assert!(props["name"].required.is_empty());
        assert!(props["tags"].items.is_none());
    }

    #[test]
    fn test_has_auth_requires_non_empty_entry() {
        let mut doc = Document::default();
        assert!(!doc.has_auth());
        doc.security = vec![serde_json::json!({})];
        assert!(!doc.has_auth());
        doc.security = vec![serde_json::json!({ "bearerAuth": [] })];
        assert!(doc.has_auth());
    }

    #[test]
    fn test_json_schema_ignores_other_media_types() {
        let body: RequestBody = serde_json::from_value(serde_json::json!({
            "content": { "text/plain": { "schema": { "type": "string" } } }
        }))
        .unwrap();
        assert!(body.json_schema().is_none());
    }
}
