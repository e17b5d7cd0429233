use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Host configuration loaded from `.apidoc.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    pub defaults: Defaults,
    pub schema: SchemaOptions,
    pub assistant: AssistantConfig,
}

/// Display strings substituted when the document omits a field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub title: String,
    pub version: String,
    pub description: String,
    pub server_url: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            title: "API Documentation".to_string(),
            version: "v1.0".to_string(),
            description: "API reference documentation.".to_string(),
            server_url: "https://api.example.com".to_string(),
        }
    }
}

/// Limits applied while expanding schema trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SchemaOptions {
    /// Deepest nesting level the schema walker will expand.
    pub max_depth: usize,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self { max_depth: 32 }
    }
}

/// Question-answering endpoint used by the assistant widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub url: Option<String>,
    pub model: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            url: None,
            model: "gpt-4o".to_string(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".apidoc.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<DocConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: DocConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Starter config written by `apidoc init`.
pub fn default_config_content() -> &'static str {
    r#"# apidoc configuration
defaults:
  title: API Documentation
  version: v1.0
  description: API reference documentation.
  server_url: https://api.example.com   # used when the document declares no servers

schema:
  max_depth: 32         # deepest property nesting expanded in body tables

assistant:
  # url: https://assistant.example.com/ask
  model: gpt-4o
"#
}
