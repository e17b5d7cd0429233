use indexmap::IndexMap;

use crate::model::{ApiModel, ApiOperation};

/// Bucket for operations that declare no tag.
pub const DEFAULT_TAG: &str = "General";

/// The grouping tag of an operation: its first declared tag, or
/// [`DEFAULT_TAG`].
pub fn primary_tag(op: &ApiOperation) -> &str {
    op.tags
        .first()
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TAG)
}

/// Group operations by their primary tag.
///
/// Tags appear in the order they are first seen and operations keep document
/// order (paths, then methods within a path). The sidebar and the services
/// list both call this, so their orderings always agree.
pub fn group_by_tag(model: &ApiModel) -> IndexMap<&str, Vec<&ApiOperation>> {
    let mut groups: IndexMap<&str, Vec<&ApiOperation>> = IndexMap::new();
    for op in &model.operations {
        groups.entry(primary_tag(op)).or_default().push(op);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Defaults;
    use crate::parse;
    use crate::transform::normalize::to_model;

    fn model(value: serde_json::Value) -> ApiModel {
        to_model(&parse::from_value(value).unwrap().document, &Defaults::default())
    }

    #[test]
    fn test_preserves_source_order() {
        let m = model(serde_json::json!({
            "paths": { "/b": { "get": {} }, "/a": { "get": {} } }
        }));
        let groups = group_by_tag(&m);
        let paths: Vec<_> = groups[DEFAULT_TAG].iter().map(|op| op.path.as_str()).collect();
        assert_eq!(paths, vec!["/b", "/a"]);
    }

    #[test]
    fn test_first_tag_wins() {
        let m = model(serde_json::json!({
            "paths": {
                "/orders": { "get": { "tags": ["Orders", "Admin"] } },
                "/health": { "get": {} },
                "/orders/{id}": { "delete": { "tags": ["Orders"] } },
                "/users": { "get": { "tags": ["Admin"] } }
            }
        }));
        let groups = group_by_tag(&m);
        let tags: Vec<_> = groups.keys().copied().collect();
        assert_eq!(tags, vec!["Orders", "General", "Admin"]);
        assert_eq!(groups["Orders"].len(), 2);
        assert_eq!(groups["Admin"][0].path, "/users");
    }
}
