use serde::Serialize;

use crate::error::SchemaError;
use crate::parse::document::Schema;

/// One displayable property of an expanded schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRow {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub required: bool,
    pub description: Option<String>,
    /// Nesting level, starting at the level passed to [`expand`].
    pub level: usize,
    pub has_nested_properties: bool,
    pub is_array_of_objects: bool,
    /// `Array of <item type>` for array properties.
    pub array_note: Option<String>,
    /// Collapsible group holding this property's own properties.
    pub nested_group_id: Option<String>,
    /// Collapsible group holding the properties of this array's items.
    pub items_group_id: Option<String>,
    /// Group this row is rendered inside, `None` at the top level.
    pub parent_group: Option<String>,
    pub enum_values: Vec<serde_json::Value>,
}

/// Controls for [`expand`].
#[derive(Debug, Clone, Copy)]
pub struct ExpandOptions<'a> {
    /// Prefix for group ids, normally the owning operation id.
    pub scope: &'a str,
    pub start_level: usize,
    /// Deepest nesting (relative to `start_level`) the walker will expand.
    pub max_depth: usize,
}

impl Default for ExpandOptions<'_> {
    fn default() -> Self {
        Self {
            scope: "",
            start_level: 1,
            max_depth: 32,
        }
    }
}

/// Flatten the properties of `schema` into rows in depth-first order.
///
/// Object properties with their own `properties` are followed by their
/// children one level deeper; arrays whose `items` declare `properties` are
/// followed by the item properties one level deeper. Nesting beyond
/// `max_depth` fails with [`SchemaError::TooDeep`].
pub fn expand(schema: &Schema, options: &ExpandOptions<'_>) -> Result<Vec<PropertyRow>, SchemaError> {
    let mut rows = Vec::new();
    let mut ancestors = Vec::new();
    walk(schema, options.start_level, &mut ancestors, None, options, &mut rows)?;
    Ok(rows)
}

fn walk(
    schema: &Schema,
    level: usize,
    ancestors: &mut Vec<String>,
    parent_group: Option<&str>,
    options: &ExpandOptions<'_>,
    rows: &mut Vec<PropertyRow>,
) -> Result<(), SchemaError> {
    let Some(properties) = &schema.properties else {
        return Ok(());
    };

    if level - options.start_level >= options.max_depth {
        return Err(SchemaError::TooDeep {
            path: ancestors.join("."),
            max_depth: options.max_depth,
        });
    }

    for (name, prop) in properties {
        let items = prop.items.as_deref().filter(|_| prop.is_array());
        let has_nested_properties = prop.properties.is_some();
        let is_array_of_objects = items.is_some_and(|i| i.properties.is_some());

        let nested_group_id =
            has_nested_properties.then(|| group_id(options.scope, ancestors, name, "props", level));
        let items_group_id =
            is_array_of_objects.then(|| group_id(options.scope, ancestors, name, "items", level));

        rows.push(PropertyRow {
            name: name.clone(),
            type_name: prop
                .schema_type
                .clone()
                .unwrap_or_else(|| "string".to_string()),
            required: schema.required.iter().any(|r| r == name),
            description: prop.description.clone(),
            level,
            has_nested_properties,
            is_array_of_objects,
            array_note: items.map(|i| {
                format!("Array of {}", i.schema_type.as_deref().unwrap_or("objects"))
            }),
            nested_group_id: nested_group_id.clone(),
            items_group_id: items_group_id.clone(),
            parent_group: parent_group.map(str::to_string),
            enum_values: prop.enum_values.clone(),
        });

        ancestors.push(name.clone());
        if let Some(group) = &nested_group_id {
            walk(prop, level + 1, ancestors, Some(group.as_str()), options, rows)?;
        }
        if let (Some(items), Some(group)) = (items, &items_group_id) {
            walk(items, level + 1, ancestors, Some(group.as_str()), options, rows)?;
        }
        ancestors.pop();
    }

    Ok(())
}

fn group_id(scope: &str, ancestors: &[String], name: &str, kind: &str, level: usize) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(ancestors.len() + 2);
    if !scope.is_empty() {
        parts.push(scope);
    }
    parts.extend(ancestors.iter().map(String::as_str));
    parts.push(name);
    format!("{}-{kind}-{level}", parts.join("-"))
}
