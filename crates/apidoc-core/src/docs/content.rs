use serde::Serialize;

use crate::error::SchemaError;
use crate::model::{ApiOperation, ApiParameter, HttpMethod, OperationIds};
use crate::parse::document::ParameterLocation;
use crate::transform::{ExpandOptions, PropertyRow, expand, primary_tag};

/// Placeholder shown in the try-it body editor.
pub const BODY_PLACEHOLDER: &str = "{\n  \"key\": \"value\"\n}";

/// Main-content section for one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointSection {
    pub ids: OperationIds,
    pub title: String,
    pub description: Option<String>,
    pub tag: String,
    pub method: HttpMethod,
    pub path: String,
    pub parameters: Vec<ApiParameter>,
    pub request_body: Option<BodySection>,
    pub try_it: TryItForm,
}

/// The expanded JSON request body of an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodySection {
    pub group_id: String,
    pub required: bool,
    pub description: Option<String>,
    pub properties: Vec<PropertyRow>,
}

/// The interactive "try it" form of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TryItForm {
    pub fields: Vec<TryItField>,
    pub body: Option<TryItBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TryItField {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    /// `name * (query)` style caption.
    pub label: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TryItBody {
    pub placeholder: String,
}

/// Build the content section of one operation, expanding its body schema.
pub fn build_endpoint(op: &ApiOperation, max_depth: usize) -> Result<EndpointSection, SchemaError> {
    let request_body = op
        .request_body
        .as_ref()
        .map(|body| -> Result<BodySection, SchemaError> {
            let options = ExpandOptions {
                scope: &op.ids.operation_id,
                start_level: 1,
                max_depth,
            };
            let properties = match &body.schema {
                Some(schema) => expand(schema, &options)?,
                None => Vec::new(),
            };
            Ok(BodySection {
                group_id: format!("{}-body", op.ids.operation_id),
                required: body.required,
                description: body.description.clone(),
                properties,
            })
        })
        .transpose()?;

    Ok(EndpointSection {
        ids: op.ids.clone(),
        title: op.title(),
        description: op.description.clone(),
        tag: primary_tag(op).to_string(),
        method: op.method,
        path: op.path.clone(),
        parameters: op.parameters.clone(),
        request_body,
        try_it: build_try_it(op),
    })
}

fn build_try_it(op: &ApiOperation) -> TryItForm {
    let fields = op
        .parameters
        .iter()
        .map(|param| TryItField {
            name: param.name.clone(),
            location: param.location,
            required: param.required,
            label: format!(
                "{}{} ({})",
                param.name,
                if param.required { " *" } else { "" },
                param.location.as_str()
            ),
            placeholder: param.description.clone().unwrap_or_default(),
        })
        .collect();

    TryItForm {
        fields,
        body: op.sends_body().then(|| TryItBody {
            placeholder: BODY_PLACEHOLDER.to_string(),
        }),
    }
}

/// An entry of the services list in the code sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    pub target_id: String,
    pub tag: String,
    pub label: String,
    pub method: HttpMethod,
    pub display_path: String,
}

/// Build a services-list entry.
pub fn build_service(op: &ApiOperation) -> ServiceEntry {
    ServiceEntry {
        target_id: op.ids.operation_id.clone(),
        tag: primary_tag(op).to_string(),
        label: op.title(),
        method: op.method,
        display_path: display_path(op),
    }
}

/// The path as shown in the services list. Operations whose JSON body has an
/// `option` property with an enum get the option appended.
pub fn display_path(op: &ApiOperation) -> String {
    let option_enum = op
        .request_body
        .as_ref()
        .and_then(|body| body.schema.as_ref())
        .and_then(|schema| schema.properties.as_ref())
        .and_then(|props| props.get("option"))
        .map(|option| option.enum_values.as_slice())
        .unwrap_or_default();

    match option_enum {
        [] => op.path.clone(),
        [single] => {
            let shown = match single {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{} (option: \"{shown}\")", op.path)
        }
        _ => format!("{} (option: configurable)", op.path),
    }
}
