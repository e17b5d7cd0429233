use crate::config::Defaults;
use crate::model::{ApiInfo, ApiModel, ApiOperation, ApiParameter, ApiRequestBody, HttpMethod};
use crate::parse::document::{Document, Operation, Parameter};

use super::operation_id::IdAllocator;

/// Build the normalized model from a parsed document, applying `defaults`
/// wherever a field is absent and allocating operation ids.
pub fn to_model(doc: &Document, defaults: &Defaults) -> ApiModel {
    let info = doc.info.clone().unwrap_or_default();
    let info = ApiInfo {
        title: non_blank(info.title).unwrap_or_else(|| defaults.title.clone()),
        version: non_blank(info.version).unwrap_or_else(|| defaults.version.clone()),
        description: non_blank(info.description)
            .unwrap_or_else(|| defaults.description.clone()),
    };

    let declared_server_url = doc.server_url().map(str::to_string);
    let server_url = declared_server_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| defaults.server_url.clone());

    let mut ids = IdAllocator::new();
    let mut operations = Vec::new();
    for (path, item) in doc.paths.iter().flatten() {
        for (method, op) in &item.operations {
            operations.push(build_operation(&mut ids, path, *method, op));
        }
    }

    log::debug!("normalized {} operations", operations.len());

    ApiModel {
        info,
        server_url,
        declared_server_url,
        has_auth: doc.has_auth(),
        operations,
    }
}

fn build_operation(
    ids: &mut IdAllocator,
    path: &str,
    method: HttpMethod,
    op: &Operation,
) -> ApiOperation {
    let request_body = op.request_body.as_ref().map(|rb| ApiRequestBody {
        required: rb.required,
        description: rb.description.clone(),
        schema: rb.json_schema().cloned(),
    });

    ApiOperation {
        ids: ids.allocate(path, method),
        path: path.to_string(),
        method,
        summary: non_blank(op.summary.clone()),
        description: non_blank(op.description.clone()),
        tags: op.tags.clone(),
        parameters: op.parameters.iter().map(resolve_parameter).collect(),
        request_body,
        response_codes: op.responses.keys().cloned().collect(),
    }
}

fn resolve_parameter(param: &Parameter) -> ApiParameter {
    ApiParameter {
        name: param.name.clone(),
        location: param.location,
        type_name: param
            .schema
            .as_ref()
            .and_then(|s| s.schema_type.clone())
            .unwrap_or_else(|| "string".to_string()),
        required: param.required,
        description: non_blank(param.description.clone()),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
