use serde_json::{Map, Value};

use crate::config::DocConfig;
use crate::docs::{
    Documentation, build_code_panel, build_endpoint, build_nav, build_service, intro_sections,
};
use crate::error::{ExportError, GenerateError};
use crate::export;
use crate::model::HttpMethod;
use crate::parse::document::Document;
use crate::parse::{self, ParsedDocument, Source};
use crate::samples::SampleRenderer;
use crate::transform::{group_by_tag, to_model};
use crate::validate::validate;

/// Build the complete documentation for a parsed document.
///
/// Validation is advisory: warnings are recorded in the result and generation
/// carries on with defaults. Schema or render failures abort the pass.
pub fn assemble<R: SampleRenderer + ?Sized>(
    document: &Document,
    renderer: &R,
    config: &DocConfig,
) -> Result<Documentation, GenerateError> {
    let validation = validate(document);
    let model = to_model(document, &config.defaults);

    let nav = build_nav(&model);
    let intro = intro_sections(&model);

    let endpoints = model
        .operations
        .iter()
        .map(|op| {
            build_endpoint(op, config.schema.max_depth).map_err(|source| GenerateError::Schema {
                operation: op.ids.operation_id.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let services = group_by_tag(&model)
        .into_values()
        .flatten()
        .map(build_service)
        .collect();

    let code_panels = model
        .operations
        .iter()
        .map(|op| {
            build_code_panel(&model, op, renderer).map_err(|source| GenerateError::Render {
                operation: op.ids.operation_id.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "assembled {} endpoint sections in {} nav groups",
        endpoints.len(),
        nav.groups.len()
    );

    Ok(Documentation {
        title: model.info.title,
        version: model.info.version,
        declared_server_url: model.declared_server_url,
        server_url: model.server_url,
        has_auth: model.has_auth,
        nav,
        intro_sections: intro,
        endpoints,
        services,
        code_panels,
        validation,
    })
}

/// Generation context: holds the last loaded document and the last
/// successfully assembled output.
///
/// Each pass builds a fresh [`Documentation`] and only replaces the held
/// state once the whole pass succeeded, so a failed pass leaves the previous
/// output untouched.
pub struct Generator<R> {
    renderer: R,
    config: DocConfig,
    held: Option<ParsedDocument>,
    output: Option<Documentation>,
}

impl<R: SampleRenderer> Generator<R> {
    pub fn new(renderer: R) -> Self {
        Self::with_config(renderer, DocConfig::default())
    }

    pub fn with_config(renderer: R, config: DocConfig) -> Self {
        Self {
            renderer,
            config,
            held: None,
            output: None,
        }
    }

    pub fn config(&self) -> &DocConfig {
        &self.config
    }

    /// Parse `source`, then rebuild all output from it.
    pub fn generate(&mut self, source: impl Into<Source>) -> Result<&Documentation, GenerateError> {
        let parsed = parse::load(source.into()).inspect_err(|e| {
            log::error!("failed to load document: {e}");
        })?;

        let docs = assemble(&parsed.document, &self.renderer, &self.config).inspect_err(|e| {
            log::error!("documentation generation aborted: {e}");
        })?;

        log::info!(
            "generated documentation for `{}` ({} operations)",
            docs.title,
            docs.endpoints.len()
        );

        self.held = Some(parsed);
        Ok(self.output.insert(docs))
    }

    /// Rebuild the output from the held document.
    pub fn regenerate(&mut self) -> Result<&Documentation, GenerateError> {
        let raw = self.document().ok_or(GenerateError::NoDocument)?.clone();
        self.generate(Source::Structured(raw))
    }

    /// Insert (or replace) an operation in the held document and regenerate.
    pub fn add_operation(
        &mut self,
        path: &str,
        method: &str,
        operation: Value,
    ) -> Result<&Documentation, GenerateError> {
        let method: HttpMethod = method
            .parse()
            .map_err(|_| GenerateError::InvalidMethod(method.to_string()))?;

        let mut raw = self.document().ok_or(GenerateError::NoDocument)?.clone();
        let Value::Object(root) = &mut raw else {
            return Err(GenerateError::NoDocument);
        };
        let paths = child_object(root, "paths");
        let item = child_object(paths, path);
        item.insert(method.as_lower().to_string(), operation);

        self.generate(Source::Structured(raw))
    }

    /// The last successfully generated output.
    pub fn documentation(&self) -> Option<&Documentation> {
        self.output.as_ref()
    }

    /// The held document, in source order.
    pub fn document(&self) -> Option<&Value> {
        self.held.as_ref().map(|p| &p.raw)
    }

    /// The held document as indented JSON.
    pub fn export(&self) -> Result<Option<String>, ExportError> {
        self.document().map(export::to_json).transpose()
    }
}

fn child_object<'a>(map: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let slot = map
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(inner) => inner,
        _ => unreachable!("slot was just made an object"),
    }
}
