use apidoc_core::error::RenderError;
use apidoc_core::{CodeSamples, ResponseExample, SampleContext, SampleLanguage, SampleRenderer};
use minijinja::{AutoEscape, Environment, Value, context};

use crate::response::{EXAMPLE_TIMESTAMP, example_response};

const TEMPLATES: [(SampleLanguage, &str, &str); 5] = [
    (SampleLanguage::Curl, "curl.j2", include_str!("../templates/curl.j2")),
    (SampleLanguage::Js, "js.j2", include_str!("../templates/js.j2")),
    (SampleLanguage::Python, "python.j2", include_str!("../templates/python.j2")),
    (SampleLanguage::Go, "go.j2", include_str!("../templates/go.j2")),
    (SampleLanguage::Node, "node.j2", include_str!("../templates/node.j2")),
];

/// Renders request samples from the bundled minijinja templates.
pub struct TemplateSampleRenderer {
    env: Environment<'static>,
    timestamp: String,
}

impl TemplateSampleRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        // Samples are plain source text; nothing gets escaped.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        for (lang, name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| template_error(lang, &e))?;
        }
        Ok(Self {
            env,
            timestamp: EXAMPLE_TIMESTAMP.to_string(),
        })
    }

    /// Use `timestamp` as `metadata.date_time` of the example response.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    fn render_one(&self, lang: SampleLanguage, ctx: &Value) -> Result<String, RenderError> {
        let name = template_name(lang);
        let rendered = self
            .env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(ctx))
            .map_err(|e| template_error(lang, &e))?;
        Ok(rendered.trim_end_matches('\n').to_string())
    }
}

impl SampleRenderer for TemplateSampleRenderer {
    fn render_samples(&self, ctx: &SampleContext<'_>) -> Result<CodeSamples, RenderError> {
        let values = context! {
            url => ctx.url(),
            method => ctx.method.as_str(),
            method_lower => ctx.method.as_lower(),
            has_auth => ctx.has_auth,
            has_body => ctx.has_body,
        };
        log::debug!("rendering samples for {} {}", ctx.method, ctx.path);

        Ok(CodeSamples {
            curl: self.render_one(SampleLanguage::Curl, &values)?,
            js: self.render_one(SampleLanguage::Js, &values)?,
            python: self.render_one(SampleLanguage::Python, &values)?,
            go: self.render_one(SampleLanguage::Go, &values)?,
            node: self.render_one(SampleLanguage::Node, &values)?,
        })
    }

    fn render_response(&self, _ctx: &SampleContext<'_>) -> Result<ResponseExample, RenderError> {
        example_response(&self.timestamp)
    }
}

fn template_name(lang: SampleLanguage) -> &'static str {
    TEMPLATES
        .iter()
        .find(|(l, _, _)| *l == lang)
        .map(|(_, name, _)| *name)
        .unwrap_or_default()
}

fn template_error(lang: SampleLanguage, err: &minijinja::Error) -> RenderError {
    RenderError::Template {
        target: lang.key().to_string(),
        message: err.to_string(),
    }
}
