use serde::Serialize;

use crate::error::RenderError;
use crate::model::{ApiModel, ApiOperation, HttpMethod};

/// Client languages a code panel offers, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleLanguage {
    Curl,
    Js,
    Python,
    Go,
    Node,
}

impl SampleLanguage {
    pub const ALL: [SampleLanguage; 5] = [
        SampleLanguage::Curl,
        SampleLanguage::Js,
        SampleLanguage::Python,
        SampleLanguage::Go,
        SampleLanguage::Node,
    ];

    /// Stable key used for tab/content correlation.
    pub fn key(&self) -> &'static str {
        match self {
            SampleLanguage::Curl => "curl",
            SampleLanguage::Js => "js",
            SampleLanguage::Python => "python",
            SampleLanguage::Go => "go",
            SampleLanguage::Node => "node",
        }
    }

    /// Tab caption.
    pub fn label(&self) -> &'static str {
        match self {
            SampleLanguage::Curl => "cURL",
            SampleLanguage::Js => "JavaScript",
            SampleLanguage::Python => "Python",
            SampleLanguage::Go => "Go",
            SampleLanguage::Node => "Node.js",
        }
    }
}

/// A language tab of a code panel. The first tab starts active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageTab {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Tabs for every [`SampleLanguage`], with cURL active.
pub fn language_tabs() -> Vec<LanguageTab> {
    SampleLanguage::ALL
        .iter()
        .enumerate()
        .map(|(i, lang)| LanguageTab {
            key: lang.key(),
            label: lang.label(),
            active: i == 0,
        })
        .collect()
}

/// Sample source text for each language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeSamples {
    pub curl: String,
    pub js: String,
    pub python: String,
    pub go: String,
    pub node: String,
}

impl CodeSamples {
    pub fn get(&self, language: SampleLanguage) -> &str {
        match language {
            SampleLanguage::Curl => &self.curl,
            SampleLanguage::Js => &self.js,
            SampleLanguage::Python => &self.python,
            SampleLanguage::Go => &self.go,
            SampleLanguage::Node => &self.node,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SampleLanguage, &str)> {
        SampleLanguage::ALL.into_iter().map(|lang| (lang, self.get(lang)))
    }
}

/// The example response block shown under a code sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseExample {
    pub status_line: String,
    pub format: String,
    pub body: String,
}

/// Everything a sample template needs to know about one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleContext<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    pub server_url: &'a str,
    pub has_auth: bool,
    /// True iff the method carries a body and the operation defines one.
    pub has_body: bool,
}

impl<'a> SampleContext<'a> {
    pub fn for_operation(model: &'a ApiModel, op: &'a ApiOperation) -> Self {
        Self {
            path: &op.path,
            method: op.method,
            server_url: &model.server_url,
            has_auth: model.has_auth,
            has_body: op.sends_body(),
        }
    }

    /// Target URL: server URL followed by the path.
    pub fn url(&self) -> String {
        format!("{}{}", self.server_url, self.path)
    }
}

/// Produces code samples for an operation.
pub trait SampleRenderer {
    fn render_samples(&self, ctx: &SampleContext<'_>) -> Result<CodeSamples, RenderError>;

    fn render_response(&self, ctx: &SampleContext<'_>) -> Result<ResponseExample, RenderError>;
}

impl<T: SampleRenderer + ?Sized> SampleRenderer for &T {
    fn render_samples(&self, ctx: &SampleContext<'_>) -> Result<CodeSamples, RenderError> {
        (**self).render_samples(ctx)
    }

    fn render_response(&self, ctx: &SampleContext<'_>) -> Result<ResponseExample, RenderError> {
        (**self).render_response(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_order_and_active() {
        let tabs = language_tabs();
        let keys: Vec<_> = tabs.iter().map(|t| t.key).collect();
        assert_eq!(keys, vec!["curl", "js", "python", "go", "node"]);
        assert!(tabs[0].active);
        assert!(tabs[1..].iter().all(|t| !t.active));
        assert_eq!(tabs[4].label, "Node.js");
    }

    #[test]
    fn test_samples_iter_follows_tab_order() {
        let samples = CodeSamples {
            curl: "c".into(),
            js: "j".into(),
            python: "p".into(),
            go: "g".into(),
            node: "n".into(),
        };
        let joined: String = samples.iter().map(|(_, s)| s).collect();
        assert_eq!(joined, "cjpgn");
    }
}
