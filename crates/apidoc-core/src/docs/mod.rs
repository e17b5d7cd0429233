pub mod code_panel;
pub mod content;
pub mod intro;
pub mod nav;

pub use code_panel::{CodePanel, build_code_panel};
pub use content::{
    BodySection, EndpointSection, ServiceEntry, TryItBody, TryItField, TryItForm, build_endpoint,
    build_service,
};
pub use intro::{IntroBody, IntroSection, intro_sections};
pub use nav::{NavEntry, NavGroup, NavTree, build_nav};

use serde::Serialize;

use crate::validate::ValidationReport;

/// The assembled output of one generation pass, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Documentation {
    pub title: String,
    pub version: String,
    /// First declared server URL without a fallback, for try-it requests.
    pub declared_server_url: Option<String>,
    pub server_url: String,
    pub has_auth: bool,
    pub nav: NavTree,
    pub intro_sections: Vec<IntroSection>,
    pub endpoints: Vec<EndpointSection>,
    pub services: Vec<ServiceEntry>,
    pub code_panels: Vec<CodePanel>,
    pub validation: ValidationReport,
}

impl Documentation {
    /// Ids of every main-content section in display order.
    pub fn section_ids(&self) -> Vec<&str> {
        self.intro_sections
            .iter()
            .map(|s| s.id.as_str())
            .chain(self.endpoints.iter().map(|e| e.ids.content_section_id.as_str()))
            .collect()
    }

    pub fn endpoint(&self, operation_id: &str) -> Option<&EndpointSection> {
        self.endpoints
            .iter()
            .find(|e| e.ids.operation_id == operation_id)
    }

    pub fn code_panel(&self, operation_id: &str) -> Option<&CodePanel> {
        self.code_panels
            .iter()
            .find(|p| p.ids.operation_id == operation_id)
    }

    /// Resolve a URL fragment (`#get--orders`) to a section id, if it names
    /// one.
    pub fn resolve_fragment<'a>(&'a self, fragment: &str) -> Option<&'a str> {
        let wanted = fragment.trim_start_matches('#');
        self.section_ids().into_iter().find(|id| *id == wanted)
    }
}
