use serde::Serialize;

use super::intro::INTRO_LABELS;
use crate::model::{ApiModel, HttpMethod};
use crate::transform::{INTRO_IDS, group_by_tag};

/// Caption of the sidebar group holding the intro sections.
pub const INTRO_GROUP: &str = "Home";

/// Sidebar navigation: the intro group followed by one group per tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavTree {
    pub title: String,
    pub version: String,
    pub intro: Vec<NavEntry>,
    pub groups: Vec<NavGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    pub tag: String,
    pub entries: Vec<NavEntry>,
}

/// A sidebar item. `target_id` is the section it scrolls to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub target_id: String,
    pub tag: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl NavEntry {
    fn matches(&self, needle: &str) -> bool {
        let method = self.method.map(|m| m.as_str()).unwrap_or_default();
        self.label.to_lowercase().contains(needle)
            || method.to_lowercase().contains(needle)
            || self
                .path
                .as_deref()
                .is_some_and(|p| p.to_lowercase().contains(needle))
    }
}

impl NavTree {
    /// All entries, intro first, in sidebar order.
    pub fn entries(&self) -> impl Iterator<Item = &NavEntry> {
        self.intro
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.entries.iter()))
    }

    /// Entries whose label, method, or path contains `query`, ignoring case.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&NavEntry> {
        let needle = query.trim().to_lowercase();
        self.entries()
            .filter(|entry| needle.is_empty() || entry.matches(&needle))
            .collect()
    }
}

/// Build the sidebar from the tag grouping.
pub fn build_nav(model: &ApiModel) -> NavTree {
    let intro = INTRO_IDS
        .iter()
        .zip(INTRO_LABELS)
        .map(|(id, label)| NavEntry {
            target_id: id.to_string(),
            tag: INTRO_GROUP.to_string(),
            label: label.to_string(),
            method: None,
            path: None,
        })
        .collect();

    let groups = group_by_tag(model)
        .into_iter()
        .map(|(tag, ops)| NavGroup {
            tag: tag.to_string(),
            entries: ops
                .into_iter()
                .map(|op| NavEntry {
                    target_id: op.ids.operation_id.clone(),
                    tag: tag.to_string(),
                    label: op.label().to_string(),
                    method: Some(op.method),
                    path: Some(op.path.clone()),
                })
                .collect(),
        })
        .collect();

    NavTree {
        title: model.info.title.clone(),
        version: model.info.version.clone(),
        intro,
        groups,
    }
}
