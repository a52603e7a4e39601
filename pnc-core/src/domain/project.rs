//! Project domain types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::EntityRefs;

/// A PNC project
///
/// Groups build configurations that belong to the same upstream product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_tracker_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engineering_team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_leader: Option<String>,
    #[serde(default, skip_serializing_if = "EntityRefs::is_empty")]
    pub build_configs: EntityRefs,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Start a new project with only its name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_project_url(mut self, project_url: impl Into<String>) -> Self {
        self.project_url = Some(project_url.into());
        self
    }

    pub fn with_issue_tracker_url(mut self, issue_tracker_url: impl Into<String>) -> Self {
        self.issue_tracker_url = Some(issue_tracker_url.into());
        self
    }
}
