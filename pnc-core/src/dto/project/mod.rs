//! Project DTOs

use crate::domain::project::Project;

/// Partial update of a project
///
/// Only fields that are `Some` replace the values of the fetched project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub project_url: Option<String>,
    pub issue_tracker_url: Option<String>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.project_url.is_none()
            && self.issue_tracker_url.is_none()
    }

    /// Apply this patch on top of an existing project
    pub fn apply(self, mut project: Project) -> Project {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(description) = self.description {
            project.description = Some(description);
        }
        if let Some(project_url) = self.project_url {
            project.project_url = Some(project_url);
        }
        if let Some(issue_tracker_url) = self.issue_tracker_url {
            project.issue_tracker_url = Some(issue_tracker_url);
        }
        project
    }
}
