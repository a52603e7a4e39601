//! Project-related API endpoints

use crate::PncClient;
use crate::error::Result;
use pnc_core::domain::build::Build;
use pnc_core::domain::build_config::BuildConfiguration;
use pnc_core::domain::project::Project;
use pnc_core::dto::page::ListQuery;
use reqwest::Method;

impl PncClient {
    // =============================================================================
    // Project Management
    // =============================================================================

    /// Create a new project
    ///
    /// Requires an authenticated client.
    ///
    /// # Arguments
    /// * `project` - The project to create; `id` must be unset
    ///
    /// # Returns
    /// The created project, as stored by the server
    pub async fn create_project(&self, project: Project) -> Result<Project> {
        let response = self
            .request(Method::POST, "/projects")
            .json(&project)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, project_id: &str) -> Result<Project> {
        let path = format!("/projects/{}", project_id);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }

    /// List all projects matching the query
    pub async fn list_projects(&self, query: &ListQuery) -> Result<Vec<Project>> {
        self.fetch_all("/projects", &[], query).await
    }

    /// List the build configurations of a project
    pub async fn list_project_build_configs(
        &self,
        project_id: &str,
        query: &ListQuery,
    ) -> Result<Vec<BuildConfiguration>> {
        let path = format!("/projects/{}/build-configs", project_id);
        self.fetch_all(&path, &[], query).await
    }

    /// List the builds of a project
    pub async fn list_project_builds(&self, project_id: &str, query: &ListQuery) -> Result<Vec<Build>> {
        let path = format!("/projects/{}/builds", project_id);
        self.fetch_all(&path, &[], query).await
    }

    /// Replace a project
    ///
    /// Requires an authenticated client. The server answers with no content.
    pub async fn update_project(&self, project_id: &str, project: &Project) -> Result<()> {
        let path = format!("/projects/{}", project_id);
        let response = self
            .request(Method::PUT, &path)
            .json(project)
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
