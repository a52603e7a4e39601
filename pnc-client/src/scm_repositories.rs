//! SCM repository API endpoints

use crate::PncClient;
use crate::error::Result;
use pnc_core::domain::build_config::BuildConfiguration;
use pnc_core::domain::scm_repository::ScmRepository;
use pnc_core::dto::page::ListQuery;
use pnc_core::dto::scm_repository::{
    CreateAndSyncScmRequest, RepositoryCreationResponse, ScmRepositoryFilter,
};
use reqwest::Method;

impl PncClient {
    // =============================================================================
    // SCM Repository Management
    // =============================================================================

    /// Register a repository and start syncing it
    ///
    /// Requires an authenticated client. For an external URL the server
    /// creates the internal mirror asynchronously and answers with a task ID.
    pub async fn create_and_sync_scm_repository(
        &self,
        req: CreateAndSyncScmRequest,
    ) -> Result<RepositoryCreationResponse> {
        let response = self
            .request(Method::POST, "/scm-repositories/create-and-sync")
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a repository by ID
    pub async fn get_scm_repository(&self, repository_id: &str) -> Result<ScmRepository> {
        let path = format!("/scm-repositories/{}", repository_id);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }

    /// List repositories, optionally filtered by URL
    pub async fn list_scm_repositories(
        &self,
        filter: &ScmRepositoryFilter,
        query: &ListQuery,
    ) -> Result<Vec<ScmRepository>> {
        self.fetch_all("/scm-repositories", &filter.to_params(), query)
            .await
    }

    /// List the build configurations that build from a repository
    pub async fn list_scm_repository_build_configs(
        &self,
        repository_id: &str,
        query: &ListQuery,
    ) -> Result<Vec<BuildConfiguration>> {
        let path = format!("/scm-repositories/{}/build-configs", repository_id);
        self.fetch_all(&path, &[], query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_and_sync_posts_request() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/pnc-rest/v2/scm-repositories/create-and-sync")
                .json_body(json!({
                    "scmUrl": "https://external.example.com/some/project.git",
                    "preBuildSyncEnabled": true
                }));
            then.status(202).json_body(json!({ "taskId": 9001 }));
        });

        let client = PncClient::new(server.base_url()).with_token("t");
        let response = client
            .create_and_sync_scm_repository(CreateAndSyncScmRequest {
                scm_url: "https://external.example.com/some/project.git".to_string(),
                pre_build_sync_enabled: true,
            })
            .await?;

        mock.assert();
        assert_eq!(response.task_id, Some(9001));
        assert!(response.repository.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_list_repositories_sends_url_filters() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/pnc-rest/v2/scm-repositories")
                .query_param("matchUrl", "https://github.com/project-ncl/bacon.git")
                .query_param("pageIndex", "0");
            then.status(200).json_body(json!({
                "pageIndex": 0,
                "pageSize": 100,
                "totalPages": 1,
                "totalHits": 1,
                "content": [{
                    "id": "5",
                    "internalUrl": "git+ssh://internal.example.com/project-ncl/bacon.git",
                    "externalUrl": "https://github.com/project-ncl/bacon.git"
                }]
            }));
        });

        let client = PncClient::new(server.base_url());
        let filter = ScmRepositoryFilter {
            match_url: Some("https://github.com/project-ncl/bacon.git".to_string()),
            search_url: None,
        };
        let repositories = client
            .list_scm_repositories(&filter, &ListQuery::default())
            .await?;

        mock.assert();
        assert_eq!(repositories.len(), 1);
        assert_eq!(repositories[0].id.as_deref(), Some("5"));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_repository_and_its_build_configs() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/pnc-rest/v2/scm-repositories/5");
            then.status(200).json_body(json!({
                "id": "5",
                "internalUrl": "git+ssh://internal.example.com/bacon.git",
                "preBuildSyncEnabled": false
            }));
        });
        server.mock(|when, then| {
            when.method(GET)
                .path("/pnc-rest/v2/scm-repositories/5/build-configs");
            then.status(200).json_body(json!({
                "pageIndex": 0,
                "pageSize": 100,
                "totalPages": 1,
                "totalHits": 2,
                "content": [{ "id": "1", "name": "one" }, { "id": "2", "name": "two" }]
            }));
        });

        let client = PncClient::new(server.base_url());
        let repository = client.get_scm_repository("5").await?;
        let configs = client
            .list_scm_repository_build_configs("5", &ListQuery::default())
            .await?;

        assert_eq!(repository.pre_build_sync_enabled, Some(false));
        assert_eq!(configs.len(), 2);
        Ok(())
    }
}
