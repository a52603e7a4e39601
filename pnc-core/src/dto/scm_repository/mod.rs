//! SCM repository DTOs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::build_config::BuildConfiguration;
use crate::domain::scm_repository::ScmRepository;

/// Request to register a repository and start mirroring it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAndSyncScmRequest {
    pub scm_url: String,
    pub pre_build_sync_enabled: bool,
}

/// Answer to a create-and-sync request
///
/// When the URL is external, `repository` is empty and `task_id` tracks the
/// asynchronous mirroring task instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryCreationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<ScmRepository>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_config: Option<BuildConfiguration>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// URL filters accepted by the repository list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScmRepositoryFilter {
    /// Exact URL, matched against internal and external URLs
    pub match_url: Option<String>,
    /// Substring of the URL
    pub search_url: Option<String>,
}

impl ScmRepositoryFilter {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(match_url) = &self.match_url {
            params.push(("matchUrl", match_url.clone()));
        }
        if let Some(search_url) = &self.search_url {
            params.push(("searchUrl", search_url.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let req = CreateAndSyncScmRequest {
            scm_url: "https://github.com/project-ncl/bacon.git".to_string(),
            pre_build_sync_enabled: false,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "scmUrl": "https://github.com/project-ncl/bacon.git",
                "preBuildSyncEnabled": false
            })
        );
    }

    #[test]
    fn test_response_for_internal_url() {
        let response: RepositoryCreationResponse = serde_json::from_value(json!({
            "repository": {
                "id": "42",
                "internalUrl": "git+ssh://internal.example.com/some/project.git",
                "preBuildSyncEnabled": true
            }
        }))
        .unwrap();

        assert_eq!(response.task_id, None);
        let repository = response.repository.unwrap();
        assert_eq!(repository.id.as_deref(), Some("42"));
        assert_eq!(repository.pre_build_sync_enabled, Some(true));
    }

    #[test]
    fn test_response_carries_build_config() {
        let response: RepositoryCreationResponse = serde_json::from_value(json!({
            "taskId": 9001,
            "buildConfig": { "id": "5", "name": "bacon-build", "buildType": "MVN" }
        }))
        .unwrap();

        assert_eq!(response.task_id, Some(9001));
        let build_config = response.build_config.as_ref().unwrap();
        assert_eq!(build_config.name, "bacon-build");
        assert_eq!(build_config.build_type.as_deref(), Some("MVN"));
        assert!(!response.extra.contains_key("buildConfig"));
    }

    #[test]
    fn test_filter_params() {
        let filter = ScmRepositoryFilter {
            match_url: None,
            search_url: Some("github.com/project-ncl".to_string()),
        };
        assert_eq!(
            filter.to_params(),
            vec![("searchUrl", "github.com/project-ncl".to_string())]
        );
        assert!(ScmRepositoryFilter::default().to_params().is_empty());
    }
}
