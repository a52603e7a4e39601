//! Build domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single build record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BuildStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_content_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_build: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_revision: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Status of a build as reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    /// Build created but not yet queued
    New,
    Enqueued,
    WaitingForDependencies,
    Building,
    Success,
    Failed,
    /// An identical build already exists
    NoRebuildRequired,
    Rejected,
    RejectedFailedDependencies,
    Cancelled,
    SystemError,
    /// A status this client does not know about, kept verbatim
    #[serde(untagged)]
    Unknown(String),
}

impl BuildStatus {
    /// Whether the build has reached a final state
    pub fn is_final(&self) -> bool {
        !matches!(
            self,
            BuildStatus::New
                | BuildStatus::Enqueued
                | BuildStatus::WaitingForDependencies
                | BuildStatus::Building
                | BuildStatus::Unknown(_)
        )
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BuildStatus::New => "NEW",
            BuildStatus::Enqueued => "ENQUEUED",
            BuildStatus::WaitingForDependencies => "WAITING_FOR_DEPENDENCIES",
            BuildStatus::Building => "BUILDING",
            BuildStatus::Success => "SUCCESS",
            BuildStatus::Failed => "FAILED",
            BuildStatus::NoRebuildRequired => "NO_REBUILD_REQUIRED",
            BuildStatus::Rejected => "REJECTED",
            BuildStatus::RejectedFailedDependencies => "REJECTED_FAILED_DEPENDENCIES",
            BuildStatus::Cancelled => "CANCELLED",
            BuildStatus::SystemError => "SYSTEM_ERROR",
            BuildStatus::Unknown(name) => name.as_str(),
        };
        write!(f, "{}", name)
    }
}
