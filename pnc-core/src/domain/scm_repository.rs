//! SCM repository domain types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A source repository known to PNC
///
/// `internal_url` points at the mirror PNC builds from; `external_url` is the
/// upstream it is synced from, when there is one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScmRepository {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_build_sync_enabled: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
