//! PNC HTTP Client
//!
//! A small, type-safe HTTP client for the PNC build-orchestration REST API (v2).
//!
//! The client owns transport, bearer-token attachment, paging and JSON
//! (de)serialization. Endpoints are grouped by resource in their own modules.
//!
//! # Example
//!
//! ```no_run
//! use pnc_client::PncClient;
//! use pnc_core::domain::project::Project;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PncClient::new("http://pnc.example.com").with_token("secret");
//!
//!     let project = client
//!         .create_project(Project::new("New Project Name"))
//!         .await?;
//!
//!     println!("Created project: {:?}", project.id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod projects;
mod scm_repositories;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use pnc_core::dto::page::ListQuery;
pub use pnc_core::dto::scm_repository::ScmRepositoryFilter;

use pnc_core::dto::page::Page;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// Path of the REST API below the server URL
pub const API_PREFIX: &str = "/pnc-rest/v2";

/// Number of items requested per page when walking a collection
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// HTTP client for the PNC REST API
///
/// Read endpoints work anonymously. Endpoints that modify data need a bearer
/// token, set with [`PncClient::with_token`].
#[derive(Debug, Clone)]
pub struct PncClient {
    /// Base URL of the server (e.g., "http://pnc.example.com")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Bearer token sent with every request, if any
    token: Option<String>,
    page_size: u32,
}

impl PncClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The server URL, without the `/pnc-rest/v2` suffix
    ///
    /// # Example
    /// ```
    /// use pnc_client::PncClient;
    ///
    /// let client = PncClient::new("http://pnc.example.com");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use pnc_client::PncClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PncClient::with_client("http://pnc.example.com", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Attach a bearer token to every request made by this client
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the page size used when walking collections
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests are authenticated
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    // =============================================================================
    // Request Helpers
    // =============================================================================

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Start a request to an API path, with credentials when we have them
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "sending request");

        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Fetch every page of a collection endpoint
    ///
    /// Pages are requested in order until the requested index reaches
    /// `totalPages` or a page comes back empty; the items are returned in the
    /// order the server sent them.
    async fn fetch_all<T: DeserializeOwned>(
        &self,
        path: &str,
        filters: &[(&'static str, String)],
        query: &ListQuery,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page_index = 0;

        loop {
            let response = self
                .request(Method::GET, path)
                .query(filters)
                .query(&query.to_params(page_index, self.page_size))
                .send()
                .await?;

            let page: Page<T> = self.handle_response(response).await?;
            tracing::debug!(
                path,
                page_index = page.page_index,
                total_pages = page.total_pages,
                total_hits = page.total_hits,
                "received page"
            );

            let has_next = page.has_next(page_index);
            items.extend(page.content);
            if !has_next {
                break;
            }
            page_index += 1;
        }

        Ok(items)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content (e.g., PUT operations)
    ///
    /// This method checks the status code and returns an error if the request failed.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
