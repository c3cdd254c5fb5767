//! Synapse REST client.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::RequestBuilder;

use crate::constants::DEFAULT_REPO_ENDPOINT;
use crate::error::SynapseError;
use crate::http::{ApiResponse, ResponseBody, Session, build_url, create_session, handle_response};

/// Extra transport options handed to reqwest as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub timeout: Option<Duration>,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn apply(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        if !self.query.is_empty() {
            request = request.query(&self.query);
        }
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request
    }
}

/// A single GET call: endpoint path, optional server and transport options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetRequest {
    pub endpoint_path: String,
    pub server_url: Option<String>,
    pub options: RequestOptions,
}

impl GetRequest {
    pub fn new(endpoint_path: impl Into<String>) -> Self {
        Self {
            endpoint_path: endpoint_path.into(),
            ..Default::default()
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SynapseApi: Send + Sync {
    async fn get(&self, request: &GetRequest) -> Result<ResponseBody, SynapseError>;
}

/// Client holding the credentials used for every request.
#[derive(Debug, Clone)]
pub struct SynapseClient {
    auth_token: String,
    profile: Option<String>,
}

impl SynapseClient {
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Builds a new authenticated session. Nothing is cached between calls.
    pub fn session(&self) -> Result<Session, SynapseError> {
        create_session(&self.auth_token, self.profile.as_deref())
    }

    /// Performs a GET request against `server_url` (or the default repository
    /// endpoint) and returns the JSON or text body.
    ///
    /// The future must be driven on a tokio runtime. It resolves only once the
    /// request has completed or failed; there is no retry.
    #[tracing::instrument(skip(self, options))]
    pub async fn get(
        &self,
        endpoint_path: &str,
        server_url: Option<&str>,
        options: &RequestOptions,
    ) -> Result<ResponseBody, SynapseError> {
        let url = request_url(endpoint_path, server_url)?;
        debug!("GET {}", url);

        let session = self.session()?;
        let response = options.apply(session.get(&url)).send().await?;
        let response = ApiResponse::read(response).await?;
        debug!("GET {} returned {}", url, response.status);

        handle_response(response)
    }
}

/// Request URL for `endpoint_path`, falling back to the default repository
/// endpoint when no server is given.
pub fn request_url(
    endpoint_path: &str,
    server_url: Option<&str>,
) -> Result<String, SynapseError> {
    build_url(server_url.unwrap_or(DEFAULT_REPO_ENDPOINT), endpoint_path)
}

#[async_trait]
impl SynapseApi for SynapseClient {
    async fn get(&self, request: &GetRequest) -> Result<ResponseBody, SynapseError> {
        SynapseClient::get(
            self,
            &request.endpoint_path,
            request.server_url.as_deref(),
            &request.options,
        )
        .await
    }
}
