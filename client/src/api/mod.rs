//! HTTP client for the budget tracker backend.
//!
//! [`ApiClient::request`] is the single choke point for outbound calls: it
//! injects the bearer credential, normalizes every failure into an
//! [`ApiError`], and logs failures before surfacing them. The per-resource
//! modules expose fixed operation sets that delegate here.

mod auth;
mod budgets;
mod transactions;

pub use auth::AuthApi;
pub use budgets::BudgetsApi;
pub use transactions::TransactionsApi;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::Config;
use crate::credentials::CredentialStore;
use crate::error::{ApiError, Result};
use shared::HealthResponse;

/// Per-call adjustments applied on top of the client defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOverrides {
    /// Replaces the stored credential for this call only
    pub bearer_token: Option<String>,
    /// Replaces the transport timeout for this call only
    pub timeout: Option<Duration>,
}

impl RequestOverrides {
    /// Override only the bearer token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            bearer_token: Some(token.into()),
            ..Default::default()
        }
    }
}

/// API client for communicating with the backend server.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
    credentials: Arc<dyn CredentialStore>,
}

impl ApiClient {
    /// Create a client from environment configuration.
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
        Self::with_config(Config::from_env(), credentials)
    }

    /// Create a client pointed at a custom base address.
    pub fn with_base_url(
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self::with_config(Config::default().base_url(base_url), credentials)
    }

    pub fn with_config(config: Config, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            base_url: config.base_url,
            timeout: config.timeout,
            http: reqwest::Client::new(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential store this client reads on every request.
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Check that the backend is reachable and healthy.
    pub async fn health_check(&self) -> Result<HealthResponse> {
        self.get("/health").await
    }

    /// Issue a request and decode the JSON response.
    ///
    /// The stored credential is attached as `Authorization: Bearer <token>`
    /// when present; requests without one proceed unauthenticated. Any
    /// failure - transport, non-2xx, or undecodable body - is logged and
    /// normalized into an [`ApiError`] carrying a single message.
    pub async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        overrides: Option<RequestOverrides>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(endpoint);
        let overrides = overrides.unwrap_or_default();
        debug!(%method, %url, "sending API request");

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .timeout(overrides.timeout.unwrap_or(self.timeout))
            .header(CONTENT_TYPE, "application/json");

        let token = overrides.bearer_token.or_else(|| self.credentials.get());
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(%method, %url, error = %e, "API request failed without a response");
                return Err(ApiError::generic());
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(%method, %url, %status, error = %e, "failed to read API response body");
                return Err(ApiError::generic());
            }
        };

        if !status.is_success() {
            let err = ApiError::from_error_body(&bytes);
            error!(%method, %url, %status, message = %err, "API request rejected");
            return Err(err);
        }

        match serde_json::from_slice(&bytes) {
            Ok(decoded) => Ok(decoded),
            Err(e) => {
                error!(%method, %url, %status, error = %e, "failed to decode API response");
                Err(ApiError::generic())
            }
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request::<T, ()>(Method::GET, endpoint, None, None).await
    }

    pub(crate) async fn get_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        overrides: RequestOverrides,
    ) -> Result<T> {
        self.request::<T, ()>(Method::GET, endpoint, None, Some(overrides))
            .await
    }

    pub(crate) async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, Some(body), None).await
    }

    pub(crate) async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, endpoint, Some(body), None).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request::<T, ()>(Method::DELETE, endpoint, None, None)
            .await
    }

    fn url(&self, endpoint: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        format!("{base}/{endpoint}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MemoryCredentialStore;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::with_base_url(base_url, Arc::new(MemoryCredentialStore::new()))
    }

    #[test]
    fn test_url_joins_without_duplicate_slashes() {
        let api = client("http://localhost:5000/api/");
        assert_eq!(api.url("/transactions"), "http://localhost:5000/api/transactions");
        assert_eq!(api.url("health"), "http://localhost:5000/api/health");
    }

    #[test]
    fn test_default_base_url_applies_without_env_override() {
        let api = ApiClient::with_config(
            Config::default(),
            Arc::new(MemoryCredentialStore::new()),
        );
        assert_eq!(api.base_url(), "http://localhost:5000/api");
    }
}
