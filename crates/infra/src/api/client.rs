//! Flume API client
//!
//! [`ApiClient`] ties together the shared [`Session`], the [`TokenManager`]
//! that writes it and the [`Dispatcher`] that reads it. Resource operations
//! live in [`super::resources`] as further `impl ApiClient` blocks.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use flume_domain::{ClientConfig, QueryParameters, DEFAULT_BASE_URL};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use super::auth::{AccessTokenProvider, TokenManager};
use super::dispatch::Dispatcher;
use super::errors::ApiError;
use super::session::Session;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Clone)]
pub struct ApiClientConfig {
    /// Service root, e.g. `https://api.flumewater.com`
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Transport timeout for every request
    pub timeout: Duration,
    /// Overrides the default `flume-rs/<version>` agent
    pub user_agent: Option<String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

impl fmt::Debug for ApiClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClientConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Client for one logical Flume session
///
/// Cloning is cheap and every clone shares the same session, so a refresh
/// through one handle is seen by requests on all of them.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiClientConfig,
    base_url: Url,
    session: Arc<Session>,
    tokens: TokenManager,
    dispatcher: Dispatcher,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// - [`ApiError::Url`] if `base_url` does not parse or cannot carry a path
    /// - [`ApiError::Config`] if the HTTP client cannot be built
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Url(format!("{base_url} cannot be a base URL")));
        }

        let mut http = HttpClient::builder().timeout(config.timeout);
        if let Some(agent) = &config.user_agent {
            http = http.user_agent(agent.clone());
        }
        let http_client = http
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?;

        let session = Arc::new(Session::new());
        let tokens = TokenManager::new(
            http_client.clone(),
            &base_url,
            config.client_id.clone(),
            config.client_secret.clone(),
            Arc::clone(&session),
        )?;
        let auth: Arc<dyn AccessTokenProvider> = session.clone();
        let dispatcher = Dispatcher::new(http_client, auth);

        debug!(base_url = %base_url, "API client created");
        Ok(Self { config, base_url, session, tokens, dispatcher })
    }

    /// Build a client from a loaded [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;
        Self::new(ApiClientConfig {
            base_url: config.base_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            timeout: config.timeout(),
            user_agent: None,
        })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Handle sharing this client's session whose requests abort with
    /// [`ApiError::Cancelled`] once `token` fires.
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        let mut client = self.clone();
        client.tokens = client.tokens.with_cancellation(token.clone());
        client.dispatcher = client.dispatcher.with_cancellation(token);
        client
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Sign in with the password grant.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<(), ApiError> {
        self.tokens.authenticate(username, password).await
    }

    /// Swap the stored refresh token for a new token pair.
    pub async fn refresh_access_token(&self) -> Result<(), ApiError> {
        self.tokens.refresh_access_token().await
    }

    /// `<base>/users/{user_id}/<segments...>`
    pub(crate) async fn user_url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let user_id = self.session.user_id().await;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Url(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .push("users")
            .push(&user_id.to_string())
            .extend(segments);

        Ok(url)
    }

    /// [`Self::user_url`] plus the rendered query of an optional parameter set.
    pub(crate) async fn user_url_with<P>(
        &self,
        segments: &[&str],
        params: Option<&P>,
    ) -> Result<Url, ApiError>
    where
        P: QueryParameters + ?Sized,
    {
        let mut url = self.user_url(segments).await?;

        if let Some(params) = params {
            let pairs = params.to_pairs();
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs.iter());
            }
        }

        Ok(url)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

/// Builder for API client
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    config: ApiClientConfig,
}

impl ApiClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// OAuth client id and secret
    pub fn credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.config.client_id = client_id.into();
        self.config.client_secret = client_secret.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// See [`ApiClient::new`].
    pub fn build(self) -> Result<ApiClient, ApiError> {
        ApiClient::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use flume_domain::{Paging, SortDirection};

    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::builder().base_url(base).credentials("id", "secret").build().unwrap()
    }

    #[tokio::test]
    async fn test_user_url_before_sign_in_uses_zero() {
        let url = client("https://api.example.com").user_url(&["devices"]).await.unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/users/0/devices");
    }

    #[tokio::test]
    async fn test_user_url_escapes_identifiers() {
        let url = client("https://api.example.com/")
            .user_url(&["devices", "a/b?c"])
            .await
            .unwrap();

        assert_eq!(url.path(), "/users/0/devices/a%2Fb%3Fc");
        assert_eq!(url.query(), None);
    }

    #[tokio::test]
    async fn test_user_url_with_renders_present_params() {
        let paging = Paging::limit(10).sorted_by("id", SortDirection::Desc);
        let url = client("https://api.example.com")
            .user_url_with(&["locations"], Some(&paging))
            .await
            .unwrap();

        assert_eq!(url.query(), Some("limit=10&sort_field=id&sort_direction=DESC"));

        let url = client("https://api.example.com")
            .user_url_with::<Paging>(&["locations"], None)
            .await
            .unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_rejects_unusable_base_urls() {
        let err = ApiClient::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, ApiError::Url(_)));

        let err = ApiClient::builder().base_url("mailto:ops@example.com").build().unwrap_err();
        assert!(matches!(err, ApiError::Url(_)));
    }

    #[test]
    fn test_from_config_validates() {
        let config = ClientConfig::new("id", "secret").with_base_url(" ");
        assert!(matches!(ApiClient::from_config(&config), Err(ApiError::Config(_))));

        let config = ClientConfig::new("id", "secret");
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.flumewater.com/");
        assert_eq!(client.config().timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let client = ApiClient::builder().credentials("id", "s3cr3t-value").build().unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("s3cr3t-value"));
        assert!(rendered.contains("<redacted>"));
    }
}
