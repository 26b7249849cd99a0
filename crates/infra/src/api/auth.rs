//! OAuth token exchange and identity-claim extraction
//!
//! [`TokenManager`] runs the password and refresh grants against
//! `<base>/oauth/token` and is the only writer of the shared [`Session`].

use std::sync::Arc;

use async_trait::async_trait;
use base64::alphabet;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::{DecodePaddingMode, GeneralPurpose};
use base64::Engine as _;
use flume_domain::{Envelope, IdentityClaims, Token};
use reqwest::Method;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::dispatch::cancellable;
use super::errors::{ApiError, AuthError};
use super::session::Session;
use crate::http::HttpClient;

/// URL-safe alphabet that accepts the payload segment with or without `=`
/// padding.
const JWT_PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Trait for providing access tokens
///
/// The dispatcher reads the bearer token through this on every call, so a
/// refresh is visible to the next request without rebuilding anything.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Current bearer token, `None` when unauthenticated.
    async fn access_token(&self) -> Option<String>;
}

/// Decode the claims carried in an access token's second segment.
///
/// Pure: no session state is touched.
///
/// # Errors
///
/// - [`AuthError::InvalidToken`] when the token has fewer than two segments
/// - [`AuthError::PayloadEncoding`] when the segment is not base64url
/// - [`AuthError::Claims`] when the decoded bytes are not a claims object
pub fn extract_claims(access_token: &str) -> Result<IdentityClaims, AuthError> {
    let payload = access_token.split('.').nth(1).ok_or(AuthError::InvalidToken)?;
    let bytes = JWT_PAYLOAD_ENGINE.decode(payload)?;
    serde_json::from_slice(&bytes).map_err(AuthError::Claims)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum GrantType {
    Password,
    RefreshToken,
}

/// JSON body posted to the token endpoint
#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: GrantType,
    client_id: &'a str,
    client_secret: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
}

/// Performs the OAuth grants and stores the results in the session
#[derive(Clone)]
pub struct TokenManager {
    http_client: HttpClient,
    token_url: Url,
    client_id: String,
    client_secret: String,
    session: Arc<Session>,
    cancellation: Option<CancellationToken>,
}

impl TokenManager {
    /// Create a token manager for `<base_url>/oauth/token`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Url`] if the base URL cannot carry a path.
    pub fn new(
        http_client: HttpClient,
        base_url: &Url,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        session: Arc<Session>,
    ) -> Result<Self, ApiError> {
        let mut token_url = base_url.clone();
        token_url
            .path_segments_mut()
            .map_err(|()| ApiError::Url(format!("{base_url} cannot be a base URL")))?
            .pop_if_empty()
            .extend(["oauth", "token"]);

        Ok(Self {
            http_client,
            token_url,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            session,
            cancellation: None,
        })
    }

    /// Abort in-flight exchanges when `token` fires.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn token_url(&self) -> &Url {
        &self.token_url
    }

    /// Exchange username and password for a token pair.
    ///
    /// On success the session holds the new token and its claims. On any
    /// failure the session is left exactly as it was.
    #[instrument(skip(self, username, password), fields(url = %self.token_url))]
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let request = TokenRequest {
            grant_type: GrantType::Password,
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            username: Some(username),
            password: Some(password),
            refresh_token: None,
        };
        self.exchange(&request).await
    }

    /// Exchange the stored refresh token for a new token pair.
    ///
    /// Issued even when no refresh token is stored; the service decides.
    #[instrument(skip(self), fields(url = %self.token_url))]
    pub async fn refresh_access_token(&self) -> Result<(), ApiError> {
        let refresh_token = self.session.refresh_token().await;
        if refresh_token.is_empty() {
            warn!("refreshing without a stored refresh token");
        }

        let request = TokenRequest {
            grant_type: GrantType::RefreshToken,
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            username: None,
            password: None,
            refresh_token: Some(&refresh_token),
        };
        self.exchange(&request).await
    }

    async fn exchange(&self, request: &TokenRequest<'_>) -> Result<(), ApiError> {
        let token = cancellable(self.cancellation.as_ref(), self.request_token(request)).await?;

        let claims = extract_claims(&token.access_token)?;
        let user_id = claims.user_id;
        self.session.replace(token, claims).await;

        info!(grant = ?request.grant_type, user_id, "token exchange succeeded");
        Ok(())
    }

    async fn request_token(&self, request: &TokenRequest<'_>) -> Result<Token, ApiError> {
        let builder =
            self.http_client.request(Method::POST, self.token_url.clone()).json(request);
        let response = self.http_client.send(builder).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|err| {
                debug!(error = %err, "failed to read token endpoint error body");
                String::new()
            });
            warn!(%status, "token endpoint rejected the grant");
            return Err(AuthError::Rejected { status: status.as_u16(), body }.into());
        }

        let bytes = response.bytes().await?;
        let envelope: Envelope<Vec<Token>> = serde_json::from_slice(&bytes)?;
        debug!(entries = envelope.data.len(), "decoded token envelope");

        envelope.into_data().into_iter().next().ok_or_else(|| AuthError::NoTokenData.into())
    }
}
