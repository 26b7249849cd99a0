//! Shared session state
//!
//! Holds the current token and the claims derived from it. The token
//! manager is the only writer; the dispatcher and resource operations read.

use async_trait::async_trait;
use chrono::Duration;
use flume_domain::{IdentityClaims, Token};
use tokio::sync::RwLock;

use super::auth::AccessTokenProvider;

#[derive(Debug, Default)]
struct SessionState {
    token: Option<Token>,
    claims: Option<IdentityClaims>,
}

/// Token and claims for one logical caller
///
/// Both fields are swapped together under one write guard, so a reader never
/// sees a token paired with claims from another token.
#[derive(Debug, Default)]
pub struct Session {
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace token and claims atomically.
    pub(crate) async fn replace(&self, token: Token, claims: IdentityClaims) {
        let mut state = self.state.write().await;
        state.token = Some(token);
        state.claims = Some(claims);
    }

    pub async fn token(&self) -> Option<Token> {
        self.state.read().await.token.clone()
    }

    /// Current access token, `None` before the first sign-in.
    pub async fn access_token(&self) -> Option<String> {
        let state = self.state.read().await;
        state
            .token
            .as_ref()
            .map(|token| token.access_token.clone())
            .filter(|token| !token.is_empty())
    }

    /// Stored refresh token, empty when none was issued.
    pub async fn refresh_token(&self) -> String {
        let state = self.state.read().await;
        state.token.as_ref().map(|token| token.refresh_token.clone()).unwrap_or_default()
    }

    pub async fn claims(&self) -> Option<IdentityClaims> {
        self.state.read().await.claims.clone()
    }

    /// Caller's numeric user id; 0 when unauthenticated.
    pub async fn user_id(&self) -> i64 {
        self.state.read().await.claims.as_ref().map_or(0, |claims| claims.user_id)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.access_token().await.is_some()
    }

    /// Whether the access token expires within `threshold` from now.
    ///
    /// An unauthenticated session always reports `true`.
    pub async fn expires_within(&self, threshold: Duration) -> bool {
        let state = self.state.read().await;
        state.claims.as_ref().map_or(true, |claims| claims.expires_within(threshold))
    }
}

#[async_trait]
impl AccessTokenProvider for Session {
    async fn access_token(&self) -> Option<String> {
        Session::access_token(self).await
    }
}
