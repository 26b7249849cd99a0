//! OAuth token and identity claim types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::serde::null_as_default;

/// Token pair issued by the `/oauth/token` endpoint
///
/// Replaced as a whole on every successful authentication or refresh.
/// `Debug` output redacts both token strings.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_token: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub refresh_token: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expires_in: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub token_type: String,
}

impl Token {
    /// Whether a refresh token was issued alongside the access token
    pub fn has_refresh_token(&self) -> bool {
        !self.refresh_token.is_empty()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Claims carried in the access token's payload segment
///
/// Always derived from the token currently held by the session; never
/// stored on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityClaims {
    pub exp: i64,
    pub iat: i64,
    #[serde(rename = "iss")]
    pub issuer: String,
    pub scope: Vec<String>,
    #[serde(rename = "sub")]
    pub subject: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub user_id: i64,
}

impl IdentityClaims {
    /// Expiry as a timestamp, when `exp` is a representable instant
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if self.exp <= 0 {
            return None;
        }
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Issue time as a timestamp
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        if self.iat <= 0 {
            return None;
        }
        DateTime::from_timestamp(self.iat, 0)
    }

    /// Whether the token expires at or before `now + threshold`
    ///
    /// A token without an `exp` claim is treated as never expiring.
    pub fn expires_within(&self, threshold: chrono::Duration) -> bool {
        self.expires_at().is_some_and(|expires_at| Utc::now() + threshold >= expires_at)
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scope.iter().any(|granted| granted == scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_field_names() {
        let json = r#"{
            "exp": 1700003600,
            "iat": 1700000000,
            "iss": "flume",
            "scope": ["read:personal", "update:personal"],
            "sub": "user@example.com",
            "type": "USER",
            "user_id": 42
        }"#;

        let claims: IdentityClaims = serde_json::from_str(json).unwrap();

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.issuer, "flume");
        assert_eq!(claims.subject, "user@example.com");
        assert_eq!(claims.token_type, "USER");
        assert!(claims.has_scope("update:personal"));
        assert!(!claims.has_scope("admin"));
        assert_eq!(claims.expires_at().map(|t| t.timestamp()), Some(1_700_003_600));
        assert_eq!(claims.issued_at().map(|t| t.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn test_expires_within() {
        let soon = IdentityClaims { exp: Utc::now().timestamp() + 60, ..Default::default() };
        let later = IdentityClaims { exp: Utc::now().timestamp() + 3600, ..Default::default() };
        let unset = IdentityClaims::default();

        assert!(soon.expires_within(chrono::Duration::minutes(5)));
        assert!(!later.expires_within(chrono::Duration::minutes(5)));
        assert!(!unset.expires_within(chrono::Duration::minutes(5)));
    }

    #[test]
    fn test_token_debug_redacts_secrets() {
        let token = Token {
            access_token: "aaa.bbb.ccc".to_string(),
            refresh_token: "refresh-me".to_string(),
            expires_in: 3600,
            token_type: "bearer".to_string(),
        };

        let printed = format!("{token:?}");
        assert!(!printed.contains("aaa.bbb.ccc"));
        assert!(!printed.contains("refresh-me"));
        assert!(printed.contains("3600"));
        assert!(token.has_refresh_token());
    }
}
