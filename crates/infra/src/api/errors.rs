//! API-specific error types
//!
//! Every public client operation returns [`ApiError`]; token-endpoint
//! failures are nested as [`AuthError`].

use flume_domain::FlumeError;
use thiserror::Error;

/// Categories of API errors for callers that classify without matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Required argument missing, raised before any network activity
    Validation,
    /// Malformed base URL, target or path segment
    Config,
    /// Connect, TLS or timeout failure reported by the transport
    Network,
    /// Caller cancelled the in-flight request
    Cancelled,
    /// Upstream answered 401/403
    Authentication,
    /// Upstream answered 4xx (other than auth)
    Client,
    /// Upstream answered 5xx
    Server,
    /// Response body did not match the expected shape
    Decode,
}

/// Failures of the token exchange and claim extraction
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth failed: status {status} body: {body}")]
    Rejected { status: u16, body: String },

    #[error("no token data received")]
    NoTokenData,

    #[error("invalid JWT token")]
    InvalidToken,

    #[error("invalid JWT payload encoding: {0}")]
    PayloadEncoding(#[from] base64::DecodeError),

    #[error("invalid JWT claims: {0}")]
    Claims(#[source] serde_json::Error),
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required identifier was empty
    #[error("{0} cannot be empty")]
    Validation(&'static str),

    #[error("invalid URL: {0}")]
    Url(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("API error: {url} ({status}) {body}")]
    Status { url: String, status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Validation(_) => ApiErrorCategory::Validation,
            Self::Url(_) | Self::Config(_) => ApiErrorCategory::Config,
            Self::Transport(_) => ApiErrorCategory::Network,
            Self::Cancelled => ApiErrorCategory::Cancelled,
            Self::Status { status, .. } => match status {
                401 | 403 => ApiErrorCategory::Authentication,
                500..=599 => ApiErrorCategory::Server,
                _ => ApiErrorCategory::Client,
            },
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Auth(AuthError::Rejected { status, .. }) if *status >= 500 => {
                ApiErrorCategory::Server
            }
            Self::Auth(AuthError::Rejected { .. }) => ApiErrorCategory::Authentication,
            Self::Auth(_) => ApiErrorCategory::Decode,
        }
    }

    /// HTTP status reported by the upstream service, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Auth(AuthError::Rejected { status, .. }) => {
                Some(*status)
            }
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the transport gave up waiting for the upstream service
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}

impl From<FlumeError> for ApiError {
    fn from(err: FlumeError) -> Self {
        match err {
            FlumeError::Config(message) => Self::Config(message),
            FlumeError::InvalidInput(message) => Self::Url(message),
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        Self::Url(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> ApiError {
        ApiError::Status { url: "https://x/y".into(), status: code, body: "oops".into() }
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ApiError::Validation("device_id").category(), ApiErrorCategory::Validation);
        assert_eq!(status(401).category(), ApiErrorCategory::Authentication);
        assert_eq!(status(404).category(), ApiErrorCategory::Client);
        assert_eq!(status(503).category(), ApiErrorCategory::Server);
        assert_eq!(ApiError::Cancelled.category(), ApiErrorCategory::Cancelled);
        assert_eq!(
            ApiError::Auth(AuthError::Rejected { status: 400, body: String::new() }).category(),
            ApiErrorCategory::Authentication
        );
        assert_eq!(ApiError::Auth(AuthError::NoTokenData).category(), ApiErrorCategory::Decode);
    }

    #[test]
    fn test_messages_carry_context() {
        assert_eq!(ApiError::Validation("rule_id").to_string(), "rule_id cannot be empty");

        let message = status(500).to_string();
        assert!(message.contains("500"));
        assert!(message.contains("oops"));
        assert!(message.contains("https://x/y"));

        let rejected = ApiError::from(AuthError::Rejected { status: 401, body: "denied".into() });
        assert_eq!(rejected.to_string(), "auth failed: status 401 body: denied");
        assert_eq!(rejected.status(), Some(401));
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: ApiError = FlumeError::Config("bad".into()).into();
        assert!(matches!(err, ApiError::Config(ref m) if m == "bad"));

        let err: ApiError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(err.category(), ApiErrorCategory::Config);
    }
}
