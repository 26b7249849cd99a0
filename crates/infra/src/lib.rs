//! # Flume Infrastructure
//!
//! Async client for the Flume water-metering API.
//!
//! This crate contains:
//! - The HTTP transport wrapper
//! - OAuth token exchange and identity-claim extraction
//! - The authenticated request dispatcher and typed resource operations
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Data shapes come from `flume-domain`
//! - Contains all "impure" code (network and file I/O)
//!
//! ## Example
//! ```no_run
//! # async fn run() -> Result<(), flume_infra::ApiError> {
//! use flume_infra::ApiClient;
//!
//! let config = flume_infra::config::load()?;
//! let client = ApiClient::from_config(&config)?;
//! client.authenticate("user@example.com", "password").await?;
//!
//! let devices = client.get_devices(None).await?;
//! for device in devices.data {
//!     println!("{} ({})", device.id, device.location_id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod http;

// Re-export commonly used items
pub use api::{
    extract_claims, AccessTokenProvider, ApiClient, ApiClientBuilder, ApiClientConfig, ApiError,
    ApiErrorCategory, AuthError, Dispatcher, Session, TokenManager,
};
pub use http::{HttpClient, HttpClientBuilder};
