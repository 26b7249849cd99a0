//! Flume API client
//!
//! This module provides the authenticated request pipeline and the typed
//! resource operations built on it.
//!
//! # Architecture
//!
//! - [`TokenManager`] runs the OAuth grants and is the only writer of the
//!   shared [`Session`]
//! - [`Dispatcher`] performs one authenticated call per invocation and
//!   decodes the envelope; it reads the token through
//!   [`AccessTokenProvider`]
//! - [`ApiClient`] owns both and exposes one method per endpoint
//! - No retries, no caching, no pagination traversal

pub mod auth;
pub mod client;
pub mod dispatch;
pub mod errors;
mod resources;
pub mod session;

pub use auth::{extract_claims, AccessTokenProvider, TokenManager};
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use dispatch::Dispatcher;
pub use errors::{ApiError, ApiErrorCategory, AuthError};
pub use session::Session;
