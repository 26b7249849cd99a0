//! Per-resource operations on [`ApiClient`](super::ApiClient)
//!
//! Each operation validates its path identifiers, builds
//! `<base>/users/{user_id}/...` with the rendered query, and hands the URL
//! to the dispatcher once.

mod account;
mod devices;
mod locations;
mod rules;
mod subscriptions;

use super::errors::ApiError;

/// Fail with `"<name> cannot be empty"` before any URL is built.
fn require(name: &'static str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::Validation(name));
    }
    Ok(())
}
