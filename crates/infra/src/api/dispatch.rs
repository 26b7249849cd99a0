//! Parameterized request dispatcher
//!
//! Every resource operation funnels through [`Dispatcher::dispatch`]: one
//! authenticated HTTP call, one decode, no retries.

use std::future::Future;
use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};
use url::Url;

use super::auth::AccessTokenProvider;
use super::errors::ApiError;
use crate::http::HttpClient;

/// Query key forced onto every request so the server answers with the full
/// envelope.
const ENVELOPE_PARAM: &str = "envelope";

/// Run `operation`, aborting with [`ApiError::Cancelled`] when `cancellation`
/// fires first.
pub(crate) async fn cancellable<F, T>(
    cancellation: Option<&CancellationToken>,
    operation: F,
) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match cancellation {
        Some(token) => tokio::select! {
            biased;
            () = token.cancelled() => Err(ApiError::Cancelled),
            result = operation => result,
        },
        None => operation.await,
    }
}

/// Validate `target` and force `envelope=true`, replacing any caller value.
fn prepare_url(target: &str) -> Result<Url, ApiError> {
    if target.trim().is_empty() {
        return Err(ApiError::Config("endpoint cannot be empty".to_string()));
    }

    let mut url = Url::parse(target)
        .map_err(|err| ApiError::Config(format!("invalid endpoint {target}: {err}")))?;

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != ENVELOPE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut().clear().extend_pairs(retained).append_pair(ENVELOPE_PARAM, "true");
    Ok(url)
}

/// One-shot authenticated request/decode primitive
///
/// Reads the bearer token from the shared provider on every call, so a
/// refreshed token is picked up by the next request.
#[derive(Clone)]
pub struct Dispatcher {
    http_client: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    cancellation: Option<CancellationToken>,
}

impl Dispatcher {
    pub fn new(http_client: HttpClient, auth: Arc<dyn AccessTokenProvider>) -> Self {
        Self { http_client, auth, cancellation: None }
    }

    /// Abort in-flight dispatches when `token` fires.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Perform one request and decode the body into `R`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Config`] for an empty or unparsable target, before any I/O
    /// - [`ApiError::Transport`] for network failures, including timeouts
    /// - [`ApiError::Status`] for status >= 400, with the raw body
    /// - [`ApiError::Decode`] when the body does not match `R`
    /// - [`ApiError::Cancelled`] when the cancellation token fires
    #[instrument(skip(self, method, body), fields(%method))]
    pub async fn dispatch<B, R>(
        &self,
        method: Method,
        target: &str,
        body: Option<&B>,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let (status, bytes) =
            cancellable(self.cancellation.as_ref(), self.execute(method, target, body)).await?;

        // 204/205 decode from null: only `()` and `Option` results accept that,
        // envelope results fail with `Decode`
        let result = if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            serde_json::from_value(serde_json::Value::Null)?
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(result)
    }

    /// Perform one request and skip decoding the body.
    #[instrument(skip(self, method, body), fields(%method))]
    pub async fn dispatch_discard<B>(
        &self,
        method: Method,
        target: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        cancellable(self.cancellation.as_ref(), self.execute(method, target, body)).await?;
        Ok(())
    }

    /// `GET` without a body.
    pub async fn get<R: DeserializeOwned>(&self, target: &str) -> Result<R, ApiError> {
        self.dispatch::<(), R>(Method::GET, target, None).await
    }

    async fn execute<B>(
        &self,
        method: Method,
        target: &str,
        body: Option<&B>,
    ) -> Result<(StatusCode, Vec<u8>), ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = prepare_url(target)?;

        let mut request = self
            .http_client
            .request(method, url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(token) = self.auth.access_token().await {
            request = request.bearer_auth(token);
        } else {
            debug!("no access token in session; sending unauthenticated request");
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.http_client.send(request).await?;
        let status = response.status();

        if status.as_u16() >= 400 {
            let body = response.text().await.unwrap_or_else(|err| {
                debug!(error = %err, "failed to read error response body");
                String::new()
            });
            warn!(%status, "API request failed");
            return Err(ApiError::Status { url: url.to_string(), status: status.as_u16(), body });
        }

        Ok((status, response.bytes().await?.to_vec()))
    }
}
