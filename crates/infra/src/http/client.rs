use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client as ReqwestClient, Method, Proxy, RequestBuilder, Response};
use tracing::debug;

/// Default per-request timeout applied by the underlying transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin wrapper over `reqwest::Client` that performs exactly one attempt per
/// call and logs the exchange.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder once.
    ///
    /// Transport failures (connect, TLS, timeout) come back as the original
    /// `reqwest::Error`; any HTTP status is returned as a response.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, reqwest::Error> {
        let request = builder.build()?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, url = %redact_query(&url), "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                debug!(%method, url = %redact_query(&url), %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, url = %redact_query(&url), error = %err, "HTTP request failed");
                Err(err)
            }
        }
    }
}

/// Path-only rendering of a URL for log lines.
fn redact_query(url: &url::Url) -> &str {
    &url[..url::Position::AfterPath]
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: String,
    default_headers: Option<HeaderMap>,
    proxy: Option<Proxy>,
    no_proxy: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("flume-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            default_headers: None,
            proxy: None,
            no_proxy: false,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Route requests through an explicit proxy, in addition to any taken
    /// from the environment.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY` and any explicit proxy. Off by default.
    pub fn no_proxy(mut self, disabled: bool) -> Self {
        self.no_proxy = disabled;
        self
    }

    pub fn build(self) -> Result<HttpClient, reqwest::Error> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).user_agent(self.user_agent);

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        if self.no_proxy {
            builder = builder.no_proxy();
        } else if let Some(proxy) = self.proxy {
            builder = builder.proxy(proxy);
        }

        Ok(HttpClient { client: builder.build()? })
    }
}
