//! Runs in its own binary: it mutates process-wide proxy variables.

use flume_infra::HttpClient;
use reqwest::{Method, StatusCode};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn default_client_honours_http_proxy_env() {
    let proxy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/x"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&proxy)
        .await;

    std::env::remove_var("NO_PROXY");
    std::env::remove_var("no_proxy");
    std::env::set_var("HTTP_PROXY", proxy.uri());
    std::env::set_var("http_proxy", proxy.uri());

    let client = HttpClient::new().unwrap();
    let result = client.send(client.request(Method::GET, "http://flume-upstream.invalid/x")).await;

    std::env::remove_var("HTTP_PROXY");
    std::env::remove_var("http_proxy");

    assert_eq!(result.unwrap().status(), StatusCode::OK);
    assert_eq!(proxy.received_requests().await.unwrap().len(), 1);
}
