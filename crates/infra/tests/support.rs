#![allow(dead_code)]

use std::sync::Once;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use flume_infra::ApiClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";

/// Install a fmt subscriber that writes through the test harness.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("flume_infra=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Unsigned three-segment token whose payload is `claims`.
pub fn jwt(claims: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

/// Token for `user_id` expiring an hour from now.
pub fn jwt_for_user(user_id: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    jwt(&json!({
        "exp": now + 3600,
        "iat": now,
        "iss": "flume",
        "scope": ["read"],
        "sub": "user@example.com",
        "type": "USER",
        "user_id": user_id,
    }))
}

/// Token-endpoint success body carrying `access_token`.
pub fn token_envelope(access_token: &str, refresh_token: &str) -> Value {
    json!({
        "success": true,
        "code": 602,
        "message": "Request OK",
        "http_code": 200,
        "http_message": "OK",
        "detailed": null,
        "data": [{
            "access_token": access_token,
            "refresh_token": refresh_token,
            "expires_in": 604800,
            "token_type": "bearer"
        }],
        "count": 1,
        "pagination": null
    })
}

/// Envelope around an arbitrary `data` payload.
pub fn envelope(data: Value) -> Value {
    json!({
        "success": true,
        "code": 602,
        "message": "Request OK",
        "http_code": 200,
        "http_message": "OK",
        "detailed": null,
        "data": data,
        "count": 1,
        "pagination": null
    })
}

pub fn client_for(server: &MockServer) -> ApiClient {
    init_tracing();
    ApiClient::builder()
        .base_url(server.uri())
        .credentials(CLIENT_ID, CLIENT_SECRET)
        .build()
        .expect("client should build against the mock server")
}

/// Serve a token for `user_id` from `/oauth/token`.
pub async fn mount_token_endpoint(server: &MockServer, user_id: i64) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_envelope(&jwt_for_user(user_id), "refresh-token")),
        )
        .mount(server)
        .await;
}

/// Client already signed in as `user_id`.
pub async fn signed_in_client(server: &MockServer, user_id: i64) -> ApiClient {
    mount_token_endpoint(server, user_id).await;
    let client = client_for(server);
    client.authenticate("user@example.com", "password").await.expect("sign-in should succeed");
    client
}
