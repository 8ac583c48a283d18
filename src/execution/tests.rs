use std::sync::{Arc, Mutex};
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use secrecy::ExposeSecret;
use serde_json::json;

use crate::auth::{MemoryTokenStore, Navigator, TokenStore};
use crate::client::DallaemClient;
use crate::error::ApiError;
use crate::execution::{CancelHandle, HttpBody, RequestOptions};

struct RecordingNavigator {
    path: String,
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    fn at(path: &str) -> Arc<Self> {
        Arc::new(Self {
            path: path.to_string(),
            visited: Mutex::new(Vec::new()),
        })
    }

    fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&self, url: &str) {
        self.visited.lock().unwrap().push(url.to_string());
    }
}

fn make_token(exp: i64) -> String {
    let payload = json!({ "teamId": "11-5", "userId": 7, "iat": exp - 3600, "exp": exp });
    format!(
        "h.{}.s",
        URL_SAFE_NO_PAD.encode(payload.to_string())
    )
}

fn client(server: &mockito::Server) -> DallaemClient {
    DallaemClient::builder()
        .base_url(server.url())
        .build()
        .unwrap()
}

fn auth_client(server: &mockito::Server, token: &str) -> (DallaemClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::with_token(token));
    let client = DallaemClient::builder()
        .base_url(server.url())
        .token_store(store.clone())
        .build()
        .unwrap();
    (client, store)
}

#[tokio::test]
async fn auth_preflight_short_circuits_without_network() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/auths/user")
        .with_status(200)
        .with_body("{}")
        .expect(0)
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = DallaemClient::builder()
        .base_url(server.url())
        .token_store(store)
        .build()
        .unwrap();

    let res: Result<serde_json::Value, _> = client
        .get("/auths/user", RequestOptions::new().with_auth())
        .await;

    let err = res.unwrap_err();
    assert_eq!(err.status, 401);
    assert_eq!(err.code.as_deref(), Some("UNAUTHORIZED"));
    m.assert_async().await;
}

#[tokio::test]
async fn preflight_error_shape_is_stable() {
    // The pre-flight rejection is constructed once and propagates unchanged,
    // so it always compares equal to the canonical constructor output.
    let server = mockito::Server::new_async().await;
    let store = Arc::new(MemoryTokenStore::new());
    let client = DallaemClient::builder()
        .base_url(server.url())
        .token_store(store)
        .build()
        .unwrap();

    let err = client
        .get::<serde_json::Value>("/x", RequestOptions::new().with_auth())
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::unauthorized());
}

#[tokio::test]
async fn expired_token_fails_preflight() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/auths/user")
        .expect(0)
        .create_async()
        .await;

    let expired = make_token(chrono::Utc::now().timestamp() - 60);
    let (client, store) = auth_client(&server, &expired);

    let err = client
        .get::<serde_json::Value>("/auths/user", RequestOptions::new().with_auth())
        .await
        .unwrap_err();
    assert_eq!(err.status, 401);
    // A pre-flight failure is local: the stored token is not cleared.
    assert!(store.token().is_some());
    m.assert_async().await;
}

#[tokio::test]
async fn with_auth_without_a_store_is_a_configuration_error() {
    let server = mockito::Server::new_async().await;
    let client = client(&server);

    let err = client
        .get::<serde_json::Value>("/auths/user", RequestOptions::new().with_auth())
        .await
        .unwrap_err();
    assert_eq!(err.status, 0);
    assert!(err.message.contains("token store"));
}

#[tokio::test]
async fn bearer_header_is_attached_for_opaque_tokens() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/auths/user")
        .match_header("authorization", "Bearer tok-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{\"ok\":true}")
        .create_async()
        .await;

    // "tok-123" is not a decodable JWT; it must pass through as opaque.
    let (client, _store) = auth_client(&server, "tok-123");
    let res: serde_json::Value = client
        .get("/auths/user", RequestOptions::new().with_auth())
        .await
        .unwrap();
    assert_eq!(res["ok"], true);
    m.assert_async().await;
}

#[tokio::test]
async fn json_bodies_are_serialized_with_json_content_type() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("POST", "/auths/signup")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(json!({"email": "a@b.com"})))
        .with_status(201)
        .with_body("{\"message\":\"ok\"}")
        .create_async()
        .await;

    let client = client(&server);
    let _: serde_json::Value = client
        .post("/auths/signup", &json!({"email": "a@b.com"}), RequestOptions::new())
        .await
        .unwrap();
    m.assert_async().await;
}

#[tokio::test]
async fn caller_headers_merge_over_defaults_without_wiping_them() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("POST", "/echo")
        .match_header("content-type", "application/json")
        .match_header("x-team", "11-5")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client(&server);
    let _: serde_json::Value = client
        .post(
            "/echo",
            &json!({"a": 1}),
            RequestOptions::new().header("X-Team", "11-5"),
        )
        .await
        .unwrap();
    m.assert_async().await;
}

#[tokio::test]
async fn opaque_bytes_pass_through_without_a_forced_content_type() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("POST", "/upload")
        .match_header("content-type", mockito::Matcher::Missing)
        .match_body("raw-bytes")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client(&server);
    let _: serde_json::Value = client
        .request(
            reqwest::Method::POST,
            "/upload",
            HttpBody::Bytes(b"raw-bytes".to_vec()),
            RequestOptions::new(),
        )
        .await
        .unwrap();
    m.assert_async().await;
}

#[tokio::test]
async fn multipart_owns_its_boundary_content_type() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("PUT", "/auths/user")
        .match_header(
            "content-type",
            mockito::Matcher::Regex("^multipart/form-data".to_string()),
        )
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client(&server);
    let form = reqwest::multipart::Form::new().text("companyName", "달램");
    let _: serde_json::Value = client
        .put_multipart("/auths/user", form, RequestOptions::new())
        .await
        .unwrap();
    m.assert_async().await;
}

#[tokio::test]
async fn not_found_maps_status_and_code() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/x")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body("{\"code\":\"NOT_FOUND\",\"message\":\"존재하지 않음\"}")
        .create_async()
        .await;

    let client = client(&server);
    let err = client
        .get::<serde_json::Value>("/x", RequestOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.status, 404);
    assert_eq!(err.code.as_deref(), Some("NOT_FOUND"));
    assert_eq!(err.message, "존재하지 않음");
}

#[tokio::test]
async fn validation_error_fields_are_preserved_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/auths/signup")
        .with_status(400)
        .with_body(
            "{\"code\":\"VALIDATION_ERROR\",\"parameter\":\"email\",\
             \"message\":\"유효한 이메일 주소를 입력하세요\"}",
        )
        .create_async()
        .await;

    let client = client(&server);
    let err = client
        .post::<serde_json::Value, _>(
            "/auths/signup",
            &json!({"email": "viscacha@com"}),
            RequestOptions::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.status, 400);
    assert_eq!(err.code.as_deref(), Some("VALIDATION_ERROR"));
    assert_eq!(err.parameter.as_deref(), Some("email"));
    assert_eq!(err.message, "유효한 이메일 주소를 입력하세요");
}

#[tokio::test]
async fn unparseable_error_bodies_become_none() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/boom")
        .with_status(500)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let client = client(&server);
    let err = client
        .get::<serde_json::Value>("/boom", RequestOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(err.body, None);
    assert_eq!(err.message, "Internal Server Error");
}

/// A TCP listener that accepts connections and never responds, for
/// timeout/cancel tests.
async fn stalled_server() -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut open = Vec::new();
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            open.push(stream);
        }
    });
    addr
}

#[tokio::test]
async fn timeout_rejects_with_the_abort_shape() {
    let addr = stalled_server().await;
    let client = DallaemClient::builder()
        .base_url(format!("http://{addr}"))
        .build()
        .unwrap();

    let err = client
        .get::<serde_json::Value>(
            "/slow",
            RequestOptions::new().timeout(Duration::from_millis(100)),
        )
        .await
        .unwrap_err();
    assert_eq!(err.status, 0);
    assert!(err.is_aborted(), "expected abort shape, got: {err:?}");
}

#[tokio::test]
async fn manual_cancel_rejects_with_the_same_abort_shape() {
    let addr = stalled_server().await;
    let client = DallaemClient::builder()
        .base_url(format!("http://{addr}"))
        .build()
        .unwrap();

    let handle = CancelHandle::new();
    let canceller = handle.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = client
        .get::<serde_json::Value>("/slow", RequestOptions::new().cancel(handle))
        .await
        .unwrap_err();
    assert_eq!(err.status, 0);
    assert!(err.is_aborted(), "expected abort shape, got: {err:?}");
}

#[tokio::test]
async fn unauthorized_response_clears_token_and_redirects() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/auths/user")
        .with_status(401)
        .with_body("{\"code\":\"UNAUTHORIZED\",\"message\":\"만료된 토큰입니다\"}")
        .create_async()
        .await;

    let token = make_token(chrono::Utc::now().timestamp() + 3600);
    let store = Arc::new(MemoryTokenStore::with_token(&token));
    let nav = RecordingNavigator::at("/gatherings/7");
    let client = DallaemClient::builder()
        .base_url(server.url())
        .token_store(store.clone())
        .navigator(nav.clone())
        .build()
        .unwrap();

    let err = client
        .get::<serde_json::Value>("/auths/user", RequestOptions::new().with_auth())
        .await
        .unwrap_err();
    assert_eq!(err.status, 401);
    assert_eq!(err.code.as_deref(), Some("UNAUTHORIZED"));
    assert!(store.token().is_none(), "token should be cleared on 401");
    assert_eq!(nav.visited(), vec!["/signin?next=%2Fgatherings%2F7"]);
}

#[tokio::test]
async fn no_redirect_when_already_on_the_signin_page() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/auths/user")
        .with_status(401)
        .with_body("{}")
        .create_async()
        .await;

    let token = make_token(chrono::Utc::now().timestamp() + 3600);
    let store = Arc::new(MemoryTokenStore::with_token(&token));
    let nav = RecordingNavigator::at("/signin");
    let client = DallaemClient::builder()
        .base_url(server.url())
        .token_store(store.clone())
        .navigator(nav.clone())
        .build()
        .unwrap();

    let _ = client
        .get::<serde_json::Value>("/auths/user", RequestOptions::new().with_auth())
        .await
        .unwrap_err();
    assert!(store.token().is_none());
    assert!(nav.visited().is_empty(), "must not redirect onto itself");
}

#[tokio::test]
async fn empty_success_bodies_decode_as_unit() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("DELETE", "/gatherings/3/leave")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let token = make_token(chrono::Utc::now().timestamp() + 3600);
    let (client, _store) = auth_client(&server, &token);
    client
        .delete::<()>("/gatherings/3/leave", RequestOptions::new().with_auth())
        .await
        .unwrap();
}

#[tokio::test]
async fn invalid_json_on_success_is_a_transport_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/weird")
        .with_status(200)
        .with_body("definitely not json")
        .create_async()
        .await;

    let client = client(&server);
    let err = client
        .get::<serde_json::Value>("/weird", RequestOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.status, 0);
    assert!(err.message.starts_with("Invalid JSON response"));
}

#[tokio::test]
async fn stored_token_is_read_fresh_on_every_call() {
    let mut server = mockito::Server::new_async().await;
    let m1 = server
        .mock("GET", "/auths/user")
        .match_header("authorization", "Bearer first")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let m2 = server
        .mock("GET", "/auths/user")
        .match_header("authorization", "Bearer second")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let (client, store) = auth_client(&server, "first");
    let _: serde_json::Value = client
        .get("/auths/user", RequestOptions::new().with_auth())
        .await
        .unwrap();

    store.set_token(secrecy::SecretString::from("second"));
    assert_eq!(store.token().unwrap().expose_secret(), "second");
    let _: serde_json::Value = client
        .get("/auths/user", RequestOptions::new().with_auth())
        .await
        .unwrap();

    m1.assert_async().await;
    m2.assert_async().await;
}
