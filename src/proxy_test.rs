use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;

// =============================================================================
// upstream_url / forwardable_headers
// =============================================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/data/filter?type=alkaloid&page=2".parse().unwrap();
    assert_eq!(
        upstream_url("http://backend:8000", &uri),
        "http://backend:8000/api/data/filter?type=alkaloid&page=2"
    );
}

#[test]
fn upstream_url_without_query() {
    let uri: Uri = "/api/auth/verify".parse().unwrap();
    assert_eq!(upstream_url("http://localhost", &uri), "http://localhost/api/auth/verify");
}

#[test]
fn hop_by_hop_headers_are_dropped() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::HOST, HeaderValue::from_static("frontend:8080"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));

    let out = forwardable_headers(&headers);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer t");
    assert!(out.get(header::HOST).is_none());
}

#[test]
fn repeated_headers_are_preserved() {
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));
    let out = forwardable_headers(&headers);
    assert_eq!(out.get_all(header::SET_COOKIE).iter().count(), 2);
}

#[test]
fn error_statuses() {
    assert_eq!(
        ProxyError::TooLarge("length limit exceeded".to_owned()).into_response().status(),
        StatusCode::PAYLOAD_TOO_LARGE
    );
    assert_eq!(
        ProxyError::Body("connection reset".to_owned()).into_response().status(),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn broken_body_stream_is_a_bad_request_not_too_large() {
    let err = body_error(axum::Error::new(std::io::Error::other("client aborted upload")));
    assert!(matches!(err, ProxyError::Body(_)), "{err:?}");
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// End-to-end through the router
// =============================================================================

async fn verify(headers: HeaderMap) -> StatusCode {
    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some("Bearer good") => StatusCode::OK,
        _ => StatusCode::UNAUTHORIZED,
    }
}

async fn login(body: String) -> (StatusCode, String) {
    (StatusCode::OK, format!("echo:{body}"))
}

/// Spawn a throwaway backend and return its base URL.
async fn spawn_backend() -> String {
    let backend = Router::new()
        .route("/api/auth/verify", get(verify))
        .route("/api/auth/login", post(login));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend).await.unwrap();
    });
    format!("http://{addr}")
}

fn proxy_state(backend_url: String, body_limit: usize) -> ProxyState {
    let config = HostConfig {
        bind_addr: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        backend_url,
        api_body_limit: body_limit,
    };
    ProxyState::new(&config).unwrap()
}

fn request(method: Method, uri: &str, auth: Option<&str>, body: &str) -> Request {
    let mut builder = axum::http::Request::builder().method(method).uri(uri);
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::from(body.to_owned())).unwrap()
}

#[tokio::test]
async fn forwards_bearer_token_and_relays_status() {
    let app = api_routes(proxy_state(spawn_backend().await, 1024));

    let ok = app
        .clone()
        .oneshot(request(Method::GET, "/api/auth/verify", Some("Bearer good"), ""))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);

    let denied = app
        .oneshot(request(Method::GET, "/api/auth/verify", Some("Bearer stale"), ""))
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn forwards_method_and_body() {
    let app = api_routes(proxy_state(spawn_backend().await, 1024));
    let resp = app
        .oneshot(request(Method::POST, "/api/auth/login", None, r#"{"passkey":"pk"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], br#"echo:{"passkey":"pk"}"#);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = api_routes(proxy_state(spawn_backend().await, 4));
    let resp = app
        .oneshot(request(Method::POST, "/api/auth/login", None, "much too long"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    // Bind then drop to obtain a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = api_routes(proxy_state(format!("http://{addr}"), 1024));
    let resp = app
        .oneshot(request(Method::GET, "/api/auth/verify", None, ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(proxy_state("http://localhost".to_owned(), 1024));
    let resp = app
        .oneshot(axum::http::Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
