//! End-to-end gateway tests against a local echo upstream

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri, header};
use chrono::Utc;
use serde_json::{Value, json};
use tower::ServiceExt;

use platform::token::TokenKeys;

use crate::config::{GatewayConfig, Upstreams};
use crate::router::{GatewayState, gateway_router};

const SECRET: &str = "gateway-test-secret";

/// Echoes what it received as JSON and counts calls
async fn echo(
    State(hits): State<Arc<AtomicUsize>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> axum::Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    axum::Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "user_id": header("x-user-id"),
        "authorization": header("authorization"),
        "body": String::from_utf8_lossy(&body),
    }))
}

async fn spawn_upstream() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new().fallback(echo).with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), hits)
}

fn gateway(base: &str) -> Router {
    let config = GatewayConfig {
        upstreams: Upstreams {
            users: base.to_string(),
            products: base.to_string(),
            cart: base.to_string(),
            orders: base.to_string(),
        },
        token_keys: TokenKeys::from_secret(SECRET).unwrap(),
        timeout: Duration::from_secs(2),
    };
    let client = platform::http::build_client(config.timeout).unwrap();
    gateway_router(GatewayState::new(client, config))
}

fn token_for(user_id: i64) -> String {
    TokenKeys::from_secret(SECRET)
        .unwrap()
        .issue(user_id, "alice@example.com", Utc::now())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let (base, hits) = spawn_upstream().await;
    let app = gateway(&base);

    let response = app
        .clone()
        .oneshot(Request::get("/cart/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["error"],
        "missing or invalid Authorization header"
    );

    let response = app
        .oneshot(
            Request::get("/orders")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_valid_token_forwards_with_identity() {
    let (base, hits) = spawn_upstream().await;
    let token = token_for(42);

    let response = gateway(&base)
        .oneshot(
            Request::post("/cart?source=web")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-user-id", "999")
                .body(Body::from(r#"{"product_id":10,"quantity":1}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let seen = body_json(response).await;
    assert_eq!(seen["method"], "POST");
    assert_eq!(seen["path"], "/cart");
    assert_eq!(seen["query"], "source=web");
    assert_eq!(seen["user_id"], "42");
    assert_eq!(seen["authorization"], format!("Bearer {token}"));
    assert_eq!(seen["body"], r#"{"product_id":10,"quantity":1}"#);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_public_route_strips_spoofed_identity() {
    let (base, _hits) = spawn_upstream().await;

    let response = gateway(&base)
        .oneshot(
            Request::post("/users/login")
                .header("x-user-id", "1")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let seen = body_json(response).await;
    assert_eq!(seen["path"], "/users/login");
    assert_eq!(seen["user_id"], Value::Null);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (base, hits) = spawn_upstream().await;

    let response = gateway(&base)
        .oneshot(Request::get("/admin").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unreachable_upstream_is_502() {
    // bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = gateway(&format!("http://{addr}"))
        .oneshot(
            Request::post("/users/register")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["error"], "upstream unavailable");
}

#[tokio::test]
async fn test_health_is_local() {
    let (base, hits) = spawn_upstream().await;

    let response = gateway(&base)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
