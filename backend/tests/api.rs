use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use users_backend::{app, HealthState, HealthStatus, User};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- health ---

#[tokio::test]
async fn health_returns_literal_payload() {
    let resp = app().oneshot(get("/api/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({ "status": "healthy", "version": "1.0.0" })
    );
}

#[tokio::test]
async fn health_is_json() {
    let resp = app().oneshot(get("/api/health")).await.unwrap();

    let content_type = resp.headers().get(http::header::CONTENT_TYPE).unwrap();
    assert_eq!(content_type, "application/json");
    let health: HealthStatus = body_json(resp).await;
    assert_eq!(health.status, HealthState::Healthy);
}

#[test]
fn health_state_uses_lowercase_names() {
    assert_eq!(serde_json::to_value(HealthState::Healthy).unwrap(), "healthy");
    assert_eq!(serde_json::to_value(HealthState::Error).unwrap(), "error");
}

// --- users ---

#[tokio::test]
async fn users_returns_literal_list() {
    let resp = app().oneshot(get("/api/users")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!([{ "id": 1, "name": "Alice" }, { "id": 2, "name": "Bob" }])
    );
}

#[tokio::test]
async fn users_ignores_query_and_headers() {
    let req = Request::builder()
        .uri("/api/users?limit=1&name=Bob")
        .header(http::header::ACCEPT, "text/plain")
        .header("x-request-id", "abc")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert_eq!(users, users_backend::users());
}

// --- fallthrough ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(get("/api/orders")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn post_to_health_returns_405() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/health")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- idempotence ---

#[tokio::test]
async fn repeated_calls_yield_identical_results() {
    use tower::Service;

    let mut app = app().into_service();
    let mut seen_users = Vec::new();
    let mut seen_health = Vec::new();

    for uri in ["/api/users", "/api/health", "/api/health", "/api/users"] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(get(uri))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = body_json(resp).await;
        if uri == "/api/users" {
            seen_users.push(body);
        } else {
            seen_health.push(body);
        }
    }

    assert_eq!(seen_users[0], seen_users[1]);
    assert_eq!(seen_health[0], seen_health[1]);
}

// --- served over a socket ---

#[tokio::test]
async fn run_until_stops_on_shutdown() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(users_backend::run_until(listener, async {
        let _ = rx.await;
    }));

    tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
