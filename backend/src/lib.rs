use std::future::Future;

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod server;

pub use server::{BackendServer, DEFAULT_PORT};

/// Version reported by the health endpoint.
pub const API_VERSION: &str = "1.0.0";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Error,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: HealthState,
    pub version: String,
}

/// The fixed user list served by `GET /api/users`.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Alice".to_string(),
        },
        User {
            id: 2,
            name: "Bob".to_string(),
        },
    ]
}

pub fn app() -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/users", get(list_users))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests and return.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: HealthState::Healthy,
        version: API_VERSION.to_string(),
    })
}

async fn list_users() -> Json<Vec<User>> {
    Json(users())
}
