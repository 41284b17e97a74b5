//! Client for the users demo backend.
//!
//! # Overview
//! `ApiClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. A `Transport` performs the round-trip in
//! between; `UreqTransport` is the blocking implementation used by
//! `ClientApp` and the `users-client` binary.
//!
//! # Design
//! - Every fetch returns `Result<_, ApiError>`, so a transport failure is
//!   distinguishable from a server that answered.
//! - `ClientApp::users_or_empty` and `ClientApp::health_or_error` log the
//!   error and fall back to a default value for callers that only display.
//! - DTOs are defined independently from the backend crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use app::{ClientApp, DEFAULT_API_URL};
pub use client::ApiClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{HealthState, HealthStatus, User};
