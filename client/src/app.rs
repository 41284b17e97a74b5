//! Demo application: fetch from the backend and log what came back.

use tracing::{error, info};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{HealthStatus, User};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ClientApp<T = UreqTransport> {
    client: ApiClient,
    transport: T,
}

impl ClientApp<UreqTransport> {
    pub fn new(api_url: &str) -> Self {
        Self::with_transport(api_url, UreqTransport)
    }
}

impl Default for ClientApp<UreqTransport> {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl<T: Transport> ClientApp<T> {
    pub const VERSION: &'static str = "1.0.0";

    pub fn with_transport(api_url: &str, transport: T) -> Self {
        Self {
            client: ApiClient::new(api_url),
            transport,
        }
    }

    pub fn api_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.transport.execute(self.client.build_fetch_users())?;
        self.client.parse_fetch_users(response)
    }

    pub fn check_health(&self) -> Result<HealthStatus, ApiError> {
        let response = self.transport.execute(self.client.build_check_health())?;
        self.client.parse_check_health(response)
    }

    /// Like [`Self::fetch_users`], but logs any failure and returns `[]`.
    pub fn users_or_empty(&self) -> Vec<User> {
        self.fetch_users().unwrap_or_else(|err| {
            error!(error = %err, api_url = %self.api_url(), "error fetching users");
            Vec::new()
        })
    }

    /// Like [`Self::check_health`], but logs any failure and returns
    /// `{"status":"error"}`.
    pub fn health_or_error(&self) -> HealthStatus {
        self.check_health().unwrap_or_else(|err| {
            error!(error = %err, api_url = %self.api_url(), "error checking health");
            HealthStatus::error()
        })
    }

    pub fn display_users(&self) {
        info!(version = Self::VERSION, "client version");
        info!("fetching users...");
        let users = self.users_or_empty();
        info!(count = users.len(), users = ?users, "users");
    }
}
