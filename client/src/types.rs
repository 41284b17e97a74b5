//! DTOs for the users API, mirroring the backend's JSON schema.

use serde::{Deserialize, Serialize};

/// A user as listed by `GET /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Error,
}

/// Body of `GET /api/health`.
///
/// `version` is absent on the locally synthesized error value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: HealthState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl HealthStatus {
    /// The `{"status":"error"}` value reported when the backend is unreachable.
    pub fn error() -> Self {
        Self {
            status: HealthState::Error,
            version: None,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthState::Healthy
    }
}
