use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller role as resolved by the backend provider.
///
/// The provider reports `service_role` for platform operators; every other
/// role string maps to a tenant-scoped standard user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Privileged,
    Standard,
}

impl Role {
    pub fn from_backend(raw: &str) -> Self {
        if raw == "service_role" {
            Role::Privileged
        } else {
            Role::Standard
        }
    }
}

/// Request-scoped caller context.
///
/// Built once per request from the provider's session lookup and passed
/// explicitly into every aggregation call; nothing reads session state from
/// the environment.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}
