pub mod http;
pub mod records;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::Session;
use records::{IotDeviceRecord, MedicalDeviceRecord, MemberRecord, MonitoredRecord, TenantRecord};

pub use http::HttpGateway;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("authentication rejected: {0}")]
    Unauthorized(String),
    #[error("remote operation '{operation}' failed with status {status}: {message}")]
    Remote {
        operation: &'static str,
        status: u16,
        message: String,
    },
    #[error("invalid gateway url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Which membership query variant to issue for a tenant.
///
/// `AllMembers` is the operator variant that ignores the caller identity;
/// `OwnMembers` is scoped to the caller's own membership context. Both take
/// the same tenant id and return the same record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipQuery {
    AllMembers,
    OwnMembers,
}

/// Which tenant enumeration the caller is allowed to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantScope {
    AllTenants,
    CallerTenants,
}

/// Remote operations exposed by the hosted backend provider.
///
/// Authentication, persistence, and row-level authorization all live behind
/// this boundary; the service only issues reads and the sign-in call.
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// Exchange credentials for a session. Invalid credentials surface as
    /// `GatewayError::Unauthorized`.
    async fn sign_in(&self, email: &str, password: &str) -> GatewayResult<Session>;

    /// Resolve an access token into the caller's session context.
    async fn current_user(&self, access_token: &str) -> GatewayResult<Session>;

    async fn tenants(&self, session: &Session, scope: TenantScope)
        -> GatewayResult<Vec<TenantRecord>>;

    async fn tenant_members(
        &self,
        session: &Session,
        query: MembershipQuery,
        tenant_id: Uuid,
    ) -> GatewayResult<Vec<MemberRecord>>;

    async fn monitored_people(
        &self,
        session: &Session,
        tenant_id: Uuid,
    ) -> GatewayResult<Vec<MonitoredRecord>>;

    async fn iot_devices(
        &self,
        session: &Session,
        tenant_id: Uuid,
    ) -> GatewayResult<Vec<IotDeviceRecord>>;

    async fn medical_devices(
        &self,
        session: &Session,
        tenant_id: Uuid,
    ) -> GatewayResult<Vec<MedicalDeviceRecord>>;
}
