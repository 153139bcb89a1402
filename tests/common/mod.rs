//! Shared test fixtures: an in-memory backend gateway that records which
//! operations (and which query variants) were invoked and can be programmed
//! to fail per operation or per tenant.

// Not every test binary uses every helper here.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use care_platform_api::auth::{Role, Session};
use care_platform_api::gateway::records::{
    IotDeviceRecord, MedicalDeviceRecord, MemberRecord, MonitoredRecord, TenantRecord,
};
use care_platform_api::gateway::{
    BackendGateway, GatewayError, GatewayResult, MembershipQuery, TenantScope,
};

pub const PRIVILEGED_TOKEN: &str = "token-privileged";
pub const STANDARD_TOKEN: &str = "token-standard";

#[derive(Default)]
pub struct MockGateway {
    pub tenants: Vec<TenantRecord>,
    pub members: HashMap<Uuid, Vec<MemberRecord>>,
    pub monitored: HashMap<Uuid, Vec<MonitoredRecord>>,
    pub iot: HashMap<Uuid, Vec<IotDeviceRecord>>,
    pub medical: HashMap<Uuid, Vec<MedicalDeviceRecord>>,
    /// Operation names programmed to fail for every tenant.
    pub fail_ops: HashSet<&'static str>,
    /// Tenants whose facet fetches all fail.
    pub fail_tenants: HashSet<Uuid>,
    /// Recorded invocations, e.g. `tenant_members:all_members:<uuid>`.
    pub calls: Mutex<Vec<String>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tenant(mut self, id: Uuid, name: &str) -> Self {
        self.tenants.push(TenantRecord {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn failing_op(mut self, operation: &'static str) -> Self {
        self.fail_ops.insert(operation);
        self
    }

    pub fn failing_tenant(mut self, tenant_id: Uuid) -> Self {
        self.fail_tenants.insert(tenant_id);
        self
    }

    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, entry: String) {
        self.calls.lock().unwrap().push(entry);
    }

    fn check(&self, operation: &'static str, tenant_id: Option<Uuid>) -> GatewayResult<()> {
        if self.fail_ops.contains(operation)
            || tenant_id.is_some_and(|id| self.fail_tenants.contains(&id))
        {
            return Err(GatewayError::Remote {
                operation,
                status: 500,
                message: "programmed failure".to_string(),
            });
        }
        Ok(())
    }

    fn facet<T: Clone>(
        &self,
        operation: &'static str,
        store: &HashMap<Uuid, Vec<T>>,
        tenant_id: Uuid,
    ) -> GatewayResult<Vec<T>> {
        self.record(format!("{}:{}", operation, tenant_id));
        self.check(operation, Some(tenant_id))?;
        Ok(store.get(&tenant_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl BackendGateway for MockGateway {
    async fn sign_in(&self, email: &str, password: &str) -> GatewayResult<Session> {
        self.record(format!("sign_in:{}", email));
        if email == "admin@example.com" && password == "secret" {
            Ok(session(Role::Privileged))
        } else {
            Err(GatewayError::Unauthorized(
                "Invalid login credentials".to_string(),
            ))
        }
    }

    async fn current_user(&self, access_token: &str) -> GatewayResult<Session> {
        self.record(format!("current_user:{}", access_token));
        match access_token {
            PRIVILEGED_TOKEN => Ok(session(Role::Privileged)),
            STANDARD_TOKEN => Ok(session(Role::Standard)),
            _ => Err(GatewayError::Unauthorized("invalid token".to_string())),
        }
    }

    async fn tenants(
        &self,
        _session: &Session,
        scope: TenantScope,
    ) -> GatewayResult<Vec<TenantRecord>> {
        let (operation, entry) = match scope {
            TenantScope::AllTenants => ("get_all_tenants", "tenants:all_tenants"),
            TenantScope::CallerTenants => ("get_tenants", "tenants:caller_tenants"),
        };
        self.record(entry.to_string());
        self.check(operation, None)?;
        Ok(self.tenants.clone())
    }

    async fn tenant_members(
        &self,
        _session: &Session,
        query: MembershipQuery,
        tenant_id: Uuid,
    ) -> GatewayResult<Vec<MemberRecord>> {
        let variant = match query {
            MembershipQuery::AllMembers => "all_members",
            MembershipQuery::OwnMembers => "own_members",
        };
        self.record(format!("tenant_members:{}:{}", variant, tenant_id));
        self.check("tenant_members", Some(tenant_id))?;
        Ok(self.members.get(&tenant_id).cloned().unwrap_or_default())
    }

    async fn monitored_people(
        &self,
        _session: &Session,
        tenant_id: Uuid,
    ) -> GatewayResult<Vec<MonitoredRecord>> {
        self.facet("monitored_people", &self.monitored, tenant_id)
    }

    async fn iot_devices(
        &self,
        _session: &Session,
        tenant_id: Uuid,
    ) -> GatewayResult<Vec<IotDeviceRecord>> {
        self.facet("iot_devices", &self.iot, tenant_id)
    }

    async fn medical_devices(
        &self,
        _session: &Session,
        tenant_id: Uuid,
    ) -> GatewayResult<Vec<MedicalDeviceRecord>> {
        self.facet("medical_devices", &self.medical, tenant_id)
    }
}

pub fn session(role: Role) -> Session {
    Session {
        access_token: match role {
            Role::Privileged => PRIVILEGED_TOKEN.to_string(),
            Role::Standard => STANDARD_TOKEN.to_string(),
        },
        user_id: Uuid::from_u128(0xA0),
        email: "tester@example.com".to_string(),
        role,
    }
}

pub fn member(first: &str, last: &str, email: &str, role: &str) -> MemberRecord {
    MemberRecord {
        firstname: first.to_string(),
        lastname: last.to_string(),
        email: email.to_string(),
        tenant_role: role.to_string(),
    }
}

pub fn monitored(first: &str, last: &str, gender: &str, age: Option<&str>) -> MonitoredRecord {
    MonitoredRecord {
        first_name: first.to_string(),
        last_name: last.to_string(),
        gender: gender.to_string(),
        age: age.map(str::to_string),
    }
}

pub fn iot_device(name: &str, serial: &str) -> IotDeviceRecord {
    IotDeviceRecord {
        name: name.to_string(),
        serial_number: serial.to_string(),
    }
}

pub fn medical_device(
    type_id: &str,
    type_name: &str,
    measurement: &str,
    date: &str,
    first: &str,
    last: &str,
) -> MedicalDeviceRecord {
    MedicalDeviceRecord {
        device_type_id: type_id.to_string(),
        device_type_name: type_name.to_string(),
        last_measurement: measurement.to_string(),
        measurement_date: date.parse().expect("valid RFC3339 timestamp"),
        first_name: first.to_string(),
        last_name: last.to_string(),
    }
}
