//! Raw record shapes exactly as the backend provider returns them.
//!
//! Field names mirror the provider's RPC output; normalization into display
//! rows happens in `crate::aggregate::view`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantRecord {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub tenant_role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoredRecord {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IotDeviceRecord {
    pub name: String,
    pub serial_number: String,
}

/// One row per measurement event; several rows may share a `device_type_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalDeviceRecord {
    pub device_type_id: String,
    pub device_type_name: String,
    pub last_measurement: String,
    pub measurement_date: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
}
