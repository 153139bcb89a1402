//! Normalized display rows and the raw-record conversions that produce them.
//!
//! Display strings are Spanish because that is what the dashboard renders;
//! the values here are contractual, not cosmetic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gateway::records::{
    IotDeviceRecord, MedicalDeviceRecord, MemberRecord, MonitoredRecord,
};

/// Rendered when the provider has no age on file.
pub const AGE_UNKNOWN: &str = "No tiene dato";

/// Device state is not sourced from the provider in the current schema, so
/// every device row carries this fixed placeholder.
pub const STATUS_UNKNOWN: &str = "Desconocido";

/// Join first/last name into a display name. Blank or whitespace-only parts
/// are skipped so a missing half never produces stray spaces.
pub fn full_name(first: &str, last: &str) -> String {
    [first, last]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRow {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<MemberRecord> for MemberRow {
    fn from(record: MemberRecord) -> Self {
        Self {
            name: full_name(&record.firstname, &record.lastname),
            email: record.email,
            role: record.tenant_role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoredRow {
    pub name: String,
    pub gender: String,
    pub age: String,
}

impl From<MonitoredRecord> for MonitoredRow {
    fn from(record: MonitoredRecord) -> Self {
        let gender = if record.gender == "M" {
            "Masculino".to_string()
        } else {
            "Femenino".to_string()
        };
        Self {
            name: full_name(&record.first_name, &record.last_name),
            gender,
            age: record.age.unwrap_or_else(|| AGE_UNKNOWN.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRow {
    pub name: String,
    pub status: String,
    #[serde(rename = "serialID")]
    pub serial_id: String,
}

impl From<IotDeviceRecord> for DeviceRow {
    fn from(record: IotDeviceRecord) -> Self {
        Self {
            name: record.name,
            status: STATUS_UNKNOWN.to_string(),
            serial_id: record.serial_number,
        }
    }
}

/// One medical-device table row. `id` is the device-type identifier, which
/// is why several raw measurement rows can collapse into one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalDeviceRow {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub last_measurement: String,
    pub last_measurement_date: DateTime<Utc>,
    pub name: String,
}

impl From<MedicalDeviceRecord> for MedicalDeviceRow {
    fn from(record: MedicalDeviceRecord) -> Self {
        Self {
            id: record.device_type_id,
            kind: record.device_type_name,
            status: STATUS_UNKNOWN.to_string(),
            last_measurement: record.last_measurement,
            last_measurement_date: record.measurement_date,
            name: full_name(&record.first_name, &record.last_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_with_single_space() {
        assert_eq!(full_name("Ana", "Martínez"), "Ana Martínez");
    }

    #[test]
    fn full_name_skips_blank_parts() {
        assert_eq!(full_name("", "Martínez"), "Martínez");
        assert_eq!(full_name("Ana", ""), "Ana");
        assert_eq!(full_name("  Ana  ", "  "), "Ana");
        assert_eq!(full_name("", ""), "");
    }

    #[test]
    fn member_record_normalizes() {
        let row = MemberRow::from(MemberRecord {
            firstname: "Ana".to_string(),
            lastname: "Martínez".to_string(),
            email: "a@x.com".to_string(),
            tenant_role: "User".to_string(),
        });
        assert_eq!(row.name, "Ana Martínez");
        assert_eq!(row.email, "a@x.com");
        assert_eq!(row.role, "User");
    }

    #[test]
    fn monitored_gender_and_age_mapping() {
        let row = MonitoredRow::from(MonitoredRecord {
            first_name: "Luis".to_string(),
            last_name: "Fonseca".to_string(),
            gender: "M".to_string(),
            age: Some("67".to_string()),
        });
        assert_eq!(row.name, "Luis Fonseca");
        assert_eq!(row.gender, "Masculino");
        assert_eq!(row.age, "67");

        let row = MonitoredRow::from(MonitoredRecord {
            first_name: "Rosa".to_string(),
            last_name: "Campos".to_string(),
            gender: "F".to_string(),
            age: None,
        });
        assert_eq!(row.gender, "Femenino");
        assert_eq!(row.age, AGE_UNKNOWN);
    }

    #[test]
    fn iot_device_gets_placeholder_status() {
        let row = DeviceRow::from(IotDeviceRecord {
            name: "Sensor pasillo".to_string(),
            serial_number: "SN-0042".to_string(),
        });
        assert_eq!(row.status, STATUS_UNKNOWN);
        assert_eq!(row.serial_id, "SN-0042");
    }

    #[test]
    fn device_row_serializes_serial_id_key() {
        let row = DeviceRow::from(IotDeviceRecord {
            name: "Sensor".to_string(),
            serial_number: "SN-1".to_string(),
        });
        let value = serde_json::to_value(&row).unwrap();
        assert!(value.get("serialID").is_some());
    }

    #[test]
    fn medical_device_row_serializes_camel_case() {
        let row = MedicalDeviceRow {
            id: "A".to_string(),
            kind: "Tensiómetro".to_string(),
            status: STATUS_UNKNOWN.to_string(),
            last_measurement: "120/80".to_string(),
            last_measurement_date: "2024-06-01T10:00:00Z".parse().unwrap(),
            name: "Luis Fonseca".to_string(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert!(value.get("lastMeasurementDate").is_some());
        assert_eq!(value.get("type").unwrap(), "Tensiómetro");
    }
}
