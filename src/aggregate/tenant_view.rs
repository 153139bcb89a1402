//! Assembly of a single tenant's detail view.

use serde::Serialize;
use uuid::Uuid;

use crate::auth::Session;
use crate::gateway::{BackendGateway, GatewayResult};

use super::dedupe::dedupe_by_latest;
use super::role::membership_query;
use super::view::{DeviceRow, MedicalDeviceRow, MemberRow, MonitoredRow};

/// One of the four collections aggregated per tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Members,
    Monitored,
    IotDevices,
    MedicalDevices,
}

/// A facet fetch that failed and was degraded to an empty collection.
#[derive(Debug, Clone, Serialize)]
pub struct FacetFailure {
    pub facet: Facet,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantView {
    pub members: Vec<MemberRow>,
    pub monitored: Vec<MonitoredRow>,
    pub iot_devices: Vec<DeviceRow>,
    pub medical_devices: Vec<MedicalDeviceRow>,
    /// Facets that failed to load; their collections above are empty.
    pub failures: Vec<FacetFailure>,
}

/// Fetch, normalize, and dedupe everything the tenant detail page shows.
///
/// The four facet fetches run concurrently and fail independently: a facet
/// whose fetch errors is logged, recorded in `failures`, and rendered as an
/// empty collection. Nothing here aborts the overall view.
pub async fn assemble_tenant_view(
    gateway: &dyn BackendGateway,
    session: &Session,
    tenant_id: Uuid,
) -> TenantView {
    let query = membership_query(session.role);

    let (members, monitored, iot_devices, medical_devices) = tokio::join!(
        gateway.tenant_members(session, query, tenant_id),
        gateway.monitored_people(session, tenant_id),
        gateway.iot_devices(session, tenant_id),
        gateway.medical_devices(session, tenant_id),
    );

    let mut failures = Vec::new();

    let members = collect_facet(Facet::Members, tenant_id, members, &mut failures)
        .into_iter()
        .map(MemberRow::from)
        .collect();
    let monitored = collect_facet(Facet::Monitored, tenant_id, monitored, &mut failures)
        .into_iter()
        .map(MonitoredRow::from)
        .collect();
    let iot_devices = collect_facet(Facet::IotDevices, tenant_id, iot_devices, &mut failures)
        .into_iter()
        .map(DeviceRow::from)
        .collect();
    let medical_rows: Vec<MedicalDeviceRow> =
        collect_facet(Facet::MedicalDevices, tenant_id, medical_devices, &mut failures)
            .into_iter()
            .map(MedicalDeviceRow::from)
            .collect();

    TenantView {
        members,
        monitored,
        iot_devices,
        medical_devices: dedupe_by_latest(medical_rows),
        failures,
    }
}

/// Unwrap one facet result, degrading errors to an empty collection.
fn collect_facet<T>(
    facet: Facet,
    tenant_id: Uuid,
    result: GatewayResult<Vec<T>>,
    failures: &mut Vec<FacetFailure>,
) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(
                facet = ?facet,
                tenant_id = %tenant_id,
                error = %err,
                "facet fetch failed, rendering empty collection"
            );
            failures.push(FacetFailure {
                facet,
                message: err.to_string(),
            });
            Vec::new()
        }
    }
}
