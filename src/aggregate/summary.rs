//! Dashboard summary counters.
//!
//! Privileged callers see platform-wide totals: every visible tenant is
//! fetched concurrently and the facet lengths are summed. Standard callers
//! see the same shape computed over their own tenants only, which the
//! gateway already scopes to one. Summation is associative, so completion
//! order of the per-tenant fetches never affects the result.

use futures::future::join_all;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::Session;
use crate::gateway::{BackendGateway, GatewayResult};

use super::role::{membership_query, tenant_scope};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub accounts: usize,
    pub members: usize,
    pub monitored: usize,
    pub devices: usize,
}

#[derive(Debug, Default)]
struct TenantCounts {
    members: usize,
    monitored: usize,
    devices: usize,
}

/// Compute the four dashboard counters for the caller.
///
/// Any per-tenant fetch that fails contributes zero to its counter; a
/// failed tenant enumeration degrades the whole summary to zeros. No
/// failure is fatal.
pub async fn assemble_dashboard_summary(
    gateway: &dyn BackendGateway,
    session: &Session,
) -> DashboardSummary {
    let scope = tenant_scope(session.role);
    let tenants = match gateway.tenants(session, scope).await {
        Ok(tenants) => tenants,
        Err(err) => {
            tracing::warn!(error = %err, "tenant enumeration failed, summary degraded to zeros");
            return DashboardSummary::default();
        }
    };

    let query = membership_query(session.role);

    // Gather all per-tenant counts, then reduce; no shared accumulation
    // across the concurrent fetches.
    let per_tenant = join_all(tenants.iter().map(|tenant| async move {
        let (members, monitored, devices) = tokio::join!(
            gateway.tenant_members(session, query, tenant.id),
            gateway.monitored_people(session, tenant.id),
            gateway.iot_devices(session, tenant.id),
        );
        TenantCounts {
            members: count_or_zero("members", tenant.id, members),
            monitored: count_or_zero("monitored", tenant.id, monitored),
            devices: count_or_zero("devices", tenant.id, devices),
        }
    }))
    .await;

    per_tenant.into_iter().fold(
        DashboardSummary {
            accounts: tenants.len(),
            ..DashboardSummary::default()
        },
        |mut summary, counts| {
            summary.members += counts.members;
            summary.monitored += counts.monitored;
            summary.devices += counts.devices;
            summary
        },
    )
}

fn count_or_zero<T>(facet: &'static str, tenant_id: Uuid, result: GatewayResult<Vec<T>>) -> usize {
    match result {
        Ok(records) => records.len(),
        Err(err) => {
            tracing::warn!(
                facet,
                tenant_id = %tenant_id,
                error = %err,
                "per-tenant count fetch failed, counting zero"
            );
            0
        }
    }
}
