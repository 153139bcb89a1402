//! Tenant-scoped aggregation: raw provider records in, display-ready view
//! models out. This is the only logic the service owns; everything it reads
//! comes from the backend gateway.

pub mod dedupe;
pub mod role;
pub mod summary;
pub mod tenant_view;
pub mod view;

pub use dedupe::dedupe_by_latest;
pub use role::{membership_query, tenant_scope};
pub use summary::{assemble_dashboard_summary, DashboardSummary};
pub use tenant_view::{assemble_tenant_view, Facet, FacetFailure, TenantView};
pub use view::{DeviceRow, MedicalDeviceRow, MemberRow, MonitoredRow};
