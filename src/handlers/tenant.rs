// GET /api/tenants and /api/tenants/:tenant_id

use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::aggregate::{assemble_tenant_view, tenant_scope};
use crate::auth::Session;
use crate::error::ApiError;

use super::AppState;

/// List the tenants visible to the caller: every tenant for privileged
/// operators, the caller's own tenants otherwise.
pub async fn tenant_list_get(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<Value>, ApiError> {
    let scope = tenant_scope(session.role);
    let tenants = state.gateway.tenants(&session, scope).await?;

    Ok(Json(json!({
        "success": true,
        "data": tenants
    })))
}

/// Assemble the detail view for one tenant. Facet failures degrade to empty
/// collections inside the view, so this endpoint itself never fails on
/// partial data.
pub async fn tenant_view_get(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(tenant_id): Path<Uuid>,
) -> Json<Value> {
    let view = assemble_tenant_view(state.gateway.as_ref(), &session, tenant_id).await;

    Json(json!({
        "success": true,
        "data": view
    }))
}
