// GET /api/dashboard - summary counters for the caller's role

use axum::{extract::State, response::Json, Extension};
use serde_json::{json, Value};

use crate::aggregate::assemble_dashboard_summary;
use crate::auth::Session;

use super::AppState;

pub async fn summary_get(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Json<Value> {
    let summary = assemble_dashboard_summary(state.gateway.as_ref(), &session).await;

    Json(json!({
        "success": true,
        "data": summary
    }))
}
