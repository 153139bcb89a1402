pub mod auth;
pub mod dashboard;
pub mod tenant;

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, routing::post, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::gateway::BackendGateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn BackendGateway>,
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .route("/auth/sign-in", post(auth::sign_in_post))
        // Session-scoped dashboard API
        .nest("/api", api_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::summary_get))
        .route("/tenants", get(tenant::tenant_list_get))
        .route("/tenants/:tenant_id", get(tenant::tenant_view_get))
        .route_layer(from_fn_with_state(
            state,
            crate::middleware::session::session_middleware,
        ))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Care Platform API",
            "version": version,
            "description": "Admin dashboard API for a multi-tenant senior-care monitoring platform",
            "endpoints": {
                "home": "/ (public)",
                "auth": "/auth/sign-in (public - token acquisition)",
                "dashboard": "/api/dashboard (session)",
                "tenants": "/api/tenants[/:tenant_id] (session)",
            }
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now()
        }
    }))
}
