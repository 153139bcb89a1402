// POST /auth/sign-in - exchange credentials for a provider session

use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Sign a user in against the backend provider.
///
/// Invalid credentials come back as 401 with the provider's message; there
/// is no retry and no local credential checking.
pub async fn sign_in_post(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<Value>, ApiError> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::bad_request("email and password are required"));
    }

    let session = state
        .gateway
        .sign_in(payload.email.trim(), &payload.password)
        .await?;

    tracing::info!(user_id = %session.user_id, "user signed in");

    Ok(Json(json!({
        "success": true,
        "data": {
            "access_token": session.access_token,
            "user": {
                "id": session.user_id,
                "email": session.email,
                "role": session.role,
            }
        }
    })))
}
