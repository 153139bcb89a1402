use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::gateway::GatewayError;
use crate::handlers::AppState;

/// Session middleware: resolves the bearer token through the backend
/// provider and injects the caller's `Session` into the request.
///
/// Token validation is entirely the provider's job; this layer only
/// forwards the token and translates the provider's verdict.
pub async fn session_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).map_err(ApiError::unauthorized)?;

    let session = state
        .gateway
        .current_user(&token)
        .await
        .map_err(|err| match err {
            GatewayError::Transport(e) => {
                tracing::error!("session lookup transport error: {}", e);
                ApiError::service_unavailable("Backend temporarily unavailable")
            }
            _ => ApiError::unauthorized("Invalid or expired session token"),
        })?;

    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty bearer token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}
