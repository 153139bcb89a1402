//! HTTP implementation of the backend gateway.
//!
//! Speaks the hosted provider's REST surface: the auth endpoints under
//! `/auth/v1` and table RPC functions under `/rest/v1/rpc`. Every request
//! carries the project's publishable key; authenticated calls add the
//! caller's bearer token so row-level authorization stays with the provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;
use uuid::Uuid;

use crate::auth::{Role, Session};
use crate::config::GatewayConfig;

use super::records::{
    IotDeviceRecord, MedicalDeviceRecord, MemberRecord, MonitoredRecord, TenantRecord,
};
use super::{BackendGateway, GatewayError, GatewayResult, MembershipQuery, TenantScope};

pub struct HttpGateway {
    client: reqwest::Client,
    base_url: Url,
    publishable_key: String,
}

/// Response from `POST /auth/v1/token?grant_type=password`.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: AuthUserPayload,
}

#[derive(Debug, Deserialize)]
struct AuthUserPayload {
    id: Uuid,
    email: String,
    role: String,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        // A trailing slash keeps Url::join from eating the last path segment
        let mut url = config.url.clone();
        if !url.ends_with('/') {
            url.push('/');
        }

        Ok(Self {
            client,
            base_url: Url::parse(&url)?,
            publishable_key: config.publishable_key.clone(),
        })
    }

    /// Invoke a table RPC function and decode its row set.
    async fn rpc<T: DeserializeOwned>(
        &self,
        session: &Session,
        function: &'static str,
        args: Value,
    ) -> GatewayResult<Vec<T>> {
        let url = self.base_url.join(&format!("rest/v1/rpc/{}", function))?;
        let response = self
            .client
            .post(url)
            .header("apikey", &self.publishable_key)
            .bearer_auth(&session.access_token)
            .json(&args)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(remote_error(function, response).await);
        }

        Ok(response.json().await?)
    }

    fn session_from_payload(&self, access_token: String, user: AuthUserPayload) -> Session {
        Session {
            access_token,
            user_id: user.id,
            email: user.email,
            role: Role::from_backend(&user.role),
        }
    }
}

#[async_trait]
impl BackendGateway for HttpGateway {
    async fn sign_in(&self, email: &str, password: &str) -> GatewayResult<Session> {
        let url = self.base_url.join("auth/v1/token?grant_type=password")?;
        let response = self
            .client
            .post(url)
            .header("apikey", &self.publishable_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Unauthorized(auth_error_message(&body)));
        }

        let token: TokenResponse = response.json().await?;
        Ok(self.session_from_payload(token.access_token, token.user))
    }

    async fn current_user(&self, access_token: &str) -> GatewayResult<Session> {
        let url = self.base_url.join("auth/v1/user")?;
        let response = self
            .client
            .get(url)
            .header("apikey", &self.publishable_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Unauthorized(auth_error_message(&body)));
        }

        let user: AuthUserPayload = response.json().await?;
        Ok(self.session_from_payload(access_token.to_string(), user))
    }

    async fn tenants(
        &self,
        session: &Session,
        scope: TenantScope,
    ) -> GatewayResult<Vec<TenantRecord>> {
        let function = match scope {
            TenantScope::AllTenants => "get_all_tenants",
            TenantScope::CallerTenants => "get_tenants",
        };
        self.rpc(session, function, json!({})).await
    }

    async fn tenant_members(
        &self,
        session: &Session,
        query: MembershipQuery,
        tenant_id: Uuid,
    ) -> GatewayResult<Vec<MemberRecord>> {
        let function = match query {
            MembershipQuery::AllMembers => "get_tenant_members",
            MembershipQuery::OwnMembers => "get_own_tenant_members",
        };
        self.rpc(session, function, json!({ "tenant_id": tenant_id }))
            .await
    }

    async fn monitored_people(
        &self,
        session: &Session,
        tenant_id: Uuid,
    ) -> GatewayResult<Vec<MonitoredRecord>> {
        self.rpc(session, "get_senior_citizens", json!({ "tenant_id": tenant_id }))
            .await
    }

    async fn iot_devices(
        &self,
        session: &Session,
        tenant_id: Uuid,
    ) -> GatewayResult<Vec<IotDeviceRecord>> {
        self.rpc(session, "get_iot_devices", json!({ "tenant_id": tenant_id }))
            .await
    }

    async fn medical_devices(
        &self,
        session: &Session,
        tenant_id: Uuid,
    ) -> GatewayResult<Vec<MedicalDeviceRecord>> {
        self.rpc(session, "get_medical_devices", json!({ "tenant_id": tenant_id }))
            .await
    }
}

/// Build a `Remote` error from a non-success RPC response, keeping the body
/// as the message (PostgREST puts its diagnostics there).
async fn remote_error(operation: &'static str, response: Response) -> GatewayError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    GatewayError::Remote {
        operation,
        status,
        message,
    }
}

/// Best-effort extraction of the provider's auth error message.
fn auth_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["error_description", "msg", "message"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }
    "Invalid login credentials".to_string()
}
