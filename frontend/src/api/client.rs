use leavedesk_domain::{LeaveDraft, LeaveRecord, LeaveStatus};
use reqwest::{header::AUTHORIZATION, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::types::*,
    config,
    state::leaves::AdminFilter,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => config::api_base_url(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url(), path)
    }

    fn authorized(&self, builder: RequestBuilder, credential: &Credential) -> RequestBuilder {
        builder.header(AUTHORIZATION, credential.bearer())
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, LeaveError> {
        let builder = self.client.post(self.url("/auth/login")).json(request);
        self.send_unauthenticated(builder).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<LoginResponse, LeaveError> {
        let builder = self.client.post(self.url("/auth/register")).json(request);
        self.send_unauthenticated(builder).await
    }

    pub async fn list_my_leaves(
        &self,
        credential: &Credential,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        let builder = self.authorized(self.client.get(self.url("/leaves")), credential);
        self.send(builder).await
    }

    pub async fn list_all_leaves(
        &self,
        credential: &Credential,
        filter: &AdminFilter,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        let builder = self
            .authorized(self.client.get(self.url("/admin/leaves")), credential)
            .query(&filter.query_pairs());
        self.send(builder).await
    }

    pub async fn create_leave(
        &self,
        credential: &Credential,
        draft: &LeaveDraft,
    ) -> Result<LeaveRecord, LeaveError> {
        let builder = self
            .authorized(self.client.post(self.url("/leaves")), credential)
            .json(draft);
        self.send(builder).await
    }

    /// Returns the service's confirmation message.
    pub async fn cancel_leave(
        &self,
        credential: &Credential,
        id: &str,
    ) -> Result<String, LeaveError> {
        let builder = self.authorized(
            self.client.delete(self.url(&format!("/leaves/{}", id))),
            credential,
        );
        let body: Value = self.send(builder).await?;
        Ok(body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Leave request cancelled")
            .to_string())
    }

    pub async fn update_leave_status(
        &self,
        credential: &Credential,
        id: &str,
        status: LeaveStatus,
    ) -> Result<LeaveRecord, LeaveError> {
        let builder = self
            .authorized(
                self.client
                    .put(self.url(&format!("/admin/leaves/{}/status", id))),
                credential,
            )
            .json(&UpdateStatusRequest { status });
        self.send(builder).await
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, LeaveError> {
        let response = builder.send().await.map_err(transport_error)?;
        map_json_response(response).await
    }

    /// Login and registration: a `401` means bad credentials, not an expired session.
    async fn send_unauthenticated<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, LeaveError> {
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        if status.as_u16() == 401 {
            let body = response.json::<ApiError>().await.ok();
            return Err(LeaveError::Validation(
                body.map(|b| b.error)
                    .unwrap_or_else(|| "Invalid email or password".into()),
            ));
        }
        map_json_response(response).await
    }
}

fn transport_error(err: reqwest::Error) -> LeaveError {
    log::warn!("leave service request failed: {}", err);
    LeaveError::network(format!("Request failed: {}", err))
}

async fn map_json_response<T: DeserializeOwned>(response: Response) -> Result<T, LeaveError> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(|err| {
            log::warn!("unexpected response body: {}", err);
            LeaveError::network(format!("Failed to parse response: {}", err))
        });
    }

    let body = response.json::<ApiError>().await.ok();
    let error = LeaveError::from_status(status.as_u16(), body);
    log::debug!("leave service returned {}: {}", status, error);
    Err(error)
}
