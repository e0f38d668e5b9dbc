//! HTTP implementation of the platform services

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::{ApiResponse, EntityKind, ListQuery, Stored, UserProfile};

use crate::api::{
    EmailMessage, EntityStore, FileStore, MailService, SessionService, UploadedFile,
};
use crate::error::{ClientError, ClientResult};

/// Network client for the hosting platform.
///
/// Entity, mail and upload calls authenticate with the portal's service
/// key; session calls pass the end user's bearer token through untouched.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PlatformClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self::with_timeout(base_url, api_key, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Unwrap the platform's response envelope, requiring a data payload.
    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let envelope = Self::envelope::<T>(response).await?;
        envelope
            .data
            .ok_or_else(|| ClientError::api(shared::response::API_CODE_SUCCESS, "response had no data"))
    }

    /// Unwrap the envelope for calls whose payload does not matter.
    async fn parse_ok(response: reqwest::Response) -> ClientResult<()> {
        Self::envelope::<Value>(response).await.map(|_| ())
    }

    async fn envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<ApiResponse<T>> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::SessionMissing);
        }

        let body = response.text().await?;
        let envelope: ApiResponse<T> = serde_json::from_str(&body)?;
        if !envelope.is_success() {
            return Err(ClientError::Api {
                code: envelope.code,
                message: envelope.message,
            });
        }
        Ok(envelope)
    }
}

#[async_trait]
impl EntityStore for PlatformClient {
    async fn list(&self, entity: EntityKind, query: ListQuery) -> ClientResult<Vec<Value>> {
        let path = format!("/api/entities/{}", entity.name());

        // Plain listings ride the query string; predicates go through the
        // /query endpoint as a JSON body.
        let request = if let Some(filter) = &query.filter {
            let body = serde_json::json!({
                "where": filter,
                "sort": query.sort.map(|s| s.to_query()),
                "limit": query.limit,
            });
            self.http.post(self.url(&format!("{path}/query"))).json(&body)
        } else {
            let mut request = self.http.get(self.url(&path));
            if let Some(sort) = query.sort {
                request = request.query(&[("sort", sort.to_query())]);
            }
            if let Some(limit) = query.limit {
                request = request.query(&[("limit", limit.to_string())]);
            }
            request
        };

        tracing::debug!(entity = %entity, "listing records");
        let response = request.bearer_auth(&self.api_key).send().await?;
        Self::parse(response).await
    }

    async fn create(&self, entity: EntityKind, fields: Value) -> ClientResult<Value> {
        let response = self
            .http
            .post(self.url(&format!("/api/entities/{}", entity.name())))
            .bearer_auth(&self.api_key)
            .json(&fields)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn update(&self, entity: EntityKind, id: &str, patch: Value) -> ClientResult<Value> {
        let response = self
            .http
            .patch(self.url(&format!("/api/entities/{}/{}", entity.name(), id)))
            .bearer_auth(&self.api_key)
            .json(&patch)
            .send()
            .await?;
        Self::parse(response).await
    }
}

#[async_trait]
impl SessionService for PlatformClient {
    async fn current_user(&self, token: &str) -> ClientResult<Stored<UserProfile>> {
        let response = self
            .http
            .get(self.url("/api/auth/me"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn logout(&self, token: &str) -> ClientResult<()> {
        let response = self
            .http
            .post(self.url("/api/auth/logout"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::parse_ok(response).await
    }

    fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }
}

#[async_trait]
impl MailService for PlatformClient {
    async fn send(&self, message: &EmailMessage) -> ClientResult<()> {
        tracing::debug!(to = %message.to, subject = %message.subject, "sending email");
        let response = self
            .http
            .post(self.url("/api/integrations/send-email"))
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await?;
        Self::parse_ok(response).await
    }
}

#[async_trait]
impl FileStore for PlatformClient {
    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<UploadedFile> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.url("/api/integrations/upload"))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;
        Self::parse(response).await
    }
}
