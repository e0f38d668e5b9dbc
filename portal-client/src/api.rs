//! External collaborator interfaces
//!
//! One trait per platform service. The portal server holds these as trait
//! objects so tests can swap in the in-memory backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared::{EntityKind, ListQuery, Stored, UserProfile};

use crate::error::ClientResult;

/// Generic CRUD over the schema-defined collections.
///
/// Records travel as raw JSON at this seam; [`crate::Entities`] layers the
/// typed collections on top. The platform enforces row-level read/write
/// policy on its side.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn list(&self, entity: EntityKind, query: ListQuery) -> ClientResult<Vec<Value>>;

    async fn create(&self, entity: EntityKind, fields: Value) -> ClientResult<Value>;

    /// Partial patch: only the supplied fields change.
    async fn update(&self, entity: EntityKind, id: &str, patch: Value) -> ClientResult<Value>;
}

/// Identity resolution. Accounts are provisioned by the platform; the
/// portal only ever asks "who is this token".
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Resolve a bearer token into the stored user profile. Fails with
    /// [`crate::ClientError::SessionMissing`] when the token does not
    /// resolve; callers answer that with a login redirect.
    async fn current_user(&self, token: &str) -> ClientResult<Stored<UserProfile>>;

    async fn logout(&self, token: &str) -> ClientResult<()>;

    /// Where to send an unauthenticated browser.
    fn login_url(&self) -> String;
}

/// Outbound email message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Comma-joined list of recipient addresses.
    pub to: String,
    pub subject: String,
    pub body: String,
    pub from_name: String,
}

/// Outbound email delivery.
#[async_trait]
pub trait MailService: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> ClientResult<()>;
}

/// Result of a file upload: the portal stores only this reference URL,
/// never the bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub file_url: String,
}

/// File storage for profile photos and similar attachments.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<UploadedFile>;
}
