//! In-memory platform backend
//!
//! Implements all four collaborator traits against process-local state so
//! the portal can be driven end-to-end in tests without a network. Record
//! stamps are deterministic: ids and `created_date` follow insertion order.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use shared::{EntityKind, ListQuery, Stored, UserProfile};

use crate::api::{
    EmailMessage, EntityStore, FileStore, MailService, SessionService, UploadedFile,
};
use crate::error::{ClientError, ClientResult};

/// Login URL advertised by the mock session service.
pub const MOCK_LOGIN_URL: &str = "https://platform.test/login";

#[derive(Default)]
pub struct MockPlatform {
    records: Mutex<HashMap<&'static str, Vec<Value>>>,
    sessions: Mutex<HashMap<String, Stored<UserProfile>>>,
    outbox: Mutex<Vec<EmailMessage>>,
    uploads: Mutex<Vec<String>>,
    fail_mail: AtomicBool,
    fail_entities: AtomicBool,
    next_seq: AtomicU64,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session token resolving to `profile`.
    pub fn seed_session(&self, token: &str, profile: UserProfile) -> Stored<UserProfile> {
        let stored = Stored {
            id: self.next_id(),
            created_date: Some(self.base_time()),
            fields: profile,
        };
        self.sessions
            .lock()
            .unwrap()
            .insert(token.to_string(), stored.clone());
        stored
    }

    /// Insert a record directly, bypassing the portal. Returns its id.
    pub fn seed(&self, entity: EntityKind, fields: Value) -> String {
        let stamped = self.stamp(fields);
        let id = stamped["id"].as_str().unwrap().to_string();
        self.records
            .lock()
            .unwrap()
            .entry(entity.name())
            .or_default()
            .push(stamped);
        id
    }

    /// Current contents of one collection, in insertion order.
    pub fn records_of(&self, entity: EntityKind) -> Vec<Value> {
        self.records
            .lock()
            .unwrap()
            .get(entity.name())
            .cloned()
            .unwrap_or_default()
    }

    /// Every message handed to the mail integration, in send order.
    pub fn sent_mail(&self) -> Vec<EmailMessage> {
        self.outbox.lock().unwrap().clone()
    }

    pub fn uploaded_files(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    /// Make subsequent mail sends fail.
    pub fn set_mail_failure(&self, fail: bool) {
        self.fail_mail.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent entity calls fail.
    pub fn set_entity_failure(&self, fail: bool) {
        self.fail_entities.store(fail, Ordering::SeqCst);
    }

    fn next_id(&self) -> String {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        format!("rec_{seq:04}")
    }

    fn base_time(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    fn stamp(&self, fields: Value) -> Value {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        let created = self.base_time() + Duration::seconds(seq as i64);
        let mut record = fields;
        record["id"] = Value::String(format!("rec_{seq:04}"));
        record["created_date"] = Value::String(created.to_rfc3339());
        record
    }

    fn entities_available(&self) -> ClientResult<()> {
        if self.fail_entities.load(Ordering::SeqCst) {
            return Err(ClientError::api("E5001", "entity layer unavailable"));
        }
        Ok(())
    }
}

fn compare_field(a: Option<&Value>, b: Option<&Value>) -> std::cmp::Ordering {
    use std::cmp::Ordering as O;
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(O::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(_), None) => O::Greater,
        (None, Some(_)) => O::Less,
        _ => O::Equal,
    }
}

#[async_trait]
impl EntityStore for MockPlatform {
    async fn list(&self, entity: EntityKind, query: ListQuery) -> ClientResult<Vec<Value>> {
        self.entities_available()?;
        let mut rows = self.records_of(entity);
        if let Some(filter) = &query.filter {
            rows.retain(|row| filter.matches(row));
        }
        if let Some(sort) = query.sort {
            rows.sort_by(|a, b| {
                let ord = compare_field(a.get(sort.field), b.get(sort.field));
                if sort.descending { ord.reverse() } else { ord }
            });
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }

    async fn create(&self, entity: EntityKind, fields: Value) -> ClientResult<Value> {
        self.entities_available()?;
        let stamped = self.stamp(fields);
        self.records
            .lock()
            .unwrap()
            .entry(entity.name())
            .or_default()
            .push(stamped.clone());
        Ok(stamped)
    }

    async fn update(&self, entity: EntityKind, id: &str, patch: Value) -> ClientResult<Value> {
        self.entities_available()?;
        let mut records = self.records.lock().unwrap();
        let rows = records.entry(entity.name()).or_default();
        let row = rows
            .iter_mut()
            .find(|row| row["id"] == id)
            .ok_or_else(|| ClientError::api("E0003", format!("{entity} {id} not found")))?;

        if let (Some(target), Some(changes)) = (row.as_object_mut(), patch.as_object()) {
            for (field, value) in changes {
                target.insert(field.clone(), value.clone());
            }
        }
        Ok(row.clone())
    }
}

#[async_trait]
impl SessionService for MockPlatform {
    async fn current_user(&self, token: &str) -> ClientResult<Stored<UserProfile>> {
        self.sessions
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(ClientError::SessionMissing)
    }

    async fn logout(&self, token: &str) -> ClientResult<()> {
        self.sessions.lock().unwrap().remove(token);
        Ok(())
    }

    fn login_url(&self) -> String {
        MOCK_LOGIN_URL.to_string()
    }
}

#[async_trait]
impl MailService for MockPlatform {
    async fn send(&self, message: &EmailMessage) -> ClientResult<()> {
        if self.fail_mail.load(Ordering::SeqCst) {
            return Err(ClientError::api("E5002", "mail integration failed"));
        }
        self.outbox.lock().unwrap().push(message.clone());
        Ok(())
    }
}

#[async_trait]
impl FileStore for MockPlatform {
    async fn upload(
        &self,
        file_name: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> ClientResult<UploadedFile> {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        let url = format!("https://files.platform.test/{seq}/{file_name}");
        self.uploads.lock().unwrap().push(url.clone());
        Ok(UploadedFile { file_url: url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::{Filter, SortSpec};

    #[tokio::test]
    async fn list_applies_filter_sort_and_limit() {
        let platform = MockPlatform::new();
        platform.seed(EntityKind::Attendance, json!({"employee_email": "a@x", "date": "2026-03-01"}));
        platform.seed(EntityKind::Attendance, json!({"employee_email": "b@x", "date": "2026-03-03"}));
        platform.seed(EntityKind::Attendance, json!({"employee_email": "a@x", "date": "2026-03-02"}));

        let query = ListQuery {
            filter: Some(Filter::by("employee_email", "a@x")),
            sort: Some(SortSpec::desc("date")),
            limit: Some(1),
        };
        let rows = platform.list(EntityKind::Attendance, query).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["date"], "2026-03-02");
    }

    #[tokio::test]
    async fn update_patches_only_named_fields() {
        let platform = MockPlatform::new();
        let id = platform.seed(
            EntityKind::Update,
            json!({"title": "T", "content": "C", "acknowledged_by": []}),
        );
        let patched = platform
            .update(EntityKind::Update, &id, json!({"acknowledged_by": ["a@x"]}))
            .await
            .unwrap();
        assert_eq!(patched["title"], "T");
        assert_eq!(patched["acknowledged_by"], json!(["a@x"]));
    }
}
