//! Record envelope and collection names
//!
//! The hosted entity layer owns identity and creation stamps: every stored
//! record is the schema fields plus an opaque `id` and a `created_date`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The collections exposed by the hosted entity layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    PerformanceRecord,
    Attendance,
    Incentive,
    Update,
    Notification,
}

impl EntityKind {
    /// Collection name as it appears in the platform API path.
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::PerformanceRecord => "PerformanceRecord",
            EntityKind::Attendance => "Attendance",
            EntityKind::Incentive => "Incentive",
            EntityKind::Update => "Update",
            EntityKind::Notification => "Notification",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A record as returned by the entity layer: schema fields flattened next
/// to the platform-assigned `id` and creation stamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> std::ops::Deref for Stored<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.fields
    }
}

impl<T> std::ops::DerefMut for Stored<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.fields
    }
}
