//! Performance Record Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily performance entry logged by HR.
///
/// Scores are on a 0-10 scale; the range is enforced at the form boundary,
/// not by the type. Readable by the owner or an admin, writable only by an
/// admin (row-level policy on the platform side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub employee_email: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub punctuality: f64,
    #[serde(default)]
    pub attitude: f64,
    #[serde(default)]
    pub responsiveness: f64,
    #[serde(default)]
    pub hr_remarks: String,
}
