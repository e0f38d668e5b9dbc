//! Attendance Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance status for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    HalfDay,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
        AttendanceStatus::HalfDay,
    ];

    /// Human label as shown on badges ("half day", not "half_day").
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::HalfDay => "half day",
        }
    }
}

/// Daily attendance entry, marked by an admin.
///
/// Check-in/out times are `HH:MM` strings exactly as the platform stores
/// them; `hours_worked` is numeric (never the submitted string).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub employee_email: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub hours_worked: f64,
    #[serde(default)]
    pub notes: String,
}
