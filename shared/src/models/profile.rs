//! User Profile Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portal role.
///
/// On the wire the identity platform stores `"admin"` / `"user"`; everything
/// that is not an HR admin is an employee, so the variant is named for what
/// it means rather than for the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "user")]
    Employee,
}

/// New accounts and form drafts start as employees.
impl Default for Role {
    fn default() -> Self {
        Role::Employee
    }
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Display label used by the layout ("HR Admin" / "Employee").
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "HR Admin",
            Role::Employee => "Employee",
        }
    }
}

/// User profile as provisioned by the identity platform.
///
/// `email` is the identity key: records in every other collection reference
/// users by `employee_email`, and the address never changes after the
/// account exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

impl UserProfile {
    /// Picture to display for this user: the uploaded photo, or a generated
    /// initials avatar when none has been set.
    pub fn avatar_url(&self) -> String {
        match &self.profile_picture_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!(
                "https://ui-avatars.com/api/?name={}&background=2563eb&color=fff",
                self.full_name.replace(' ', "+")
            ),
        }
    }
}
