//! Employee profile form
//!
//! Accounts are provisioned by the platform's identity service, so the
//! portal never creates a `User` record. "Adding" an employee is a lookup
//! by email followed by a profile update; editing patches the existing
//! record. Either way the email itself is never written — it is the
//! identity key.

use serde::{Deserialize, Serialize};

use portal_client::Entities;
use shared::{Filter, Role, Stored, UserProfile};

use crate::core::AppError;
use crate::forms;

/// The employee form as submitted: raw strings, optional fields empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub hire_date: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub profile_picture_url: String,
}

impl EmployeeDraft {
    /// Validate and coerce into the profile fields to store.
    pub fn normalize(&self) -> Result<UserProfile, AppError> {
        Ok(UserProfile {
            email: forms::required_email(&self.email, "email")?,
            full_name: forms::required_text(&self.full_name, "full_name", forms::MAX_NAME_LEN)?,
            role: self.role,
            employee_id: forms::optional_text(
                &self.employee_id,
                "employee_id",
                forms::MAX_SHORT_TEXT_LEN,
            )?,
            phone_number: forms::optional_text(
                &self.phone_number,
                "phone_number",
                forms::MAX_SHORT_TEXT_LEN,
            )?,
            job_title: forms::optional_text(&self.job_title, "job_title", forms::MAX_NAME_LEN)?,
            department: forms::optional_text(&self.department, "department", forms::MAX_NAME_LEN)?,
            hire_date: match self.hire_date.trim() {
                "" => None,
                raw => Some(forms::parse_date(raw, "hire_date")?),
            },
            salary: match self.salary.trim() {
                "" => None,
                raw => Some(forms::parse_amount(raw, "salary")?),
            },
            address: forms::optional_text(&self.address, "address", forms::MAX_ADDRESS_LEN)?,
            profile_picture_url: forms::optional_text(
                &self.profile_picture_url,
                "profile_picture_url",
                forms::MAX_URL_LEN,
            )?,
        })
    }

    /// True when the email sits outside the organization's reserved domain.
    pub fn is_external_address(&self, domain: &str) -> bool {
        !self.email.trim().ends_with(&format!("@{domain}"))
    }
}

/// Outcome of saving the employee form.
#[derive(Debug)]
pub enum EmployeeSave {
    /// Profile fields written to an existing account.
    Updated(Stored<UserProfile>),
    /// No account with this email exists yet; the person must accept a
    /// platform invitation before their profile can be managed here.
    ProvisionRequired { email: String },
    /// The email is outside the reserved domain and the operator has not
    /// confirmed. A soft warning, not a validation failure.
    NeedsDomainConfirmation { domain: String },
}

/// Save the employee form.
///
/// `existing_id` decides create-vs-edit: with an id the record is patched
/// (email immutable); without one the account is looked up by email and
/// updated if found.
pub async fn save_employee(
    collections: Entities<'_>,
    draft: &EmployeeDraft,
    existing_id: Option<&str>,
    org_domain: &str,
    domain_confirmed: bool,
) -> Result<EmployeeSave, AppError> {
    let profile = draft.normalize()?;

    if let Some(id) = existing_id {
        let patch = profile_patch(&profile)?;
        let updated = collections
            .users()
            .update(id, patch)
            .await
            .map_err(|e| AppError::from(e).with_draft(draft))?;
        return Ok(EmployeeSave::Updated(updated));
    }

    if draft.is_external_address(org_domain) && !domain_confirmed {
        return Ok(EmployeeSave::NeedsDomainConfirmation {
            domain: org_domain.to_string(),
        });
    }

    let accounts = collections
        .users()
        .filter(Filter::by("email", profile.email.clone()), None, None)
        .await
        .map_err(|e| AppError::from(e).with_draft(draft))?;

    match accounts.first() {
        Some(account) => {
            let patch = profile_patch(&profile)?;
            let updated = collections
                .users()
                .update(&account.id, patch)
                .await
                .map_err(|e| AppError::from(e).with_draft(draft))?;
            Ok(EmployeeSave::Updated(updated))
        }
        None => Ok(EmployeeSave::ProvisionRequired {
            email: profile.email,
        }),
    }
}

/// Profile fields as a patch, with the identity key stripped.
fn profile_patch(profile: &UserProfile) -> Result<serde_json::Value, AppError> {
    let mut patch = serde_json::to_value(profile)
        .map_err(|e| AppError::internal(format!("failed to encode profile: {e}")))?;
    if let Some(fields) = patch.as_object_mut() {
        fields.remove("email");
    }
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_client::mock::MockPlatform;
    use serde_json::json;
    use shared::EntityKind;

    fn draft(email: &str) -> EmployeeDraft {
        EmployeeDraft {
            full_name: "Riley Chen".into(),
            email: email.into(),
            employee_id: "EMP-7".into(),
            phone_number: String::new(),
            job_title: "Analyst".into(),
            department: "Finance".into(),
            role: Role::Employee,
            hire_date: "2025-02-01".into(),
            salary: "4200".into(),
            address: String::new(),
            profile_picture_url: String::new(),
        }
    }

    #[test]
    fn normalize_coerces_dates_and_amounts() {
        let profile = draft("riley@corp.test").normalize().unwrap();
        assert_eq!(profile.hire_date.unwrap().to_string(), "2025-02-01");
        assert_eq!(profile.salary.unwrap().to_string(), "4200");
        assert_eq!(profile.phone_number, None);
    }

    #[test]
    fn external_address_is_detected_by_suffix() {
        assert!(draft("riley@gmail.test").is_external_address("corp.test"));
        assert!(!draft("riley@corp.test").is_external_address("corp.test"));
    }

    #[tokio::test]
    async fn adding_an_uninvited_person_requires_provisioning() {
        let platform = MockPlatform::new();
        let outcome = save_employee(
            Entities::new(&platform),
            &draft("riley@corp.test"),
            None,
            "corp.test",
            false,
        )
        .await
        .unwrap();

        match outcome {
            EmployeeSave::ProvisionRequired { email } => assert_eq!(email, "riley@corp.test"),
            other => panic!("expected ProvisionRequired, got {other:?}"),
        }
        assert!(platform.records_of(EntityKind::User).is_empty());
    }

    #[tokio::test]
    async fn adding_an_invited_person_updates_their_account() {
        let platform = MockPlatform::new();
        platform.seed(
            EntityKind::User,
            json!({"email": "riley@corp.test", "full_name": "Riley", "role": "user"}),
        );

        let outcome = save_employee(
            Entities::new(&platform),
            &draft("riley@corp.test"),
            None,
            "corp.test",
            false,
        )
        .await
        .unwrap();

        match outcome {
            EmployeeSave::Updated(account) => {
                assert_eq!(account.full_name, "Riley Chen");
                assert_eq!(account.email, "riley@corp.test");
            }
            other => panic!("expected Updated, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn external_email_needs_confirmation_before_lookup() {
        let platform = MockPlatform::new();
        let outcome = save_employee(
            Entities::new(&platform),
            &draft("riley@gmail.test"),
            None,
            "corp.test",
            false,
        )
        .await
        .unwrap();
        assert!(matches!(
            outcome,
            EmployeeSave::NeedsDomainConfirmation { .. }
        ));

        // Confirmed: proceeds to the lookup (and finds nobody).
        let outcome = save_employee(
            Entities::new(&platform),
            &draft("riley@gmail.test"),
            None,
            "corp.test",
            true,
        )
        .await
        .unwrap();
        assert!(matches!(outcome, EmployeeSave::ProvisionRequired { .. }));
    }

    #[tokio::test]
    async fn editing_never_rewrites_the_email() {
        let platform = MockPlatform::new();
        let id = platform.seed(
            EntityKind::User,
            json!({"email": "riley@corp.test", "full_name": "Riley", "role": "user"}),
        );

        let mut changed = draft("somebody-else@corp.test");
        changed.full_name = "Riley C.".into();
        save_employee(
            Entities::new(&platform),
            &changed,
            Some(&id),
            "corp.test",
            false,
        )
        .await
        .unwrap();

        let stored = &platform.records_of(EntityKind::User)[0];
        assert_eq!(stored["email"], "riley@corp.test");
        assert_eq!(stored["full_name"], "Riley C.");
    }
}
