//! Incentives Handlers

use axum::Json;
use axum::extract::State;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::{Filter, Incentive, IncentiveKind, SortSpec, Stored, UserProfile};

use crate::auth::{CurrentUser, PageId};
use crate::core::{AppError, ServerState, ok};
use crate::forms;
use crate::pages::{
    EmployeePick, PageResult, PageView, display_name, employee_accounts, page_gate,
};
use crate::reports::{format_amount, total_awarded};

/// The award form as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncentiveDraft {
    #[serde(default)]
    pub employee_email: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: IncentiveKind,
    pub amount: String,
    #[serde(default)]
    pub description: String,
    pub date_awarded: String,
}

fn default_kind() -> IncentiveKind {
    IncentiveKind::PerformanceIncentive
}

impl IncentiveDraft {
    /// Form defaults: performance incentive, awarded today.
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            employee_email: String::new(),
            kind: default_kind(),
            amount: String::new(),
            description: String::new(),
            date_awarded: today.to_string(),
        }
    }

    /// Validate and coerce; `approved_by` is stamped by the handler, never
    /// taken from the form.
    pub fn normalize(&self) -> Result<Incentive, AppError> {
        if self.employee_email.trim().is_empty() {
            return Err(AppError::validation("Please select an employee"));
        }
        Ok(Incentive {
            employee_email: forms::required_email(&self.employee_email, "employee_email")?,
            kind: self.kind,
            amount: forms::parse_amount(&self.amount, "amount")?,
            description: forms::required_text(
                &self.description,
                "description",
                forms::MAX_NOTE_LEN,
            )?,
            date_awarded: forms::parse_date(&self.date_awarded, "date_awarded")?,
            approved_by: None,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ManageIncentivesPage {
    pub employees: Vec<EmployeePick>,
    pub records: Vec<IncentiveRow>,
    pub defaults: IncentiveDraft,
}

#[derive(Debug, Serialize)]
pub struct IncentiveRow {
    pub id: String,
    pub employee_email: String,
    pub employee_name: String,
    pub kind: IncentiveKind,
    pub kind_label: &'static str,
    pub amount: Decimal,
    pub date_awarded: NaiveDate,
}

fn row(record: &Stored<Incentive>, accounts: &[Stored<UserProfile>]) -> IncentiveRow {
    IncentiveRow {
        id: record.id.clone(),
        employee_email: record.employee_email.clone(),
        employee_name: display_name(accounts, &record.employee_email).to_string(),
        kind: record.kind,
        kind_label: record.kind.label(),
        amount: record.amount,
        date_awarded: record.date_awarded,
    }
}

/// Award page: picker, defaults, the 50 most recent awards.
pub async fn manage_view(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> PageResult<ManageIncentivesPage> {
    if let Some(denied) = page_gate(&user, PageId::ManageIncentives) {
        return Ok(denied);
    }

    let employees = employee_accounts(&state).await?;
    let records = state
        .collections()
        .incentives()
        .list(Some(SortSpec::desc("date_awarded")), Some(50))
        .await?;

    Ok(ok(PageView::page(ManageIncentivesPage {
        records: records.iter().map(|r| row(r, &employees)).collect(),
        employees: employees.iter().map(EmployeePick::from).collect(),
        defaults: IncentiveDraft::for_today(chrono::Local::now().date_naive()),
    })))
}

/// Award an incentive. `approved_by` is always the acting admin.
pub async fn award(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(draft): Json<IncentiveDraft>,
) -> PageResult<IncentiveRow> {
    if let Some(denied) = page_gate(&user, PageId::ManageIncentives) {
        return Ok(denied);
    }

    let mut record = draft.normalize()?;
    record.approved_by = Some(user.email().to_string());

    let created = state
        .collections()
        .incentives()
        .create(&record)
        .await
        .map_err(|e| AppError::from(e).with_draft(&draft))?;

    tracing::info!(
        employee = %created.employee_email,
        amount = %created.amount,
        approved_by = %user.email(),
        "Incentive awarded"
    );

    let employees = employee_accounts(&state).await?;
    Ok(ok(PageView::page(row(&created, &employees))))
}

#[derive(Debug, Serialize)]
pub struct MyIncentivesPage {
    /// Displayed under "Total Earned This Year" although the sum is
    /// all-time; see `reports::total_awarded`.
    pub total_earned: String,
    pub award_count: usize,
    pub incentives: Vec<MyIncentiveRow>,
}

#[derive(Debug, Serialize)]
pub struct MyIncentiveRow {
    pub id: String,
    pub date_awarded: NaiveDate,
    pub kind: IncentiveKind,
    pub kind_label: &'static str,
    pub amount: Decimal,
    pub description: String,
}

/// Self-service award history with the running total.
pub async fn my_view(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> PageResult<MyIncentivesPage> {
    if let Some(denied) = page_gate(&user, PageId::MyIncentives) {
        return Ok(denied);
    }

    let records = state
        .collections()
        .incentives()
        .filter(
            Filter::by("employee_email", user.email()),
            Some(SortSpec::desc("date_awarded")),
            None,
        )
        .await?;

    let total = total_awarded(records.iter().map(|r| &r.fields));

    let rows = records
        .iter()
        .map(|record| MyIncentiveRow {
            id: record.id.clone(),
            date_awarded: record.date_awarded,
            kind: record.kind,
            kind_label: record.kind.label(),
            amount: record.amount,
            description: record.description.clone(),
        })
        .collect();

    Ok(ok(PageView::page(MyIncentivesPage {
        total_earned: format_amount(total),
        award_count: records.len(),
        incentives: rows,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_are_coerced_to_decimals() {
        let mut draft = IncentiveDraft::for_today("2026-03-02".parse().unwrap());
        draft.employee_email = "riley@corp.test".into();
        draft.amount = "250.75".into();
        draft.description = "Project landed".into();

        let record = draft.normalize().unwrap();
        assert_eq!(record.amount.to_string(), "250.75");
        assert_eq!(record.approved_by, None);
    }

    #[test]
    fn description_is_required() {
        let mut draft = IncentiveDraft::for_today("2026-03-02".parse().unwrap());
        draft.employee_email = "riley@corp.test".into();
        draft.amount = "100".into();
        assert!(draft.normalize().is_err());
    }
}
