//! Attendance Handlers

use axum::Json;
use axum::extract::State;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared::{Attendance, AttendanceStatus, Filter, SortSpec, Stored, UserProfile};

use crate::auth::{CurrentUser, PageId};
use crate::core::{AppError, ServerState, ok};
use crate::forms;
use crate::pages::{
    EmployeePick, PageResult, PageView, display_name, employee_accounts, page_gate,
};
use crate::reports::{MonthlyAttendance, monthly_counts};

/// The attendance form as submitted. Times and hours arrive as typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceDraft {
    #[serde(default)]
    pub employee_email: String,
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(default = "default_check_in")]
    pub check_in_time: String,
    #[serde(default = "default_check_out")]
    pub check_out_time: String,
    #[serde(default = "default_hours")]
    pub hours_worked: String,
    #[serde(default)]
    pub notes: String,
}

fn default_check_in() -> String {
    "09:00".to_string()
}

fn default_check_out() -> String {
    "17:00".to_string()
}

fn default_hours() -> String {
    "8".to_string()
}

impl AttendanceDraft {
    /// Form defaults: today, present, a standard office day.
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            employee_email: String::new(),
            date: today.to_string(),
            status: AttendanceStatus::Present,
            check_in_time: default_check_in(),
            check_out_time: default_check_out(),
            hours_worked: default_hours(),
            notes: String::new(),
        }
    }

    /// Validate and coerce into the record to store. `hours_worked` comes
    /// out numeric, never the submitted string.
    pub fn normalize(&self) -> Result<Attendance, AppError> {
        if self.employee_email.trim().is_empty() {
            return Err(AppError::validation("Please select an employee"));
        }
        Ok(Attendance {
            employee_email: forms::required_email(&self.employee_email, "employee_email")?,
            date: forms::parse_date(&self.date, "date")?,
            status: self.status,
            check_in_time: forms::optional_text(
                &self.check_in_time,
                "check_in_time",
                forms::MAX_SHORT_TEXT_LEN,
            )?,
            check_out_time: forms::optional_text(
                &self.check_out_time,
                "check_out_time",
                forms::MAX_SHORT_TEXT_LEN,
            )?,
            hours_worked: forms::parse_number(&self.hours_worked, "hours_worked")?,
            notes: forms::optional_text(&self.notes, "notes", forms::MAX_NOTE_LEN)?
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ManageAttendancePage {
    pub employees: Vec<EmployeePick>,
    pub records: Vec<AttendanceRow>,
    pub defaults: AttendanceDraft,
}

#[derive(Debug, Serialize)]
pub struct AttendanceRow {
    pub id: String,
    pub employee_email: String,
    pub employee_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub status_label: &'static str,
    pub hours_worked: f64,
}

fn row(record: &Stored<Attendance>, accounts: &[Stored<UserProfile>]) -> AttendanceRow {
    AttendanceRow {
        id: record.id.clone(),
        employee_email: record.employee_email.clone(),
        employee_name: display_name(accounts, &record.employee_email).to_string(),
        date: record.date,
        status: record.status,
        status_label: record.status.label(),
        hours_worked: record.hours_worked,
    }
}

/// Marking page: employee picker, form defaults, the 50 most recent
/// records.
pub async fn manage_view(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> PageResult<ManageAttendancePage> {
    if let Some(denied) = page_gate(&user, PageId::ManageAttendance) {
        return Ok(denied);
    }

    let employees = employee_accounts(&state).await?;
    let records = state
        .collections()
        .attendance()
        .list(Some(SortSpec::desc("date")), Some(50))
        .await?;

    Ok(ok(PageView::page(ManageAttendancePage {
        records: records.iter().map(|r| row(r, &employees)).collect(),
        employees: employees.iter().map(EmployeePick::from).collect(),
        defaults: AttendanceDraft::for_today(chrono::Local::now().date_naive()),
    })))
}

/// Mark one day's attendance.
pub async fn mark(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(draft): Json<AttendanceDraft>,
) -> PageResult<AttendanceRow> {
    if let Some(denied) = page_gate(&user, PageId::ManageAttendance) {
        return Ok(denied);
    }

    let record = draft.normalize()?;
    let created = state
        .collections()
        .attendance()
        .create(&record)
        .await
        .map_err(|e| AppError::from(e).with_draft(&draft))?;

    tracing::info!(
        employee = %created.employee_email,
        date = %created.date,
        status = ?created.status,
        "Attendance marked"
    );

    let employees = employee_accounts(&state).await?;
    Ok(ok(PageView::page(row(&created, &employees))))
}

#[derive(Debug, Serialize)]
pub struct MyAttendancePage {
    /// Counts for the current calendar month, computed here over the full
    /// fetched history.
    pub monthly: MonthlyAttendance,
    pub records: Vec<MyAttendanceRow>,
}

#[derive(Debug, Serialize)]
pub struct MyAttendanceRow {
    pub id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub status_label: &'static str,
    pub hours_worked: f64,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
}

/// Self-service history with this month's summary.
pub async fn my_view(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> PageResult<MyAttendancePage> {
    if let Some(denied) = page_gate(&user, PageId::MyAttendance) {
        return Ok(denied);
    }

    let records = state
        .collections()
        .attendance()
        .filter(
            Filter::by("employee_email", user.email()),
            Some(SortSpec::desc("date")),
            None,
        )
        .await?;

    let today = chrono::Local::now().date_naive();
    let monthly = monthly_counts(records.iter().map(|r| &r.fields), today);

    let rows = records
        .iter()
        .take(10)
        .map(|record| MyAttendanceRow {
            id: record.id.clone(),
            date: record.date,
            status: record.status,
            status_label: record.status.label(),
            hours_worked: record.hours_worked,
            check_in_time: record.check_in_time.clone(),
            check_out_time: record.check_out_time.clone(),
        })
        .collect();

    Ok(ok(PageView::page(MyAttendancePage {
        monthly,
        records: rows,
    })))
}
