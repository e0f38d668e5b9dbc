//! Performance Handlers

use axum::Json;
use axum::extract::State;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared::{Filter, PerformanceRecord, SortSpec};

use crate::auth::{CurrentUser, PageId};
use crate::core::{AppError, ServerState, ok};
use crate::forms;
use crate::pages::{EmployeePick, PageResult, PageView, employee_accounts, page_gate};

/// The scoring form as submitted. Scores arrive as raw strings from the
/// sliders and are coerced on submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceDraft {
    #[serde(default)]
    pub employee_email: String,
    pub date: String,
    #[serde(default = "default_score")]
    pub punctuality: String,
    #[serde(default = "default_score")]
    pub attitude: String,
    #[serde(default = "default_score")]
    pub responsiveness: String,
    #[serde(default)]
    pub hr_remarks: String,
}

fn default_score() -> String {
    "5".to_string()
}

impl PerformanceDraft {
    /// Form defaults: today, midpoint scores.
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            employee_email: String::new(),
            date: today.to_string(),
            punctuality: default_score(),
            attitude: default_score(),
            responsiveness: default_score(),
            hr_remarks: String::new(),
        }
    }

    pub fn normalize(&self) -> Result<PerformanceRecord, AppError> {
        if self.employee_email.trim().is_empty() {
            return Err(AppError::validation("Please select an employee"));
        }
        Ok(PerformanceRecord {
            employee_email: forms::required_email(&self.employee_email, "employee_email")?,
            date: forms::parse_date(&self.date, "date")?,
            punctuality: forms::parse_score(&self.punctuality, "punctuality")?,
            attitude: forms::parse_score(&self.attitude, "attitude")?,
            responsiveness: forms::parse_score(&self.responsiveness, "responsiveness")?,
            hr_remarks: forms::optional_text(&self.hr_remarks, "hr_remarks", forms::MAX_NOTE_LEN)?
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ManagePerformancePage {
    pub employees: Vec<EmployeePick>,
    pub defaults: PerformanceDraft,
}

/// Scoring page: employee picker plus form defaults.
pub async fn manage_view(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> PageResult<ManagePerformancePage> {
    if let Some(denied) = page_gate(&user, PageId::ManagePerformance) {
        return Ok(denied);
    }

    let employees = employee_accounts(&state).await?;

    Ok(ok(PageView::page(ManagePerformancePage {
        employees: employees.iter().map(EmployeePick::from).collect(),
        defaults: PerformanceDraft::for_today(chrono::Local::now().date_naive()),
    })))
}

#[derive(Debug, Serialize)]
pub struct PerformanceRow {
    pub id: String,
    pub date: NaiveDate,
    pub punctuality: f64,
    pub attitude: f64,
    pub responsiveness: f64,
    pub hr_remarks: String,
}

/// Log one performance entry.
pub async fn log_record(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(draft): Json<PerformanceDraft>,
) -> PageResult<PerformanceRow> {
    if let Some(denied) = page_gate(&user, PageId::ManagePerformance) {
        return Ok(denied);
    }

    let record = draft.normalize()?;
    let created = state
        .collections()
        .performance()
        .create(&record)
        .await
        .map_err(|e| AppError::from(e).with_draft(&draft))?;

    tracing::info!(
        employee = %created.employee_email,
        date = %created.date,
        "Performance record saved"
    );

    Ok(ok(PageView::page(PerformanceRow {
        id: created.id.clone(),
        date: created.date,
        punctuality: created.punctuality,
        attitude: created.attitude,
        responsiveness: created.responsiveness,
        hr_remarks: created.hr_remarks.clone(),
    })))
}

#[derive(Debug, Serialize)]
pub struct MyPerformancePage {
    /// Score series in chronological order, ready to chart.
    pub chart: Vec<ChartPoint>,
    pub records: Vec<PerformanceRow>,
}

#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub punctuality: f64,
    pub attitude: f64,
    pub responsiveness: f64,
}

/// Self-service report: chart series plus the detailed table.
pub async fn my_view(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> PageResult<MyPerformancePage> {
    if let Some(denied) = page_gate(&user, PageId::MyPerformance) {
        return Ok(denied);
    }

    let records = state
        .collections()
        .performance()
        .filter(
            Filter::by("employee_email", user.email()),
            Some(SortSpec::desc("date")),
            None,
        )
        .await?;

    // Fetched newest-first for the table; the chart runs oldest-first.
    let chart = records
        .iter()
        .rev()
        .map(|record| ChartPoint {
            date: record.date,
            punctuality: record.punctuality,
            attitude: record.attitude,
            responsiveness: record.responsiveness,
        })
        .collect();

    let rows = records
        .iter()
        .map(|record| PerformanceRow {
            id: record.id.clone(),
            date: record.date,
            punctuality: record.punctuality,
            attitude: record.attitude,
            responsiveness: record.responsiveness,
            hr_remarks: record.hr_remarks.clone(),
        })
        .collect();

    Ok(ok(PageView::page(MyPerformancePage {
        chart,
        records: rows,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_outside_the_scale_are_rejected() {
        let mut draft = PerformanceDraft::for_today("2026-03-02".parse().unwrap());
        draft.employee_email = "riley@corp.test".into();
        draft.punctuality = "11".into();
        assert!(draft.normalize().is_err());
    }

    #[test]
    fn defaults_are_midpoint_scores() {
        let mut draft = PerformanceDraft::for_today("2026-03-02".parse().unwrap());
        draft.employee_email = "riley@corp.test".into();
        let record = draft.normalize().unwrap();
        assert_eq!(record.punctuality, 5.0);
        assert_eq!(record.attitude, 5.0);
        assert_eq!(record.responsiveness, 5.0);
    }
}
