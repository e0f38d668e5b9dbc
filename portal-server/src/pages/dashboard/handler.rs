//! Dashboard Handlers
//!
//! One endpoint, two bodies: admins get portal-wide counts, employees get
//! their own performance summary and the latest updates.

use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use shared::{Filter, SortSpec};

use crate::auth::{CurrentUser, PageId};
use crate::core::{ServerState, ok};
use crate::pages::{PageResult, PageView, page_gate};
use crate::reports::PerformanceSummary;

#[derive(Debug, Serialize)]
#[serde(tag = "dashboard", rename_all = "snake_case")]
pub enum DashboardView {
    Admin(AdminDashboard),
    Employee(EmployeeDashboard),
}

/// Portal-wide counters for the admin landing page.
#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    pub employees: usize,
    pub performance_records: usize,
    pub updates: usize,
}

#[derive(Debug, Serialize)]
pub struct EmployeeDashboard {
    /// Summary over the 30 most recent records.
    pub summary: PerformanceSummary,
    pub record_count: usize,
    pub recent_updates: Vec<UpdateDigest>,
}

#[derive(Debug, Serialize)]
pub struct UpdateDigest {
    pub id: String,
    pub title: String,
    pub created_date: Option<DateTime<Utc>>,
    pub acknowledged: bool,
}

pub async fn view(State(state): State<ServerState>, user: CurrentUser) -> PageResult<DashboardView> {
    if let Some(denied) = page_gate(&user, PageId::Dashboard) {
        return Ok(denied);
    }

    let collections = state.collections();

    let body = if user.profile().role.is_admin() {
        let employees = collections
            .users()
            .filter(Filter::by("role", "user"), None, None)
            .await?;
        let records = collections.performance().list(None, None).await?;
        let updates = collections.updates().list(None, None).await?;

        DashboardView::Admin(AdminDashboard {
            employees: employees.len(),
            performance_records: records.len(),
            updates: updates.len(),
        })
    } else {
        let records = collections
            .performance()
            .filter(
                Filter::by("employee_email", user.email()),
                Some(SortSpec::desc("date")),
                Some(30),
            )
            .await?;
        let updates = collections
            .updates()
            .list(Some(SortSpec::desc("created_date")), Some(5))
            .await?;

        let summary = PerformanceSummary::compute(records.iter().map(|r| &r.fields));
        let recent_updates = updates
            .iter()
            .map(|update| UpdateDigest {
                id: update.id.clone(),
                title: update.title.clone(),
                created_date: update.created_date,
                acknowledged: update.is_acknowledged_by(user.email()),
            })
            .collect();

        DashboardView::Employee(EmployeeDashboard {
            summary,
            record_count: records.len(),
            recent_updates,
        })
    };

    Ok(ok(PageView::page(body)))
}
