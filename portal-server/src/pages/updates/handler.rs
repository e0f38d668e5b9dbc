//! Updates Handlers

use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use shared::{Filter, SortSpec, Stored, Update};

use crate::auth::{CurrentUser, PageId};
use crate::core::{AppError, ServerState, ok};
use crate::forms;
use crate::pages::{PageResult, PageView, employee_accounts, page_gate};

#[derive(Debug, Serialize)]
pub struct UpdatesPage {
    pub updates: Vec<UpdateCard>,
}

#[derive(Debug, Serialize)]
pub struct UpdateCard {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_date: Option<DateTime<Utc>>,
    /// Whether the viewing user has confirmed receipt.
    pub acknowledged: bool,
}

fn card(update: &Stored<Update>, viewer: &str) -> UpdateCard {
    UpdateCard {
        id: update.id.clone(),
        title: update.title.clone(),
        content: update.content.clone(),
        created_date: update.created_date,
        acknowledged: update.is_acknowledged_by(viewer),
    }
}

/// Company updates feed, newest first.
pub async fn view(State(state): State<ServerState>, user: CurrentUser) -> PageResult<UpdatesPage> {
    if let Some(denied) = page_gate(&user, PageId::Updates) {
        return Ok(denied);
    }

    let updates = state
        .collections()
        .updates()
        .list(Some(SortSpec::desc("created_date")), None)
        .await?;

    Ok(ok(PageView::page(UpdatesPage {
        updates: updates.iter().map(|u| card(u, user.email())).collect(),
    })))
}

/// Confirm receipt of one update.
///
/// The write is a monotonic set union: acknowledging twice changes
/// nothing, and nothing is ever removed from the set.
pub async fn acknowledge(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    user: CurrentUser,
) -> PageResult<UpdateCard> {
    if let Some(denied) = page_gate(&user, PageId::Updates) {
        return Ok(denied);
    }

    let matches = state
        .collections()
        .updates()
        .filter(Filter::by("id", id.clone()), None, None)
        .await?;
    let update = matches
        .into_iter()
        .next()
        .ok_or_else(|| AppError::not_found(format!("Update {id} not found")))?;

    if update.is_acknowledged_by(user.email()) {
        return Ok(ok(PageView::page(card(&update, user.email()))));
    }

    let acknowledged_by = update.with_acknowledgement(user.email());
    let updated = state
        .collections()
        .updates()
        .update(&update.id, json!({ "acknowledged_by": acknowledged_by }))
        .await?;

    Ok(ok(PageView::page(card(&updated, user.email()))))
}

#[derive(Debug, Serialize)]
pub struct ManageUpdatesPage {
    pub updates: Vec<PublishedUpdate>,
    /// Denominator for the "acknowledged by X of N" line.
    pub employee_count: usize,
}

#[derive(Debug, Serialize)]
pub struct PublishedUpdate {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_date: Option<DateTime<Utc>>,
    pub acknowledged_count: usize,
}

fn published(update: &Stored<Update>) -> PublishedUpdate {
    PublishedUpdate {
        id: update.id.clone(),
        title: update.title.clone(),
        content: update.content.clone(),
        created_date: update.created_date,
        acknowledged_count: update.acknowledged_by.len(),
    }
}

/// Publishing page: every published update with its acknowledgement tally.
pub async fn manage_view(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> PageResult<ManageUpdatesPage> {
    if let Some(denied) = page_gate(&user, PageId::ManageUpdates) {
        return Ok(denied);
    }

    let updates = state
        .collections()
        .updates()
        .list(Some(SortSpec::desc("created_date")), None)
        .await?;
    let employees = employee_accounts(&state).await?;

    Ok(ok(PageView::page(ManageUpdatesPage {
        updates: updates.iter().map(published).collect(),
        employee_count: employees.len(),
    })))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostUpdateRequest {
    pub title: String,
    pub content: String,
}

/// Publish a new update with an empty acknowledgement set.
pub async fn post_update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<PostUpdateRequest>,
) -> PageResult<PublishedUpdate> {
    if let Some(denied) = page_gate(&user, PageId::ManageUpdates) {
        return Ok(denied);
    }

    let update = Update {
        title: forms::required_text(&req.title, "title", forms::MAX_NAME_LEN)?,
        content: forms::required_text(&req.content, "content", forms::MAX_BODY_LEN)?,
        acknowledged_by: Vec::new(),
    };

    let created = state
        .collections()
        .updates()
        .create(&update)
        .await
        .map_err(|e| AppError::from(e).with_draft(&req))?;

    tracing::info!(update_id = %created.id, title = %created.title, "Update published");

    Ok(ok(PageView::page(published(&created))))
}
