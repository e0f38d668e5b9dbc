//! Notification Handlers

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use shared::{ALL_RECIPIENTS, RecipientSelector};

use crate::auth::{CurrentUser, PageId};
use crate::core::{AppError, ServerState, ok};
use crate::forms;
use crate::notify::{DispatchOutcome, dispatch};
use crate::pages::{PageResult, PageView, employee_accounts, page_gate};

#[derive(Debug, Serialize)]
pub struct SendNotificationPage {
    pub recipients: Vec<RecipientChoice>,
}

#[derive(Debug, Serialize)]
pub struct RecipientChoice {
    pub value: String,
    pub label: String,
}

/// Compose page: the "all employees" option plus every employee address.
pub async fn view(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> PageResult<SendNotificationPage> {
    if let Some(denied) = page_gate(&user, PageId::SendNotification) {
        return Ok(denied);
    }

    let employees = employee_accounts(&state).await?;

    let mut recipients = vec![RecipientChoice {
        value: ALL_RECIPIENTS.to_string(),
        label: "All Employees".to_string(),
    }];
    recipients.extend(employees.iter().map(|account| RecipientChoice {
        value: account.email.clone(),
        label: format!("{} ({})", account.full_name, account.email),
    }));

    Ok(ok(PageView::page(SendNotificationPage { recipients })))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SendView {
    Sent {
        recipients: usize,
    },
    PartialFailure {
        recipients: usize,
        audit_error: String,
    },
}

/// Send the composed notification.
pub async fn send(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<SendRequest>,
) -> PageResult<SendView> {
    if let Some(denied) = page_gate(&user, PageId::SendNotification) {
        return Ok(denied);
    }

    let subject = forms::required_text(&req.subject, "subject", forms::MAX_NAME_LEN)?;
    let body = forms::required_text(&req.body, "body", forms::MAX_BODY_LEN)?;
    let selector = RecipientSelector::parse(&req.recipient)
        .map_err(|e| AppError::validation(e.to_string()))?;
    if let RecipientSelector::One(address) = &selector {
        forms::required_email(address, "recipient")?;
    }

    let outcome = dispatch(&state, &selector, &subject, &body, user.profile())
        .await
        .map_err(|e| e.with_draft(&req))?;

    let view = match outcome {
        DispatchOutcome::Sent { recipients } => SendView::Sent { recipients },
        DispatchOutcome::PartialFailure {
            recipients,
            audit_error,
        } => SendView::PartialFailure {
            recipients,
            audit_error,
        },
    };

    Ok(ok(PageView::page(view)))
}
