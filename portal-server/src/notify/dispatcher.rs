//! Notification Dispatcher
//!
//! A dispatch is two sequential effects: hand the message to the mail
//! integration, then persist an audit `Notification` record. The audit
//! record stores the selector as the operator chose it (`"all"` or one
//! address), never the expanded list. The two effects are not a
//! transaction: a failed mail send stops before the audit write, and a
//! failed audit write after a successful send is reported, not undone.

use portal_client::EmailMessage;
use shared::{Filter, Notification, RecipientSelector, UserProfile};

use crate::core::{AppError, ServerState};

/// Outcome of a dispatch.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// Mail handed off and audit record written.
    Sent { recipients: usize },
    /// Mail handed off but the audit write failed afterwards.
    PartialFailure {
        recipients: usize,
        audit_error: String,
    },
}

/// Send a notification and log it.
///
/// `RecipientSelector::All` expands, at send time, to every user with the
/// employee role, comma-joined into one `to` header.
pub async fn dispatch(
    state: &ServerState,
    selector: &RecipientSelector,
    subject: &str,
    body: &str,
    sender: &UserProfile,
) -> Result<DispatchOutcome, AppError> {
    let addresses = match selector {
        RecipientSelector::All => state
            .collections()
            .users()
            .filter(Filter::by("role", "user"), None, None)
            .await?
            .iter()
            .map(|account| account.email.clone())
            .collect::<Vec<_>>(),
        RecipientSelector::One(address) => vec![address.clone()],
    };
    let recipients = addresses.len();

    let message = EmailMessage {
        to: addresses.join(","),
        subject: subject.to_string(),
        body: body.to_string(),
        from_name: state.config.mail_from_name(),
    };

    // Effect (a): the send. A failure here must leave no audit record.
    state.mail.send(&message).await?;

    tracing::info!(
        recipient = %selector.as_str(),
        recipients,
        sent_by = %sender.email,
        "Notification sent"
    );

    // Effect (b): the audit record, keyed on the unexpanded selector.
    let audit = Notification {
        recipient_email: selector.as_str().to_string(),
        subject: subject.to_string(),
        body: body.to_string(),
        sent_by: sender.email.clone(),
    };

    match state.collections().notifications().create(&audit).await {
        Ok(_) => Ok(DispatchOutcome::Sent { recipients }),
        Err(e) => {
            tracing::warn!(error = %e, "Notification sent but audit write failed");
            Ok(DispatchOutcome::PartialFailure {
                recipients,
                audit_error: e.to_string(),
            })
        }
    }
}
