//! Notification Audit Model

use serde::{Deserialize, Serialize};

/// Sentinel recipient meaning "all employees with the employee role".
pub const ALL_RECIPIENTS: &str = "all";

/// Audit record of an email notification sent by an admin.
///
/// This is the log of the send, not the delivery mechanism itself.
/// `recipient_email` holds the selector as the operator chose it: the
/// `"all"` sentinel or a single address, never the expanded list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
    pub sent_by: String,
}

/// Parsed recipient selector for an outbound notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientSelector {
    /// Every user with [`crate::models::Role::Employee`], expanded at send time.
    All,
    /// A single address, used verbatim.
    One(String),
}

/// A recipient selector could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("recipient must be '{ALL_RECIPIENTS}' or an email address")]
pub struct SelectorError;

impl RecipientSelector {
    pub fn parse(raw: &str) -> Result<Self, SelectorError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(SelectorError);
        }
        if raw == ALL_RECIPIENTS {
            Ok(RecipientSelector::All)
        } else {
            Ok(RecipientSelector::One(raw.to_string()))
        }
    }

    /// The selector as it is persisted in the audit record.
    pub fn as_str(&self) -> &str {
        match self {
            RecipientSelector::All => ALL_RECIPIENTS,
            RecipientSelector::One(addr) => addr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sentinel_and_single_address() {
        assert_eq!(
            RecipientSelector::parse("all").unwrap(),
            RecipientSelector::All
        );
        assert_eq!(
            RecipientSelector::parse("a@corp.test").unwrap(),
            RecipientSelector::One("a@corp.test".into())
        );
        assert!(RecipientSelector::parse("  ").is_err());
    }

    #[test]
    fn audit_form_is_the_unexpanded_selector() {
        assert_eq!(RecipientSelector::All.as_str(), "all");
        assert_eq!(
            RecipientSelector::One("a@corp.test".into()).as_str(),
            "a@corp.test"
        );
    }
}
