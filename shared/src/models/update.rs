//! Company Update Model

use serde::{Deserialize, Serialize};

/// Company announcement with an append-only acknowledgement set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    pub title: String,
    pub content: String,
    /// Emails of users who have confirmed receipt. Only ever grows, and
    /// adding an existing email is a no-op (monotonic set union).
    #[serde(default)]
    pub acknowledged_by: Vec<String>,
}

impl Update {
    pub fn is_acknowledged_by(&self, email: &str) -> bool {
        self.acknowledged_by.iter().any(|e| e == email)
    }

    /// The acknowledgement set with `email` added. Idempotent: an already
    /// present address yields the set unchanged.
    pub fn with_acknowledgement(&self, email: &str) -> Vec<String> {
        let mut acked = self.acknowledged_by.clone();
        if !self.is_acknowledged_by(email) {
            acked.push(email.to_string());
        }
        acked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_with_acks(acks: &[&str]) -> Update {
        Update {
            title: "Quarterly townhall".into(),
            content: "Friday, 4pm.".into(),
            acknowledged_by: acks.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn acknowledgement_is_idempotent() {
        let update = update_with_acks(&["a@corp.test"]);
        let once = update.with_acknowledgement("b@corp.test");
        assert_eq!(once.len(), 2);

        let again = Update {
            acknowledged_by: once,
            ..update
        }
        .with_acknowledgement("b@corp.test");
        assert_eq!(again.len(), 2);
    }

    #[test]
    fn acknowledgement_never_removes() {
        let update = update_with_acks(&["a@corp.test", "b@corp.test"]);
        let acked = update.with_acknowledgement("c@corp.test");
        assert!(acked.contains(&"a@corp.test".to_string()));
        assert!(acked.contains(&"b@corp.test".to_string()));
        assert_eq!(acked.len(), 3);
    }
}
