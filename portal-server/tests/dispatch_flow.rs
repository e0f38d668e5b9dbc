//! Notification dispatch end-to-end: expansion, audit, failure ordering.

mod common;

use http::StatusCode;
use serde_json::json;

use common::{ADMIN_EMAIL, ADMIN_TOKEN, portal};
use shared::EntityKind;

fn seed_employee(portal: &common::TestPortal, email: &str, name: &str) {
    portal.platform.seed(
        EntityKind::User,
        json!({"email": email, "full_name": name, "role": "user"}),
    );
}

#[tokio::test]
async fn sending_to_all_expands_recipients_but_audits_the_selector() {
    let portal = portal();
    seed_employee(&portal, "a@corp.test", "Ana");
    seed_employee(&portal, "b@corp.test", "Ben");

    let (status, body) = portal
        .post(
            Some(ADMIN_TOKEN),
            "/api/pages/send-notification/send",
            json!({
                "recipient": "all",
                "subject": "Townhall",
                "body": "Friday, 4pm."
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["outcome"], "sent");
    assert_eq!(body["data"]["recipients"], 2);

    // Effect (a): the integration got the expanded, comma-joined list.
    let mail = portal.platform.sent_mail();
    assert_eq!(mail.len(), 1);
    assert_eq!(mail[0].to, "a@corp.test,b@corp.test");
    assert_eq!(mail[0].from_name, "Harborview Solutions HR");

    // Effect (b): the audit row keeps the original selector.
    let audits = portal.platform.records_of(EntityKind::Notification);
    assert_eq!(audits.len(), 1);
    assert_eq!(audits[0]["recipient_email"], "all");
    assert_eq!(audits[0]["sent_by"], ADMIN_EMAIL);
}

#[tokio::test]
async fn single_recipient_goes_through_verbatim() {
    let portal = portal();
    seed_employee(&portal, "a@corp.test", "Ana");

    let (status, _) = portal
        .post(
            Some(ADMIN_TOKEN),
            "/api/pages/send-notification/send",
            json!({
                "recipient": "a@corp.test",
                "subject": "Ping",
                "body": "Hello"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(portal.platform.sent_mail()[0].to, "a@corp.test");
    assert_eq!(
        portal.platform.records_of(EntityKind::Notification)[0]["recipient_email"],
        "a@corp.test"
    );
}

#[tokio::test]
async fn mail_failure_skips_the_audit_and_keeps_the_draft() {
    let portal = portal();
    seed_employee(&portal, "a@corp.test", "Ana");
    portal.platform.set_mail_failure(true);

    let (status, body) = portal
        .post(
            Some(ADMIN_TOKEN),
            "/api/pages/send-notification/send",
            json!({
                "recipient": "all",
                "subject": "Townhall",
                "body": "Friday, 4pm."
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "E5001");
    // Draft comes back for resubmission.
    assert_eq!(body["data"]["draft"]["subject"], "Townhall");
    // No send happened, so nothing may be logged.
    assert!(portal.platform.records_of(EntityKind::Notification).is_empty());
    assert!(portal.platform.sent_mail().is_empty());
}

#[tokio::test]
async fn blank_fields_block_the_send() {
    let portal = portal();

    let (status, body) = portal
        .post(
            Some(ADMIN_TOKEN),
            "/api/pages/send-notification/send",
            json!({
                "recipient": "all",
                "subject": "  ",
                "body": "Hello"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
    assert!(portal.platform.sent_mail().is_empty());
}
