//! Form submissions end-to-end: coercion, defaults, draft preservation.

mod common;

use http::StatusCode;
use serde_json::json;

use common::{ADMIN_EMAIL, ADMIN_TOKEN, EMPLOYEE_EMAIL, EMPLOYEE_TOKEN, portal};
use shared::EntityKind;

#[tokio::test]
async fn marking_attendance_stores_numeric_hours() {
    let portal = portal();

    let (status, body) = portal
        .post(
            Some(ADMIN_TOKEN),
            "/api/pages/manage-attendance/mark",
            json!({
                "employee_email": EMPLOYEE_EMAIL,
                "date": "2026-08-03",
                "status": "late",
                "check_in_time": "09:45",
                "check_out_time": "17:15",
                "hours_worked": "7.5",
                "notes": "traffic"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["view"], "page");
    assert_eq!(body["data"]["status_label"], "late");

    let records = portal.platform.records_of(EntityKind::Attendance);
    assert_eq!(records.len(), 1);
    // The number 7.5, not the string "7.5".
    assert_eq!(records[0]["hours_worked"], json!(7.5));
    assert_eq!(records[0]["status"], "late");
}

#[tokio::test]
async fn unparsable_hours_are_rejected_and_nothing_is_stored() {
    let portal = portal();

    let (status, body) = portal
        .post(
            Some(ADMIN_TOKEN),
            "/api/pages/manage-attendance/mark",
            json!({
                "employee_email": EMPLOYEE_EMAIL,
                "date": "2026-08-03",
                "status": "present",
                "hours_worked": "a full day"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
    assert!(portal.platform.records_of(EntityKind::Attendance).is_empty());
}

#[tokio::test]
async fn entity_layer_failure_echoes_the_draft_back() {
    let portal = portal();
    portal.platform.set_entity_failure(true);

    let (status, body) = portal
        .post(
            Some(ADMIN_TOKEN),
            "/api/pages/manage-attendance/mark",
            json!({
                "employee_email": EMPLOYEE_EMAIL,
                "date": "2026-08-03",
                "status": "present",
                "hours_worked": "7.5"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "E5001");
    // The operator resubmits without re-entering anything.
    assert_eq!(body["data"]["draft"]["hours_worked"], "7.5");
    assert_eq!(body["data"]["draft"]["employee_email"], EMPLOYEE_EMAIL);
}

#[tokio::test]
async fn logging_performance_stores_numeric_scores() {
    let portal = portal();

    let (status, _) = portal
        .post(
            Some(ADMIN_TOKEN),
            "/api/pages/manage-performance/log",
            json!({
                "employee_email": EMPLOYEE_EMAIL,
                "date": "2026-08-03",
                "punctuality": "9",
                "attitude": "8",
                "responsiveness": "10",
                "hr_remarks": "solid week"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let records = portal.platform.records_of(EntityKind::PerformanceRecord);
    assert_eq!(records[0]["punctuality"], json!(9.0));
    assert_eq!(records[0]["responsiveness"], json!(10.0));
}

#[tokio::test]
async fn awarding_an_incentive_stamps_the_acting_admin() {
    let portal = portal();

    let (status, body) = portal
        .post(
            Some(ADMIN_TOKEN),
            "/api/pages/manage-incentives/award",
            json!({
                "employee_email": EMPLOYEE_EMAIL,
                "type": "project_completion",
                "amount": "250.75",
                "description": "Migration shipped",
                "date_awarded": "2026-08-01"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let records = portal.platform.records_of(EntityKind::Incentive);
    assert_eq!(records[0]["approved_by"], ADMIN_EMAIL);
    assert_eq!(records[0]["type"], "project_completion");
}

#[tokio::test]
async fn adding_an_employee_is_lookup_then_update() {
    let portal = portal();

    // Nobody with this email yet: the portal must not create an account.
    let (status, body) = portal
        .post(
            Some(ADMIN_TOKEN),
            "/api/pages/manage-employees/save",
            json!({
                "full_name": "Sam Okafor",
                "email": "sam@corp.test",
                "job_title": "Designer"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["outcome"], "provision_required");
    assert!(portal.platform.records_of(EntityKind::User).is_empty());

    // Once the platform has provisioned the account, saving updates it.
    portal.platform.seed(
        EntityKind::User,
        json!({"email": "sam@corp.test", "full_name": "Sam", "role": "user"}),
    );

    let (status, body) = portal
        .post(
            Some(ADMIN_TOKEN),
            "/api/pages/manage-employees/save",
            json!({
                "full_name": "Sam Okafor",
                "email": "sam@corp.test",
                "job_title": "Designer"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["outcome"], "updated");
    let users = portal.platform.records_of(EntityKind::User);
    assert_eq!(users[0]["full_name"], "Sam Okafor");
    assert_eq!(users[0]["job_title"], "Designer");
}

#[tokio::test]
async fn outside_emails_need_explicit_confirmation() {
    let portal = portal();

    let draft = json!({
        "full_name": "Pat Müller",
        "email": "pat@elsewhere.test"
    });

    let (_, body) = portal
        .post(Some(ADMIN_TOKEN), "/api/pages/manage-employees/save", draft.clone())
        .await;
    assert_eq!(body["data"]["outcome"], "needs_domain_confirmation");
    assert_eq!(body["data"]["domain"], "corp.test");

    // Confirmed: the save proceeds to the lookup.
    let mut confirmed = draft;
    confirmed["confirm_domain"] = json!(true);
    let (_, body) = portal
        .post(Some(ADMIN_TOKEN), "/api/pages/manage-employees/save", confirmed)
        .await;
    assert_eq!(body["data"]["outcome"], "provision_required");
}

#[tokio::test]
async fn acknowledging_an_update_is_idempotent() {
    let portal = portal();
    let id = portal.platform.seed(
        EntityKind::Update,
        json!({"title": "New badge readers", "content": "Rollout Monday.", "acknowledged_by": []}),
    );

    let uri = format!("/api/pages/updates/{id}/acknowledge");
    let (status, body) = portal
        .post(Some(EMPLOYEE_TOKEN), &uri, json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["acknowledged"], true);

    // Second acknowledge: the set must not grow.
    let (status, _) = portal
        .post(Some(EMPLOYEE_TOKEN), &uri, json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);

    let updates = portal.platform.records_of(EntityKind::Update);
    assert_eq!(
        updates[0]["acknowledged_by"],
        json!([EMPLOYEE_EMAIL]),
        "monotonic union, no duplicates"
    );
}

#[tokio::test]
async fn posting_an_update_starts_with_an_empty_acknowledgement_set() {
    let portal = portal();

    let (status, body) = portal
        .post(
            Some(ADMIN_TOKEN),
            "/api/pages/manage-updates/post",
            json!({"title": "Summer hours", "content": "Fridays end at 3pm."}),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["acknowledged_count"], 0);

    let updates = portal.platform.records_of(EntityKind::Update);
    assert_eq!(updates[0]["acknowledged_by"], json!([]));
}

#[tokio::test]
async fn my_incentives_totals_all_time_with_two_decimals() {
    let portal = portal();
    portal.platform.seed(
        EntityKind::Incentive,
        json!({
            "employee_email": EMPLOYEE_EMAIL,
            "type": "bonus",
            "amount": 100,
            "description": "Q1",
            "date_awarded": "2020-01-10"
        }),
    );
    portal.platform.seed(
        EntityKind::Incentive,
        json!({
            "employee_email": EMPLOYEE_EMAIL,
            "type": "bonus",
            "amount": 50.5,
            "description": "Q2",
            "date_awarded": "2026-02-11"
        }),
    );

    let (status, body) = portal
        .get(Some(EMPLOYEE_TOKEN), "/api/pages/my-incentives")
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    // All-time sum, two decimals, past years included.
    assert_eq!(body["data"]["total_earned"], "150.50");
    assert_eq!(body["data"]["award_count"], 2);
}
