//! Shared test harness: the portal wired to the in-memory platform.

use std::sync::Arc;

use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use portal_client::mock::MockPlatform;
use portal_server::core::{Config, ServerState};
use portal_server::pages;
use shared::{Role, UserProfile};

pub const ADMIN_TOKEN: &str = "token-admin";
pub const EMPLOYEE_TOKEN: &str = "token-employee";

pub const ADMIN_EMAIL: &str = "hr@corp.test";
pub const EMPLOYEE_EMAIL: &str = "riley@corp.test";

pub fn profile(email: &str, name: &str, role: Role) -> UserProfile {
    UserProfile {
        email: email.into(),
        full_name: name.into(),
        role,
        employee_id: None,
        phone_number: None,
        job_title: None,
        department: None,
        hire_date: None,
        salary: None,
        address: None,
        profile_picture_url: None,
    }
}

pub struct TestPortal {
    pub platform: Arc<MockPlatform>,
    pub state: ServerState,
}

/// A portal with one admin and one employee session registered.
pub fn portal() -> TestPortal {
    let platform = Arc::new(MockPlatform::new());
    let state = ServerState::with_platform(
        Config::with_overrides("Harborview Solutions", "corp.test"),
        platform.clone(),
        platform.clone(),
        platform.clone(),
        platform.clone(),
    );

    platform.seed_session(ADMIN_TOKEN, profile(ADMIN_EMAIL, "HR Admin", Role::Admin));
    platform.seed_session(
        EMPLOYEE_TOKEN,
        profile(EMPLOYEE_EMAIL, "Riley Chen", Role::Employee),
    );

    TestPortal { platform, state }
}

impl TestPortal {
    pub async fn get(&self, token: Option<&str>, uri: &str) -> (StatusCode, Value) {
        self.call("GET", token, uri, None).await
    }

    pub async fn post(&self, token: Option<&str>, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call("POST", token, uri, Some(body)).await
    }

    /// Drive one request through the real app without the network stack.
    async fn call(
        &self,
        method: &str,
        token: Option<&str>,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request builds");

        let response = pages::build_app(&self.state)
            .with_state(self.state.clone())
            .oneshot(request)
            .await
            .expect("router call succeeds");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body reads")
            .to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}
