//! Page routers and view composition
//!
//! # 结构
//!
//! - [`health`] - 健康检查 (公共路由)
//! - [`session`] - 当前用户 / 登出
//! - [`dashboard`] - 角色仪表盘
//! - [`updates`] - 公司公告 (阅读/确认 + 发布管理)
//! - [`employees`] - 员工档案管理
//! - [`attendance`] - 考勤 (管理 + 本人)
//! - [`performance`] - 绩效 (管理 + 本人)
//! - [`incentives`] - 奖金 (管理 + 本人)
//! - [`notifications`] - 邮件通知发送
//!
//! 每个页面处理器以解析后的用户档案为唯一外部输入，渲染主体前先过
//! 一次 [`crate::auth::authorize`] 门禁。

use axum::{Json, Router};
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use shared::{ApiResponse, Filter, Stored, UserProfile};

use crate::auth::{Access, CurrentUser, PageId, authorize};
use crate::core::{AppError, AppResult, ServerState, ok};

pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod health;
pub mod incentives;
pub mod notifications;
pub mod performance;
pub mod session;
pub mod updates;

/// 门禁拒绝时替换页面主体的固定提示
pub const ACCESS_DENIED_MESSAGE: &str = "Access Denied. This page is for HR Admins only.";

/// A page body, or the fixed denial rendered in its place.
///
/// Denial is an in-band view, not an HTTP error: the response stays 200,
/// nothing redirects, nothing is logged.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PageView<T> {
    Page {
        #[serde(flatten)]
        body: T,
    },
    AccessDenied {
        message: &'static str,
    },
}

impl<T> PageView<T> {
    pub fn page(body: T) -> Self {
        PageView::Page { body }
    }

    pub fn denied() -> Self {
        PageView::AccessDenied {
            message: ACCESS_DENIED_MESSAGE,
        }
    }
}

/// Handler result for page endpoints.
pub type PageResult<T> = AppResult<Json<ApiResponse<PageView<T>>>>;

/// Run the access gate for `page`. Every page handler calls this exactly
/// once, before touching the entity layer; `Some` is the denial response
/// to return as-is.
pub fn page_gate<T>(user: &CurrentUser, page: PageId) -> Option<Json<ApiResponse<PageView<T>>>> {
    match authorize(Some(user.profile()), page) {
        Access::Deny => Some(ok(PageView::denied())),
        Access::Allow => None,
    }
}

/// Employee picker entry shared by the admin forms.
#[derive(Debug, Serialize)]
pub struct EmployeePick {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub employee_id: Option<String>,
}

impl From<&Stored<UserProfile>> for EmployeePick {
    fn from(account: &Stored<UserProfile>) -> Self {
        Self {
            id: account.id.clone(),
            email: account.email.clone(),
            full_name: account.full_name.clone(),
            employee_id: account.employee_id.clone(),
        }
    }
}

/// All accounts with the employee role.
pub(crate) async fn employee_accounts(
    state: &ServerState,
) -> Result<Vec<Stored<UserProfile>>, AppError> {
    Ok(state
        .collections()
        .users()
        .filter(Filter::by("role", "user"), None, None)
        .await?)
}

/// Resolve an employee email to a display name, falling back to the
/// address itself when the account is not in the fetched set.
pub(crate) fn display_name<'a>(accounts: &'a [Stored<UserProfile>], email: &'a str) -> &'a str {
    accounts
        .iter()
        .find(|account| account.email == email)
        .map(|account| account.full_name.as_str())
        .unwrap_or(email)
}

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(session::router())
        .merge(dashboard::router())
        .merge(updates::router())
        .merge(employees::router())
        .merge(attendance::router())
        .merge(performance::router())
        .merge(incentives::router())
        .merge(notifications::router())
        // Health API - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // ========== Application Middleware ==========
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // Session resolution - executes before routes, injects CurrentUser
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_session,
        ))
}
