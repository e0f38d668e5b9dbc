//! 统一错误处理
//!
//! 提供应用级错误类型 [`AppError`]；所有响应使用 `shared` 的
//! [`ApiResponse`] 信封。
//!
//! # 错误码规范
//!
//! | 错误码 | 分类 | HTTP 状态码 |
//! |--------|------|------------|
//! | E1001 | 未登录 / 会话失效 | 401 |
//! | E0002 | 校验失败 | 400 |
//! | E0003 | 资源不存在 | 404 |
//! | E5001 | 远端调用失败 (实体层/集成) | 502 |
//! | E5000 | 内部错误 | 500 |
//!
//! 页面级的 "Access Denied" 不走错误通道：门禁拒绝时页面主体被替换为
//! 固定提示 (见 [`crate::pages::PageView`])，HTTP 状态仍为 200。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use portal_client::ClientError;
use shared::ApiResponse;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 无会话或会话已失效 (401)，携带登录地址供前端跳转
    #[error("Sign-in required")]
    SessionMissing { login_url: String },

    /// 表单/参数校验失败 (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 资源不存在 (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// 实体层或集成调用失败 (502)。`draft` 回传操作员已填写的表单内容，
    /// 重新提交时无需重新录入
    #[error("Remote call failed: {message}")]
    Remote {
        message: String,
        draft: Option<Value>,
    },

    /// 内部错误 (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn session_missing(login_url: impl Into<String>) -> Self {
        AppError::SessionMissing {
            login_url: login_url.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal(message.into())
    }

    /// 附带草稿：远端失败时保留表单内容
    pub fn with_draft<T: Serialize>(self, draft: &T) -> Self {
        match self {
            AppError::Remote { message, .. } => AppError::Remote {
                message,
                draft: serde_json::to_value(draft).ok(),
            },
            other => other,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        AppError::Remote {
            message: err.to_string(),
            draft: None,
        }
    }
}

/// 错误响应的附加数据
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::SessionMissing { login_url } => (
                StatusCode::UNAUTHORIZED,
                "E1001",
                "Sign-in required".to_string(),
                Some(ErrorDetails {
                    login_url: Some(login_url),
                    draft: None,
                }),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg, None),
            AppError::Remote { message, draft } => (
                StatusCode::BAD_GATEWAY,
                "E5001",
                message,
                draft.map(|draft| ErrorDetails {
                    login_url: None,
                    draft: Some(draft),
                }),
            ),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E5000",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body: ApiResponse<ErrorDetails> = ApiResponse::error(code, message);
        body.data = details;
        (status, Json(body)).into_response()
    }
}

/// 处理器的 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

/// 构造成功响应
pub fn ok<T>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}
