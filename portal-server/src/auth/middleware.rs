//! 会话中间件
//!
//! 从 `Authorization: Bearer <token>` 头解析会话。令牌每次请求都交给
//! 身份服务重新解析，门户不缓存判定结果。解析成功后将
//! [`CurrentUser`] 注入请求扩展。
//!
//! # 跳过会话解析的路径
//!
//! - `OPTIONS *` (CORS 预检)
//! - 非 `/api/` 路径 (健康检查等，让它们正常返回)
//!
//! # 错误处理
//!
//! | 错误 | HTTP 状态码 |
//! |------|------------|
//! | 无 Authorization 头 | 401 + 登录地址 |
//! | 令牌无法解析 | 401 + 登录地址 |
//! | 身份服务不可达 | 502 |

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use portal_client::ClientError;

use crate::auth::CurrentUser;
use crate::core::{AppError, ServerState};
use crate::security_log;

/// 从 Authorization 头取出 Bearer 令牌
pub fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").map(str::trim)
}

/// 会话中间件 - 要求已登录
pub async fn require_session(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // 允许 CORS 预检的 OPTIONS 请求
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // 非 API 路由跳过会话解析
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header.and_then(bearer_token) {
        Some(token) => token.to_string(),
        None => {
            security_log!("WARN", "session_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::session_missing(state.sessions.login_url()));
        }
    };

    match state.sessions.current_user(&token).await {
        Ok(user) => {
            req.extensions_mut().insert(CurrentUser { user, token });
            Ok(next.run(req).await)
        }
        Err(ClientError::SessionMissing) => {
            security_log!(
                "WARN",
                "session_rejected",
                uri = format!("{:?}", req.uri())
            );
            Err(AppError::session_missing(state.sessions.login_url()))
        }
        Err(e) => Err(AppError::from(e)),
    }
}
