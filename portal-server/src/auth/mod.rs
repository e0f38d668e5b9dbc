//! 会话解析与页面访问门禁
//!
//! - [`middleware`]: 每个请求通过身份服务解析 Bearer 令牌 (不缓存)
//! - [`extractor`]: 处理器中提取 [`CurrentUser`]
//! - [`gate`]: 纯函数门禁 `authorize(user, page)`，所有页面统一调用

pub mod extractor;
pub mod gate;
pub mod middleware;

pub use extractor::CurrentUser;
pub use gate::{Access, PageId, authorize};
pub use middleware::require_session;
