//! HR Employee Portal
//!
//! Role-based web portal for employee records, attendance, performance
//! scoring, incentives, company updates and email notifications. The
//! portal owns no persistence or identity: every record lives in the
//! hosting platform's entity layer and every session is resolved by its
//! identity service (see `portal-client`).
//!
//! # Module structure
//!
//! ```text
//! portal-server/src/
//! ├── core/          # 配置、状态、错误、HTTP 服务器
//! ├── auth/          # 会话解析中间件 + 页面访问门禁
//! ├── nav.rs         # 角色导航菜单
//! ├── forms/         # 表单草稿校验与提交
//! ├── reports/       # 聚合统计 (绩效/考勤/奖金)
//! ├── notify/        # 邮件通知分发 + 审计记录
//! ├── pages/         # 页面路由和处理器
//! └── utils/         # 日志等工具
//! ```

pub mod auth;
pub mod core;
pub mod forms;
pub mod nav;
pub mod notify;
pub mod pages;
pub mod reports;
pub mod utils;

// Re-export 公共类型
pub use auth::{Access, CurrentUser, PageId, authorize};
pub use core::{AppError, AppResult, Config, Server, ServerState};
pub use nav::{NavItem, build_menu};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    __  ______     ____             __        __
   / / / / __ \   / __ \____  _____/ /_____ _/ /
  / /_/ / /_/ /  / /_/ / __ \/ ___/ __/ __ `/ /
 / __  / _, _/  / ____/ /_/ / /  / /_/ /_/ / /
/_/ /_/_/ |_|  /_/    \____/_/   \__/\__,_/_/
    "#
    );
}
