//! 服务器配置
//!
//! # 环境变量
//!
//! 所有配置项都可以通过环境变量覆盖：
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | HTTP_PORT | 3000 | HTTP 服务端口 |
//! | PLATFORM_API_URL | http://localhost:3001 | 托管平台 API 地址 |
//! | PLATFORM_API_KEY | (空) | 平台服务密钥 |
//! | ORG_NAME | Harborview Solutions | 组织显示名称 |
//! | ORG_EMAIL_DOMAIN | harborview.example | 公司保留邮箱域名 |
//! | ENVIRONMENT | development | 运行环境 |
//! | REQUEST_TIMEOUT_MS | 30000 | 出站请求超时(毫秒) |
//! | LOG_DIR | (无) | 日志文件目录，未设置时仅输出到终端 |
//!
//! # 示例
//!
//! ```ignore
//! PLATFORM_API_URL=https://platform.example HTTP_PORT=8080 cargo run
//! ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 托管平台 (实体层/身份/邮件/文件) 的基础 URL
    pub platform_url: String,
    /// 平台服务密钥，用于实体层与集成调用
    pub platform_api_key: String,
    /// 组织显示名称 (邮件发件人、界面标题)
    pub org_name: String,
    /// 公司保留邮箱域名；新员工邮箱不在此域时需要操作员确认
    pub org_email_domain: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 出站请求超时 (毫秒)
    pub request_timeout_ms: u64,
    /// 日志文件目录 (可选)
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            platform_url: std::env::var("PLATFORM_API_URL")
                .unwrap_or_else(|_| "http://localhost:3001".into()),
            platform_api_key: std::env::var("PLATFORM_API_KEY").unwrap_or_default(),
            org_name: std::env::var("ORG_NAME")
                .unwrap_or_else(|_| "Harborview Solutions".into()),
            org_email_domain: std::env::var("ORG_EMAIL_DOMAIN")
                .unwrap_or_else(|_| "harborview.example".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(org_name: impl Into<String>, org_email_domain: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.org_name = org_name.into();
        config.org_email_domain = org_email_domain.into();
        config
    }

    /// 邮件发件人显示名，如 "Harborview Solutions HR"
    pub fn mail_from_name(&self) -> String {
        format!("{} HR", self.org_name)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
