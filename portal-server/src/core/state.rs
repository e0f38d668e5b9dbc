//! 服务器状态 - 持有平台服务的共享引用
//!
//! ServerState 是门户的核心数据结构，持有四个外部协作方的 trait 对象。
//! 使用 Arc 实现浅拷贝，所有权成本极低；门户自身没有任何跨请求的可变
//! 状态。
//!
//! # 服务组件
//!
//! | 字段 | 类型 | 说明 |
//! |------|------|------|
//! | config | Config | 配置项 (不可变) |
//! | entities | Arc<dyn EntityStore> | 托管实体层 |
//! | sessions | Arc<dyn SessionService> | 身份/会话服务 |
//! | mail | Arc<dyn MailService> | 邮件集成 |
//! | files | Arc<dyn FileStore> | 文件上传集成 |

use std::sync::Arc;
use std::time::Duration;

use portal_client::{Entities, EntityStore, FileStore, MailService, PlatformClient, SessionService};

use crate::core::Config;

#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 托管实体层 (list/filter/create/update)
    pub entities: Arc<dyn EntityStore>,
    /// 身份/会话服务
    pub sessions: Arc<dyn SessionService>,
    /// 邮件集成
    pub mail: Arc<dyn MailService>,
    /// 文件上传集成
    pub files: Arc<dyn FileStore>,
}

impl ServerState {
    /// 连接托管平台，构造服务器状态
    pub fn initialize(config: &Config) -> Self {
        let platform = Arc::new(PlatformClient::with_timeout(
            &config.platform_url,
            config.platform_api_key.clone(),
            Duration::from_millis(config.request_timeout_ms),
        ));

        tracing::info!(
            platform_url = %config.platform_url,
            environment = %config.environment,
            "Connected to hosting platform"
        );

        Self {
            config: config.clone(),
            entities: platform.clone(),
            sessions: platform.clone(),
            mail: platform.clone(),
            files: platform,
        }
    }

    /// 使用自定义协作方构造 (测试场景：注入内存平台)
    pub fn with_platform(
        config: Config,
        entities: Arc<dyn EntityStore>,
        sessions: Arc<dyn SessionService>,
        mail: Arc<dyn MailService>,
        files: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            config,
            entities,
            sessions,
            mail,
            files,
        }
    }

    /// 类型化实体集合入口
    pub fn collections(&self) -> Entities<'_> {
        Entities::new(self.entities.as_ref())
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
