//! 应用程序常量定义
//!
//! 本模块包含全局使用的常量，避免魔数并提供统一的配置值。

/// 网络相关常量
pub mod network {
    /// 所有请求固定携带的 User-Agent
    pub const USER_AGENT: &str = "DiscoAPI";
    /// 客户端连接超时时间（秒）
    pub const CONNECT_TIMEOUT_SECS: u64 = 20;
    /// GET 请求超时时间（秒）
    pub const GET_REQUEST_TIMEOUT_SECS: u64 = 10;
    /// 最大重定向次数
    pub const MAX_REDIRECTS: usize = 10;
}

/// 日志相关常量
pub mod log {
    /// 默认日志级别
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    /// --verbose 时使用的日志级别
    pub const VERBOSE_LOG_LEVEL: &str = "debug";
}
