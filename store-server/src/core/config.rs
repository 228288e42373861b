use std::time::Duration;

/// 服务器配置 - store 服务的所有配置项
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 8080 | HTTP 服务端口 |
/// | KITCHEN_URL | http://kitchen:8081 | kitchen 服务地址 |
/// | KITCHEN_TIMEOUT_MS | 5000 | cook 通知超时(毫秒) |
/// | FEED_BUFFER | 64 | 每个 dashboard 连接的发送队列容量 |
/// | FEED_PING_SECS | 30 | WebSocket 心跳间隔(秒) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭超时(毫秒) |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | JSON 格式日志 |
///
/// # 示例
///
/// ```ignore
/// PORT=9090 KITCHEN_URL=http://localhost:8081 cargo run -p store-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// Kitchen service base URL (`POST {kitchen_url}/cook`)
    pub kitchen_url: String,
    /// Bounded timeout for the fire-and-forget cook call
    pub kitchen_timeout_ms: u64,
    /// Outbound queue capacity per feed client
    pub feed_buffer: usize,
    /// Keep-alive ping interval on feed sockets
    pub feed_ping_secs: u64,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("PORT", 8080),
            kitchen_url: std::env::var("KITCHEN_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "http://kitchen:8081".into()),
            kitchen_timeout_ms: env_parse("KITCHEN_TIMEOUT_MS", 5000),
            feed_buffer: env_parse::<usize>("FEED_BUFFER", 64).max(1),
            feed_ping_secs: env_parse::<u64>("FEED_PING_SECS", 30).max(1),
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS", 10000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_parse("LOG_JSON", false),
        }
    }

    /// 使用自定义 kitchen 地址覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_kitchen_url(kitchen_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.kitchen_url = kitchen_url.into();
        config
    }

    pub fn kitchen_timeout(&self) -> Duration {
        Duration::from_millis(self.kitchen_timeout_ms)
    }

    pub fn feed_ping_interval(&self) -> Duration {
        Duration::from_secs(self.feed_ping_secs)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
