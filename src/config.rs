//! 全局配置管理,存储所有可配置项

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 抓取超时（单位：秒）
    pub http_timeout: u64,
    // 对外标识的User-Agent
    pub user_agent: String,
    // 响应体大小上限（字节）
    pub max_body_bytes: usize,
    // 重定向跳数上限
    pub max_redirects: usize,
    // HTTP服务监听地址
    pub bind_addr: String,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            http_timeout: 15,
            user_agent: format!(
                "storescan/{} (+https://github.com/storescan/storescan)",
                env!("CARGO_PKG_VERSION")
            ),
            max_body_bytes: 5 * 1024 * 1024,
            max_redirects: 10,
            bind_addr: "127.0.0.1:8080".to_string(),
            verbose: false,
        }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.config.user_agent = user_agent;
        self
    }

    pub fn max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.config.max_body_bytes = max_body_bytes;
        self
    }

    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.config.max_redirects = max_redirects;
        self
    }

    pub fn bind_addr(mut self, bind_addr: String) -> Self {
        self.config.bind_addr = bind_addr;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
