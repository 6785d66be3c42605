/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 文档生成服务地址
    pub api_base_url: String,
    /// 导出文件保存目录
    pub output_dir: String,
    /// 单次请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://ielts-practice-backend.onrender.com".to_string(),
            output_dir: "exports".to_string(),
            request_timeout_secs: 30,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("EXPORT_API_BASE_URL").unwrap_or(default.api_base_url),
            output_dir: std::env::var("EXPORT_OUTPUT_DIR").unwrap_or(default.output_dir),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
