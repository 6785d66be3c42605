/// 文档生成服务客户端
///
/// 封装与文档生成服务的两个接口（generate-pdf / generate-excel）的交互
use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, AppError, Result};
use crate::models::{AnswerSheet, ExportFormat};

/// 文档生成服务客户端
pub struct ExportClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ExportClient {
    /// 创建新的导出客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// 请求生成文档
    ///
    /// # 参数
    /// - `sheet`: 答题卡快照（发送后不可再变更）
    /// - `format`: 导出格式
    ///
    /// # 返回
    /// 返回文档的二进制内容
    pub async fn generate(&self, sheet: &AnswerSheet, format: ExportFormat) -> Result<Vec<u8>> {
        let endpoint = format.endpoint();
        let url = format!("{}/{}", self.base_url, endpoint);

        debug!("请求生成 {} 文档: {}", format, url);

        let response = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .json(sheet)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Api(ApiError::BadResponse {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            }));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        if bytes.is_empty() {
            return Err(AppError::Api(ApiError::EmptyResponse {
                endpoint: endpoint.to_string(),
            }));
        }

        debug!("收到 {} 字节的 {} 数据 ({})", bytes.len(), format, format.mime_type());

        Ok(bytes.to_vec())
    }
}
