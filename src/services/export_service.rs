//! 导出服务 - 业务能力层
//!
//! 负责"一次完整导出"：请求文档生成 → 推导文件名 → 落盘

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::fs;
use tracing::{debug, info};

use crate::clients::ExportClient;
use crate::config::Config;
use crate::error::{AppError, BusinessError, FileError, Result};
use crate::models::{export_file_name, AnswerSheet, ExportFormat};

/// 导出服务
///
/// 职责：
/// - 调用客户端获取文档字节流
/// - 按命名规则写入输出目录
/// - 维护每种格式的"进行中"标记，拒绝同格式并发重复导出
pub struct ExportService {
    client: ExportClient,
    output_dir: PathBuf,
    pdf_in_flight: AtomicBool,
    excel_in_flight: AtomicBool,
}

impl ExportService {
    /// 创建新的导出服务
    pub fn new(config: &Config) -> Self {
        Self {
            client: ExportClient::new(config),
            output_dir: PathBuf::from(&config.output_dir),
            pdf_in_flight: AtomicBool::new(false),
            excel_in_flight: AtomicBool::new(false),
        }
    }

    /// 执行一次导出
    ///
    /// # 参数
    /// - `sheet`: 答题卡快照
    /// - `format`: 导出格式
    ///
    /// # 返回
    /// 返回写入的文件路径；失败时答题卡状态不受影响
    pub async fn export(&self, sheet: &AnswerSheet, format: ExportFormat) -> Result<PathBuf> {
        let _guard = self.try_begin(format)?;

        let bytes = self.client.generate(sheet, format).await?;

        let file_name = export_file_name(sheet, format);
        let path = self.output_dir.join(&file_name);
        write_document(&self.output_dir, &path, &bytes).await?;

        info!("✓ {} 导出完成: {} ({} 字节)", format, path.display(), bytes.len());

        Ok(path)
    }

    /// 尝试标记指定格式为"导出中"
    ///
    /// 同一格式已有导出在进行时返回 `ExportInFlight`；守卫析构时自动解除标记
    fn try_begin(&self, format: ExportFormat) -> Result<InFlightGuard<'_>> {
        let flag = match format {
            ExportFormat::Pdf => &self.pdf_in_flight,
            ExportFormat::Excel => &self.excel_in_flight,
        };
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::Business(BusinessError::ExportInFlight { format }))?;
        Ok(InFlightGuard(flag))
    }
}

/// 导出进行中守卫，析构时释放标记
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// 将文档字节写入目标路径（输出目录不存在时自动创建）
async fn write_document(output_dir: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
    debug!("写入文档: {}", path.display());

    fs::create_dir_all(output_dir).await.map_err(|e| {
        AppError::File(FileError::CreateDirFailed {
            path: output_dir.display().to_string(),
            source: e,
        })
    })?;

    fs::write(path, bytes)
        .await
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ExportService {
        ExportService::new(&Config::default())
    }

    #[test]
    fn duplicate_begin_of_same_format_is_rejected() {
        let service = service();
        let guard = service.try_begin(ExportFormat::Pdf).unwrap();

        let second = service.try_begin(ExportFormat::Pdf);
        assert!(matches!(
            second,
            Err(AppError::Business(BusinessError::ExportInFlight {
                format: ExportFormat::Pdf
            }))
        ));

        drop(guard);
        // 第一次导出结束后可以再次开始
        assert!(service.try_begin(ExportFormat::Pdf).is_ok());
    }

    #[test]
    fn different_formats_may_run_concurrently() {
        let service = service();
        let _pdf = service.try_begin(ExportFormat::Pdf).unwrap();
        assert!(service.try_begin(ExportFormat::Excel).is_ok());
    }
}
