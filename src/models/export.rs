//! 导出格式定义
//!
//! PDF / Excel 两种导出格式对应的接口路径、扩展名和下载文件名规则

use std::fmt;
use std::str::FromStr;

use crate::models::AnswerSheet;

/// 文档导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    /// 文档生成服务上对应的接口路径
    pub fn endpoint(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "generate-pdf",
            ExportFormat::Excel => "generate-excel",
        }
    }

    /// 下载文件的扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "xlsx",
        }
    }

    /// 响应内容的 MIME 类型
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Pdf => write!(f, "PDF"),
            ExportFormat::Excel => write!(f, "Excel"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            other => Err(format!("未知的导出格式: {}", other)),
        }
    }
}

/// 推导下载文件名
///
/// 规则：`{姓名或"Candidate"}_{编号或"Test"}.{扩展名}`，非空字段原样代入；
/// 字段中的路径分隔符会被替换，保证文件只落在输出目录内
pub fn export_file_name(sheet: &AnswerSheet, format: ExportFormat) -> String {
    let candidate = if sheet.candidate_name.is_empty() {
        "Candidate".to_string()
    } else {
        sanitize_component(&sheet.candidate_name)
    };
    let test = if sheet.test_number.is_empty() {
        "Test".to_string()
    } else {
        sanitize_component(&sheet.test_number)
    };
    format!("{}_{}.{}", candidate, test, format.extension())
}

/// 替换字段中的路径分隔符，防止拼出越过输出目录的路径
fn sanitize_component(value: &str) -> String {
    value.replace(['/', '\\'], "_")
}
