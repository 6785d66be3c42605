//! # IELTS Answer Export
//!
//! 一个用于记录雅思听力答题卡并导出 PDF / Excel 文档的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用简单的四层结构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 答题卡状态与导出格式定义
//! - `AnswerSheet` - 表单状态（考生信息 + 40 道题答案）
//! - `ExportFormat` - PDF / Excel 格式及文件名推导
//!
//! ### ② 客户端层（Clients）
//! - `clients/` - 对外部文档生成服务的薄封装
//! - `ExportClient` - POST 答题卡 JSON，取回二进制文档
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单次导出
//! - `ExportService` - 请求生成 → 推导文件名 → 落盘，并持有进行中标记
//!
//! ### ④ 应用层（App）
//! - `app.rs` - 唯一的表单控制器：命令循环 + 导出任务派发
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;

// 重新导出常用类型
pub use app::{parse_command, App, Command};
pub use clients::ExportClient;
pub use config::Config;
pub use error::{ApiError, AppError, BusinessError, FileError};
pub use models::{export_file_name, AnswerSheet, ExportFormat, ANSWER_COUNT};
pub use services::ExportService;
