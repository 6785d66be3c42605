//! 答题卡表单控制器
//!
//! 单一的交互式表单：读取终端命令，维护答题卡状态，触发导出任务

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::BusinessError;
use crate::models::{AnswerSheet, ExportFormat, ANSWER_COUNT};
use crate::services::ExportService;

/// 应用主结构
pub struct App {
    sheet: AnswerSheet,
    service: Arc<ExportService>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        Ok(Self {
            sheet: AnswerSheet::new(),
            service: Arc::new(ExportService::new(&config)),
        })
    }

    /// 运行交互式命令循环
    pub async fn run(mut self) -> Result<()> {
        print_help();

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_command(line) {
                Ok(command) => {
                    if !self.dispatch(command) {
                        break;
                    }
                }
                Err(msg) => warn!("⚠️ {}", msg),
            }
        }

        info!("👋 会话结束");
        Ok(())
    }

    /// 执行单条命令，返回是否继续运行
    fn dispatch(&mut self, command: Command) -> bool {
        match command {
            Command::SetName(value) => self.sheet.set_candidate_name(value),
            Command::SetNumber(value) => self.sheet.set_test_number(value),
            Command::SetDate(value) => {
                let value = if value == "today" {
                    chrono::Local::now().format("%Y-%m-%d").to_string()
                } else {
                    value
                };
                self.sheet.set_test_date(value);
            }
            Command::SetAnswer { index, value } => self.sheet.set_answer(index, value),
            Command::Export(format) => self.spawn_export(format),
            Command::Show => self.show(),
            Command::Reset => {
                self.sheet.reset();
                info!("🧹 表单已重置");
            }
            Command::Help => print_help(),
            Command::Quit => return false,
        }
        true
    }

    /// 以独立任务发起导出
    ///
    /// 任务持有答题卡的快照，发出后的编辑不影响本次请求；
    /// 导出失败只记录日志，表单状态不变，会话继续
    fn spawn_export(&self, format: ExportFormat) {
        let service = Arc::clone(&self.service);
        let snapshot = self.sheet.clone();

        info!("📤 开始导出 {} ...", format);

        tokio::spawn(async move {
            match service.export(&snapshot, format).await {
                Ok(path) => info!("✅ {} 已保存: {}", format, path.display()),
                Err(e) => error!("❌ {} 导出失败: {}", format, e),
            }
        });
    }

    /// 展示当前答题卡概况
    fn show(&self) {
        println!("┌──────────────────────────────────────");
        println!("│ 考生姓名: {}", self.sheet.candidate_name);
        println!("│ 试卷编号: {}", self.sheet.test_number);
        println!("│ 考试日期: {}", self.sheet.test_date);
        println!(
            "│ 已填写答案: {}/{}",
            self.sheet.answered_count(),
            ANSWER_COUNT
        );
        for (i, answer) in self.sheet.answers.iter().enumerate() {
            if !answer.is_empty() {
                println!("│   {:>2}. {}", i + 1, answer);
            }
        }
        println!("└──────────────────────────────────────");
    }
}

/// 表单命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetName(String),
    SetNumber(String),
    SetDate(String),
    SetAnswer { index: usize, value: String },
    Export(ExportFormat),
    Show,
    Reset,
    Help,
    Quit,
}

/// 解析一行终端输入
///
/// 题号按答题卡习惯从 1 开始，内部转为从 0 开始的下标
pub fn parse_command(input: &str) -> Result<Command, String> {
    let (keyword, rest) = match input.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (input, ""),
    };

    match keyword {
        "name" => Ok(Command::SetName(rest.to_string())),
        "number" => Ok(Command::SetNumber(rest.to_string())),
        "date" => Ok(Command::SetDate(rest.to_string())),
        "answer" => {
            let (num, value) = match rest.split_once(char::is_whitespace) {
                Some((n, v)) => (n, v.trim()),
                None => (rest, ""),
            };
            let number: usize = num
                .parse()
                .map_err(|_| format!("无效的题号: {}", num))?;
            if number < 1 || number > ANSWER_COUNT {
                return Err(BusinessError::AnswerIndexOutOfRange {
                    index: number,
                    max: ANSWER_COUNT,
                }
                .to_string());
            }
            Ok(Command::SetAnswer {
                index: number - 1,
                value: value.to_string(),
            })
        }
        "export" => {
            let format = ExportFormat::from_str(rest)?;
            Ok(Command::Export(format))
        }
        "show" => Ok(Command::Show),
        "reset" => Ok(Command::Reset),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("未知命令: {} (输入 help 查看帮助)", other)),
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🎧 雅思听力答题卡导出工具");
    info!("📡 文档生成服务: {}", config.api_base_url);
    info!("📁 导出目录: {}", config.output_dir);
    info!("{}", "=".repeat(60));
}

fn print_help() {
    println!("可用命令:");
    println!("  name <姓名>          设置考生姓名");
    println!("  number <编号>        设置试卷编号");
    println!("  date <YYYY-MM-DD>    设置考试日期 (date today 填入今天)");
    println!("  answer <题号> <答案>  填写第 1-{} 题的答案", ANSWER_COUNT);
    println!("  export pdf|excel     导出为 PDF 或 Excel");
    println!("  show                 查看当前答题卡");
    println!("  reset                清空表单");
    println!("  help                 显示本帮助");
    println!("  quit                 退出");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_commands() {
        assert_eq!(
            parse_command("name Jane Doe").unwrap(),
            Command::SetName("Jane Doe".to_string())
        );
        assert_eq!(
            parse_command("number IELTS-01").unwrap(),
            Command::SetNumber("IELTS-01".to_string())
        );
        assert_eq!(
            parse_command("date 2026-08-27").unwrap(),
            Command::SetDate("2026-08-27".to_string())
        );
    }

    #[test]
    fn empty_field_value_is_accepted() {
        // 空字符串也是合法取值，等同于清空该字段
        assert_eq!(parse_command("name").unwrap(), Command::SetName(String::new()));
    }

    #[test]
    fn answer_command_converts_to_zero_based_index() {
        assert_eq!(
            parse_command("answer 1 library").unwrap(),
            Command::SetAnswer {
                index: 0,
                value: "library".to_string()
            }
        );
        assert_eq!(
            parse_command("answer 40 9.30 am").unwrap(),
            Command::SetAnswer {
                index: 39,
                value: "9.30 am".to_string()
            }
        );
    }

    #[test]
    fn out_of_range_answer_number_is_rejected() {
        assert!(parse_command("answer 0 x").is_err());
        assert!(parse_command("answer 41 x").is_err());
        assert!(parse_command("answer abc x").is_err());
    }

    #[test]
    fn parses_export_and_session_commands() {
        assert_eq!(
            parse_command("export pdf").unwrap(),
            Command::Export(ExportFormat::Pdf)
        );
        assert_eq!(
            parse_command("export excel").unwrap(),
            Command::Export(ExportFormat::Excel)
        );
        assert_eq!(parse_command("show").unwrap(), Command::Show);
        assert_eq!(parse_command("reset").unwrap(), Command::Reset);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(parse_command("upload").is_err());
        assert!(parse_command("export word").is_err());
    }
}
