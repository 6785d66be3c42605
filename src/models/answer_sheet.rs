//! 答题卡数据模型
//!
//! 对应雅思听力测试的一张答题卡：考生信息 + 40 道题的答案

use serde::{Deserialize, Serialize};

/// 听力测试固定的题目数量
pub const ANSWER_COUNT: usize = 40;

/// 答题卡（表单状态）
///
/// 序列化后与文档生成服务约定的请求体一致：
/// `{candidateName, testNumber, testDate, answers}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSheet {
    /// 考生姓名
    pub candidate_name: String,
    /// 试卷编号
    pub test_number: String,
    /// 考试日期（ISO 格式，如 2026-08-27）
    pub test_date: String,
    /// 40 道题的答案，按题号顺序排列
    pub answers: Vec<String>,
}

impl AnswerSheet {
    /// 创建一张全空的答题卡
    pub fn new() -> Self {
        Self {
            candidate_name: String::new(),
            test_number: String::new(),
            test_date: String::new(),
            answers: vec![String::new(); ANSWER_COUNT],
        }
    }

    /// 设置考生姓名（任意字符串均可，包括空串）
    pub fn set_candidate_name(&mut self, value: impl Into<String>) {
        self.candidate_name = value.into();
    }

    /// 设置试卷编号
    pub fn set_test_number(&mut self, value: impl Into<String>) {
        self.test_number = value.into();
    }

    /// 设置考试日期
    pub fn set_test_date(&mut self, value: impl Into<String>) {
        self.test_date = value.into();
    }

    /// 设置第 `index` 题的答案（index 从 0 开始）
    ///
    /// 越界属于编程错误：命令层在调用前已校验用户输入的题号
    pub fn set_answer(&mut self, index: usize, value: impl Into<String>) {
        assert!(
            index < ANSWER_COUNT,
            "答案序号越界: {} (应在 0..{} 之间)",
            index,
            ANSWER_COUNT
        );
        self.answers[index] = value.into();
    }

    /// 重置为初始状态（所有字段清空）
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 已填写的答案数量（用于 show 命令展示）
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| !a.is_empty()).count()
    }
}

impl Default for AnswerSheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sheet_has_forty_empty_answers() {
        let sheet = AnswerSheet::new();
        assert_eq!(sheet.answers.len(), ANSWER_COUNT);
        assert!(sheet.answers.iter().all(|a| a.is_empty()));
        assert!(sheet.candidate_name.is_empty());
    }

    #[test]
    fn set_answer_only_changes_target_index() {
        let mut sheet = AnswerSheet::new();
        sheet.set_answer(0, "library");
        sheet.set_answer(39, "9.30 am");
        sheet.set_answer(0, "museum");

        assert_eq!(sheet.answers.len(), ANSWER_COUNT);
        assert_eq!(sheet.answers[0], "museum");
        assert_eq!(sheet.answers[39], "9.30 am");
        assert!(sheet.answers[1..39].iter().all(|a| a.is_empty()));
    }

    #[test]
    #[should_panic(expected = "答案序号越界")]
    fn set_answer_out_of_range_panics() {
        let mut sheet = AnswerSheet::new();
        sheet.set_answer(ANSWER_COUNT, "x");
    }

    #[test]
    fn reset_is_idempotent() {
        let mut sheet = AnswerSheet::new();
        sheet.set_candidate_name("Jane Doe");
        sheet.set_test_number("IELTS-01");
        sheet.set_test_date("2026-08-27");
        sheet.set_answer(5, "42");

        sheet.reset();
        assert_eq!(sheet, AnswerSheet::new());

        // 再次重置结果不变
        sheet.reset();
        assert_eq!(sheet, AnswerSheet::new());
    }

    #[test]
    fn serializes_to_camel_case_wire_shape() {
        let mut sheet = AnswerSheet::new();
        sheet.set_candidate_name("Jane Doe");
        sheet.set_test_number("IELTS-01");
        sheet.set_test_date("2026-08-27");

        let value = serde_json::to_value(&sheet).unwrap();
        assert_eq!(value["candidateName"], "Jane Doe");
        assert_eq!(value["testNumber"], "IELTS-01");
        assert_eq!(value["testDate"], "2026-08-27");
        assert_eq!(value["answers"].as_array().unwrap().len(), ANSWER_COUNT);
    }

    #[test]
    fn answered_count_ignores_empty_entries() {
        let mut sheet = AnswerSheet::new();
        assert_eq!(sheet.answered_count(), 0);
        sheet.set_answer(0, "a");
        sheet.set_answer(10, "b");
        assert_eq!(sheet.answered_count(), 2);
    }
}
