//! 必填校验
//!
//! 检查全部字段后再给出结论，每个缺失的必填字段单独提示一次

use std::sync::Mutex;

use tracing::warn;

use crate::models::field::{humanize, mandatory_fields};
use crate::models::AnswerSet;

/// 即时提示（对应页面上的 alert）
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// 把提示写到日志
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        warn!("⚠️ {}", message);
    }
}

/// 只记录提示内容，便于检查
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

/// 校验结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// 未作答的必填字段，按目录顺序
    pub missing: Vec<&'static str>,
}

impl ValidationReport {
    /// 所有必填字段都已作答
    pub fn all_answered(&self) -> bool {
        self.missing.is_empty()
    }
}

/// 缺失字段的提示文案
pub fn missing_field_message(id: &str) -> String {
    format!("Please answer the question regarding: {}", humanize(id))
}

/// 校验答案集合，每个缺失的必填字段触发一次提示
pub fn validate_answers(answers: &AnswerSet, notifier: &dyn Notifier) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in mandatory_fields() {
        if !answers.is_answered(field.id) {
            notifier.alert(&missing_field_message(field.id));
            report.missing.push(field.id);
        }
    }

    report
}
