//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数
use tracing::{info, warn};

use crate::config::Config;
use crate::workflow::SubmissionOutcome;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 心理健康风险评估提交");
    info!("🌐 评分服务: {}", config.api_url);
    info!("📄 表单文件: {}", config.form_file);
    info!("{}", "=".repeat(60));
}

/// 记录一次提交的结果
pub fn log_outcome(generation: u64, outcome: &SubmissionOutcome) {
    match outcome {
        SubmissionOutcome::Success { category, score } => {
            info!("[提交 {}] ✓ 评估完成: {} ({:.2})", generation, category, score);
        }
        SubmissionOutcome::ValidationFailed { missing } => {
            warn!(
                "[提交 {}] ⚠️ 校验未通过，缺少: {}",
                generation,
                missing.join(", ")
            );
        }
        SubmissionOutcome::RequestFailed => {
            warn!("[提交 {}] ❌ 无法连接评分服务", generation);
        }
        SubmissionOutcome::Superseded { .. } => {
            info!("[提交 {}] 已有更新的提交，丢弃本次结果", generation);
        }
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
