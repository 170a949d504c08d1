//! 结果渲染
//!
//! 把每种状态转换成结果区域的样式和 HTML

use crate::error::RenderError;
use crate::models::RecommendationTable;
use crate::render::region::{RegionState, RegionView};

pub const LOADING_HTML: &str = "<h2>Loading Assessment...</h2>";

pub const INCOMPLETE_HTML: &str = "<p style='font-weight: bold;'>Please answer all mandatory questions before calculating the assessment.</p>";

pub const CONNECTION_ERROR_HTML: &str = "<p style='font-weight: bold;'>Error: Could not connect to the assessment server.</p><p>Please ensure the backend API is running correctly.</p>";

/// 错误状态共用的样式
pub const ERROR_CLASS: &str = "result-high";

/// 渲染器，持有建议表的引用
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    table: &'a RecommendationTable,
}

impl<'a> Renderer<'a> {
    pub fn new(table: &'a RecommendationTable) -> Self {
        Self { table }
    }

    /// 等待评分时的过渡状态
    pub fn loading(&self) -> RegionView {
        RegionView {
            state: RegionState::Loading,
            class_name: String::new(),
            html: LOADING_HTML.to_string(),
            visible: false,
            scroll_into_view: false,
        }
    }

    /// 必填字段未填完
    pub fn validation_failed(&self, missing: Vec<&'static str>) -> RegionView {
        RegionView {
            state: RegionState::ValidationFailed { missing },
            class_name: ERROR_CLASS.to_string(),
            html: INCOMPLETE_HTML.to_string(),
            visible: true,
            scroll_into_view: false,
        }
    }

    /// 无法连接评分服务（具体原因只写日志）
    pub fn request_failed(&self) -> RegionView {
        RegionView {
            state: RegionState::RequestFailed,
            class_name: ERROR_CLASS.to_string(),
            html: CONNECTION_ERROR_HTML.to_string(),
            visible: true,
            scroll_into_view: false,
        }
    }

    /// 评分成功，类别不在建议表中时返回错误
    pub fn prediction(&self, category: &str, score: f64) -> Result<RegionView, RenderError> {
        let rec = self
            .table
            .get(category)
            .ok_or_else(|| RenderError::UnknownCategory {
                category: category.to_string(),
            })?;

        let tips_html: String = rec
            .coping_tips
            .iter()
            .map(|tip| format!("<li>{}:{}</li>", tip.label, tip.description))
            .collect();

        let html = format!(
            concat!(
                "<p class=\"result-category\">{category}</p>",
                "<p class=\"result-score\">Model Prediction Score: <strong>{score}</strong></p>",
                "<h3 style=\"margin-top: 25px;\">Coping and Recommendations</h3>",
                "<p style=\"margin-top: 10px; font-style: italic; font-weight: 500;\">{advice}</p>",
                "<ul class=\"result-list\">{tips}</ul>",
            ),
            category = category,
            score = format_score(score),
            advice = rec.advice,
            tips = tips_html,
        );

        Ok(RegionView {
            state: RegionState::Success {
                category: category.to_string(),
                score,
            },
            class_name: rec.display_class.to_string(),
            html,
            visible: true,
            scroll_into_view: true,
        })
    }
}

/// 分数保留两位小数，与页面端 `toFixed(2)` 的输出一致
///
/// 恰好落在中点时取绝对值较大的一侧，`-0` 输出为 `0.00`
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        return "NaN".to_string();
    }
    if score.is_infinite() {
        return if score > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if score == 0.0 {
        return "0.00".to_string();
    }

    // 第三位小数恰好是 5 的二进制小数只有 k/8（k 为奇数）
    let eighths = score * 8.0;
    if eighths.fract() == 0.0 && (eighths % 2.0).abs() == 1.0 {
        return format!("{:.2}", (score * 100.0).round() / 100.0);
    }

    format!("{:.2}", score)
}
