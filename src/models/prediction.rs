use serde::{Deserialize, Serialize};

/// 评分服务返回的预测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// 风险类别，例如 "High Risk"
    pub risk_category: String,
    /// 模型给出的数值分数
    pub risk_score_prediction: f64,
}
