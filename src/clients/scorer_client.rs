//! 评分服务客户端
//!
//! 把答案集合以 JSON 形式 POST 到评分服务，解析返回的风险类别和分数
use async_trait::async_trait;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{AnswerSet, PredictionResponse};
use crate::utils::logging::truncate_text;

/// 远程评分能力
#[async_trait]
pub trait Scorer: Send + Sync {
    /// 提交一次答案并等待结果
    ///
    /// 非 2xx 状态码、网络失败、响应体格式不对都返回错误
    async fn score(&self, answers: &AnswerSet) -> AppResult<PredictionResponse>;
}

/// 基于 reqwest 的评分客户端
pub struct ScorerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ScorerClient {
    /// 创建新的评分客户端
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config.api_url.clone())
    }

    /// 使用自定义地址创建
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Scorer for ScorerClient {
    async fn score(&self, answers: &AnswerSet) -> AppResult<PredictionResponse> {
        debug!("正在调用评分服务: {}", self.endpoint);
        debug!("请求体: {}", answers.to_json());

        // .json() 会设置 Content-Type: application/json
        let response = self
            .http
            .post(&self.endpoint)
            .json(answers)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&self.endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::bad_status(&self.endpoint, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::api_request_failed(&self.endpoint, e))?;

        let prediction: PredictionResponse = serde_json::from_slice(&body).map_err(|e| {
            debug!(
                "评分结果响应内容: {}",
                truncate_text(&String::from_utf8_lossy(&body), 200)
            );
            AppError::json_parse_failed(&self.endpoint, e)
        })?;

        debug!(
            "评分服务调用成功: {} ({})",
            prediction.risk_category, prediction.risk_score_prediction
        );

        Ok(prediction)
    }
}
