//! 提交流程 - 流程层
//!
//! 采集 → 校验 → 远程评分 → 渲染
//!
//! 每次提交都会递增代数，等待评分期间如果又有新的提交，旧请求的结果直接丢弃

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::clients::Scorer;
use crate::form::{collect_answers, validate_answers, FormSource, Notifier};
use crate::models::RecommendationTable;
use crate::render::{RegionState, RegionView, Renderer, ResultRegion};
use crate::utils::logging::log_outcome;

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// 评分成功并已渲染
    Success { category: String, score: f64 },
    /// 必填字段未填完，没有发出请求
    ValidationFailed { missing: Vec<&'static str> },
    /// 请求失败或响应无法识别
    RequestFailed,
    /// 等待期间有更新的提交，本次结果未渲染
    Superseded { generation: u64 },
}

/// 问卷提交器
///
/// - 独占结果区域
/// - 不持有表单，每次提交时传入
pub struct Submitter {
    scorer: Arc<dyn Scorer>,
    notifier: Arc<dyn Notifier>,
    table: RecommendationTable,
    region: Mutex<ResultRegion>,
    generation: AtomicU64,
}

impl Submitter {
    /// 创建提交器
    pub fn new(
        scorer: Arc<dyn Scorer>,
        notifier: Arc<dyn Notifier>,
        table: RecommendationTable,
    ) -> Self {
        Self {
            scorer,
            notifier,
            table,
            region: Mutex::new(ResultRegion::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// 处理一次表单提交，所有错误都在这里转换为区域状态
    pub async fn submit<F: FormSource + ?Sized>(&self, form: &F) -> SubmissionOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let renderer = Renderer::new(&self.table);

        let answers = collect_answers(form);
        self.reset_if_current(generation).await;

        // ========== 校验 ==========
        let report = validate_answers(&answers, self.notifier.as_ref());
        if !report.all_answered() {
            warn!(
                "[提交 {}] ⚠️ 有 {} 个必填问题未回答，不发送请求",
                generation,
                report.missing.len()
            );
            let outcome = SubmissionOutcome::ValidationFailed {
                missing: report.missing.clone(),
            };
            return self
                .finish(generation, renderer.validation_failed(report.missing), outcome)
                .await;
        }

        // ========== 远程评分 ==========
        if !self.apply_if_current(generation, renderer.loading()).await {
            return SubmissionOutcome::Superseded { generation };
        }
        info!("[提交 {}] 📤 正在请求评分服务...", generation);

        let prediction = match self.scorer.score(&answers).await {
            Ok(prediction) => prediction,
            Err(e) => {
                error!("[提交 {}] Prediction failed: {}", generation, e);
                return self
                    .finish(generation, renderer.request_failed(), SubmissionOutcome::RequestFailed)
                    .await;
            }
        };

        // ========== 渲染 ==========
        match renderer.prediction(&prediction.risk_category, prediction.risk_score_prediction) {
            Ok(view) => {
                let outcome = SubmissionOutcome::Success {
                    category: prediction.risk_category,
                    score: prediction.risk_score_prediction,
                };
                self.finish(generation, view, outcome).await
            }
            Err(e) => {
                error!("[提交 {}] Prediction failed: {}", generation, e);
                self.finish(generation, renderer.request_failed(), SubmissionOutcome::RequestFailed)
                    .await
            }
        }
    }

    /// 当前区域状态
    pub async fn state(&self) -> RegionState {
        self.region.lock().await.state().clone()
    }

    /// 当前区域快照
    pub async fn region(&self) -> ResultRegion {
        self.region.lock().await.clone()
    }

    async fn finish(
        &self,
        generation: u64,
        view: RegionView,
        outcome: SubmissionOutcome,
    ) -> SubmissionOutcome {
        let outcome = if self.apply_if_current(generation, view).await {
            outcome
        } else {
            SubmissionOutcome::Superseded { generation }
        };
        log_outcome(generation, &outcome);
        outcome
    }

    async fn reset_if_current(&self, generation: u64) {
        let mut region = self.region.lock().await;
        if self.is_current(generation) {
            region.reset();
        }
    }

    /// 仅当本次提交仍是最新一次时写入区域
    async fn apply_if_current(&self, generation: u64, view: RegionView) -> bool {
        let mut region = self.region.lock().await;
        if !self.is_current(generation) {
            return false;
        }
        region.apply(view);
        true
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
