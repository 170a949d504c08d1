//! # Assessment Submit
//!
//! 心理健康风险评估问卷的提交客户端
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 字段目录、答案集合、预测结果、建议表
//!
//! ### ② 能力层（Form / Clients / Render）
//! - `form/` - 从表单采集答案并做必填校验
//! - `clients/` - 调用远程评分服务
//! - `render/` - 把结果写入结果区域
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 一次提交的完整流程（采集 → 校验 → 评分 → 渲染）
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod form;
pub mod logger;
pub mod models;
pub mod render;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{Scorer, ScorerClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use form::{FormSnapshot, FormSource};
pub use models::{AnswerSet, PredictionResponse, RecommendationTable};
pub use render::{RegionState, ResultRegion};
pub use workflow::{SubmissionOutcome, Submitter};
