use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::clients::ScorerClient;
use crate::config::Config;
use crate::form::{load_form_snapshot, ConsoleNotifier};
use crate::models::RecommendationTable;
use crate::utils::logging::log_startup;
use crate::workflow::{SubmissionOutcome, Submitter};

/// 应用主结构
pub struct App {
    config: Config,
    submitter: Submitter,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);

        let submitter = Submitter::new(
            Arc::new(ScorerClient::new(&config)),
            Arc::new(ConsoleNotifier),
            RecommendationTable::builtin(),
        );

        Self { config, submitter }
    }

    /// 读取表单快照并提交一次，输出结果区域
    pub async fn run(&self) -> Result<SubmissionOutcome> {
        info!("\n📁 正在读取表单: {}", self.config.form_file);
        let form = load_form_snapshot(Path::new(&self.config.form_file))
            .await
            .with_context(|| format!("无法加载表单: {}", self.config.form_file))?;

        let outcome = self.submitter.submit(&form).await;

        let region = self.submitter.region().await;
        if region.scrolled_into_view() {
            debug!("结果区域已滚动到可见位置");
        }
        println!("{}", region.to_html());

        Ok(outcome)
    }
}
