//! 从 TOML 文件加载的表单快照
//!
//! ```toml
//! [select]
//! Days_Indoors = "1-14 days"
//! Gender = ""
//!
//! [radio.family_history]
//! options = ["Yes", "No"]
//! checked = "Yes"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tokio::fs;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::form::source::{FormSource, RadioInput};

/// 单选按钮组
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RadioGroup {
    /// 组内所有按钮的值，按页面顺序
    #[serde(default)]
    pub options: Vec<String>,
    /// 当前选中的值，未选中时缺省
    #[serde(default)]
    pub checked: Option<String>,
}

/// 表单快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormSnapshot {
    /// 下拉框：id → 当前值
    #[serde(default)]
    pub select: HashMap<String, String>,
    /// 单选组：name → 按钮组
    #[serde(default)]
    pub radio: HashMap<String, RadioGroup>,
}

impl FormSnapshot {
    /// 从 TOML 文本解析
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
impl FormSnapshot {
    /// 添加或替换一个下拉框
    pub fn with_select(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.select.insert(id.into(), value.into());
        self
    }

    /// 添加或替换一个单选组
    pub fn with_radio(
        mut self,
        name: impl Into<String>,
        options: &[&str],
        checked: Option<&str>,
    ) -> Self {
        self.radio.insert(
            name.into(),
            RadioGroup {
                options: options.iter().map(|s| s.to_string()).collect(),
                checked: checked.map(str::to_string),
            },
        );
        self
    }
}

impl FormSource for FormSnapshot {
    fn select_value(&self, id: &str) -> Option<String> {
        self.select.get(id).cloned()
    }

    fn radio_group(&self, name: &str) -> Vec<RadioInput> {
        match self.radio.get(name) {
            Some(group) => group
                .options
                .iter()
                .map(|value| RadioInput::new(value.clone(), group.checked.as_ref() == Some(value)))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// 从 TOML 文件加载表单快照
pub async fn load_form_snapshot(path: &Path) -> AppResult<FormSnapshot> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;

    let snapshot =
        FormSnapshot::from_toml_str(&content).map_err(|e| AppError::toml_parse_failed(&path_str, e))?;

    debug!(
        "已加载表单快照 {}: {} 个下拉框, {} 个单选组",
        path_str,
        snapshot.select.len(),
        snapshot.radio.len()
    );

    Ok(snapshot)
}
