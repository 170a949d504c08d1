use crate::error::{AppResult, ConfigError};

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 评分服务地址
    pub api_url: String,
    /// 表单快照 TOML 文件
    pub form_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://mental-model.onrender.com/predict".to_string(),
            form_file: "forms/sample_assessment.toml".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量读取配置，未设置的项使用默认值
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 通过任意查找函数构造配置
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let default = Self::default();

        let api_url = lookup("ASSESSMENT_API_URL").unwrap_or(default.api_url);
        if api_url.trim().is_empty() {
            return Err(ConfigError::Missing {
                name: "ASSESSMENT_API_URL".to_string(),
            }
            .into());
        }

        let verbose_logging = match lookup("VERBOSE_LOGGING") {
            Some(value) => value.parse().map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: "VERBOSE_LOGGING".to_string(),
                value: value.clone(),
                expected_type: "bool".to_string(),
            })?,
            None => default.verbose_logging,
        };

        Ok(Self {
            api_url,
            form_file: lookup("FORM_FILE").unwrap_or(default.form_file),
            verbose_logging,
        })
    }

    /// 用命令行参数覆盖表单文件路径
    pub fn with_form_file(mut self, form_file: Option<String>) -> Self {
        if let Some(path) = form_file {
            self.form_file = path;
        }
        self
    }
}
