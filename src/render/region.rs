//! 结果区域
//!
//! 区域在任意时刻只处于一种状态，每次写入都会整体替换样式和内容

/// 结果区域状态
#[derive(Debug, Clone, PartialEq)]
pub enum RegionState {
    /// 空闲，尚未提交或刚被重置
    Idle,
    /// 已通过校验，正在等待评分服务
    Loading,
    /// 评分成功
    Success { category: String, score: f64 },
    /// 必填字段未填完
    ValidationFailed { missing: Vec<&'static str> },
    /// 网络失败、非成功状态码或无法识别的响应
    RequestFailed,
}

/// 一次完整的区域内容
#[derive(Debug, Clone, PartialEq)]
pub struct RegionView {
    pub state: RegionState,
    pub class_name: String,
    pub html: String,
    pub visible: bool,
    pub scroll_into_view: bool,
}

/// 结果区域
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRegion {
    view: RegionView,
}

impl ResultRegion {
    pub fn new() -> Self {
        Self {
            view: RegionView {
                state: RegionState::Idle,
                class_name: String::new(),
                html: String::new(),
                visible: false,
                scroll_into_view: false,
            },
        }
    }

    /// 清空样式和内容，回到 Idle
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 用新内容整体替换当前内容
    pub fn apply(&mut self, view: RegionView) {
        self.view = view;
    }

    pub fn state(&self) -> &RegionState {
        &self.view.state
    }

    pub fn class_name(&self) -> &str {
        &self.view.class_name
    }

    pub fn html(&self) -> &str {
        &self.view.html
    }

    pub fn is_visible(&self) -> bool {
        self.view.visible
    }

    pub fn scrolled_into_view(&self) -> bool {
        self.view.scroll_into_view
    }

    /// 以 HTML 片段形式输出整个区域
    pub fn to_html(&self) -> String {
        let mut classes = Vec::new();
        if !self.class_name().is_empty() {
            classes.push(self.class_name());
        }
        if self.is_visible() {
            classes.push("show");
        }
        format!(
            "<div id=\"result\" class=\"{}\">{}</div>",
            classes.join(" "),
            self.html()
        )
    }
}

impl Default for ResultRegion {
    fn default() -> Self {
        Self::new()
    }
}
