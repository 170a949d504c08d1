//! 表单数据源
//!
//! 对页面表单的抽象：一个字段要么是下拉框，要么是同名的一组单选按钮

/// 单选按钮
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioInput {
    pub value: String,
    pub checked: bool,
}

impl RadioInput {
    pub fn new(value: impl Into<String>, checked: bool) -> Self {
        Self {
            value: value.into(),
            checked,
        }
    }
}

/// 表单数据源
///
/// 只读，不产生任何副作用
pub trait FormSource {
    /// 以 `id` 为标识的下拉框当前值，没有这个下拉框时返回 `None`
    fn select_value(&self, id: &str) -> Option<String>;

    /// 名为 `name` 的单选按钮组，不存在时返回空列表
    fn radio_group(&self, name: &str) -> Vec<RadioInput>;
}
