//! 答案采集

use tracing::debug;

use crate::form::source::FormSource;
use crate::models::{AnswerSet, FIELD_CATALOG};

/// 读取单个字段的值
///
/// 优先查找同名下拉框；没有下拉框时取单选组中被选中的那个，都没有则为 `None`
pub fn read_field<F: FormSource + ?Sized>(form: &F, id: &str) -> Option<String> {
    if let Some(value) = form.select_value(id) {
        return Some(value);
    }

    form.radio_group(id)
        .into_iter()
        .find(|radio| radio.checked)
        .map(|radio| radio.value)
}

/// 按字段目录采集全部答案，原样保留用户的选择
pub fn collect_answers<F: FormSource + ?Sized>(form: &F) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for field in FIELD_CATALOG.iter() {
        let value = read_field(form, field.id);
        debug!("采集字段 {}: {:?}", field.id, value);
        answers.insert(field, value);
    }
    answers
}
