//! 答案集合
//!
//! 每次提交重新采集，不做持久化

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::field::FieldSpec;

/// 一次提交采集到的全部答案
///
/// 保持字段目录顺序，序列化为 JSON 对象时未作答的字段为 `null`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<(&'static str, Option<String>)>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录字段的值，同一字段重复写入时覆盖旧值
    pub fn insert(&mut self, field: &FieldSpec, value: Option<String>) {
        match self.entries.iter_mut().find(|(id, _)| *id == field.id) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field.id, value)),
        }
    }

    /// 读取字段的值
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .and_then(|(_, value)| value.as_deref())
    }

    /// 字段是否已作答（非空）
    pub fn is_answered(&self, id: &str) -> bool {
        self.get(id).is_some_and(|v| !v.is_empty())
    }

    /// 转换为请求体 JSON
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(id, v)| {
                    let value = match v {
                        Some(s) => serde_json::Value::String(s.clone()),
                        None => serde_json::Value::Null,
                    };
                    (id.to_string(), value)
                })
                .collect(),
        )
    }
}

impl Serialize for AnswerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, value) in &self.entries {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}
