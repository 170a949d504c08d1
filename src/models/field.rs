//! 问卷字段目录
//!
//! 表单必须提供的 14 个字段，顺序固定，后端按这些名字做特征编码

/// 单个字段定义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// 字段标识（下拉框 id 或单选组 name）
    pub id: &'static str,
    /// 是否可选，可选字段永远不阻止提交
    pub optional: bool,
}

impl FieldSpec {
    const fn mandatory(id: &'static str) -> Self {
        Self {
            id,
            optional: false,
        }
    }

    const fn optional(id: &'static str) -> Self {
        Self { id, optional: true }
    }
}

/// 字段目录，顺序即请求体中键的顺序
pub static FIELD_CATALOG: [FieldSpec; 14] = [
    FieldSpec::mandatory("family_history"),
    FieldSpec::mandatory("Mental_Health_History"),
    FieldSpec::mandatory("Days_Indoors"),
    FieldSpec::mandatory("Mood_Swings"),
    FieldSpec::mandatory("Growing_Stress"),
    FieldSpec::mandatory("Changes_Habits"),
    FieldSpec::mandatory("Coping_Struggles"),
    FieldSpec::mandatory("Social_Weakness"),
    FieldSpec::mandatory("Work_Interest"),
    FieldSpec::mandatory("treatment"),
    FieldSpec::mandatory("care_options"),
    FieldSpec::mandatory("mental_health_interview"),
    // 不参与评分，但后端 one-hot 编码需要
    FieldSpec::optional("Gender"),
    FieldSpec::optional("self_employed"),
];

/// 必填字段迭代器
pub fn mandatory_fields() -> impl Iterator<Item = &'static FieldSpec> {
    FIELD_CATALOG.iter().filter(|f| !f.optional)
}

/// 将字段标识转换为可读名称
pub fn humanize(id: &str) -> String {
    id.replace('_', " ")
}
