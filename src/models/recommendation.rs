//! 建议表
//!
//! 风险类别 → 展示样式、建议和应对提示。编译期生成，运行期只读

use phf::phf_map;

/// 单条应对提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopingTip {
    pub label: &'static str,
    pub description: &'static str,
}

/// 某个风险类别对应的展示内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    /// 结果区域的 CSS 类名
    pub display_class: &'static str,
    /// 一句话建议
    pub advice: &'static str,
    /// 有序的应对提示
    pub coping_tips: &'static [CopingTip],
}

const fn tip(label: &'static str, description: &'static str) -> CopingTip {
    CopingTip { label, description }
}

pub const HIGH_RISK: &str = "High Risk";
pub const STABLE_RISK: &str = "Stable (Moderate Risk)";
pub const LOW_RISK: &str = "Low Risk";

static HIGH_RISK_TIPS: [CopingTip; 5] = [
    tip("Seek Professional Help Immediately", "Contact a licensed therapist, counselor, or psychiatrist."),
    tip("Use Crisis Resources", "Reach out to a trusted crisis hotline or emergency service if you feel unsafe or overwhelmed."),
    tip("Establish Safety", "Identify one trusted person you can call and create a small safety plan (e.g., remove immediate stressors or harmful items)."),
    tip("Simplify Routines", "Focus only on essential self-care: eating small meals, drinking water, and aiming for consistent sleep."),
    tip("Limit Demands", "Delegate tasks and reduce immediate stressors (work, social obligations) wherever possible."),
];

static STABLE_RISK_TIPS: [CopingTip; 5] = [
    tip("Establish a Routine", "Maintain a consistent sleep schedule (7-9 hours) and regular mealtimes."),
    tip("Practice Mindfulness", "Incorporate daily meditation, deep breathing exercises, or gentle stretching."),
    tip("Build Social Resilience", "Maintain a balance between social activity and quiet time to prevent burnout."),
    tip("Set Boundaries", "Learn to say 'no' to commitments that deplete your energy."),
    tip("Consider Proactive Support", "Consult a therapist or counselor for preventative mental wellness strategies."),
];

static LOW_RISK_TIPS: [CopingTip; 5] = [
    tip("Prioritize Physical Health", "Maintain a balanced diet and regular, moderate exercise."),
    tip("Nurture Connections", "Maintain strong social connections and actively network with friends and family."),
    tip("Engage in Hobbies", "Regularly participate in hobbies, creative outlets, and activities that bring genuine joy."),
    tip("Continuous Learning", "Learn a new skill or challenge your mind regularly to maintain cognitive flexibility."),
    tip("Reflect and Plan", "Keep a journal or practice gratitude to maintain perspective and emotional balance."),
];

static RECOMMENDATIONS: phf::Map<&'static str, Recommendation> = phf_map! {
    "High Risk" => Recommendation {
        display_class: "result-high",
        advice: "Immediate and professional care is strongly recommended. Your scores indicate significant current stressors or risk factors.",
        coping_tips: &HIGH_RISK_TIPS,
    },
    "Stable (Moderate Risk)" => Recommendation {
        display_class: "result-stable",
        advice: "You are generally stable, but watch for escalating stress. Focus on robust self-care and stress management.",
        coping_tips: &STABLE_RISK_TIPS,
    },
    "Low Risk" => Recommendation {
        display_class: "result-low",
        advice: "Continue your healthy practices. Your mental wellness assessment is currently strong.",
        coping_tips: &LOW_RISK_TIPS,
    },
};

/// 建议表句柄
///
/// 启动时创建一次，以引用方式传给渲染器，不提供任何修改接口
#[derive(Debug, Clone, Copy)]
pub struct RecommendationTable {
    entries: &'static phf::Map<&'static str, Recommendation>,
}

impl RecommendationTable {
    /// 内置的建议表
    pub fn builtin() -> Self {
        Self {
            entries: &RECOMMENDATIONS,
        }
    }

    /// 按风险类别查找
    pub fn get(&self, category: &str) -> Option<&'static Recommendation> {
        self.entries.get(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_three_categories() {
        let table = RecommendationTable::builtin();
        for category in [HIGH_RISK, STABLE_RISK, LOW_RISK] {
            let entry = table.get(category).unwrap();
            assert_eq!(entry.coping_tips.len(), 5, "类别 {} 的提示数量不对", category);
        }
        assert!(table.get("Unknown Risk").is_none());
    }

    #[test]
    fn test_display_classes() {
        let table = RecommendationTable::builtin();
        assert_eq!(table.get(HIGH_RISK).unwrap().display_class, "result-high");
        assert_eq!(table.get(STABLE_RISK).unwrap().display_class, "result-stable");
        assert_eq!(table.get(LOW_RISK).unwrap().display_class, "result-low");
    }

    #[test]
    fn test_low_risk_tip_order() {
        let labels: Vec<&str> = RecommendationTable::builtin()
            .get(LOW_RISK)
            .unwrap()
            .coping_tips
            .iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Prioritize Physical Health",
                "Nurture Connections",
                "Engage in Hobbies",
                "Continuous Learning",
                "Reflect and Plan",
            ]
        );
    }
}
