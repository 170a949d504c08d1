pub mod answer;
pub mod field;
pub mod prediction;
pub mod recommendation;

pub use answer::AnswerSet;
pub use field::{FieldSpec, FIELD_CATALOG};
pub use prediction::PredictionResponse;
pub use recommendation::{CopingTip, Recommendation, RecommendationTable};
