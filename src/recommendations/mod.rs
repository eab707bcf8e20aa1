pub mod engine;
pub mod messages;

pub use engine::{category_recommendation_type, recommend, signal_recommendation_type};
pub use messages::{RecommendationTemplates, RecommendationTemplatesI18n};
