//! Data models
//!
//! Input record, category, and result types for the scoring engine.

mod category;
mod nutrition;
mod result;

pub use category::ProductCategory;
pub use nutrition::NutritionData;
pub use result::{Grade, NutriScoreResult, PointsBreakdown};
