//! Nutritional quality scoring engine
//!
//! Converts raw per-100g/100ml nutrient measurements into a standardized
//! letter grade (A-E) and numeric score. Three functions form the
//! boundary: [`normalize`] adapts a raw product document into a
//! [`NutritionData`] record, [`classify`] picks the [`ProductCategory`]
//! that selects the threshold tables, and [`score`] produces the
//! [`NutriScoreResult`]. All of it is pure synchronous computation; the
//! surrounding lookup/UI layers live elsewhere.

pub mod classify;
pub mod error;
pub mod models;
pub mod normalize;
pub mod score;

pub use classify::classify;
pub use error::{ScoreError, ScoreResult};
pub use models::{Grade, NutriScoreResult, NutritionData, PointsBreakdown, ProductCategory};
pub use normalize::normalize;
pub use score::score;
