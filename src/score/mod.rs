//! Nutritional quality scoring
//!
//! Converts a canonical nutrient record and a product category into a
//! letter grade with a full per-factor point breakdown. Pure synchronous
//! computation over read-only constant tables; safe to call from any
//! number of threads.

mod grade;
mod negative;
mod positive;
pub mod thresholds;

pub use grade::resolve_grade;
pub use negative::{negative_points, NegativePoints};
pub use positive::{positive_points, PositivePoints};

use crate::error::ScoreResult;
use crate::models::{NutriScoreResult, NutritionData, PointsBreakdown, ProductCategory};

/// Score a nutrient record.
///
/// Rejects records with negative fields; callers feeding the engine from
/// `normalize` never hit that path since normalization sanitizes input.
pub fn score(
    nutrition: &NutritionData,
    category: ProductCategory,
) -> ScoreResult<NutriScoreResult> {
    nutrition.validate()?;

    let negative = negative_points(nutrition, category);
    let positive = positive_points(nutrition, category, negative.total());

    let negative_total = negative.total();
    let positive_total = positive.total();
    let score = i32::from(negative_total) - i32::from(positive_total);
    let grade = resolve_grade(score, category);

    Ok(NutriScoreResult {
        grade,
        score,
        negative_points: negative_total,
        positive_points: positive_total,
        category,
        breakdown: PointsBreakdown {
            energy: negative.energy,
            sugars: negative.sugars,
            saturated_fat: negative.saturated_fat,
            salt: negative.salt,
            fiber: positive.fiber,
            protein: positive.protein,
            fruits_veg_legumes: positive.fruits_veg_legumes,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;

    fn plain_biscuit() -> NutritionData {
        NutritionData {
            energy_kj: 1000.0,
            sugars_g: 5.0,
            saturated_fat_g: 1.0,
            salt_g: 0.5,
            fiber_g: 3.0,
            protein_g: 7.0,
            fruits_vegetables_legumes_percent: 0.0,
            total_fat_g: None,
        }
    }

    #[test]
    fn test_general_food_scenario() {
        let result = score(&plain_biscuit(), ProductCategory::GeneralFood).unwrap();

        assert_eq!(result.breakdown.energy, 2);
        assert_eq!(result.breakdown.sugars, 1);
        assert_eq!(result.breakdown.saturated_fat, 1);
        assert_eq!(result.breakdown.salt, 5);
        assert_eq!(result.negative_points, 9);

        // 9 penalty points is under the cancellation threshold, so the
        // protein credit survives
        assert_eq!(result.breakdown.fiber, 3);
        assert_eq!(result.breakdown.protein, 4);
        assert_eq!(result.breakdown.fruits_veg_legumes, 0);
        assert_eq!(result.positive_points, 7);

        assert_eq!(result.score, 2);
        assert_eq!(result.grade, Grade::B);
        assert_eq!(result.category, ProductCategory::GeneralFood);
    }

    #[test]
    fn test_high_penalty_scenario_cancels_protein() {
        // push salt up so the penalty total crosses 11
        let nutrition = NutritionData {
            salt_g: 0.75, // 750 mg -> 8 points
            ..plain_biscuit()
        };
        let result = score(&nutrition, ProductCategory::GeneralFood).unwrap();

        assert_eq!(result.negative_points, 12);
        assert_eq!(result.breakdown.protein, 0);
        assert_eq!(result.positive_points, 3);
        assert_eq!(result.score, 9);
        assert_eq!(result.grade, Grade::C);
    }

    #[test]
    fn test_score_may_be_negative() {
        let nutrition = NutritionData {
            fiber_g: 6.0,
            protein_g: 9.0,
            fruits_vegetables_legumes_percent: 90.0,
            ..NutritionData::default()
        };
        let result = score(&nutrition, ProductCategory::GeneralFood).unwrap();
        assert_eq!(result.negative_points, 0);
        assert_eq!(result.positive_points, 15);
        assert_eq!(result.score, -15);
        assert_eq!(result.grade, Grade::A);
    }

    #[test]
    fn test_beverage_grades_harsher_than_food() {
        let nutrition = NutritionData {
            energy_kj: 180.0, // cola-strength
            sugars_g: 10.6,
            ..NutritionData::default()
        };
        let result = score(&nutrition, ProductCategory::Beverages).unwrap();
        assert_eq!(result.breakdown.energy, 7);
        assert_eq!(result.breakdown.sugars, 2);
        assert_eq!(result.score, 9);
        assert_eq!(result.grade, Grade::C);

        // the identical record as a solid food grades B
        let as_food = score(&nutrition, ProductCategory::GeneralFood).unwrap();
        assert_eq!(as_food.breakdown.energy, 0);
        assert_eq!(as_food.score, 2);
        assert_eq!(as_food.grade, Grade::B);
    }

    #[test]
    fn test_pipeline_from_raw_payload() {
        let raw = serde_json::json!({
            "product_name": "Sparkling Lemon Soda",
            "categories_tags": ["en:carbonated-drinks"],
            "nutriments": {
                "energy-kj_100g": 180.0,
                "sugars_100g": 10.6
            }
        });
        let nutrition = crate::normalize::normalize(&raw);
        let category = crate::classify::classify("Sparkling Lemon Soda", &raw);
        assert_eq!(category, ProductCategory::Beverages);

        let result = score(&nutrition, category).unwrap();
        assert_eq!(result.negative_points, 9);
        assert_eq!(result.grade, Grade::C);
    }

    #[test]
    fn test_determinism() {
        let nutrition = plain_biscuit();
        let first = score(&nutrition, ProductCategory::Cheese).unwrap();
        for _ in 0..10 {
            assert_eq!(score(&nutrition, ProductCategory::Cheese).unwrap(), first);
        }
    }

    #[test]
    fn test_negative_input_rejected() {
        let nutrition = NutritionData {
            energy_kj: -1.0,
            ..NutritionData::default()
        };
        assert!(score(&nutrition, ProductCategory::GeneralFood).is_err());
    }
}
