//! Positive (credit) points
//!
//! Fiber, protein, and fruit/vegetable/legume content each contribute
//! 0-5 points. Protein is special-cased twice: red meat is capped at 2
//! points, and products that already collected 11 or more penalty points
//! without substantial produce content get no protein credit at all.

use crate::models::{NutritionData, ProductCategory};

use super::thresholds::{points_for, FIBER, FRUITS_VEG_LEGUMES, PROTEIN};

/// Protein credit ceiling for red meat
const RED_MEAT_PROTEIN_CAP: u8 = 2;

/// Penalty total at which protein credit is cancelled
const PROTEIN_CANCEL_THRESHOLD: u8 = 11;

/// Per-factor credit points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositivePoints {
    pub fiber: u8,
    pub protein: u8,
    pub fruits_veg_legumes: u8,
}

impl PositivePoints {
    /// Sum of the three factors, 0-15
    pub fn total(&self) -> u8 {
        self.fiber + self.protein + self.fruits_veg_legumes
    }
}

/// Compute credit points for a nutrient record.
///
/// `negative_total` is the penalty total already computed for the same
/// record; the cancellation rule reads it. Ordering is fixed: table
/// lookup, then the red-meat cap, then cancellation.
pub fn positive_points(
    nutrition: &NutritionData,
    category: ProductCategory,
    negative_total: u8,
) -> PositivePoints {
    let fiber = points_for(nutrition.fiber_g, FIBER);

    let mut protein = points_for(nutrition.protein_g, PROTEIN);
    if category == ProductCategory::RedMeat {
        protein = protein.min(RED_MEAT_PROTEIN_CAP);
    }

    let fruits_veg_legumes = points_for(
        nutrition.fruits_vegetables_legumes_percent,
        FRUITS_VEG_LEGUMES,
    );

    // High-penalty products cannot buy their score back with protein
    // unless they are mostly produce.
    if negative_total >= PROTEIN_CANCEL_THRESHOLD && fruits_veg_legumes < 5 {
        protein = 0;
    }

    PositivePoints {
        fiber,
        protein,
        fruits_veg_legumes,
    }
}
