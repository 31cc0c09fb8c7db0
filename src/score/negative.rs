//! Negative (penalty) points
//!
//! Energy, sugars, saturated fat, and salt each contribute 0-10 points.

use crate::models::{NutritionData, ProductCategory};

use super::thresholds::{
    points_for, ENERGY_BEVERAGE, ENERGY_FOOD, SALT_MG, SATURATED_FAT, SUGARS,
};

/// Per-factor penalty points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativePoints {
    pub energy: u8,
    pub sugars: u8,
    pub saturated_fat: u8,
    pub salt: u8,
}

impl NegativePoints {
    /// Unweighted sum of the four factors, 0-40
    pub fn total(&self) -> u8 {
        self.energy + self.sugars + self.saturated_fat + self.salt
    }
}

/// Compute penalty points for a nutrient record
pub fn negative_points(nutrition: &NutritionData, category: ProductCategory) -> NegativePoints {
    let energy_table = match category {
        ProductCategory::Beverages => ENERGY_BEVERAGE,
        _ => ENERGY_FOOD,
    };
    let energy = points_for(nutrition.energy_kj, energy_table);

    let sugars = points_for(nutrition.sugars_g, SUGARS);

    // Fats and oils are judged on the saturated share of total fat rather
    // than the absolute amount, when total fat is known.
    let saturated_fat = match (category, nutrition.total_fat_g) {
        (ProductCategory::FatsOilsNuts, Some(total_fat)) if total_fat > 0.0 => {
            let ratio = nutrition.saturated_fat_g / total_fat * 100.0;
            points_for(ratio, SATURATED_FAT)
        }
        _ => points_for(nutrition.saturated_fat_g, SATURATED_FAT),
    };

    // Salt table is in milligrams
    let salt = points_for(nutrition.salt_g * 1000.0, SALT_MG);

    NegativePoints {
        energy,
        sugars,
        saturated_fat,
        salt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NutritionData {
        NutritionData::default()
    }

    #[test]
    fn test_beverage_energy_uses_denser_table() {
        let nutrition = NutritionData {
            energy_kj: 100.0,
            ..base()
        };
        let beverage = negative_points(&nutrition, ProductCategory::Beverages);
        let food = negative_points(&nutrition, ProductCategory::GeneralFood);
        assert_eq!(beverage.energy, 4);
        assert_eq!(food.energy, 0);
    }

    #[test]
    fn test_salt_converted_to_milligrams() {
        let nutrition = NutritionData {
            salt_g: 0.5,
            ..base()
        };
        let points = negative_points(&nutrition, ProductCategory::GeneralFood);
        assert_eq!(points.salt, 5); // 500 mg
    }

    #[test]
    fn test_fats_oils_ratio_substitution() {
        let nutrition = NutritionData {
            saturated_fat_g: 5.0,
            total_fat_g: Some(10.0),
            ..base()
        };
        // ratio path: 5/10 = 50% -> open-ended top bin
        let ratio = negative_points(&nutrition, ProductCategory::FatsOilsNuts);
        assert_eq!(ratio.saturated_fat, 10);
        // absolute path for any other category: 5 g -> 4 points
        let absolute = negative_points(&nutrition, ProductCategory::GeneralFood);
        assert_eq!(absolute.saturated_fat, 4);
    }

    #[test]
    fn test_fats_oils_without_total_fat_uses_absolute_value() {
        let nutrition = NutritionData {
            saturated_fat_g: 5.0,
            total_fat_g: None,
            ..base()
        };
        let points = negative_points(&nutrition, ProductCategory::FatsOilsNuts);
        assert_eq!(points.saturated_fat, 4);

        let zero_total = NutritionData {
            saturated_fat_g: 5.0,
            total_fat_g: Some(0.0),
            ..base()
        };
        let points = negative_points(&zero_total, ProductCategory::FatsOilsNuts);
        assert_eq!(points.saturated_fat, 4);
    }

    #[test]
    fn test_total_sums_all_factors() {
        let nutrition = NutritionData {
            energy_kj: 1000.0,
            sugars_g: 5.0,
            saturated_fat_g: 1.0,
            salt_g: 0.5,
            ..base()
        };
        let points = negative_points(&nutrition, ProductCategory::GeneralFood);
        assert_eq!(points.energy, 2);
        assert_eq!(points.sugars, 1);
        assert_eq!(points.saturated_fat, 1);
        assert_eq!(points.salt, 5);
        assert_eq!(points.total(), 9);
    }

    #[test]
    fn test_worst_case_caps_at_forty() {
        let nutrition = NutritionData {
            energy_kj: 5000.0,
            sugars_g: 80.0,
            saturated_fat_g: 30.0,
            salt_g: 4.0,
            ..base()
        };
        let points = negative_points(&nutrition, ProductCategory::GeneralFood);
        assert_eq!(points.total(), 40);
    }
}
