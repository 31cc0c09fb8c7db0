//! Canonical nutrient record
//!
//! All values are measured per 100 g (solids) or 100 ml (liquids). The
//! engine never rescales for serving size.

use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, ScoreResult};

/// Nutrient measurements per 100 g / 100 ml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionData {
    pub energy_kj: f64,
    pub sugars_g: f64,
    pub saturated_fat_g: f64,
    pub salt_g: f64,        // grams, not milligrams
    pub fiber_g: f64,
    pub protein_g: f64,
    /// Estimated fruit/vegetable/legume content, 0-100
    pub fruits_vegetables_legumes_percent: f64,
    /// Total fat, only consulted for the fats/oils/nuts ratio rule
    #[serde(default)]
    pub total_fat_g: Option<f64>,
}

impl NutritionData {
    /// Check the non-negative invariant, naming the first offending field
    pub fn validate(&self) -> ScoreResult<()> {
        let fields = [
            ("energy_kj", self.energy_kj),
            ("sugars_g", self.sugars_g),
            ("saturated_fat_g", self.saturated_fat_g),
            ("salt_g", self.salt_g),
            ("fiber_g", self.fiber_g),
            ("protein_g", self.protein_g),
            (
                "fruits_vegetables_legumes_percent",
                self.fruits_vegetables_legumes_percent,
            ),
            ("total_fat_g", self.total_fat_g.unwrap_or(0.0)),
        ];

        for (field, value) in fields {
            if value < 0.0 {
                return Err(ScoreError::NegativeNutrient { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(NutritionData::default().validate().is_ok());
    }

    #[test]
    fn test_negative_field_rejected() {
        let nutrition = NutritionData {
            sugars_g: -0.1,
            ..Default::default()
        };
        let err = nutrition.validate().unwrap_err();
        match err {
            ScoreError::NegativeNutrient { field, value } => {
                assert_eq!(field, "sugars_g");
                assert_eq!(value, -0.1);
            }
        }
    }

    #[test]
    fn test_negative_total_fat_rejected() {
        let nutrition = NutritionData {
            total_fat_g: Some(-1.0),
            ..Default::default()
        };
        assert!(nutrition.validate().is_err());
    }
}
