//! Product category
//!
//! The five classes that select which threshold and cut-point tables
//! apply. Determined once per scoring call and never mutated.

use serde::{Deserialize, Serialize};

/// Product category for table selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    #[default]
    GeneralFood,
    Cheese,
    RedMeat,
    FatsOilsNuts,
    Beverages,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::GeneralFood => "general_food",
            ProductCategory::Cheese => "cheese",
            ProductCategory::RedMeat => "red_meat",
            ProductCategory::FatsOilsNuts => "fats_oils_nuts",
            ProductCategory::Beverages => "beverages",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "general_food" => Some(ProductCategory::GeneralFood),
            "cheese" => Some(ProductCategory::Cheese),
            "red_meat" => Some(ProductCategory::RedMeat),
            "fats_oils_nuts" => Some(ProductCategory::FatsOilsNuts),
            "beverages" => Some(ProductCategory::Beverages),
            _ => None,
        }
    }
}
