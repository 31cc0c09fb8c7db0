//! Product category classification
//!
//! Picks one of the five scoring categories from a product's display name
//! and its free-text category tags. Keyword classes are checked in a
//! fixed order and the first match wins, so a product touching several
//! classes resolves to the earliest one.

use serde_json::Value;

use crate::models::ProductCategory;

const CHEESE_KEYWORDS: &[&str] = &["cheese", "fromage"];
const RED_MEAT_KEYWORDS: &[&str] = &["meat", "beef", "pork", "lamb", "sausage", "bacon"];
const FATS_OILS_KEYWORDS: &[&str] = &["oil", "butter", "margarine", "nuts", "seeds"];
const BEVERAGE_KEYWORDS: &[&str] = &[
    "beverage", "drink", "juice", "soda", "water", "tea", "coffee",
];

/// Classify a product from its name and raw payload.
///
/// Matching is a case-insensitive substring search over the concatenation
/// of the payload's `categories_tags` entries and the product name.
/// Missing or ill-typed tags are skipped; an empty haystack classifies as
/// general food.
pub fn classify(product_name: &str, raw: &Value) -> ProductCategory {
    let mut haystack = String::new();
    if let Some(tags) = raw.get("categories_tags").and_then(Value::as_array) {
        for tag in tags.iter().filter_map(Value::as_str) {
            haystack.push_str(tag);
            haystack.push(' ');
        }
    }
    haystack.push_str(product_name);
    let haystack = haystack.to_lowercase();

    let matches_any = |keywords: &[&str]| keywords.iter().any(|k| haystack.contains(k));

    if matches_any(CHEESE_KEYWORDS) {
        ProductCategory::Cheese
    } else if matches_any(RED_MEAT_KEYWORDS) {
        ProductCategory::RedMeat
    } else if matches_any(FATS_OILS_KEYWORDS) {
        ProductCategory::FatsOilsNuts
    } else if matches_any(BEVERAGE_KEYWORDS) {
        ProductCategory::Beverages
    } else {
        ProductCategory::GeneralFood
    }
}
