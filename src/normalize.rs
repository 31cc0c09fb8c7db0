//! Raw payload normalization
//!
//! Adapts an externally defined product document (OpenFoodFacts key
//! variants, frequently sparse) into the canonical `NutritionData`
//! record. Best-effort by policy: a missing, non-numeric, or unusable
//! value degrades to zero, never to an error.

use serde_json::Value;

use crate::models::NutritionData;

/// Kilojoules per kilocalorie
const KJ_PER_KCAL: f64 = 4.184;

/// Grams of salt per gram of sodium
const SALT_PER_SODIUM: f64 = 2.5;

/// Read a usable number for `key`, treating zero as missing.
///
/// Upstream databases routinely store 0 for "not measured", so a literal
/// zero falls through to the next key variant. Negative and non-finite
/// values would break the engine's invariant and are discarded with a
/// warning.
fn positive_number(nutriments: &Value, key: &str) -> Option<f64> {
    let value = nutriments.get(key)?.as_f64()?;
    if !value.is_finite() || value < 0.0 {
        tracing::warn!("discarding unusable value {} for nutriment `{}`", value, key);
        return None;
    }
    if value == 0.0 {
        return None;
    }
    Some(value)
}

/// First usable value among the key variants, else 0
fn first_of(nutriments: &Value, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|key| positive_number(nutriments, key))
        .unwrap_or(0.0)
}

/// Normalize a raw product document into a canonical nutrient record.
///
/// Reads the `nutriments` object off the payload root; each field prefers
/// its per-100g key, falls back to the bare key, and defaults to zero.
/// Energy additionally converts a kilocalorie field when no kilojoule
/// variant is present, and salt falls back to a sodium-derived estimate.
pub fn normalize(raw: &Value) -> NutritionData {
    static EMPTY: Value = Value::Null;
    let nutriments = raw.get("nutriments").unwrap_or(&EMPTY);

    let energy_kj = first_of(nutriments, &["energy-kj_100g", "energy_kj"]);
    let energy_kj = if energy_kj > 0.0 {
        energy_kj
    } else {
        first_of(nutriments, &["energy-kcal_100g"]) * KJ_PER_KCAL
    };

    let mut salt_g = first_of(nutriments, &["salt_100g", "salt"]);
    if salt_g == 0.0 {
        let sodium = first_of(nutriments, &["sodium_100g", "sodium"]);
        if sodium > 0.0 {
            salt_g = sodium * SALT_PER_SODIUM / 1000.0;
        }
    }

    let total_fat = first_of(nutriments, &["fat_100g", "fat"]);

    NutritionData {
        energy_kj,
        sugars_g: first_of(nutriments, &["sugars_100g", "sugars"]),
        saturated_fat_g: first_of(nutriments, &["saturated-fat_100g", "saturated-fat"]),
        salt_g,
        fiber_g: first_of(nutriments, &["fiber_100g", "fiber"]),
        protein_g: first_of(nutriments, &["proteins_100g", "proteins"]),
        fruits_vegetables_legumes_percent: first_of(
            nutriments,
            &[
                "fruits-vegetables-nuts-estimate-from-ingredients_100g",
                "fruits-vegetables-nuts-estimate-from-ingredients",
            ],
        ),
        total_fat_g: (total_fat > 0.0).then_some(total_fat),
    }
}
