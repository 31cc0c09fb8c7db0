//! Score to letter-grade resolution
//!
//! Beverages use their own cut points; every other category shares one
//! table. Both partitions are total over the integers, so every score
//! maps to exactly one grade.

use crate::models::{Grade, ProductCategory};

/// Map a final score to its letter grade
pub fn resolve_grade(score: i32, category: ProductCategory) -> Grade {
    match category {
        ProductCategory::Beverages => match score {
            s if s <= 1 => Grade::A,
            s if s <= 5 => Grade::B,
            s if s <= 9 => Grade::C,
            s if s <= 13 => Grade::D,
            _ => Grade::E,
        },
        _ => match score {
            s if s <= -1 => Grade::A,
            s if s <= 2 => Grade::B,
            s if s <= 10 => Grade::C,
            s if s <= 18 => Grade::D,
            _ => Grade::E,
        },
    }
}
