//! Scoring result types
//!
//! Plain immutable values assembled once per scoring call.

use serde::{Deserialize, Serialize};

use super::ProductCategory;

/// Letter grade, A (best) through E (worst)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }

    /// Short quality description for display
    pub fn description(&self) -> &'static str {
        match self {
            Grade::A => "Excellent nutritional quality",
            Grade::B => "Good nutritional quality",
            Grade::C => "Average nutritional quality",
            Grade::D => "Poor nutritional quality",
            Grade::E => "Very poor nutritional quality",
        }
    }

    /// Legacy 0-100 health score for callers that predate letter grades
    pub fn health_score(&self) -> f64 {
        match self {
            Grade::A => 90.0,
            Grade::B => 75.0,
            Grade::C => 60.0,
            Grade::D => 40.0,
            Grade::E => 20.0,
        }
    }

    /// Display color keyed off the legacy health score tiers
    pub fn color(&self) -> &'static str {
        let score = self.health_score();
        if score >= 80.0 {
            "#2E7D32" // green
        } else if score >= 60.0 {
            "#FFA000" // orange
        } else {
            "#C62828" // red
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-factor point contributions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub energy: u8,
    pub sugars: u8,
    pub saturated_fat: u8,
    pub salt: u8,
    pub fiber: u8,
    pub protein: u8,
    pub fruits_veg_legumes: u8,
}

/// Outcome of a single scoring call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutriScoreResult {
    pub grade: Grade,
    /// negative_points - positive_points, may be negative
    pub score: i32,
    pub negative_points: u8,
    pub positive_points: u8,
    pub category: ProductCategory,
    pub breakdown: PointsBreakdown,
}
