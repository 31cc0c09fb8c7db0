//! Fixed threshold tables
//!
//! Each table is an ordered run of half-open `[min, max)` intervals
//! mapped to integer point values and terminated by an interval with an
//! infinite upper bound. The tables are process-wide read-only constants;
//! calculators select the category-appropriate table, nothing mutates
//! them at runtime.

/// One `[min, max)` interval and the points it awards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub min: f64,
    pub max: f64,
    pub points: u8,
}

const fn t(min: f64, max: f64, points: u8) -> Threshold {
    Threshold { min, max, points }
}

// ============================================================================
// Negative-point tables
// ============================================================================

/// Energy for solid foods, kJ per 100 g
pub const ENERGY_FOOD: &[Threshold] = &[
    t(0.0, 335.0, 0),
    t(335.0, 670.0, 1),
    t(670.0, 1005.0, 2),
    t(1005.0, 1340.0, 3),
    t(1340.0, 1675.0, 4),
    t(1675.0, 2010.0, 5),
    t(2010.0, 2345.0, 6),
    t(2345.0, 2680.0, 7),
    t(2680.0, 3015.0, 8),
    t(3015.0, 3350.0, 9),
    t(3350.0, f64::INFINITY, 10),
];

/// Energy for beverages, kJ per 100 ml. Denser bins than the food table
/// so liquid calories are penalized earlier. The leading empty interval
/// is part of the published table layout; an exact 0 kJ value falls into
/// the `[0, 30)` bin.
pub const ENERGY_BEVERAGE: &[Threshold] = &[
    t(0.0, 0.0, 0),
    t(0.0, 30.0, 1),
    t(30.0, 60.0, 2),
    t(60.0, 90.0, 3),
    t(90.0, 120.0, 4),
    t(120.0, 150.0, 5),
    t(150.0, 180.0, 6),
    t(180.0, 210.0, 7),
    t(210.0, 240.0, 8),
    t(240.0, 270.0, 9),
    t(270.0, f64::INFINITY, 10),
];

/// Sugars, g per 100 g/ml, all categories
pub const SUGARS: &[Threshold] = &[
    t(0.0, 4.5, 0),
    t(4.5, 9.0, 1),
    t(9.0, 13.5, 2),
    t(13.5, 18.0, 3),
    t(18.0, 22.5, 4),
    t(22.5, 27.0, 5),
    t(27.0, 31.0, 6),
    t(31.0, 36.0, 7),
    t(36.0, 40.0, 8),
    t(40.0, 45.0, 9),
    t(45.0, f64::INFINITY, 10),
];

/// Saturated fat, g per 100 g/ml. For fats/oils/nuts the same table is
/// scanned with the saturated-to-total-fat ratio percentage instead of
/// the absolute gram value.
pub const SATURATED_FAT: &[Threshold] = &[
    t(0.0, 1.0, 0),
    t(1.0, 2.0, 1),
    t(2.0, 3.0, 2),
    t(3.0, 4.0, 3),
    t(4.0, 5.0, 4),
    t(5.0, 6.0, 5),
    t(6.0, 7.0, 6),
    t(7.0, 8.0, 7),
    t(8.0, 9.0, 8),
    t(9.0, 10.0, 9),
    t(10.0, f64::INFINITY, 10),
];

/// Salt, mg per 100 g/ml (callers convert from grams)
pub const SALT_MG: &[Threshold] = &[
    t(0.0, 90.0, 0),
    t(90.0, 180.0, 1),
    t(180.0, 270.0, 2),
    t(270.0, 360.0, 3),
    t(360.0, 450.0, 4),
    t(450.0, 540.0, 5),
    t(540.0, 630.0, 6),
    t(630.0, 720.0, 7),
    t(720.0, 810.0, 8),
    t(810.0, 900.0, 9),
    t(900.0, f64::INFINITY, 10),
];

// ============================================================================
// Positive-point tables
// ============================================================================

/// Fiber, g per 100 g
pub const FIBER: &[Threshold] = &[
    t(0.0, 0.9, 0),
    t(0.9, 1.9, 1),
    t(1.9, 2.8, 2),
    t(2.8, 3.7, 3),
    t(3.7, 4.7, 4),
    t(4.7, f64::INFINITY, 5),
];

/// Protein, g per 100 g
pub const PROTEIN: &[Threshold] = &[
    t(0.0, 1.6, 0),
    t(1.6, 3.2, 1),
    t(3.2, 4.8, 2),
    t(4.8, 6.4, 3),
    t(6.4, 8.0, 4),
    t(8.0, f64::INFINITY, 5),
];

/// Fruit/vegetable/legume content, percent
pub const FRUITS_VEG_LEGUMES: &[Threshold] = &[
    t(0.0, 40.0, 0),
    t(40.0, 60.0, 1),
    t(60.0, 80.0, 2),
    t(80.0, f64::INFINITY, 5),
];

// ============================================================================
// Lookup
// ============================================================================

/// Points for `value` in `table`: linear scan, first matching `[min, max)`
/// interval wins. A value matching no interval (negative input, which
/// `score` rejects before it gets here) falls back to the last entry.
pub fn points_for(value: f64, table: &[Threshold]) -> u8 {
    for threshold in table {
        if value >= threshold.min && value < threshold.max {
            return threshold.points;
        }
    }
    table[table.len() - 1].points
}
