//! Annual footprint calculation.
//!
//! The calculation is a fixed, order-sensitive pipeline:
//!
//! 1. Validate every raw input against its domain.
//! 2. Look up the region's emission factors.
//! 3. Annualize: commute ×365, electricity ×12, meals ×365, waste ×52.
//! 4. Multiply by the region coefficient → kgCO2/year.
//! 5. Divide by 1000 and round to 2 decimals → tonnes/year per category.
//! 6. Total = round(sum of the four *rounded* categories, 2).
//!
//! Step 6 sums the rounded values, not the unrounded intermediates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::emission_factors::{EmissionFactorTable, EmissionFactors};
use crate::error::FootprintError;
use crate::inputs::UserInputs;

// =============================================================================
// Categories
// =============================================================================

/// One of the four independently tracked emission sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Transportation,
    Electricity,
    Diet,
    Waste,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Transportation,
        Category::Electricity,
        Category::Diet,
        Category::Waste,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::Electricity => "Electricity",
            Category::Diet => "Diet",
            Category::Waste => "Waste",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Result
// =============================================================================

/// Annual emissions per category and in total, in tonnes CO2, each rounded to
/// two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub transportation: f64,
    pub electricity: f64,
    pub diet: f64,
    pub waste: f64,
    pub total: f64,
}

impl FootprintResult {
    /// Builds a result from per-category tonnes. Each category is rounded to
    /// two decimals and the total is the rounded sum of those rounded values.
    pub fn from_categories(transportation: f64, electricity: f64, diet: f64, waste: f64) -> Self {
        let transportation = round_decimals(transportation, RESULT_DECIMALS);
        let electricity = round_decimals(electricity, RESULT_DECIMALS);
        let diet = round_decimals(diet, RESULT_DECIMALS);
        let waste = round_decimals(waste, RESULT_DECIMALS);
        Self {
            transportation,
            electricity,
            diet,
            waste,
            total: round_decimals(transportation + electricity + diet + waste, RESULT_DECIMALS),
        }
    }

    pub fn category(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Electricity => self.electricity,
            Category::Diet => self.diet,
            Category::Waste => self.waste,
        }
    }

    /// `(category, tonnes)` pairs in fixed display order.
    pub fn breakdown(&self) -> [(Category, f64); 4] {
        Category::ALL.map(|c| (c, self.category(c)))
    }

    /// The category with the largest share. Ties resolve to the earlier
    /// category in display order.
    pub fn largest_category(&self) -> Category {
        let mut best = (Category::Transportation, self.transportation);
        for (category, value) in self.breakdown() {
            if value > best.1 {
                best = (category, value);
            }
        }
        best.0
    }
}

// =============================================================================
// Regional average comparison
// =============================================================================

/// How a footprint compares with the region's published per-capita average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageComparison {
    /// Per-capita annual average for the region (tonnes CO2).
    pub region_average: f64,
    /// `total - region_average`, rounded to two decimals.
    pub difference: f64,
    pub above_average: bool,
}

/// Compares a result with the region's average, if the region publishes one.
pub fn compare_to_average(
    result: &FootprintResult,
    factors: &EmissionFactors,
) -> Option<AverageComparison> {
    let region_average = factors.average_tonnes_per_capita?;
    let difference = round_decimals(result.total - region_average, RESULT_DECIMALS);
    Some(AverageComparison {
        region_average,
        difference,
        above_average: difference > 0.0,
    })
}

// =============================================================================
// Calculation
// =============================================================================

/// Rounds to `decimals` places using the exact binary value of `value`.
///
/// Decimal formatting rounds the exact expansion, ties to even. Scaling by
/// `10^decimals` first can land a value just off a half-unit exactly on it
/// (0.065000000000000002 × 100 is 6.5).
pub fn round_decimals(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.prec$}", prec = decimals as usize)
        .parse()
        .unwrap_or(value)
}

/// kgCO2/year → tonnes/year.
fn kg_to_tonnes(kg: f64) -> f64 {
    kg / KG_PER_TONNE
}

/// Annualizes validated inputs and applies `factors`. Inputs must already be
/// in range; use [`calculate`] for untrusted inputs.
pub fn apply_factors(factors: &EmissionFactors, inputs: &UserInputs) -> FootprintResult {
    let annual_km = inputs.daily_commute_km * DAYS_PER_YEAR;
    let annual_kwh = inputs.monthly_electricity_kwh * MONTHS_PER_YEAR;
    let annual_meals = inputs.meals_per_day as f64 * DAYS_PER_YEAR;
    let annual_waste_kg = inputs.weekly_waste_kg * WEEKS_PER_YEAR;

    FootprintResult::from_categories(
        kg_to_tonnes(factors.transportation_per_km * annual_km),
        kg_to_tonnes(factors.electricity_per_kwh * annual_kwh),
        kg_to_tonnes(factors.diet_per_meal * annual_meals),
        kg_to_tonnes(factors.waste_per_kg * annual_waste_kg),
    )
}

/// Computes the annual footprint for `region`.
///
/// Inputs are validated before the region is looked up, so an out-of-range
/// request is reported as [`FootprintError::InvalidInput`] even when the
/// region is also unknown.
pub fn calculate(
    table: &EmissionFactorTable,
    region: &str,
    inputs: &UserInputs,
) -> Result<FootprintResult, FootprintError> {
    inputs.validate()?;
    let factors = table.lookup(region)?;
    Ok(apply_factors(factors, inputs))
}
