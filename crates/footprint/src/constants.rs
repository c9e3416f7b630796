//! Annualization multipliers, unit conversions and input domains.

/// Days per year, used to annualize daily commute and daily meals.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Months per year, used to annualize monthly electricity use.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Weeks per year, used to annualize weekly waste.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Kilograms per tonne.
pub const KG_PER_TONNE: f64 = 1000.0;

/// Number of decimal places every reported tonnage is rounded to.
pub const RESULT_DECIMALS: u32 = 2;

// -------------------------------------------------------------------------
// Input domains (inclusive)
// -------------------------------------------------------------------------

pub const COMMUTE_KM_MIN: f64 = 0.0;
pub const COMMUTE_KM_MAX: f64 = 100.0;

pub const ELECTRICITY_KWH_MIN: f64 = 0.0;
pub const ELECTRICITY_KWH_MAX: f64 = 1000.0;

pub const WASTE_KG_MIN: f64 = 0.0;
pub const WASTE_KG_MAX: f64 = 100.0;

pub const MEALS_PER_DAY_MIN: u32 = 1;
pub const MEALS_PER_DAY_MAX: u32 = 10;

// -------------------------------------------------------------------------
// Defaults shown when the calculator first opens
// -------------------------------------------------------------------------

pub const DEFAULT_COMMUTE_KM: f64 = 10.0;
pub const DEFAULT_ELECTRICITY_KWH: f64 = 200.0;
pub const DEFAULT_WASTE_KG: f64 = 5.0;
pub const DEFAULT_MEALS_PER_DAY: u32 = 3;

/// Region selected when the calculator starts.
pub const DEFAULT_REGION: &str = "India";

/// Environment variable naming an extra region file to load at startup.
pub const REGIONS_FILE_ENV: &str = "CARBON_REGIONS_FILE";
