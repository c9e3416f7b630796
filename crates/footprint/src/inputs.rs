//! Raw user inputs and their domain validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::FootprintError;

/// The four lifestyle magnitudes a user enters, each in its own time unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInputs {
    /// Kilometres travelled per day.
    pub daily_commute_km: f64,
    /// Kilowatt-hours consumed per month.
    pub monthly_electricity_kwh: f64,
    /// Kilograms of waste generated per week.
    pub weekly_waste_kg: f64,
    /// Meals eaten per day. Signed so that negative requests are rejected by
    /// validation rather than by the parser.
    pub meals_per_day: i32,
}

impl Default for UserInputs {
    fn default() -> Self {
        Self {
            daily_commute_km: DEFAULT_COMMUTE_KM,
            monthly_electricity_kwh: DEFAULT_ELECTRICITY_KWH,
            weekly_waste_kg: DEFAULT_WASTE_KG,
            meals_per_day: DEFAULT_MEALS_PER_DAY as i32,
        }
    }
}

/// Identifies one input field, for error reporting and UI labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    DailyCommuteKm,
    MonthlyElectricityKwh,
    WeeklyWasteKg,
    MealsPerDay,
}

impl InputField {
    pub const ALL: [InputField; 4] = [
        InputField::DailyCommuteKm,
        InputField::MonthlyElectricityKwh,
        InputField::WeeklyWasteKg,
        InputField::MealsPerDay,
    ];

    /// Wire name of the field (matches the JSON key).
    pub fn name(self) -> &'static str {
        match self {
            InputField::DailyCommuteKm => "dailyCommuteKm",
            InputField::MonthlyElectricityKwh => "monthlyElectricityKwh",
            InputField::WeeklyWasteKg => "weeklyWasteKg",
            InputField::MealsPerDay => "mealsPerDay",
        }
    }

    /// Inclusive `(min, max)` domain of the field.
    pub fn domain(self) -> (f64, f64) {
        match self {
            InputField::DailyCommuteKm => (COMMUTE_KM_MIN, COMMUTE_KM_MAX),
            InputField::MonthlyElectricityKwh => (ELECTRICITY_KWH_MIN, ELECTRICITY_KWH_MAX),
            InputField::WeeklyWasteKg => (WASTE_KG_MIN, WASTE_KG_MAX),
            InputField::MealsPerDay => (MEALS_PER_DAY_MIN as f64, MEALS_PER_DAY_MAX as f64),
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl UserInputs {
    /// Raw value of a field as `f64`.
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::DailyCommuteKm => self.daily_commute_km,
            InputField::MonthlyElectricityKwh => self.monthly_electricity_kwh,
            InputField::WeeklyWasteKg => self.weekly_waste_kg,
            InputField::MealsPerDay => self.meals_per_day as f64,
        }
    }

    /// Checks every field against its domain, in declaration order, and
    /// reports the first one that falls outside. NaN is always out of range.
    pub fn validate(&self) -> Result<(), FootprintError> {
        for field in InputField::ALL {
            let value = self.get(field);
            let (min, max) = field.domain();
            if !(min..=max).contains(&value) {
                return Err(FootprintError::InvalidInput {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(commute: f64, electricity: f64, waste: f64, meals: i32) -> UserInputs {
        UserInputs {
            daily_commute_km: commute,
            monthly_electricity_kwh: electricity,
            weekly_waste_kg: waste,
            meals_per_day: meals,
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(UserInputs::default().validate().is_ok());
    }

    #[test]
    fn test_domain_edges_are_valid() {
        assert!(inputs(0.0, 0.0, 0.0, 1).validate().is_ok());
        assert!(inputs(100.0, 1000.0, 100.0, 10).validate().is_ok());
    }

    #[test]
    fn test_negative_commute_rejected() {
        let err = inputs(-1.0, 0.0, 0.0, 1).validate().unwrap_err();
        assert_eq!(
            err,
            FootprintError::InvalidInput {
                field: InputField::DailyCommuteKm,
                value: -1.0,
                min: 0.0,
                max: 100.0,
            }
        );
    }

    #[test]
    fn test_zero_meals_rejected() {
        let err = inputs(10.0, 200.0, 5.0, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            FootprintError::InvalidInput {
                field: InputField::MealsPerDay,
                ..
            }
        ));
    }

    #[test]
    fn test_too_many_meals_rejected() {
        assert!(inputs(10.0, 200.0, 5.0, 11).validate().is_err());
    }

    #[test]
    fn test_electricity_above_max_rejected() {
        let err = inputs(10.0, 1000.5, 5.0, 3).validate().unwrap_err();
        assert!(matches!(
            err,
            FootprintError::InvalidInput {
                field: InputField::MonthlyElectricityKwh,
                ..
            }
        ));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(inputs(10.0, 200.0, f64::NAN, 3).validate().is_err());
    }

    #[test]
    fn test_first_offending_field_reported() {
        let err = inputs(-5.0, 200.0, 500.0, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            FootprintError::InvalidInput {
                field: InputField::DailyCommuteKm,
                ..
            }
        ));
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = r#"{"dailyCommuteKm":10,"monthlyElectricityKwh":200,"weeklyWasteKg":5,"mealsPerDay":3}"#;
        let parsed: UserInputs = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, UserInputs::default());
    }
}
