//! Region-keyed emission factor table.
//!
//! Each region maps to one [`EmissionFactors`] record holding the kgCO2 emitted
//! per unit of each activity:
//!
//! | Region | Transport (kg/km) | Electricity (kg/kWh) | Diet (kg/meal) | Waste (kg/kg) |
//! |--------|-------------------|----------------------|----------------|---------------|
//! | India  | 0.14              | 0.82                 | 1.25           | 0.1           |
//!
//! More regions are loaded from a JSON file at startup:
//!
//! ```json
//! { "regions": { "Germany": { "transportationPerKm": 0.17, "electricityPerKwh": 0.38,
//!                             "dietPerMeal": 1.6, "wastePerKg": 0.45 } } }
//! ```
//!
//! The table is built once before the app runs and never mutated afterwards.

use std::collections::BTreeMap;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{FactorTableError, FootprintError};

/// Name of the built-in region.
pub const INDIA: &str = "India";

/// Per-unit emission coefficients for one region, in kgCO2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionFactors {
    /// kgCO2 per km travelled.
    pub transportation_per_km: f64,
    /// kgCO2 per kWh consumed.
    pub electricity_per_kwh: f64,
    /// kgCO2 per meal eaten.
    pub diet_per_meal: f64,
    /// kgCO2 per kg of waste.
    pub waste_per_kg: f64,
    /// Published per-capita annual emissions (tonnes CO2), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_tonnes_per_capita: Option<f64>,
}

impl EmissionFactors {
    /// India, with the 2021 per-capita average of 1.9 t.
    pub const INDIA: EmissionFactors = EmissionFactors {
        transportation_per_km: 0.14,
        electricity_per_kwh: 0.82,
        diet_per_meal: 1.25,
        waste_per_kg: 0.1,
        average_tonnes_per_capita: Some(1.9),
    };

    fn named_values(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("transportationPerKm", Some(self.transportation_per_km)),
            ("electricityPerKwh", Some(self.electricity_per_kwh)),
            ("dietPerMeal", Some(self.diet_per_meal)),
            ("wastePerKg", Some(self.waste_per_kg)),
            ("averageTonnesPerCapita", self.average_tonnes_per_capita),
        ]
    }

    /// Rejects negative, NaN or infinite coefficients.
    pub fn validate(&self, region: &str) -> Result<(), FactorTableError> {
        for (factor, value) in self.named_values() {
            let Some(value) = value else { continue };
            if !value.is_finite() || value < 0.0 {
                return Err(FactorTableError::InvalidFactor {
                    region: region.to_string(),
                    factor,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// On-disk shape of a region file.
#[derive(Debug, Deserialize)]
struct RegionFile {
    regions: BTreeMap<String, EmissionFactors>,
}

/// Immutable mapping from region name to its emission factors.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EmissionFactorTable {
    regions: BTreeMap<String, EmissionFactors>,
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EmissionFactorTable {
    /// A table with no regions at all.
    pub fn empty() -> Self {
        Self {
            regions: BTreeMap::new(),
        }
    }

    /// The built-in table (India only).
    pub fn builtin() -> Self {
        let mut regions = BTreeMap::new();
        regions.insert(INDIA.to_string(), EmissionFactors::INDIA);
        Self { regions }
    }

    /// Returns the factors for `region`.
    pub fn lookup(&self, region: &str) -> Result<&EmissionFactors, FootprintError> {
        self.regions
            .get(region)
            .ok_or_else(|| FootprintError::UnknownRegion {
                region: region.to_string(),
            })
    }

    pub fn contains(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// Region names in alphabetical order.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// All `(region, factors)` entries in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EmissionFactors)> {
        self.regions.iter().map(|(name, f)| (name.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Inserts or replaces a region after validating its coefficients.
    pub fn register(
        &mut self,
        region: impl Into<String>,
        factors: EmissionFactors,
    ) -> Result<(), FactorTableError> {
        let region = region.into();
        factors.validate(&region)?;
        self.regions.insert(region, factors);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_region(
        mut self,
        region: impl Into<String>,
        factors: EmissionFactors,
    ) -> Result<Self, FactorTableError> {
        self.register(region, factors)?;
        Ok(self)
    }

    /// Layers `other` over `self`; regions present in both take `other`'s values.
    pub fn merge(&mut self, other: EmissionFactorTable) {
        self.regions.extend(other.regions);
    }

    /// Parses a region file. Every record is validated.
    pub fn from_json_str(json: &str) -> Result<Self, FactorTableError> {
        let file: RegionFile = serde_json::from_str(json)?;
        let mut table = Self::empty();
        for (region, factors) in file.regions {
            table.register(region, factors)?;
        }
        Ok(table)
    }

    /// Reads and parses a region file from disk.
    pub fn load_json_file(path: &Path) -> Result<Self, FactorTableError> {
        let json = std::fs::read_to_string(path).map_err(|source| FactorTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Built-in regions plus the regions from `path`, if one is given.
    pub fn load_with_overrides(path: Option<&Path>) -> Result<Self, FactorTableError> {
        let mut table = Self::builtin();
        if let Some(path) = path {
            let extra = Self::load_json_file(path)?;
            info!(
                "Loaded {} region(s) from {}",
                extra.len(),
                path.display()
            );
            table.merge(extra);
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn germany() -> EmissionFactors {
        EmissionFactors {
            transportation_per_km: 0.17,
            electricity_per_kwh: 0.38,
            diet_per_meal: 1.6,
            waste_per_kg: 0.45,
            average_tonnes_per_capita: None,
        }
    }

    #[test]
    fn test_builtin_has_india() {
        let table = EmissionFactorTable::builtin();
        let india = table.lookup("India").unwrap();
        assert_eq!(india.transportation_per_km, 0.14);
        assert_eq!(india.electricity_per_kwh, 0.82);
        assert_eq!(india.diet_per_meal, 1.25);
        assert_eq!(india.waste_per_kg, 0.1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unknown_region() {
        let table = EmissionFactorTable::builtin();
        let err = table.lookup("Mars").unwrap_err();
        assert_eq!(
            err,
            FootprintError::UnknownRegion {
                region: "Mars".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = EmissionFactorTable::builtin();
        assert!(table.lookup("india").is_err());
    }

    #[test]
    fn test_register_new_region() {
        let table = EmissionFactorTable::builtin()
            .with_region("Germany", germany())
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.regions().collect::<Vec<_>>(), vec!["Germany", "India"]);
    }

    #[test]
    fn test_register_rejects_negative_factor() {
        let mut table = EmissionFactorTable::builtin();
        let bad = EmissionFactors {
            waste_per_kg: -0.1,
            ..germany()
        };
        let err = table.register("Germany", bad).unwrap_err();
        assert!(matches!(
            err,
            FactorTableError::InvalidFactor {
                factor: "wastePerKg",
                ..
            }
        ));
        assert!(!table.contains("Germany"), "rejected region must not be inserted");
    }

    #[test]
    fn test_register_rejects_non_finite_factor() {
        let mut table = EmissionFactorTable::empty();
        let bad = EmissionFactors {
            diet_per_meal: f64::INFINITY,
            ..germany()
        };
        assert!(table.register("Germany", bad).is_err());
        let bad = EmissionFactors {
            average_tonnes_per_capita: Some(f64::NAN),
            ..germany()
        };
        assert!(table.register("Germany", bad).is_err());
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "regions": {
                "Germany": {
                    "transportationPerKm": 0.17,
                    "electricityPerKwh": 0.38,
                    "dietPerMeal": 1.6,
                    "wastePerKg": 0.45,
                    "averageTonnesPerCapita": 8.0
                }
            }
        }"#;
        let table = EmissionFactorTable::from_json_str(json).unwrap();
        let de = table.lookup("Germany").unwrap();
        assert_eq!(de.electricity_per_kwh, 0.38);
        assert_eq!(de.average_tonnes_per_capita, Some(8.0));
    }

    #[test]
    fn test_from_json_str_missing_factor_is_parse_error() {
        let json = r#"{"regions":{"Germany":{"transportationPerKm":0.17}}}"#;
        let err = EmissionFactorTable::from_json_str(json).unwrap_err();
        assert!(matches!(err, FactorTableError::Parse(_)));
    }

    #[test]
    fn test_from_json_str_negative_factor_rejected() {
        let json = r#"{"regions":{"Germany":{
            "transportationPerKm":0.17,"electricityPerKwh":-0.38,
            "dietPerMeal":1.6,"wastePerKg":0.45}}}"#;
        let err = EmissionFactorTable::from_json_str(json).unwrap_err();
        assert!(matches!(err, FactorTableError::InvalidFactor { .. }));
    }

    #[test]
    fn test_merge_overrides_existing_region() {
        let mut table = EmissionFactorTable::builtin();
        let custom_india = EmissionFactors {
            electricity_per_kwh: 0.7,
            ..EmissionFactors::INDIA
        };
        let overlay = EmissionFactorTable::empty()
            .with_region("India", custom_india)
            .unwrap()
            .with_region("Germany", germany())
            .unwrap();
        table.merge(overlay);
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("India").unwrap().electricity_per_kwh, 0.7);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err =
            EmissionFactorTable::load_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, FactorTableError::Io { .. }));
    }

    #[test]
    fn test_load_with_overrides_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "footprint_regions_{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"regions":{"Norway":{"transportationPerKm":0.12,"electricityPerKwh":0.02,"dietPerMeal":1.4,"wastePerKg":0.3}}}"#,
        )
        .unwrap();
        let table = EmissionFactorTable::load_with_overrides(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(table.contains("India"));
        assert!(table.contains("Norway"));
    }

    #[test]
    fn test_load_without_overrides_is_builtin() {
        let table = EmissionFactorTable::load_with_overrides(None).unwrap();
        assert_eq!(table, EmissionFactorTable::builtin());
    }
}
