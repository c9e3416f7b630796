//! ECS systems for the calculator session.

use bevy::prelude::*;

use super::state::{CalculatorInputs, FootprintReport};
use super::CalculateFootprint;
use crate::calculator::{calculate, compare_to_average};
use crate::emission_factors::EmissionFactorTable;

/// Handles pending [`CalculateFootprint`] requests.
///
/// Several requests in one frame collapse into a single calculation. A
/// rejected request replaces any previous result.
pub fn handle_calculate_requests(
    mut requests: EventReader<CalculateFootprint>,
    table: Res<EmissionFactorTable>,
    current: Res<CalculatorInputs>,
    mut report: ResMut<FootprintReport>,
) {
    if requests.read().count() == 0 {
        return;
    }

    let snapshot = current.clone();
    let outcome = calculate(&table, &snapshot.region, &snapshot.inputs);

    report.comparison = match &outcome {
        Ok(result) => {
            info!(
                "Footprint for {}: {:.2} t CO2/year (transport {:.2}, electricity {:.2}, diet {:.2}, waste {:.2})",
                snapshot.region,
                result.total,
                result.transportation,
                result.electricity,
                result.diet,
                result.waste
            );
            table
                .lookup(&snapshot.region)
                .ok()
                .and_then(|factors| compare_to_average(result, factors))
        }
        Err(err) => {
            warn!("Footprint calculation rejected: {err}");
            None
        }
    };
    report.outcome = Some(outcome);
    report.region = snapshot.region;
    report.calculations += 1;
}
