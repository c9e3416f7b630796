//! Personal carbon footprint calculator.
//!
//! A user's daily commute, monthly electricity use, weekly waste and daily
//! meals are annualized and multiplied by per-region emission factors to give
//! an estimated yearly footprint in tonnes CO2, broken down by category.
//!
//! - [`emission_factors`]: the immutable region → coefficients table.
//! - [`calculator`]: the pure calculation ([`calculate`]).
//! - [`session`]: Bevy resources/events used by the interactive panel.
//! - [`query_protocol`]: JSON command/response types for headless use.

use bevy::prelude::*;

pub mod calculator;
pub mod constants;
pub mod emission_factors;
pub mod error;
pub mod inputs;
pub mod query_protocol;
pub mod session;

#[cfg(test)]
pub mod test_harness;

pub use calculator::{calculate, AverageComparison, Category, FootprintResult};
pub use emission_factors::{EmissionFactorTable, EmissionFactors};
pub use error::{FactorTableError, FootprintError};
pub use inputs::{InputField, UserInputs};

/// Registers the emission factor table and the calculator session.
///
/// Insert a custom [`EmissionFactorTable`] before adding this plugin to use
/// regions beyond the built-ins; otherwise the built-in table is installed.
pub struct FootprintPlugin;

impl Plugin for FootprintPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EmissionFactorTable>();
        app.add_plugins(session::SessionPlugin);

        let table = app.world().resource::<EmissionFactorTable>();
        info!(
            "Emission factor table ready with {} region(s): {}",
            table.len(),
            table.regions().collect::<Vec<_>>().join(", ")
        );
    }
}
