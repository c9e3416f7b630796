//! Interactive calculator session: the inputs the panel edits, the
//! "calculate" request event, and the latest report.
//!
//! Inputs are snapshotted when a [`CalculateFootprint`] event is handled, so
//! every calculation sees a fresh, consistent copy of what the user entered.

mod state;
mod systems;


pub use state::{CalculatorInputs, FootprintReport};
pub use systems::handle_calculate_requests;

use bevy::prelude::*;

/// Request to calculate from the current [`CalculatorInputs`].
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct CalculateFootprint;

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CalculatorInputs>()
            .init_resource::<FootprintReport>()
            .add_event::<CalculateFootprint>()
            .add_systems(Update, handle_calculate_requests);
    }
}
