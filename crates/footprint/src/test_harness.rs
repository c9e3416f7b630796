//! # TestCalculator: headless harness for calculator integration tests
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + [`FootprintPlugin`] so
//! tests can drive the session the way the UI does: edit inputs, send a
//! [`CalculateFootprint`] request, run a frame, inspect the report.

use bevy::app::App;
use bevy::prelude::*;

use crate::emission_factors::EmissionFactorTable;
use crate::inputs::UserInputs;
use crate::session::{CalculateFootprint, CalculatorInputs, FootprintReport};
use crate::FootprintPlugin;

pub struct TestCalculator {
    app: App,
}

impl Default for TestCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCalculator {
    /// Calculator with the built-in region table.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Calculator with a custom table, inserted before the plugin so the
    /// plugin keeps it instead of installing the built-ins.
    pub fn with_table(table: EmissionFactorTable) -> Self {
        Self::build(Some(table))
    }

    fn build(table: Option<EmissionFactorTable>) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        if let Some(table) = table {
            app.insert_resource(table);
        }
        app.add_plugins(FootprintPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Builders
    // -----------------------------------------------------------------------

    pub fn with_region(mut self, region: &str) -> Self {
        self.app
            .world_mut()
            .resource_mut::<CalculatorInputs>()
            .region = region.to_string();
        self
    }

    pub fn with_inputs(mut self, inputs: UserInputs) -> Self {
        self.set_inputs(inputs);
        self
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    pub fn set_inputs(&mut self, inputs: UserInputs) {
        self.app
            .world_mut()
            .resource_mut::<CalculatorInputs>()
            .inputs = inputs;
    }

    /// Sends one calculate request and runs a frame.
    pub fn calculate(&mut self) -> &FootprintReport {
        self.app.world_mut().send_event(CalculateFootprint);
        self.app.update();
        self.report()
    }

    /// Runs a frame without sending a request.
    pub fn tick(&mut self) {
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn report(&self) -> &FootprintReport {
        self.app.world().resource::<FootprintReport>()
    }

    pub fn table(&self) -> &EmissionFactorTable {
        self.app.world().resource::<EmissionFactorTable>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
