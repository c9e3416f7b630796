//! Carbon calculator panel.
//!
//! The only window in the app:
//! - Region selector (side panel), listing every region in the loaded table
//! - Input sliders for daily commute, monthly electricity and weekly waste,
//!   plus a meals-per-day counter
//! - "Calculate" button that sends a `CalculateFootprint` request
//! - Results: per-category breakdown bars, total, and the comparison with the
//!   region's per-capita average
//!
//! The panel never computes anything itself; it edits `CalculatorInputs` and
//! renders `FootprintReport`.

mod formatting;
mod panel_ui;

use bevy::prelude::*;

pub use formatting::{category_color, category_share, comparison_text, error_text, fmt_tonnes};
pub use panel_ui::{calculator_panel_ui, region_panel_ui};

pub struct CalculatorPanelPlugin;

impl Plugin for CalculatorPanelPlugin {
    fn build(&self, app: &mut App) {
        // Side panel first so the central panel fills the remaining space.
        app.add_systems(Update, (region_panel_ui, calculator_panel_ui).chain());
    }
}
