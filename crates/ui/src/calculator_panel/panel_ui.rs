//! Calculator panel rendering.
//!
//! Contains the region side panel, the central input/results panel, and the
//! small rendering helpers they share.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use footprint::calculator::{AverageComparison, Category, FootprintResult};
use footprint::constants::*;
use footprint::emission_factors::EmissionFactorTable;
use footprint::session::{CalculateFootprint, CalculatorInputs, FootprintReport};

use super::formatting::{
    category_color, category_share, comparison_text, error_text, fmt_tonnes, ACCENT_COLOR,
    BAR_TRACK_COLOR, ERROR_COLOR, TITLE_COLOR, TOTAL_COLOR, WARNING_COLOR,
};

// =============================================================================
// Region side panel
// =============================================================================

/// Renders the region selector.
pub fn region_panel_ui(
    mut contexts: EguiContexts,
    table: Res<EmissionFactorTable>,
    mut current: ResMut<CalculatorInputs>,
) {
    let mut region = current.region.clone();

    egui::SidePanel::left("region_panel")
        .resizable(false)
        .default_width(200.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(egui::RichText::new("Country Selection").color(ACCENT_COLOR));
            ui.separator();
            egui::ComboBox::from_label("Select your country")
                .selected_text(region.as_str())
                .show_ui(ui, |ui| {
                    for name in table.regions() {
                        ui.selectable_value(&mut region, name.to_string(), name);
                    }
                });

            if let Ok(factors) = table.lookup(&region) {
                ui.add_space(12.0);
                ui.small("Emission factors (kg CO2)");
                stat_line(ui, "per km", &format!("{}", factors.transportation_per_km));
                stat_line(ui, "per kWh", &format!("{}", factors.electricity_per_kwh));
                stat_line(ui, "per meal", &format!("{}", factors.diet_per_meal));
                stat_line(ui, "per kg waste", &format!("{}", factors.waste_per_kg));
            }
        });

    // Only write back on change so the resource isn't flagged every frame.
    if region != current.region {
        current.region = region;
    }
}

// =============================================================================
// Central panel
// =============================================================================

/// Renders the inputs, the calculate button and the latest results.
pub fn calculator_panel_ui(
    mut contexts: EguiContexts,
    mut current: ResMut<CalculatorInputs>,
    report: Res<FootprintReport>,
    mut requests: EventWriter<CalculateFootprint>,
) {
    let mut inputs = current.inputs;

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(
                egui::RichText::new("Personal Carbon Calculator")
                    .size(28.0)
                    .color(TITLE_COLOR),
            );
            ui.label("Calculate your yearly carbon footprint and learn how to reduce it!");
        });
        ui.separator();

        // === Inputs ===
        ui.heading(egui::RichText::new("Input Your Details").color(TITLE_COLOR));
        ui.columns(2, |columns| {
            columns[0].label(egui::RichText::new("Daily Commute Distance (in km)").color(ACCENT_COLOR));
            columns[0].add(
                egui::Slider::new(&mut inputs.daily_commute_km, COMMUTE_KM_MIN..=COMMUTE_KM_MAX)
                    .suffix(" km"),
            );
            columns[0].add_space(8.0);
            columns[0].label(
                egui::RichText::new("Monthly Electricity Consumption (in kWh)").color(ACCENT_COLOR),
            );
            columns[0].add(
                egui::Slider::new(
                    &mut inputs.monthly_electricity_kwh,
                    ELECTRICITY_KWH_MIN..=ELECTRICITY_KWH_MAX,
                )
                .suffix(" kWh"),
            );

            columns[1].label(egui::RichText::new("Weekly Waste Generated (in kg)").color(ACCENT_COLOR));
            columns[1].add(
                egui::Slider::new(&mut inputs.weekly_waste_kg, WASTE_KG_MIN..=WASTE_KG_MAX)
                    .suffix(" kg"),
            );
            columns[1].add_space(8.0);
            columns[1].label(egui::RichText::new("Number of Meals Per Day").color(ACCENT_COLOR));
            columns[1].add(
                egui::DragValue::new(&mut inputs.meals_per_day)
                    .range(MEALS_PER_DAY_MIN as i32..=MEALS_PER_DAY_MAX as i32)
                    .speed(0.1),
            );
        });

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if ui
                .button(egui::RichText::new("Calculate My Carbon Footprint").size(18.0))
                .clicked()
            {
                requests.send(CalculateFootprint);
            }
        });

        // === Results ===
        if let Some(outcome) = &report.outcome {
            ui.separator();
            ui.heading(egui::RichText::new("Results").color(TITLE_COLOR));
            match outcome {
                Ok(result) => render_results(ui, &report.region, result, report.comparison.as_ref()),
                Err(err) => {
                    ui.colored_label(ERROR_COLOR, error_text(err));
                }
            }
        }
    });

    if inputs != current.inputs {
        current.inputs = inputs;
    }
}

// =============================================================================
// Rendering helpers
// =============================================================================

/// Breakdown on the left, total and comparison on the right.
fn render_results(
    ui: &mut egui::Ui,
    region: &str,
    result: &FootprintResult,
    comparison: Option<&AverageComparison>,
) {
    ui.columns(2, |columns| {
        columns[0].label(egui::RichText::new("Category-wise Breakdown").color(ACCENT_COLOR));
        for (category, tonnes) in result.breakdown() {
            category_bar(&mut columns[0], category, tonnes, category_share(result, category));
        }

        columns[1].label(egui::RichText::new("Your Total Carbon Footprint").color(ACCENT_COLOR));
        columns[1].label(
            egui::RichText::new(format!("Total: {}", fmt_tonnes(result.total)))
                .size(20.0)
                .strong()
                .color(TOTAL_COLOR),
        );
        columns[1].small(format!("Largest source: {}", result.largest_category()));
        if let Some(comparison) = comparison {
            columns[1].add_space(8.0);
            columns[1].colored_label(WARNING_COLOR, comparison_text(region, comparison));
        }
    });
}

/// One category line: label, share bar, value.
fn category_bar(ui: &mut egui::Ui, category: Category, tonnes: f64, share: f32) {
    ui.horizontal(|ui| {
        ui.label(format!("{:<15}", format!("{category}:")));
        let desired = egui::vec2(100.0, 10.0);
        let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 1.0, BAR_TRACK_COLOR);
        let mut fill_rect = rect;
        fill_rect.set_right(rect.left() + rect.width() * share);
        painter.rect_filled(fill_rect, 1.0, category_color(category));
        ui.label(fmt_tonnes(tonnes));
    });
}

/// Renders a simple stat line with label and value.
fn stat_line(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(format!("  {label}:"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}
