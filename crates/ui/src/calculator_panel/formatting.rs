//! Formatting helpers for the calculator panel.

use bevy_egui::egui;

use footprint::calculator::{AverageComparison, Category, FootprintResult};
use footprint::error::FootprintError;

// Text colours are chosen for the light panel fill set in `theme.rs`.
pub const TITLE_COLOR: egui::Color32 = egui::Color32::from_rgb(31, 119, 180);
pub const ACCENT_COLOR: egui::Color32 = egui::Color32::from_rgb(196, 80, 0);
pub const TOTAL_COLOR: egui::Color32 = egui::Color32::from_rgb(30, 120, 50);
pub const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 90, 0);
pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(190, 30, 30);
/// Unfilled part of a category share bar.
pub const BAR_TRACK_COLOR: egui::Color32 = egui::Color32::from_gray(220);

/// Formats an annual tonnage as "1.97 tonnes CO2/year".
pub fn fmt_tonnes(tonnes: f64) -> String {
    format!("{tonnes:.2} tonnes CO2/year")
}

/// Fraction (0.0..=1.0) of the total contributed by `category`. Zero when the
/// total is zero.
pub fn category_share(result: &FootprintResult, category: Category) -> f32 {
    if result.total <= 0.0 {
        return 0.0;
    }
    (result.category(category) / result.total).clamp(0.0, 1.0) as f32
}

/// Sentence comparing the footprint with the region's per-capita average.
pub fn comparison_text(region: &str, comparison: &AverageComparison) -> String {
    if comparison.above_average {
        format!(
            "{region}'s average is {:.2} tonnes CO2 per capita. You are {:.2} t above it; \
             consider reducing your footprint to align with sustainable goals!",
            comparison.region_average, comparison.difference
        )
    } else {
        format!(
            "{region}'s average is {:.2} tonnes CO2 per capita. You are {:.2} t at or below it.",
            comparison.region_average,
            comparison.difference.abs()
        )
    }
}

/// User-facing text for a rejected calculation.
pub fn error_text(err: &FootprintError) -> String {
    match err {
        FootprintError::UnknownRegion { region } => {
            format!("No emission factors are available for \"{region}\".")
        }
        FootprintError::InvalidInput {
            field,
            value,
            min,
            max,
        } => format!("{field} must be between {min} and {max} (got {value})."),
    }
}

/// Bar colour for each category.
pub fn category_color(category: Category) -> egui::Color32 {
    match category {
        Category::Transportation => egui::Color32::from_rgb(70, 130, 180),
        Category::Electricity => egui::Color32::from_rgb(230, 190, 60),
        Category::Diet => egui::Color32::from_rgb(165, 113, 78),
        Category::Waste => egui::Color32::from_rgb(128, 128, 128),
    }
}

// =============================================================================
// Tests
// =============================================================================
