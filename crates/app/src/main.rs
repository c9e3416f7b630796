use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::WinitSettings;

use footprint::{EmissionFactorTable, FootprintPlugin};

mod cli;
mod query_mode;

use cli::{LaunchOptions, USAGE};

fn main() {
    let options = match LaunchOptions::from_env() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("carbon-calculator: {e}\n{USAGE}");
            std::process::exit(2);
        }
    };

    // The table is built once, before any app exists, and never changes
    // afterwards. A bad region file aborts startup.
    let table = match EmissionFactorTable::load_with_overrides(options.regions_file.as_deref()) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("carbon-calculator: {e}");
            std::process::exit(2);
        }
    };

    if options.query_mode {
        if let Err(e) = query_mode::run_query_mode(table) {
            eprintln!("carbon-calculator: query mode I/O error: {e}");
            std::process::exit(1);
        }
        return;
    }

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Personal Carbon Calculator".to_string(),
            resolution: (1100.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // Nothing animates; only redraw on input.
    .insert_resource(WinitSettings::desktop_app())
    .insert_resource(table)
    .add_plugins((FootprintPlugin, ui::UiPlugin));

    app.run();
}
