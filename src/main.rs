use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;
use clap::Parser;
use pendulum::cli::{Args, load_and_apply_config};
use pendulum::{
    ControlsPlugin, EnergyHudPlugin, SimulationDiagnosticsPlugin, SimulationPlugin,
    VisualizationPlugin,
};

fn main() -> AppExit {
    let args = Args::parse();

    let config = match load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pendulum: {e}");
            std::process::exit(1);
        }
    };

    if args.print_config {
        match config.to_toml() {
            Ok(toml_string) => {
                print!("{toml_string}");
                return AppExit::Success;
            }
            Err(e) => {
                eprintln!("pendulum: {e}");
                return AppExit::error();
            }
        }
    }

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: config.rendering.window_title.clone(),
                    resolution: WindowResolution::new(
                        config.rendering.window_width,
                        config.rendering.window_height,
                    ),
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                level: log_level,
                ..default()
            }),
    );

    app.add_plugins((
        SimulationPlugin::with_config(config),
        SimulationDiagnosticsPlugin::default(),
        ControlsPlugin,
        VisualizationPlugin,
        EnergyHudPlugin,
    ));

    if args.verbose {
        app.add_plugins(LogDiagnosticsPlugin::default());
    }

    app.run()
}
