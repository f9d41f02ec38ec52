//! Pendulum library
//!
//! This provides the core functionality of the double pendulum simulation
//! as a library to enable integration testing.

pub mod cli;
pub mod config;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod states;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used items
pub use config::SimulationConfig;
pub use events::*;
pub use physics::{
    integrators,
    math::{Scalar, Vector},
};
pub use plugins::{
    controls::ControlsPlugin, energy_hud::EnergyHudPlugin,
    simulation::SimulationPlugin, simulation_diagnostics::SimulationDiagnosticsPlugin,
    visualization::VisualizationPlugin,
};
pub use states::AppState;
