//! Simulation diagnostics module.
//!
//! Publishes the pendulum's energy through Bevy's diagnostics system so it
//! can be logged (`LogDiagnosticsPlugin`) or read back from the
//! `DiagnosticsStore` by other systems:
//!
//! - `energy/kinetic`, `energy/potential`, `energy/total`
//! - `energy/drift`: |E - E₀| since the last (re)start, the accumulated
//!   integration error
//!
//! Measurements are taken at a fixed wall-clock interval rather than every
//! frame.
//!
//! ```rust,ignore
//! app.add_plugins(SimulationDiagnosticsPlugin::default());
//! ```

use crate::plugins::simulation::PhysicsSet;
use crate::resources::{CurrentEnergy, InitialEnergy};
use bevy::diagnostic::DEFAULT_MAX_HISTORY_LENGTH;
use bevy::diagnostic::Diagnostic;
use bevy::diagnostic::DiagnosticPath;
use bevy::diagnostic::Diagnostics;
use bevy::diagnostic::RegisterDiagnostic;
use bevy::prelude::*;
use core::time::Duration;

#[derive(Resource)]
pub struct SimulationDiagnosticsState {
    update_timer: Timer,
}

pub struct SimulationDiagnosticsPlugin {
    max_history_length: usize,
    smoothing_factor: f64,
    update_interval: Duration,
}

impl Default for SimulationDiagnosticsPlugin {
    fn default() -> Self {
        Self {
            max_history_length: DEFAULT_MAX_HISTORY_LENGTH,
            smoothing_factor: 0.1,
            update_interval: Duration::from_secs_f64(1_f64 / 10_f64),
        }
    }
}

impl SimulationDiagnosticsPlugin {
    pub const KINETIC_ENERGY_PATH: DiagnosticPath = DiagnosticPath::const_new("energy/kinetic");
    pub const POTENTIAL_ENERGY_PATH: DiagnosticPath =
        DiagnosticPath::const_new("energy/potential");
    pub const TOTAL_ENERGY_PATH: DiagnosticPath = DiagnosticPath::const_new("energy/total");
    pub const ENERGY_DRIFT_PATH: DiagnosticPath = DiagnosticPath::const_new("energy/drift");

    const DIAGNOSTIC_PATHS: &'static [DiagnosticPath] = &[
        Self::KINETIC_ENERGY_PATH,
        Self::POTENTIAL_ENERGY_PATH,
        Self::TOTAL_ENERGY_PATH,
        Self::ENERGY_DRIFT_PATH,
    ];

    pub fn with_update_interval(mut self, update_interval: Duration) -> Self {
        self.update_interval = update_interval;
        self
    }

    fn register_diagnostics(&self, app: &mut App) {
        for path in Self::DIAGNOSTIC_PATHS {
            app.register_diagnostic(
                Diagnostic::new(path.clone())
                    .with_max_history_length(self.max_history_length)
                    .with_smoothing_factor(self.smoothing_factor),
            );
        }
    }

    fn update_timer_ticks(mut state: ResMut<SimulationDiagnosticsState>, time: Res<Time>) {
        state.update_timer.tick(time.delta());
    }

    fn update_energy_diagnostics(
        current_energy: Res<CurrentEnergy>,
        initial_energy: Res<InitialEnergy>,
        mut diagnostics: Diagnostics,
        state: Res<SimulationDiagnosticsState>,
    ) {
        if state.update_timer.just_finished() {
            diagnostics.add_measurement(&Self::KINETIC_ENERGY_PATH, || current_energy.kinetic);
            diagnostics.add_measurement(&Self::POTENTIAL_ENERGY_PATH, || current_energy.potential);
            diagnostics.add_measurement(&Self::TOTAL_ENERGY_PATH, || current_energy.total);
            diagnostics.add_measurement(&Self::ENERGY_DRIFT_PATH, || {
                current_energy.drift_from(&initial_energy)
            });
        }
    }
}

impl Plugin for SimulationDiagnosticsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SimulationDiagnosticsState {
            update_timer: Timer::new(self.update_interval, TimerMode::Repeating),
        });

        self.register_diagnostics(app);

        app.add_systems(
            Update,
            (Self::update_timer_ticks, Self::update_energy_diagnostics)
                .chain()
                .after(PhysicsSet::MeasureEnergy),
        );
    }
}
