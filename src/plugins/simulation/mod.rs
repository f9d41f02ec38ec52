//! Simulation plugin - Self-contained plugin pattern
//!
//! This plugin owns the pendulum state and everything that mutates it:
//! one batch of fixed RK4 steps per frame, the energy measurement that
//! follows it, and the restart/pause/quit command handlers.

use crate::physics::{Integrator, MechanicalEnergy, RungeKuttaFourthOrder};
use crate::prelude::*;

mod actions;
mod physics;

use actions::{
    handle_quit_event, handle_restart_simulation_event, handle_toggle_pause_simulation_event,
};
pub use physics::PhysicsSet;
use physics::{integrate_pendulum, measure_energy};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Commands,
    UI,
}

pub struct SimulationPlugin {
    config: Option<SimulationConfig>,
}

impl SimulationPlugin {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self
            .config
            .clone()
            .unwrap_or_else(SimulationConfig::load_from_user_config);

        match config.to_toml() {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Invalid simulation configuration: {}. Falling back to defaults", e);
                SimulationConfig::default()
            }
        };
        let state = config.build_state().unwrap_or_default();
        let energy = MechanicalEnergy::of(&state);
        info!(
            "Integrator: {} (order {}), dt = {}, {} step(s) per frame",
            RungeKuttaFourthOrder.name(),
            RungeKuttaFourthOrder.convergence_order(),
            config.physics.time_step,
            config.physics.steps_per_frame
        );
        info!("Initial state: {}", energy);

        let mut physics_time =
            PhysicsTime::new(config.physics.time_step, config.physics.steps_per_frame);
        if config.physics.start_paused {
            physics_time.pause();
            app.insert_state(AppState::Paused);
        } else {
            app.init_state::<AppState>();
        }

        app.insert_resource(config);
        app.insert_resource(Pendulum(state));
        app.insert_resource(CurrentEnergy(energy));
        app.insert_resource(InitialEnergy(energy));
        app.insert_resource(physics_time);

        app.add_event::<SimulationCommand>();

        app.configure_sets(
            Update,
            (
                SimulationSet::Input,
                SimulationSet::Commands,
                PhysicsSet::Integrate,
                PhysicsSet::MeasureEnergy,
                SimulationSet::UI,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                (
                    handle_restart_simulation_event,
                    handle_toggle_pause_simulation_event,
                    handle_quit_event,
                )
                    .in_set(SimulationSet::Commands),
                integrate_pendulum
                    .in_set(PhysicsSet::Integrate)
                    .run_if(in_state(AppState::Running)),
                measure_energy.in_set(PhysicsSet::MeasureEnergy),
            ),
        );
    }
}
