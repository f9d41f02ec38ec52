//! Action handlers for simulation commands
//!
//! This module contains handlers for SimulationCommand events including
//! restart, pause/resume and quit.

use crate::physics::MechanicalEnergy;
use crate::prelude::*;

pub fn handle_restart_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    config: Res<SimulationConfig>,
    mut pendulum: ResMut<Pendulum>,
    mut physics_time: ResMut<PhysicsTime>,
    mut current_energy: ResMut<CurrentEnergy>,
    mut initial_energy: ResMut<InitialEnergy>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::Restart) {
            continue;
        }

        let state = match config.build_state() {
            Ok(state) => state,
            Err(e) => {
                error!("Cannot restart simulation: {}", e);
                continue;
            }
        };

        let energy = MechanicalEnergy::of(&state);
        **pendulum = state;
        **current_energy = energy;
        **initial_energy = energy;
        physics_time.reset_clock();

        info!("Simulation restarted ({})", energy);
    }
}

pub fn handle_toggle_pause_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    current_state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut physics_time: ResMut<PhysicsTime>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::TogglePause) {
            continue;
        }
        let next = current_state.get().toggled();
        next_state.set(next);
        match next {
            AppState::Paused => {
                physics_time.pause();
                info!("Simulation paused at t = {:.3}", physics_time.elapsed);
            }
            AppState::Running => {
                physics_time.unpause();
                info!("Simulation resumed");
            }
        }
    }
}

pub fn handle_quit_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut exit: EventWriter<AppExit>,
) {
    if commands_reader
        .read()
        .any(|command| matches!(command, SimulationCommand::Quit))
    {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}
