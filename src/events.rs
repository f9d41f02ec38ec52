//! Centralized event definitions
//!
//! Keyboard input is translated into [`SimulationCommand`] events by the
//! controls plugin; the simulation, HUD and app lifecycle react to them.

use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationCommand {
    Restart,
    TogglePause,
    ToggleEnergyHud,
    Quit,
}
