//! Pendulum prelude module
//!
//! This module re-exports the most commonly used types, traits, and functions
//! across the application to reduce import boilerplate.

// External crate re-exports
pub use bevy::prelude::*;

// Internal re-exports - Config
pub use crate::config::{PhysicsConfig, RenderingConfig, SimulationConfig, UiConfig};

// Internal re-exports - States
pub use crate::states::AppState;

// Internal re-exports - Events
pub use crate::events::SimulationCommand;

// Internal re-exports - Resources
pub use crate::resources::{CurrentEnergy, InitialEnergy, Pendulum, PhysicsTime};

// Internal re-exports - Physics
pub use crate::physics::{
    GeneralizedCoordinates, MechanicalEnergy, PendulumParameters, PendulumState, Scalar, Vector,
};
