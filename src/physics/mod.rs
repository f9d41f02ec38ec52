//! Double pendulum physics
//!
//! The simulation core is four pieces: [`PendulumState`] holds the
//! parameters and generalized coordinates, [`DoublePendulumDynamics`] maps
//! them to their time derivative, [`RungeKuttaFourthOrder`] advances them by a
//! fixed step, and [`MechanicalEnergy`] measures the result. Everything here is
//! plain synchronous arithmetic with no hidden state; the Bevy plugins call
//! into it once per frame.
//!
//! The free functions below are the whole surface the presentation layer
//! needs.

pub mod dynamics;
pub mod energy;
pub mod error;
pub mod integrators;
pub mod math;
pub mod state;

pub use dynamics::{DoublePendulumDynamics, EquationsOfMotion};
pub use energy::MechanicalEnergy;
pub use error::PendulumError;
pub use integrators::{Integrator, RungeKuttaFourthOrder};
pub use math::{Scalar, Vector};
pub use state::{GeneralizedCoordinates, PendulumParameters, PendulumState};

/// Fixed integration step, in simulation time units
pub const DEFAULT_TIME_STEP: Scalar = 0.001;

/// Gravitational acceleration used by the default pendulum
pub const STANDARD_GRAVITY: Scalar = 9.81;

/// The startup pendulum: unit masses, 0.2 links, pivot at the display centre,
/// upper link at 3π/4 and everything at rest
pub fn initialize() -> PendulumState {
    PendulumState::default()
}

/// Advance the pendulum by one RK4 step of `dt` and refresh joint positions
pub fn step(state: &mut PendulumState, dt: Scalar) {
    state.step_with(&RungeKuttaFourthOrder, dt);
}

/// (kinetic, potential, total) mechanical energy
pub fn energy(state: &PendulumState) -> (Scalar, Scalar, Scalar) {
    MechanicalEnergy::of(state).into()
}

/// Pivot followed by the two bob positions
pub fn positions(state: &PendulumState) -> [Vector; 3] {
    state.joint_positions()
}
