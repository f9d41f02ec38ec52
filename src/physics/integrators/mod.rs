//! Numerical integration methods for the pendulum equations of motion

use super::dynamics::EquationsOfMotion;
use super::math::Scalar;
use super::state::GeneralizedCoordinates;

pub mod runge_kutta;

pub use runge_kutta::RungeKuttaFourthOrder;

/// Base trait for fixed-step integrators
pub trait Integrator: Send + Sync {
    /// Advance the generalized state by exactly one step of `dt`
    ///
    /// Every stage must read a consistent snapshot of `y`; the update is
    /// applied to all four components at once.
    ///
    /// # Arguments
    /// * `y` - Generalized coordinates, updated in place
    /// * `system` - Equations of motion supplying dy/dt
    /// * `dt` - Time step
    fn step(&self, y: &mut GeneralizedCoordinates, system: &dyn EquationsOfMotion, dt: Scalar);

    /// Get the name of this integrator
    fn name(&self) -> &'static str;

    /// Order of the global truncation error
    fn convergence_order(&self) -> usize;
}
