//! Runge-Kutta integration methods

use super::Integrator;
use crate::physics::dynamics::EquationsOfMotion;
use crate::physics::math::Scalar;
use crate::physics::state::GeneralizedCoordinates;

/// Fourth-order Runge-Kutta integrator (RK4)
///
/// A classic multi-stage integrator that provides fourth-order accuracy
/// by combining four intermediate evaluations of the derivative.
///
/// The RK4 algorithm:
/// 1. k1 = f(y)
/// 2. k2 = f(y + k1*dt/2)
/// 3. k3 = f(y + k2*dt/2)
/// 4. k4 = f(y + k3*dt)
/// 5. y(t+dt) = y(t) + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKuttaFourthOrder;

impl Integrator for RungeKuttaFourthOrder {
    fn step(&self, y: &mut GeneralizedCoordinates, system: &dyn EquationsOfMotion, dt: Scalar) {
        let y0 = *y;

        let k1 = system.derivative(&y0);
        let k2 = system.derivative(&(y0 + k1 * (dt * 0.5)));
        let k3 = system.derivative(&(y0 + k2 * (dt * 0.5)));
        let k4 = system.derivative(&(y0 + k3 * dt));

        *y = y0 + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0);
    }

    fn name(&self) -> &'static str {
        "runge_kutta_fourth_order"
    }

    fn convergence_order(&self) -> usize {
        4
    }
}
