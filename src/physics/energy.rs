//! Mechanical energy of the pendulum
//!
//! Potential energy is measured from the pivot height, so a hanging pendulum
//! has negative potential energy. Total energy is conserved by the exact
//! dynamics; its drift over time is the integrator's error.

use super::math::Scalar;
use super::state::PendulumState;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MechanicalEnergy {
    pub kinetic: Scalar,
    pub potential: Scalar,
    pub total: Scalar,
}

impl MechanicalEnergy {
    /// Energy of the given state
    ///
    /// ```text
    /// T = ½(m1+m2)·l1²·ω1² + ½·m2·l2²·ω2² + m2·l1·l2·cos(θ1-θ2)·ω1·ω2
    /// V = -(m1+m2)·l1·g·cos(θ1) - m2·l2·g·cos(θ2)
    /// ```
    pub fn of(state: &PendulumState) -> Self {
        let [m1, m2] = state.mass();
        let [l1, l2] = state.length();
        let g = state.gravity();
        let [theta1, theta2] = state.angle();
        let [omega1, omega2] = state.angular_velocity();

        let kinetic = 0.5 * (m1 + m2) * l1 * l1 * omega1 * omega1
            + 0.5 * m2 * l2 * l2 * omega2 * omega2
            + m2 * l1 * l2 * libm::cos(theta1 - theta2) * omega1 * omega2;
        let potential =
            -(m1 + m2) * l1 * g * libm::cos(theta1) - m2 * l2 * g * libm::cos(theta2);

        Self {
            kinetic,
            potential,
            total: kinetic + potential,
        }
    }

    /// Absolute change in total energy relative to a reference measurement
    pub fn drift_from(&self, reference: &MechanicalEnergy) -> Scalar {
        (self.total - reference.total).abs()
    }
}

impl From<MechanicalEnergy> for (Scalar, Scalar, Scalar) {
    fn from(energy: MechanicalEnergy) -> Self {
        (energy.kinetic, energy.potential, energy.total)
    }
}

impl fmt::Display for MechanicalEnergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kinetic {:.4} potential {:.4} total energy {:.6}",
            self.kinetic, self.potential, self.total
        )
    }
}
