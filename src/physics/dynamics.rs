//! Equations of motion of a planar two-link pendulum

use super::math::Scalar;
use super::state::{GeneralizedCoordinates, PendulumParameters};

/// Time derivative of a generalized state
///
/// Integrators only ever see a system through this trait, which lets them be
/// exercised against problems with known analytical solutions.
pub trait EquationsOfMotion {
    /// Returns dy/dt at `y`: (dθ1/dt, dθ2/dt, dω1/dt, dω2/dt)
    fn derivative(&self, y: &GeneralizedCoordinates) -> GeneralizedCoordinates;
}

/// Coupled double pendulum with point masses on massless rigid links
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoublePendulumDynamics {
    pub mass: [Scalar; 2],
    pub length: [Scalar; 2],
    pub gravity: Scalar,
}

impl From<&PendulumParameters> for DoublePendulumDynamics {
    fn from(parameters: &PendulumParameters) -> Self {
        Self {
            mass: parameters.mass,
            length: parameters.length,
            gravity: parameters.gravity,
        }
    }
}

impl DoublePendulumDynamics {
    /// Angular accelerations (α1, α2) at the given configuration
    ///
    /// Solves A·α = b with
    ///
    /// ```text
    /// A = | (m1+m2)·l1       m2·l2·cos(θ1-θ2) |
    ///     | l1·cos(θ1-θ2)    l2               |
    ///
    /// b = | -(m1+m2)·g·sin(θ1) - m2·l2·sin(θ1-θ2)·ω2² |
    ///     |  l1·sin(θ1-θ2)·ω1² - g·sin(θ2)             |
    /// ```
    ///
    /// through the explicit 2×2 inverse. det(A) = l1·l2·(m1 + m2·sin²(θ1-θ2))
    /// is strictly positive for positive masses and lengths.
    pub fn angular_acceleration(&self, y: &GeneralizedCoordinates) -> [Scalar; 2] {
        let [m1, m2] = self.mass;
        let [l1, l2] = self.length;
        let g = self.gravity;
        let [theta1, theta2] = y.angle;
        let [omega1, omega2] = y.angular_velocity;

        let delta = theta1 - theta2;
        let sin_delta = libm::sin(delta);
        let cos_delta = libm::cos(delta);

        let b0 = -(m1 + m2) * g * libm::sin(theta1) - m2 * l2 * sin_delta * omega2 * omega2;
        let b1 = l1 * sin_delta * omega1 * omega1 - g * libm::sin(theta2);

        let a00 = (m1 + m2) * l1;
        let a01 = m2 * l2 * cos_delta;
        let a10 = l1 * cos_delta;
        let a11 = l2;

        let inv_det = 1.0 / (a00 * a11 - a01 * a10);

        [
            inv_det * (a11 * b0 - a01 * b1),
            inv_det * (-a10 * b0 + a00 * b1),
        ]
    }
}

impl EquationsOfMotion for DoublePendulumDynamics {
    fn derivative(&self, y: &GeneralizedCoordinates) -> GeneralizedCoordinates {
        GeneralizedCoordinates {
            angle: y.angular_velocity,
            angular_velocity: self.angular_acceleration(y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::STANDARD_GRAVITY;

    fn dynamics() -> DoublePendulumDynamics {
        DoublePendulumDynamics::from(&PendulumParameters::default())
    }

    #[test]
    fn test_kinematic_identity() {
        let dynamics = dynamics();
        let samples = [
            GeneralizedCoordinates::new([0.0, 0.0], [0.0, 0.0]),
            GeneralizedCoordinates::new([2.356, 0.0], [0.0, 0.0]),
            GeneralizedCoordinates::new([-1.3, 7.9], [3.25, -11.5]),
            GeneralizedCoordinates::new([40.0, -40.0], [1e-7, 123.456]),
        ];

        for y in samples {
            let dy = dynamics.derivative(&y);
            assert_eq!(
                dy.angle, y.angular_velocity,
                "Angle rates must equal the input angular velocities exactly"
            );
        }
    }

    #[test]
    fn test_equilibrium_has_no_acceleration() {
        let dy = dynamics().derivative(&GeneralizedCoordinates::default());
        assert_eq!(dy.angular_velocity, [0.0, 0.0]);
    }

    #[test]
    fn test_small_oscillation_restores_equilibrium() {
        let y = GeneralizedCoordinates::new([0.01, 0.01], [0.0, 0.0]);
        let [alpha1, alpha2] = dynamics().angular_acceleration(&y);

        // With both links deflected equally the lower link has no relative
        // bend, so only the upper link feels a restoring torque: α1 = -g·θ/l1
        assert!(alpha1 < 0.0, "α1 should restore, got {alpha1}");
        assert!((alpha1 - (-STANDARD_GRAVITY * 0.01 / 0.2)).abs() < 1e-3);
        assert!(alpha2.abs() < 1e-3, "α2 should be negligible, got {alpha2}");
    }

    #[test]
    fn test_single_link_deflection_linearized() {
        // Linearized double pendulum with m1 = m2, l1 = l2 = l:
        // α1 = (g/l)(-2θ1 + θ2), α2 = (g/l)(2θ1 - 2θ2)
        let y = GeneralizedCoordinates::new([0.001, 0.0], [0.0, 0.0]);
        let [alpha1, alpha2] = dynamics().angular_acceleration(&y);
        let g_over_l = STANDARD_GRAVITY / 0.2;

        assert!((alpha1 - g_over_l * -0.002).abs() < 1e-6);
        assert!((alpha2 - g_over_l * 0.002).abs() < 1e-6);
    }

    #[test]
    fn test_solution_satisfies_linear_system() {
        let dynamics = DoublePendulumDynamics {
            mass: [1.5, 0.75],
            length: [0.3, 0.45],
            gravity: 9.81,
        };
        let y = GeneralizedCoordinates::new([1.1, -0.4], [2.0, -3.0]);
        let [alpha1, alpha2] = dynamics.angular_acceleration(&y);

        let [m1, m2] = dynamics.mass;
        let [l1, l2] = dynamics.length;
        let g = dynamics.gravity;
        let delta = y.angle[0] - y.angle[1];

        let row0 = (m1 + m2) * l1 * alpha1 + m2 * l2 * delta.cos() * alpha2;
        let row1 = l1 * delta.cos() * alpha1 + l2 * alpha2;
        let b0 = -(m1 + m2) * g * y.angle[0].sin()
            - m2 * l2 * delta.sin() * y.angular_velocity[1].powi(2);
        let b1 = l1 * delta.sin() * y.angular_velocity[0].powi(2) - g * y.angle[1].sin();

        assert!((row0 - b0).abs() < 1e-10);
        assert!((row1 - b1).abs() < 1e-10);
    }
}
