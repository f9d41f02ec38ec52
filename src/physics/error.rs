//! Errors raised while constructing a pendulum

use crate::physics::math::Scalar;
use std::fmt;

/// Rejection reasons for pendulum parameters and initial conditions
///
/// Construction fails fast so that the equations of motion never see a
/// degenerate (singular) mass matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendulumError {
    /// A link mass was zero, negative or not finite
    NonPositiveMass { link: usize, value: Scalar },
    /// A link length was zero, negative or not finite
    NonPositiveLength { link: usize, value: Scalar },
    /// Gravitational acceleration was NaN or infinite
    NonFiniteGravity(Scalar),
    /// The fixed pivot was NaN or infinite
    NonFinitePivot,
    /// An angle or angular velocity was NaN or infinite
    NonFiniteCoordinates,
}

impl fmt::Display for PendulumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendulumError::NonPositiveMass { link, value } => {
                write!(f, "mass of link {link} must be positive, got {value}")
            }
            PendulumError::NonPositiveLength { link, value } => {
                write!(f, "length of link {link} must be positive, got {value}")
            }
            PendulumError::NonFiniteGravity(value) => {
                write!(f, "gravity must be finite, got {value}")
            }
            PendulumError::NonFinitePivot => write!(f, "pivot position must be finite"),
            PendulumError::NonFiniteCoordinates => {
                write!(f, "initial angles and angular velocities must be finite")
            }
        }
    }
}

impl std::error::Error for PendulumError {}
