//! Pendulum state: constant parameters, generalized coordinates and the
//! Cartesian joint positions derived from them

use super::dynamics::DoublePendulumDynamics;
use super::error::PendulumError;
use super::integrators::Integrator;
use super::math::{Scalar, Vector, link_direction};
use super::STANDARD_GRAVITY;
use core::f64::consts::PI;
use core::ops::{Add, Mul};

/// Generalized coordinates (θ1, θ2, ω1, ω2), the sole integration state
///
/// The same shape doubles as the time derivative returned by the equations of
/// motion, in which case `angle` holds dθ/dt and `angular_velocity` holds the
/// angular accelerations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeneralizedCoordinates {
    /// Link angles from the downward vertical, in radians (never wrapped)
    pub angle: [Scalar; 2],
    /// Angular velocities in radians per time unit
    pub angular_velocity: [Scalar; 2],
}

impl GeneralizedCoordinates {
    pub fn new(angle: [Scalar; 2], angular_velocity: [Scalar; 2]) -> Self {
        Self {
            angle,
            angular_velocity,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.angle
            .iter()
            .chain(self.angular_velocity.iter())
            .all(|value| value.is_finite())
    }
}

impl Add for GeneralizedCoordinates {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            angle: [self.angle[0] + rhs.angle[0], self.angle[1] + rhs.angle[1]],
            angular_velocity: [
                self.angular_velocity[0] + rhs.angular_velocity[0],
                self.angular_velocity[1] + rhs.angular_velocity[1],
            ],
        }
    }
}

impl Mul<Scalar> for GeneralizedCoordinates {
    type Output = Self;

    fn mul(self, rhs: Scalar) -> Self {
        Self {
            angle: [self.angle[0] * rhs, self.angle[1] * rhs],
            angular_velocity: [self.angular_velocity[0] * rhs, self.angular_velocity[1] * rhs],
        }
    }
}

/// Physical constants of a two-link pendulum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumParameters {
    pub mass: [Scalar; 2],
    pub length: [Scalar; 2],
    pub gravity: Scalar,
    /// Fixed anchor of the first link, in normalized display units
    pub pivot: Vector,
}

impl Default for PendulumParameters {
    fn default() -> Self {
        Self {
            mass: [1.0, 1.0],
            length: [0.2, 0.2],
            gravity: STANDARD_GRAVITY,
            pivot: Vector::new(0.5, 0.5),
        }
    }
}

impl PendulumParameters {
    /// Reject anything that would make the mass matrix singular
    pub fn validate(&self) -> Result<(), PendulumError> {
        for (link, &value) in self.mass.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(PendulumError::NonPositiveMass { link, value });
            }
        }
        for (link, &value) in self.length.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(PendulumError::NonPositiveLength { link, value });
            }
        }
        if !self.gravity.is_finite() {
            return Err(PendulumError::NonFiniteGravity(self.gravity));
        }
        if !self.pivot.is_finite() {
            return Err(PendulumError::NonFinitePivot);
        }
        Ok(())
    }
}

/// Initial condition the simulator starts from: first link raised to 3π/4,
/// second link hanging, both at rest
pub fn default_initial_coordinates() -> GeneralizedCoordinates {
    GeneralizedCoordinates::new([3.0 * PI / 4.0, 0.0], [0.0, 0.0])
}

/// Cartesian joint positions for the given pivot, link lengths and angles
///
/// Index 0 is the pivot; joint `i` sits `length[i-1]` away from joint `i-1`
/// along the direction of `angle[i-1]`. Joints are computed in order since
/// each depends on the previous one.
pub fn forward_kinematics(
    pivot: Vector,
    length: [Scalar; 2],
    angle: [Scalar; 2],
) -> [Vector; 3] {
    let mut joints = [pivot; 3];
    for i in 1..joints.len() {
        joints[i] = joints[i - 1] + length[i - 1] * link_direction(angle[i - 1]);
    }
    joints
}

/// Complete state of a double pendulum
///
/// Parameters are fixed at construction. Joint positions are a cached
/// projection of the coordinates and are recomputed in full whenever the
/// coordinates change.
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumState {
    parameters: PendulumParameters,
    coordinates: GeneralizedCoordinates,
    joint_position: [Vector; 3],
}

impl Default for PendulumState {
    fn default() -> Self {
        Self::from_validated(PendulumParameters::default(), default_initial_coordinates())
    }
}

impl PendulumState {
    pub fn new(
        parameters: PendulumParameters,
        coordinates: GeneralizedCoordinates,
    ) -> Result<Self, PendulumError> {
        parameters.validate()?;
        if !coordinates.is_finite() {
            return Err(PendulumError::NonFiniteCoordinates);
        }
        Ok(Self::from_validated(parameters, coordinates))
    }

    fn from_validated(parameters: PendulumParameters, coordinates: GeneralizedCoordinates) -> Self {
        let joint_position =
            forward_kinematics(parameters.pivot, parameters.length, coordinates.angle);
        Self {
            parameters,
            coordinates,
            joint_position,
        }
    }

    #[inline]
    pub fn parameters(&self) -> &PendulumParameters {
        &self.parameters
    }

    #[inline]
    pub fn mass(&self) -> [Scalar; 2] {
        self.parameters.mass
    }

    #[inline]
    pub fn length(&self) -> [Scalar; 2] {
        self.parameters.length
    }

    #[inline]
    pub fn gravity(&self) -> Scalar {
        self.parameters.gravity
    }

    #[inline]
    pub fn coordinates(&self) -> GeneralizedCoordinates {
        self.coordinates
    }

    #[inline]
    pub fn angle(&self) -> [Scalar; 2] {
        self.coordinates.angle
    }

    #[inline]
    pub fn angular_velocity(&self) -> [Scalar; 2] {
        self.coordinates.angular_velocity
    }

    #[inline]
    pub fn joint_positions(&self) -> [Vector; 3] {
        self.joint_position
    }

    /// Replace the generalized coordinates, refreshing the joint positions
    pub fn set_coordinates(&mut self, coordinates: GeneralizedCoordinates) {
        self.coordinates = coordinates;
        self.refresh_joint_positions();
    }

    /// Advance by one fixed step of `dt` with the given integrator
    pub fn step_with(&mut self, integrator: &dyn Integrator, dt: Scalar) {
        let dynamics = DoublePendulumDynamics::from(&self.parameters);
        integrator.step(&mut self.coordinates, &dynamics, dt);
        self.refresh_joint_positions();
    }

    fn refresh_joint_positions(&mut self) {
        self.joint_position = forward_kinematics(
            self.parameters.pivot,
            self.parameters.length,
            self.coordinates.angle,
        );
    }
}
