use crate::physics::{MechanicalEnergy, PendulumState, Scalar};
use crate::prelude::*;

/// The simulated pendulum; the only writer is the integration system
#[derive(Resource, Deref, DerefMut, Debug, Clone, Default, PartialEq)]
pub struct Pendulum(pub PendulumState);

/// Energy measured after the most recent frame's integration
#[derive(Resource, Deref, DerefMut, Copy, Clone, Debug, Default, PartialEq)]
pub struct CurrentEnergy(pub MechanicalEnergy);

/// Energy at the start of the run, the reference for drift
#[derive(Resource, Deref, DerefMut, Copy, Clone, Debug, Default, PartialEq)]
pub struct InitialEnergy(pub MechanicalEnergy);

/// Resource for physics timestep control
///
/// The pendulum advances `steps_per_frame` fixed steps of `dt` every rendered
/// frame, independent of wall-clock time.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PhysicsTime {
    /// Timestep for physics simulation
    pub dt: Scalar,
    /// Integration steps taken per rendered frame
    pub steps_per_frame: usize,
    /// Whether physics is paused
    pub paused: bool,
    /// Simulated time since the last (re)start
    pub elapsed: Scalar,
    /// Steps taken since the last (re)start
    pub step_count: u64,
}

impl Default for PhysicsTime {
    fn default() -> Self {
        Self {
            dt: crate::physics::DEFAULT_TIME_STEP,
            steps_per_frame: 1,
            paused: false,
            elapsed: 0.0,
            step_count: 0,
        }
    }
}

impl PhysicsTime {
    pub fn new(dt: Scalar, steps_per_frame: usize) -> Self {
        Self {
            dt,
            steps_per_frame,
            ..default()
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn record_step(&mut self) {
        self.elapsed += self.dt;
        self.step_count += 1;
    }

    pub fn reset_clock(&mut self) {
        self.elapsed = 0.0;
        self.step_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physics_time_pause_toggle() {
        let mut time = PhysicsTime::default();
        assert!(!time.is_paused());

        time.pause();
        assert!(time.is_paused());

        time.unpause();
        assert!(!time.is_paused());
    }

    #[test]
    fn test_physics_time_clock() {
        let mut time = PhysicsTime::new(0.25, 2);
        time.record_step();
        time.record_step();

        assert_eq!(time.step_count, 2);
        assert_eq!(time.elapsed, 0.5);

        time.reset_clock();
        assert_eq!(time.step_count, 0);
        assert_eq!(time.elapsed, 0.0);
        assert_eq!(time.steps_per_frame, 2);
    }
}
