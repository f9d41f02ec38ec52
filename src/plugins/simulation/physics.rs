use crate::physics::{self, MechanicalEnergy};
use crate::resources::{CurrentEnergy, Pendulum, PhysicsTime};
use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    Integrate,
    MeasureEnergy,
}

/// Advance the pendulum by this frame's fixed steps
pub fn integrate_pendulum(mut pendulum: ResMut<Pendulum>, mut physics_time: ResMut<PhysicsTime>) {
    if physics_time.is_paused() {
        return;
    }

    let dt = physics_time.dt;
    for _ in 0..physics_time.steps_per_frame {
        physics::step(&mut pendulum.0, dt);
        physics_time.record_step();
    }
}

/// Evaluate the energy monitor on the current state
pub fn measure_energy(pendulum: Res<Pendulum>, mut current_energy: ResMut<CurrentEnergy>) {
    **current_energy = MechanicalEnergy::of(&pendulum);
}
