//! Visualization plugin - Self-contained plugin pattern
//!
//! Draws the pendulum in normalized display units: the camera maps the unit
//! square onto the window, so a joint at (0.5, 0.5) sits in the centre.
//! The pivot and both bobs are filled circles whose transforms are synced
//! from the physics state every frame; the links are optional gizmo lines.

use crate::physics;
use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;
use bevy::render::camera::ScalingMode;

/// Marks the circle drawn for joint `0` (pivot), `1` or `2` (bobs)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointMarker(pub usize);

pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_camera, spawn_joint_markers));
        app.add_systems(
            Update,
            (
                sync_joint_transforms,
                draw_links.run_if(|config: Res<SimulationConfig>| config.rendering.show_links),
            )
                .in_set(SimulationSet::UI),
        );
    }
}

fn spawn_camera(mut commands: Commands, config: Res<SimulationConfig>) {
    commands.insert_resource(ClearColor(config.rendering.background_color()));

    commands.spawn((
        Name::new("Pendulum Camera"),
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: 1.0,
                height: 1.0,
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.5, 0.5, 0.0),
    ));
}

fn spawn_joint_markers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<SimulationConfig>,
    pendulum: Res<Pendulum>,
) {
    let mesh = meshes.add(Circle::new(config.rendering.joint_radius));
    let material = materials.add(config.rendering.joint_color());

    for (index, position) in physics::positions(&pendulum).into_iter().enumerate() {
        commands.spawn((
            Name::new(format!("Joint {index}")),
            JointMarker(index),
            Mesh2d(mesh.clone()),
            MeshMaterial2d(material.clone()),
            Transform::from_translation(position.as_vec2().extend(0.0)),
        ));
    }
}

/// Synchronize marker transforms from the high-precision joint positions
fn sync_joint_transforms(
    pendulum: Res<Pendulum>,
    mut markers: Query<(&JointMarker, &mut Transform)>,
) {
    if !pendulum.is_changed() {
        return;
    }

    let positions = physics::positions(&pendulum);
    for (marker, mut transform) in &mut markers {
        if let Some(position) = positions.get(marker.0) {
            transform.translation = position.as_vec2().extend(transform.translation.z);
        }
    }
}

fn draw_links(mut gizmos: Gizmos, pendulum: Res<Pendulum>, config: Res<SimulationConfig>) {
    let color = config.rendering.joint_color();
    let positions = physics::positions(&pendulum).map(|position| position.as_vec2());

    for link in positions.windows(2) {
        gizmos.line_2d(link[0], link[1], color);
    }
}
