//! Controls plugin - Self-contained plugin pattern
//!
//! This plugin translates keyboard input into SimulationCommand events:
//!
//! | Key    | Command         |
//! |--------|-----------------|
//! | Escape | Quit            |
//! | Space  | TogglePause     |
//! | R      | Restart         |
//! | H      | ToggleEnergyHud |

use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            keyboard_input_handler.in_set(SimulationSet::Input),
        );
    }
}

fn keyboard_input_handler(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: EventWriter<SimulationCommand>,
) {
    for &keycode in keys.get_just_pressed() {
        match keycode {
            KeyCode::Escape => {
                commands.write(SimulationCommand::Quit);
            }
            KeyCode::Space => {
                commands.write(SimulationCommand::TogglePause);
            }
            KeyCode::KeyR => {
                commands.write(SimulationCommand::Restart);
            }
            KeyCode::KeyH => {
                commands.write(SimulationCommand::ToggleEnergyHud);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::simulation::SimulationPlugin;
    use crate::test_utils::{create_test_app, press_key, release_key};

    fn app_with_controls() -> App {
        let mut app = create_test_app();
        app.add_plugins(SimulationPlugin::with_config(SimulationConfig::default()));
        app.add_plugins(ControlsPlugin);
        app.update();
        app
    }

    #[test]
    fn test_escape_exits() {
        let mut app = app_with_controls();

        press_key(&mut app, KeyCode::Escape);
        app.update();

        assert_eq!(app.should_exit(), Some(AppExit::Success));
    }

    #[test]
    fn test_space_pauses_integration() {
        let mut app = app_with_controls();

        press_key(&mut app, KeyCode::Space);
        app.update();
        release_key(&mut app, KeyCode::Space);

        let steps_when_paused = app.world().resource::<PhysicsTime>().step_count;
        let state_when_paused = app.world().resource::<Pendulum>().clone();
        for _ in 0..5 {
            app.update();
        }

        assert!(app.world().resource::<PhysicsTime>().is_paused());
        assert_eq!(
            app.world().resource::<PhysicsTime>().step_count,
            steps_when_paused
        );
        assert_eq!(*app.world().resource::<Pendulum>(), state_when_paused);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut app = app_with_controls();
        let steps_before = app.world().resource::<PhysicsTime>().step_count;

        press_key(&mut app, KeyCode::KeyZ);
        app.update();

        assert!(app.should_exit().is_none());
        assert!(!app.world().resource::<PhysicsTime>().is_paused());
        assert_eq!(
            app.world().resource::<PhysicsTime>().step_count,
            steps_before + 1
        );
    }
}
