//! Test utilities for plugin testing

use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput, NativeKey};
use bevy::prelude::*;

/// Creates a minimal headless app with the core Bevy plugins the simulation needs
pub fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        bevy::input::InputPlugin,
        bevy::state::app::StatesPlugin,
        bevy::diagnostic::DiagnosticsPlugin,
    ));

    app
}

fn send_key(app: &mut App, key_code: KeyCode, state: ButtonState) {
    app.world_mut().send_event(KeyboardInput {
        key_code,
        logical_key: Key::Unidentified(NativeKey::Unidentified),
        state,
        text: None,
        repeat: false,
        window: Entity::PLACEHOLDER,
    });
}

/// Helper to simulate a key press, seen as `just_pressed` on the next update
pub fn press_key(app: &mut App, key_code: KeyCode) {
    send_key(app, key_code, ButtonState::Pressed);
}

/// Helper to simulate a key release
pub fn release_key(app: &mut App, key_code: KeyCode) {
    send_key(app, key_code, ButtonState::Released);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert!(app.world().contains_resource::<Time>());
        assert!(app.world().contains_resource::<ButtonInput<KeyCode>>());
    }

    #[test]
    fn test_key_helpers() {
        let mut app = create_test_app();

        press_key(&mut app, KeyCode::Space);
        app.update();
        let input = app.world().resource::<ButtonInput<KeyCode>>();
        assert!(input.just_pressed(KeyCode::Space));

        release_key(&mut app, KeyCode::Space);
        app.update();
        let input = app.world().resource::<ButtonInput<KeyCode>>();
        assert!(!input.pressed(KeyCode::Space));
    }
}
