//! Swing domain: input sampling for the frame pass.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::swing::SwingInput;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    mut input: ResMut<SwingInput>,
) {
    input.any_just_pressed =
        keyboard.get_just_pressed().next().is_some() || mouse.get_just_pressed().next().is_some();
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
    input.reset_just_pressed = keyboard.just_pressed(KeyCode::KeyR);
    input.accelerate_held =
        keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);

    // Cursor in world space for aiming while flying
    input.aim_target = None;
    let Ok(window) = window_query.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    for (camera, camera_transform) in &camera_query {
        if let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) {
            input.aim_target = Some(world.extend(0.0));
            break;
        }
    }
}
