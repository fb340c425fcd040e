//! Swing domain: player and appendage components.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// The aiming, grabbing appendage. A sensor collider attached to the
/// player's body; its world orientation comes from the machine's `arm_aim`
/// alone, never from the body's rotation.
#[derive(Component, Debug)]
pub struct Arm;

pub(crate) const PLAYER_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub(crate) const ARM_COLOR: Color = Color::srgb(0.75, 0.6, 0.45);
pub(crate) const ARM_THICKNESS: f32 = 0.08;
/// Collider width of the arm; wider than the sprite so grabs are forgiving
pub(crate) const ARM_GRIP_WIDTH: f32 = 0.2;
