//! Level domain: components for anchor and hazard sensors.

use bevy::prelude::*;

/// Sensor entity for the anchor at `index` in the `AnchorRegistry`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Anchor {
    pub index: usize,
}

/// Marker for the final anchor
#[derive(Component, Debug)]
pub struct GoalAnchor;

/// Zone that sends the player back to the first anchor
#[derive(Component, Debug)]
pub struct Hazard;

pub(crate) const ANCHOR_COLOR: Color = Color::srgb(0.55, 0.4, 0.25);
pub(crate) const ANCHOR_GRABBED_COLOR: Color = Color::srgb(0.3, 0.25, 0.2);
pub(crate) const GOAL_COLOR: Color = Color::srgb(0.95, 0.8, 0.2);
pub(crate) const HAZARD_COLOR: Color = Color::srgba(0.8, 0.15, 0.15, 0.6);
pub(crate) const ANCHOR_SPRITE_SIZE: f32 = 0.4;
