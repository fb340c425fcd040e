//! Swing domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Swing and launch tuning. Angular values are in degrees.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwingTuning {
    /// Angular speed after a bind or reset (deg/s)
    pub base_speed: f32,
    pub max_speed: f32,
    /// Gain while accelerate is held (deg/s per second)
    pub increment_rate: f32,
    /// Orbit radius around the pivot
    pub radius: f32,
    /// Fraction of the swing speed left at the top of the arc
    pub apex_multiplier: f32,
    /// Height of the apex above the pivot as a fraction of the radius
    pub apex_normal: f32,
    pub player_radius: f32,
    pub arm_length: f32,
    pub anchor_weight: f32,
    pub home_weight: f32,
    pub player_weight: f32,
    pub track_radius: f32,
    pub background: (f32, f32, f32),
    pub goal_background: (f32, f32, f32),
}

impl Default for SwingTuning {
    fn default() -> Self {
        Self {
            base_speed: 600.0,
            max_speed: 500_000.0,
            increment_rate: 400.0,
            radius: 2.0,
            apex_multiplier: 0.5,
            apex_normal: 0.6,
            player_radius: 0.3,
            arm_length: 0.5,
            anchor_weight: 1.0,
            home_weight: 2.0,
            player_weight: 2.0,
            track_radius: 8.0,
            background: (0.19, 0.3, 0.47),
            goal_background: (0.0, 0.0, 1.0),
        }
    }
}

impl SwingTuning {
    pub fn background_color(&self) -> Color {
        let (r, g, b) = self.background;
        Color::srgb(r, g, b)
    }

    pub fn goal_background_color(&self) -> Color {
        let (r, g, b) = self.goal_background;
        Color::srgb(r, g, b)
    }
}

/// Input sampled once per frame. Edges are consumed by the frame pass;
/// `accelerate_held` is read by the fixed tick.
#[derive(Resource, Debug, Default, Clone)]
pub struct SwingInput {
    pub any_just_pressed: bool,
    pub jump_just_pressed: bool,
    pub reset_just_pressed: bool,
    pub accelerate_held: bool,
    /// Cursor position in world space, if the cursor is over the window
    pub aim_target: Option<Vec3>,
}
