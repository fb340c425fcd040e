//! Feedback domain: camera framing, cue audio, and background colour
//! driven by `FeedbackCommand` messages from the swing machine.

mod audio;
mod camera;
mod commands;


pub use commands::{CueKind, Feedback, FeedbackCommand, TrackTarget};

use bevy::prelude::*;

use crate::feedback::audio::{
    CueSounds, apply_background, load_cue_sounds, play_cues, setup_background,
};
use crate::feedback::camera::{
    CameraFraming, apply_tracking_commands, follow_framing, setup_camera,
};
use crate::level::LevelSetup;

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraFraming>()
            .init_resource::<CueSounds>()
            .add_message::<FeedbackCommand>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Startup,
                (load_cue_sounds, setup_background).after(LevelSetup),
            )
            .add_systems(
                Update,
                (apply_tracking_commands, play_cues, apply_background),
            )
            .add_systems(PostUpdate, follow_framing);
    }
}
