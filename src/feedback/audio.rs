//! Feedback domain: one-shot cue sounds and background colour.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::feedback::commands::{CueKind, FeedbackCommand};
use crate::level::LoadedLevel;
use crate::swing::SwingTuning;

/// Loaded handles for each configured cue
#[derive(Resource, Debug, Default)]
pub struct CueSounds {
    pub sounds: HashMap<CueKind, Handle<AudioSource>>,
}

pub(crate) fn load_cue_sounds(
    asset_server: Res<AssetServer>,
    level: Option<Res<LoadedLevel>>,
    mut cue_sounds: ResMut<CueSounds>,
) {
    let Some(level) = level else {
        return;
    };

    let cues = &level.0.cues;
    let paths = [
        (CueKind::Jump, &cues.jump),
        (CueKind::Land, &cues.land),
        (CueKind::Reset, &cues.reset),
        (CueKind::Goal, &cues.goal),
    ];

    for (kind, path) in paths {
        if let Some(path) = path {
            cue_sounds.sounds.insert(kind, asset_server.load(path.clone()));
        }
    }

    info!("Loaded {} cue sounds", cue_sounds.sounds.len());
}

pub(crate) fn play_cues(
    mut commands: Commands,
    mut feedback: MessageReader<FeedbackCommand>,
    cue_sounds: Res<CueSounds>,
) {
    for command in feedback.read() {
        let FeedbackCommand::Cue(kind) = command else {
            continue;
        };

        debug!("Cue: {:?}", kind);
        if let Some(handle) = cue_sounds.sounds.get(kind) {
            commands.spawn((AudioPlayer::new(handle.clone()), PlaybackSettings::DESPAWN));
        }
    }
}

pub(crate) fn setup_background(tuning: Option<Res<SwingTuning>>, mut clear_color: ResMut<ClearColor>) {
    if let Some(tuning) = tuning {
        clear_color.0 = tuning.background_color();
    }
}

pub(crate) fn apply_background(
    mut feedback: MessageReader<FeedbackCommand>,
    mut clear_color: ResMut<ClearColor>,
) {
    for command in feedback.read() {
        if let FeedbackCommand::Background(color) = command {
            clear_color.0 = *color;
        }
    }
}
