//! Feedback domain: fire-and-forget requests from gameplay to camera,
//! audio and background.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

/// One-shot sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueKind {
    Jump,
    Land,
    Reset,
    Goal,
}

/// Something the camera framing aggregate can keep in view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackTarget {
    Player,
    Anchor(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackCommand {
    Cue(CueKind),
    Background(Color),
    TrackAdd {
        target: TrackTarget,
        weight: f32,
        radius: f32,
    },
    TrackRemove(TrackTarget),
    TrackClear,
}

impl Message for FeedbackCommand {}

/// Outbound side effects of the swing machine. Nothing is returned.
pub trait Feedback {
    fn notify_cue(&mut self, cue: CueKind);
    fn set_background(&mut self, color: Color);
    fn track_add(&mut self, target: TrackTarget, weight: f32, radius: f32);
    fn track_remove(&mut self, target: TrackTarget);
    fn track_clear(&mut self);
}

impl Feedback for Vec<FeedbackCommand> {
    fn notify_cue(&mut self, cue: CueKind) {
        self.push(FeedbackCommand::Cue(cue));
    }

    fn set_background(&mut self, color: Color) {
        self.push(FeedbackCommand::Background(color));
    }

    fn track_add(&mut self, target: TrackTarget, weight: f32, radius: f32) {
        self.push(FeedbackCommand::TrackAdd {
            target,
            weight,
            radius,
        });
    }

    fn track_remove(&mut self, target: TrackTarget) {
        self.push(FeedbackCommand::TrackRemove(target));
    }

    fn track_clear(&mut self) {
        self.push(FeedbackCommand::TrackClear);
    }
}

impl Feedback for MessageWriter<'_, FeedbackCommand> {
    fn notify_cue(&mut self, cue: CueKind) {
        self.write(FeedbackCommand::Cue(cue));
    }

    fn set_background(&mut self, color: Color) {
        self.write(FeedbackCommand::Background(color));
    }

    fn track_add(&mut self, target: TrackTarget, weight: f32, radius: f32) {
        self.write(FeedbackCommand::TrackAdd {
            target,
            weight,
            radius,
        });
    }

    fn track_remove(&mut self, target: TrackTarget) {
        self.write(FeedbackCommand::TrackRemove(target));
    }

    fn track_clear(&mut self) {
        self.write(FeedbackCommand::TrackClear);
    }
}
