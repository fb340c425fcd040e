//! Level domain: tagged overlap events delivered to the player.

use bevy::ecs::message::Message;

/// What the player started overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapKind {
    GrabAnchor(usize),
    HazardZone,
    Other,
}

/// Fired when the player's collider starts touching a level sensor
#[derive(Debug, Clone, Copy)]
pub struct OverlapEvent {
    pub kind: OverlapKind,
}

impl Message for OverlapEvent {}
