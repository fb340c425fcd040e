//! Level domain: overlap classification and anchor detectability.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::level::components::{ANCHOR_COLOR, ANCHOR_GRABBED_COLOR, Anchor, GoalAnchor, Hazard};
use crate::level::events::{OverlapEvent, OverlapKind};
use crate::level::registry::AnchorRegistry;
use crate::swing::{Arm, Player};

/// Which part of the player touched a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSide {
    Body,
    Arm,
}

/// Tag a contact between part of the player and another collider. The arm
/// only ever grabs; everything else it brushes is dropped.
pub fn classify_contact(
    side: ContactSide,
    anchor: Option<&Anchor>,
    is_hazard: bool,
) -> Option<OverlapKind> {
    match (side, anchor) {
        (_, Some(anchor)) => Some(OverlapKind::GrabAnchor(anchor.index)),
        (ContactSide::Body, None) if is_hazard => Some(OverlapKind::HazardZone),
        (ContactSide::Body, None) => Some(OverlapKind::Other),
        (ContactSide::Arm, None) => None,
    }
}

/// Turn raw collision starts involving the player or its arm into tagged
/// overlap events.
pub(crate) fn classify_overlaps(
    mut collision_events: MessageReader<CollisionStart>,
    mut overlaps: MessageWriter<OverlapEvent>,
    player_query: Query<(), With<Player>>,
    arm_query: Query<(), With<Arm>>,
    anchor_query: Query<&Anchor>,
    hazard_query: Query<(), With<Hazard>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (own, other) in pairs {
            let side = if player_query.contains(own) {
                ContactSide::Body
            } else if arm_query.contains(own) {
                ContactSide::Arm
            } else {
                continue;
            };

            let anchor = anchor_query.get(other).ok();
            if let Some(kind) = classify_contact(side, anchor, hazard_query.contains(other)) {
                overlaps.write(OverlapEvent { kind });
            }
        }
    }
}

/// Mirror each anchor's `active` flag onto its sensor.
pub(crate) fn sync_anchor_detection(
    mut commands: Commands,
    registry: Res<AnchorRegistry>,
    mut anchor_query: Query<
        (Entity, &Anchor, &mut Sprite, Has<ColliderDisabled>),
        Without<GoalAnchor>,
    >,
    goal_query: Query<(Entity, &Anchor, Has<ColliderDisabled>), With<GoalAnchor>>,
) {
    for (entity, anchor, mut sprite, disabled) in &mut anchor_query {
        let active = registry.at(anchor.index).is_some_and(|a| a.active);
        let color = if active {
            ANCHOR_COLOR
        } else {
            ANCHOR_GRABBED_COLOR
        };
        if sprite.color != color {
            sprite.color = color;
        }
        set_detectable(&mut commands, entity, active, disabled);
    }

    for (entity, anchor, disabled) in &goal_query {
        let active = registry.at(anchor.index).is_some_and(|a| a.active);
        set_detectable(&mut commands, entity, active, disabled);
    }
}

fn set_detectable(commands: &mut Commands, entity: Entity, active: bool, disabled: bool) {
    if active && disabled {
        commands.entity(entity).remove::<ColliderDisabled>();
    } else if !active && !disabled {
        commands.entity(entity).insert(ColliderDisabled);
    }
}
