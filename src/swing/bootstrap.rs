//! Swing domain: player bootstrap from the loaded level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::AnchorRegistry;
use crate::swing::body::BodyState;
use crate::swing::components::{
    ARM_COLOR, ARM_GRIP_WIDTH, ARM_THICKNESS, Arm, PLAYER_COLOR, Player,
};
use crate::swing::machine::SwingMachine;
use crate::swing::systems::arm_local_transform;
use crate::swing::SwingTuning;

/// Spawn the player parked below anchor 0, plus its grabbing arm.
pub(crate) fn spawn_player(
    mut commands: Commands,
    registry: Option<Res<AnchorRegistry>>,
    tuning: Option<Res<SwingTuning>>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let (Some(registry), Some(tuning)) = (registry, tuning) else {
        warn!("Level not loaded, skipping player spawn");
        return;
    };

    let mut body = BodyState::at(registry.home_pivot() + Vec3::NEG_Y * tuning.radius);
    let machine = SwingMachine::new(&registry, &tuning, &mut body);
    let aim = machine.arm_aim().truncate();

    info!(
        "Spawning player: anchor=#{}, radius={}, base_speed={}",
        machine.current_anchor().unwrap_or(0),
        tuning.radius,
        tuning.base_speed
    );

    commands
        .spawn((
            Player,
            machine,
            Sprite {
                color: PLAYER_COLOR,
                custom_size: Some(Vec2::splat(tuning.player_radius * 2.0)),
                ..default()
            },
            Transform::from_translation(body.position.with_z(1.0)),
            // Physics
            (
                RigidBody::Kinematic,
                Collider::circle(tuning.player_radius),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity(body.velocity.truncate()),
                CollisionEventsEnabled,
            ),
        ))
        .with_children(|parent| {
            // Child collider so the grip rides on the player's body; its
            // local transform is rewritten from the aim every frame.
            let (translation, rotation) =
                arm_local_transform(0.0, aim, tuning.arm_length);
            parent.spawn((
                Arm,
                Sprite {
                    color: ARM_COLOR,
                    custom_size: Some(Vec2::new(tuning.arm_length, ARM_THICKNESS)),
                    ..default()
                },
                Transform {
                    translation: translation.with_z(0.5),
                    rotation,
                    ..default()
                },
                Collider::rectangle(tuning.arm_length, ARM_GRIP_WIDTH),
                Sensor,
                CollisionEventsEnabled,
            ));
        });
}
