//! Swing domain: systems that drive the machine on both cadences.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::feedback::FeedbackCommand;
use crate::level::{AnchorRegistry, OverlapEvent};
use crate::swing::body::AvianBody;
use crate::swing::components::{Arm, Player};
use crate::swing::machine::{SwingContext, SwingMachine};
use crate::swing::{SwingInput, SwingTuning};

type PlayerBodyQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut SwingMachine,
        &'static mut Position,
        &'static mut LinearVelocity,
        &'static mut RigidBody,
        &'static Transform,
    ),
    With<Player>,
>;

/// Per-frame pass: input edges and aim.
pub(crate) fn update_frame(
    input: Res<SwingInput>,
    mut registry: ResMut<AnchorRegistry>,
    tuning: Res<SwingTuning>,
    mut feedback: MessageWriter<FeedbackCommand>,
    mut query: PlayerBodyQuery,
) {
    for (mut machine, position, velocity, rigid_body, transform) in &mut query {
        let mut body = AvianBody {
            position,
            velocity,
            rigid_body,
            z: transform.translation.z,
        };
        let mut ctx = SwingContext {
            registry: &mut registry,
            tuning: &tuning,
            body: &mut body,
            feedback: &mut feedback,
        };
        machine.update_frame(&input, &mut ctx);
    }
}

/// Fixed-tick pass: orbit integration and speed sampling.
pub(crate) fn update_tick(
    time: Res<Time>,
    input: Res<SwingInput>,
    mut registry: ResMut<AnchorRegistry>,
    tuning: Res<SwingTuning>,
    mut feedback: MessageWriter<FeedbackCommand>,
    mut query: PlayerBodyQuery,
) {
    let dt = time.delta_secs();

    for (mut machine, position, velocity, rigid_body, transform) in &mut query {
        let mut body = AvianBody {
            position,
            velocity,
            rigid_body,
            z: transform.translation.z,
        };
        let mut ctx = SwingContext {
            registry: &mut registry,
            tuning: &tuning,
            body: &mut body,
            feedback: &mut feedback,
        };
        machine.update_tick(dt, &input, &mut ctx);
    }
}

/// Deliver this tick's overlap events to the machine.
pub(crate) fn handle_overlaps(
    mut overlaps: MessageReader<OverlapEvent>,
    mut registry: ResMut<AnchorRegistry>,
    tuning: Res<SwingTuning>,
    mut feedback: MessageWriter<FeedbackCommand>,
    mut query: PlayerBodyQuery,
) {
    let Ok((mut machine, position, velocity, rigid_body, transform)) = query.single_mut() else {
        overlaps.clear();
        return;
    };
    let mut body = AvianBody {
        position,
        velocity,
        rigid_body,
        z: transform.translation.z,
    };
    let mut ctx = SwingContext {
        registry: &mut registry,
        tuning: &tuning,
        body: &mut body,
        feedback: &mut feedback,
    };

    for event in overlaps.read() {
        machine.on_overlap(event.kind, &mut ctx);
    }
}

/// Local transform of the arm under a body rotated by `body_angle` so that
/// in world space it starts at the body centre and points along `aim`.
pub(crate) fn arm_local_transform(body_angle: f32, aim: Vec2, arm_length: f32) -> (Vec3, Quat) {
    let undo_body = Quat::from_rotation_z(-body_angle);
    let offset = (aim * arm_length * 0.5).extend(0.0);
    let world_rotation = Quat::from_rotation_z(Vec2::X.angle_to(aim));
    (undo_body * offset, undo_body * world_rotation)
}

/// Apply the machine's body and arm orientation to the scene.
pub(crate) fn sync_orientation(
    tuning: Res<SwingTuning>,
    mut player_query: Query<(&SwingMachine, &mut Rotation), With<Player>>,
    mut arm_query: Query<&mut Transform, (With<Arm>, Without<Player>)>,
) {
    let Ok((machine, mut rotation)) = player_query.single_mut() else {
        return;
    };

    let up = machine.body_up().truncate();
    let angle = Vec2::Y.angle_to(up);
    if (rotation.as_radians() - angle).abs() > f32::EPSILON {
        *rotation = Rotation::radians(angle);
    }

    let (translation, arm_rotation) =
        arm_local_transform(angle, machine.arm_aim().truncate(), tuning.arm_length);
    for mut transform in &mut arm_query {
        transform.translation = translation.with_z(transform.translation.z);
        transform.rotation = arm_rotation;
    }
}
