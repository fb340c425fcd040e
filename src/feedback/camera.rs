//! Feedback domain: weighted camera framing.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::feedback::commands::{FeedbackCommand, TrackTarget};
use crate::level::AnchorRegistry;
use crate::swing::Player;

/// World units shown per pixel before framing kicks in
pub(crate) const BASE_CAMERA_SCALE: f32 = 0.02;
/// How quickly the camera closes the gap to its framing goal (1/s)
pub(crate) const FOLLOW_SHARPNESS: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingTarget {
    pub target: TrackTarget,
    pub weight: f32,
    pub radius: f32,
}

/// Weighted set of points the camera keeps in view
#[derive(Resource, Debug, Default)]
pub struct CameraFraming {
    targets: Vec<FramingTarget>,
}

impl CameraFraming {
    /// Adding a target that is already tracked is a no-op.
    pub fn add(&mut self, target: TrackTarget, weight: f32, radius: f32) {
        if self.contains(target) {
            return;
        }
        self.targets.push(FramingTarget {
            target,
            weight,
            radius,
        });
    }

    pub fn remove(&mut self, target: TrackTarget) {
        self.targets.retain(|t| t.target != target);
    }

    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn contains(&self, target: TrackTarget) -> bool {
        self.targets.iter().any(|t| t.target == target)
    }

    pub fn targets(&self) -> &[FramingTarget] {
        &self.targets
    }

    /// Weighted centre of the resolvable targets and the half-extent
    /// needed to keep every target's radius in view.
    pub fn frame(&self, resolve: impl Fn(TrackTarget) -> Option<Vec2>) -> Option<(Vec2, f32)> {
        let resolved: Vec<(Vec2, &FramingTarget)> = self
            .targets
            .iter()
            .filter(|t| t.weight > 0.0)
            .filter_map(|t| resolve(t.target).map(|p| (p, t)))
            .collect();

        let total_weight: f32 = resolved.iter().map(|(_, t)| t.weight).sum();
        if total_weight <= 0.0 {
            return None;
        }

        let center = resolved
            .iter()
            .fold(Vec2::ZERO, |acc, (p, t)| acc + *p * t.weight)
            / total_weight;
        let extent = resolved
            .iter()
            .map(|(p, t)| p.distance(center) + t.radius)
            .fold(0.0, f32::max);

        Some((center, extent))
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: BASE_CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub(crate) fn apply_tracking_commands(
    mut commands: MessageReader<FeedbackCommand>,
    mut framing: ResMut<CameraFraming>,
) {
    for command in commands.read() {
        match *command {
            FeedbackCommand::TrackAdd {
                target,
                weight,
                radius,
            } => framing.add(target, weight, radius),
            FeedbackCommand::TrackRemove(target) => framing.remove(target),
            FeedbackCommand::TrackClear => framing.clear(),
            FeedbackCommand::Cue(_) | FeedbackCommand::Background(_) => {}
        }
    }
}

/// Ease the camera toward the framing centre and zoom to fit.
pub(crate) fn follow_framing(
    time: Res<Time>,
    framing: Res<CameraFraming>,
    registry: Option<Res<AnchorRegistry>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    player_query: Query<&GlobalTransform, With<Player>>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<Camera2d>>,
) {
    let player = player_query.single().ok().map(|t| t.translation().truncate());
    let resolve = |target: TrackTarget| match target {
        TrackTarget::Player => player,
        TrackTarget::Anchor(index) => registry
            .as_ref()
            .and_then(|r| r.at(index))
            .map(|a| a.pivot.truncate()),
    };

    let Some((center, extent)) = framing.frame(resolve) else {
        return;
    };

    let viewport_height = window_query
        .single()
        .map(|w| w.height())
        .unwrap_or(720.0)
        .max(1.0);
    let target_scale = (extent * 2.0 / viewport_height).max(BASE_CAMERA_SCALE);
    let blend = 1.0 - (-FOLLOW_SHARPNESS * time.delta_secs()).exp();

    for (mut transform, mut projection) in &mut camera_query {
        let current = transform.translation.truncate();
        let next = current.lerp(center, blend);
        transform.translation = next.extend(transform.translation.z);

        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scale += (target_scale - ortho.scale) * blend;
        }
    }
}
