//! Swing domain: the player's movement state machine.
//!
//! The machine is plain data driven by explicit calls: `update_frame` once
//! per rendered frame, `update_tick` once per fixed physics step, and
//! `on_overlap` whenever the level reports a sensor contact. Everything it
//! touches outside itself goes through a `SwingContext`.

use bevy::prelude::*;

use crate::feedback::{CueKind, Feedback, TrackTarget};
use crate::level::{AnchorRegistry, OverlapKind};
use crate::swing::body::PhysicsBody;
use crate::swing::resources::{SwingInput, SwingTuning};
use crate::swing::sampler::SpeedSampler;
use crate::swing::state::SwingState;

/// Borrowed collaborators for one machine call.
pub struct SwingContext<'a, B: PhysicsBody, F: Feedback> {
    pub registry: &'a mut AnchorRegistry,
    pub tuning: &'a SwingTuning,
    pub body: &'a mut B,
    pub feedback: &'a mut F,
}

#[derive(Component, Debug, Clone)]
pub struct SwingMachine {
    state: SwingState,
    current_anchor: Option<usize>,
    /// Anchor the camera looks ahead to after a landing
    next_anchor: Option<usize>,
    pivot: Option<Vec3>,
    /// Controlled angular speed (deg/s) before apex easing
    swing_speed: f32,
    /// Angular speed actually applied on the last tick
    effective_speed: f32,
    sampler: SpeedSampler,
    last_position: Vec3,
    /// Body "up", toward the pivot while bound
    body_up: Vec3,
    /// Appendage pointing direction
    arm_aim: Vec3,
    overlap_latched: bool,
    invariant_violations: u32,
}

impl SwingMachine {
    /// Parks the player on anchor 0 in `Start`. The body is made kinematic
    /// and placed on the orbit circle.
    pub fn new<B: PhysicsBody>(registry: &AnchorRegistry, tuning: &SwingTuning, body: &mut B) -> Self {
        let mut machine = Self {
            state: SwingState::Start,
            current_anchor: None,
            next_anchor: None,
            pivot: None,
            swing_speed: tuning.base_speed,
            effective_speed: tuning.base_speed,
            sampler: SpeedSampler::new(),
            last_position: body.position(),
            body_up: Vec3::Y,
            arm_aim: Vec3::Y,
            overlap_latched: false,
            invariant_violations: 0,
        };

        body.set_kinematic(true);
        body.set_velocity(Vec3::ZERO);
        machine.bind(0, registry.home_pivot(), tuning.radius, body);
        machine
    }

    pub fn state(&self) -> SwingState {
        self.state
    }

    pub fn current_anchor(&self) -> Option<usize> {
        self.current_anchor
    }

    pub fn next_anchor(&self) -> Option<usize> {
        self.next_anchor
    }

    pub fn pivot(&self) -> Option<Vec3> {
        self.pivot
    }

    pub fn swing_speed(&self) -> f32 {
        self.swing_speed
    }

    pub fn effective_speed(&self) -> f32 {
        self.effective_speed
    }

    pub fn average_speed(&self) -> f32 {
        self.sampler.average_magnitude()
    }

    pub fn sampler(&self) -> &SpeedSampler {
        &self.sampler
    }

    pub fn body_up(&self) -> Vec3 {
        self.body_up
    }

    pub fn arm_aim(&self) -> Vec3 {
        self.arm_aim
    }

    /// Transitions that were entered from an unexpected state.
    pub fn invariant_violations(&self) -> u32 {
        self.invariant_violations
    }

    pub fn set_arm_aim(&mut self, direction: Vec3) {
        self.arm_aim = direction.normalize_or(self.arm_aim);
    }

    // ------------------------------------------------------------------
    // Cadences
    // ------------------------------------------------------------------

    /// Variable-rate pass: input edges and orientation.
    pub fn update_frame<B: PhysicsBody, F: Feedback>(
        &mut self,
        input: &SwingInput,
        ctx: &mut SwingContext<'_, B, F>,
    ) {
        match self.state {
            SwingState::Start => {
                if input.any_just_pressed {
                    self.enter_swinging(ctx);
                }
            }
            SwingState::Swinging => {
                if input.jump_just_pressed {
                    self.jump(ctx);
                }
            }
            SwingState::Flying => {
                if let Some(target) = input.aim_target {
                    self.aim_at(ctx.body.position(), target);
                }
            }
            SwingState::Jumping | SwingState::Landing => {}
        }

        if input.reset_just_pressed {
            self.reset(ctx);
        }
    }

    /// Fixed-rate pass: orbit integration and speed sampling.
    pub fn update_tick<B: PhysicsBody, F: Feedback>(
        &mut self,
        dt: f32,
        input: &SwingInput,
        ctx: &mut SwingContext<'_, B, F>,
    ) {
        if self.state == SwingState::Swinging && dt > 0.0 {
            self.integrate_swing(dt, input.accelerate_held, ctx.tuning, ctx.body);
        }
        self.overlap_latched = false;
    }

    /// Sensor contact reported by the level. Only the first honoured
    /// overlap per tick can drive a transition.
    pub fn on_overlap<B: PhysicsBody, F: Feedback>(
        &mut self,
        kind: OverlapKind,
        ctx: &mut SwingContext<'_, B, F>,
    ) {
        if kind == OverlapKind::Other {
            return;
        }
        if self.overlap_latched {
            warn!("Ignoring {:?}: a transition already ran this tick", kind);
            return;
        }

        match kind {
            OverlapKind::GrabAnchor(index) => {
                if self.state != SwingState::Flying {
                    return;
                }
                self.overlap_latched = true;
                self.grab(index, ctx);
            }
            OverlapKind::HazardZone => {
                self.overlap_latched = true;
                info!("Hazard entered in {}", self.state);
                self.reset(ctx);
            }
            OverlapKind::Other => {}
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Collapse any state back to swinging on anchor 0 with every anchor
    /// detectable again.
    pub fn reset<B: PhysicsBody, F: Feedback>(&mut self, ctx: &mut SwingContext<'_, B, F>) {
        ctx.registry.reset_all();
        ctx.feedback.notify_cue(CueKind::Reset);

        ctx.body.set_kinematic(true);
        ctx.body.set_velocity(Vec3::ZERO);
        self.bind(0, ctx.registry.home_pivot(), ctx.tuning.radius, ctx.body);
        self.next_anchor = None;
        self.swing_speed = ctx.tuning.base_speed;
        self.state = SwingState::Swinging;

        ctx.feedback.track_clear();
        ctx.feedback.track_add(
            TrackTarget::Anchor(0),
            ctx.tuning.home_weight,
            ctx.tuning.track_radius,
        );

        info!("Reset to anchor #0");
    }

    fn enter_swinging<B: PhysicsBody, F: Feedback>(&mut self, ctx: &mut SwingContext<'_, B, F>) {
        self.expect_state(&[SwingState::Landing, SwingState::Start], SwingState::Swinging);

        if let Some(index) = self.current_anchor {
            ctx.feedback.track_add(
                TrackTarget::Anchor(index),
                ctx.tuning.anchor_weight,
                ctx.tuning.track_radius,
            );
        }
        self.state = SwingState::Swinging;
    }

    fn jump<B: PhysicsBody, F: Feedback>(&mut self, ctx: &mut SwingContext<'_, B, F>) {
        self.expect_state(&[SwingState::Swinging], SwingState::Jumping);
        ctx.feedback.notify_cue(CueKind::Jump);
        self.state = SwingState::Jumping;

        if let Some(index) = self.current_anchor.take() {
            // No going back to an anchor already left. A lone anchor is
            // also the goal and must stay reachable.
            if !ctx.registry.is_goal(index) {
                ctx.registry.grab(index);
            }
            ctx.feedback.track_remove(TrackTarget::Anchor(index));
        }
        ctx.feedback.track_add(
            TrackTarget::Player,
            ctx.tuning.player_weight,
            ctx.tuning.track_radius,
        );
        self.pivot = None;

        let launch = self.sampler.launch_vector();
        ctx.body.set_kinematic(false);
        ctx.body.set_velocity(Vec3::ZERO);
        ctx.body.apply_velocity_change(launch);
        debug!(
            "Jump: launch={:?}, avg_speed={:.2}, samples={}",
            launch,
            self.sampler.average_magnitude(),
            self.sampler.recorded()
        );

        self.expect_state(&[SwingState::Jumping], SwingState::Flying);
        self.state = SwingState::Flying;
    }

    fn grab<B: PhysicsBody, F: Feedback>(&mut self, index: usize, ctx: &mut SwingContext<'_, B, F>) {
        match ctx.registry.at(index) {
            None => {
                error!("Overlap with unknown anchor #{}", index);
                return;
            }
            Some(anchor) if !anchor.active => {
                debug!("Anchor #{} is not detectable, ignoring", index);
                return;
            }
            Some(_) => {}
        }

        if ctx.registry.is_goal(index) {
            self.reach_goal(ctx);
            return;
        }

        let Some(pivot) = ctx.registry.grab(index) else {
            return;
        };

        self.expect_state(&[SwingState::Flying], SwingState::Landing);
        self.state = SwingState::Landing;

        ctx.body.set_kinematic(true);
        ctx.body.set_velocity(Vec3::ZERO);
        self.bind(index, pivot, ctx.tuning.radius, ctx.body);
        ctx.feedback.notify_cue(CueKind::Land);

        ctx.feedback.track_remove(TrackTarget::Player);
        if let Some(next) = self.next_anchor.take() {
            ctx.feedback.track_remove(TrackTarget::Anchor(next));
        }
        info!("Grabbed anchor #{}", index);

        self.enter_swinging(ctx);

        let next = index + 1;
        if next < ctx.registry.count() {
            self.next_anchor = Some(next);
            ctx.feedback.track_add(
                TrackTarget::Anchor(next),
                ctx.tuning.anchor_weight,
                ctx.tuning.track_radius,
            );
        }
    }

    fn reach_goal<B: PhysicsBody, F: Feedback>(&mut self, ctx: &mut SwingContext<'_, B, F>) {
        info!("Goal anchor #{} reached", ctx.registry.goal_index());
        ctx.feedback.notify_cue(CueKind::Goal);
        ctx.feedback
            .set_background(ctx.tuning.goal_background_color());
        self.reset(ctx);
    }

    // ------------------------------------------------------------------
    // Motion
    // ------------------------------------------------------------------

    fn integrate_swing<B: PhysicsBody>(
        &mut self,
        dt: f32,
        accelerate: bool,
        tuning: &SwingTuning,
        body: &mut B,
    ) {
        let Some(pivot) = self.pivot else {
            return;
        };

        if accelerate {
            self.swing_speed = (self.swing_speed + tuning.increment_rate * dt)
                .clamp(tuning.base_speed, tuning.max_speed);
        }

        let position = body.position();
        let ratio = apex_ratio(position.y, pivot.y, tuning.radius, tuning.apex_normal);
        let apex_speed = self.swing_speed * tuning.apex_multiplier;
        self.effective_speed = self.swing_speed + (apex_speed - self.swing_speed) * ratio;

        let rotation = Quat::from_rotation_z((self.effective_speed * dt).to_radians());
        let orbited = pivot + rotation * (position - pivot);
        let next = project_onto_orbit(orbited, pivot, tuning.radius);
        body.set_position(next);

        let velocity = (next - self.last_position) / dt;
        self.sampler.record(velocity.length(), velocity);
        self.last_position = next;
        self.body_up = (pivot - next).normalize_or(Vec3::Y);
    }

    /// Attach to `pivot`, snapping the body onto the orbit circle so the
    /// next speed sample is not a teleport.
    fn bind<B: PhysicsBody>(&mut self, index: usize, pivot: Vec3, radius: f32, body: &mut B) {
        self.current_anchor = Some(index);
        self.pivot = Some(pivot);

        let position = project_onto_orbit(body.position(), pivot, radius);
        body.set_position(position);
        self.last_position = position;
        self.body_up = (pivot - position).normalize_or(Vec3::Y);
        self.set_arm_aim(self.body_up);
    }

    fn aim_at(&mut self, socket: Vec3, target: Vec3) {
        let mut direction = target - socket;
        direction.z = 0.0;
        self.set_arm_aim(direction);
    }

    fn expect_state(&mut self, allowed: &[SwingState], entering: SwingState) {
        if !allowed.contains(&self.state) {
            self.invariant_violations += 1;
            error!(
                "State error entering {}: expected one of {:?}, not {}",
                entering, allowed, self.state
            );
        }
    }
}

/// Position of `height` between the bottom of the orbit (0) and the apex
/// line `apex_normal * radius` above the pivot (1), clamped.
pub fn apex_ratio(height: f32, pivot_height: f32, radius: f32, apex_normal: f32) -> f32 {
    let bottom = pivot_height - radius;
    let top = pivot_height + radius * apex_normal;
    let span = top - bottom;
    if span <= f32::EPSILON {
        return 0.0;
    }
    ((height - bottom) / span).clamp(0.0, 1.0)
}

/// Nearest point on the orbit circle in the pivot's plane. A body sitting
/// exactly on the pivot is placed straight below it.
pub fn project_onto_orbit(position: Vec3, pivot: Vec3, radius: f32) -> Vec3 {
    let mut offset = position - pivot;
    offset.z = 0.0;
    pivot + offset.normalize_or(Vec3::NEG_Y) * radius
}
