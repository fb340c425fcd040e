//! Physics body seam between the swing machine and the physics engine.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Operations the swing machine needs from the player's rigid body.
///
/// While kinematic the machine owns the body's position; otherwise the
/// physics engine integrates it under gravity.
pub trait PhysicsBody {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);
    fn is_kinematic(&self) -> bool;
    fn set_kinematic(&mut self, kinematic: bool);

    /// Instantaneous, mass-independent change in velocity.
    fn apply_velocity_change(&mut self, delta: Vec3) {
        let velocity = self.velocity();
        self.set_velocity(velocity + delta);
    }
}

/// avian2d components of the player viewed as a `PhysicsBody`.
/// The z coordinate is kept from the entity's transform plane.
pub struct AvianBody<'a> {
    pub position: Mut<'a, Position>,
    pub velocity: Mut<'a, LinearVelocity>,
    pub rigid_body: Mut<'a, RigidBody>,
    pub z: f32,
}

impl PhysicsBody for AvianBody<'_> {
    fn position(&self) -> Vec3 {
        self.position.0.extend(self.z)
    }

    fn set_position(&mut self, position: Vec3) {
        self.position.0 = position.truncate();
    }

    fn velocity(&self) -> Vec3 {
        self.velocity.0.extend(0.0)
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity.0 = velocity.truncate();
    }

    fn is_kinematic(&self) -> bool {
        *self.rigid_body == RigidBody::Kinematic
    }

    fn set_kinematic(&mut self, kinematic: bool) {
        let target = if kinematic {
            RigidBody::Kinematic
        } else {
            RigidBody::Dynamic
        };
        self.rigid_body.set_if_neq(target);
    }
}

/// A body held by value, used to prepare spawn components before the
/// physics engine owns them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub kinematic: bool,
}

impl BodyState {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            kinematic: true,
        }
    }
}

impl PhysicsBody for BodyState {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn is_kinematic(&self) -> bool {
        self.kinematic
    }

    fn set_kinematic(&mut self, kinematic: bool) {
        self.kinematic = kinematic;
    }
}
