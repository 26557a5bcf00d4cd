//! Point masses and fixed anchors.

use glam::Vec2;

/// Whether a body is an immovable anchor or a mass subject to integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Fixed,
    Dynamic,
}

/// A point mass in the network.
///
/// Fixed bodies never accumulate force and never integrate; their position
/// changes only through [`set_position`](Body::set_position) (drag or reset).
#[derive(Debug, Clone)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    pub kind: BodyKind,
    force: Vec2,
}

impl Body {
    /// Create an immovable anchor at `position`.
    pub fn fixed(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass: f32::INFINITY,
            kind: BodyKind::Fixed,
            force: Vec2::ZERO,
        }
    }

    /// Create a moving point mass at `position`.
    ///
    /// Mass validity is checked where bodies enter a network, see
    /// [`ConstraintNetwork::add_dynamic`](crate::network::ConstraintNetwork::add_dynamic).
    pub fn dynamic(position: Vec2, mass: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass,
            kind: BodyKind::Dynamic,
            force: Vec2::ZERO,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.kind == BodyKind::Fixed
    }

    pub fn is_dynamic(&self) -> bool {
        self.kind == BodyKind::Dynamic
    }

    /// Inverse mass: zero for fixed bodies regardless of the stored mass.
    pub fn inv_mass(&self) -> f32 {
        match self.kind {
            BodyKind::Fixed => 0.0,
            BodyKind::Dynamic => 1.0 / self.mass,
        }
    }

    /// Add `force` to the accumulator. No-op for fixed bodies.
    pub fn apply_force(&mut self, force: Vec2) {
        if self.is_dynamic() {
            self.force += force;
        }
    }

    /// Accumulated force for the current step.
    pub fn accumulated_force(&self) -> Vec2 {
        self.force
    }

    /// Advance velocity and position by one semi-implicit Euler step and
    /// clear the force accumulator. No-op for fixed bodies.
    pub fn integrate(&mut self, dt: f32) {
        if self.is_fixed() {
            return;
        }
        self.velocity += self.force / self.mass * dt;
        self.position += self.velocity * dt;
        self.force = Vec2::ZERO;
    }

    /// Move the body directly, bypassing force accumulation (drag, reset).
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Set the velocity directly. Fixed bodies keep zero velocity.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        if self.is_dynamic() {
            self.velocity = velocity;
        }
    }
}
