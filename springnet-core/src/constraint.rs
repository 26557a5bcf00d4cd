//! Constraints between pairs of bodies: damped springs and rigid rods.
//!
//! Constraints hold indices into the network's body table rather than owning
//! references; a body may be shared by any number of constraints.

use glam::Vec2;

use crate::body::Body;

/// Spring coefficients shared by constructors and topology builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub rest_length: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringParams {
    pub fn new(rest_length: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            rest_length,
            stiffness,
            damping,
        }
    }
}

/// A damped spring acting between two bodies.
///
/// Applies a force proportional to extension beyond `rest_length`, plus a
/// damping term proportional to the relative velocity projected on the
/// spring axis. `anchor_a`/`anchor_b` are offsets from the body centers;
/// zero in every stock topology.
#[derive(Debug, Clone)]
pub struct DampedSpring {
    pub a: usize,
    pub b: usize,
    pub anchor_a: Vec2,
    pub anchor_b: Vec2,
    pub rest_length: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl DampedSpring {
    /// Spring between bodies `a` and `b` acting at their centers.
    pub fn new(a: usize, b: usize, params: SpringParams) -> Self {
        Self {
            a,
            b,
            anchor_a: Vec2::ZERO,
            anchor_b: Vec2::ZERO,
            rest_length: params.rest_length,
            stiffness: params.stiffness,
            damping: params.damping,
        }
    }

    /// Forces on the two endpoints, equal and opposite.
    ///
    /// Coincident endpoints exert no force for the step; the configuration
    /// is a recoverable transient, not an error.
    pub fn force(&self, body_a: &Body, body_b: &Body) -> (Vec2, Vec2) {
        let delta = (body_b.position + self.anchor_b) - (body_a.position + self.anchor_a);
        let dist = delta.length();
        if dist == 0.0 {
            return (Vec2::ZERO, Vec2::ZERO);
        }
        let direction = delta / dist;

        let stretch = dist - self.rest_length;
        let relative_velocity = body_b.velocity - body_a.velocity;
        let magnitude = self.stiffness * stretch + self.damping * relative_velocity.dot(direction);

        let on_a = direction * magnitude;
        (on_a, -on_a)
    }

    /// Accumulate this spring's forces onto both endpoint bodies.
    pub fn apply(&self, bodies: &mut [Body]) {
        let (on_a, on_b) = self.force(&bodies[self.a], &bodies[self.b]);
        bodies[self.a].apply_force(on_a);
        bodies[self.b].apply_force(on_b);
    }
}

/// A rigid rod keeping two bodies at an exact distance.
///
/// Enforced by positional correction after integration. A single pass per
/// solver iteration is an approximation for chains of many rods; the error
/// that remains after one pass is picked up on the next step.
#[derive(Debug, Clone)]
pub struct RigidRod {
    pub a: usize,
    pub b: usize,
    pub length: f32,
}

impl RigidRod {
    pub fn new(a: usize, b: usize, length: f32) -> Self {
        Self { a, b, length }
    }

    /// Apply one positional correction pass.
    ///
    /// The correction is split in proportion to inverse mass, so a fixed
    /// endpoint never moves. Skips when both endpoints are fixed or the
    /// bodies are coincident (no defined axis).
    pub fn solve(&self, bodies: &mut [Body]) {
        let a_inv = bodies[self.a].inv_mass();
        let b_inv = bodies[self.b].inv_mass();
        let inv_total = a_inv + b_inv;
        if inv_total == 0.0 {
            return;
        }

        let delta = bodies[self.b].position - bodies[self.a].position;
        let dist = delta.length();
        if dist == 0.0 {
            return;
        }

        let error = dist - self.length;
        let correction = delta * (error / dist);

        let pos_a = bodies[self.a].position + correction * (a_inv / inv_total);
        bodies[self.a].set_position(pos_a);
        let pos_b = bodies[self.b].position - correction * (b_inv / inv_total);
        bodies[self.b].set_position(pos_b);
    }
}

/// A constraint between two bodies in the network.
///
/// The variant doubles as the styling tag an external renderer reads to
/// draw springs and rods differently.
#[derive(Debug, Clone)]
pub enum Constraint {
    Spring(DampedSpring),
    Rod(RigidRod),
}

impl Constraint {
    /// Indices of the two endpoint bodies.
    pub fn endpoints(&self) -> (usize, usize) {
        match self {
            Constraint::Spring(spring) => (spring.a, spring.b),
            Constraint::Rod(rod) => (rod.a, rod.b),
        }
    }

    pub fn is_spring(&self) -> bool {
        matches!(self, Constraint::Spring(_))
    }

    pub fn is_rod(&self) -> bool {
        matches!(self, Constraint::Rod(_))
    }
}
