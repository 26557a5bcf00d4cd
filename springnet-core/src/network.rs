//! The constraint network: bodies, constraints, and reset state.

use glam::Vec2;

use crate::body::{Body, BodyKind};
use crate::constraint::{Constraint, DampedSpring, RigidRod, SpringParams};
use crate::error::ConfigError;

/// Stable handle to a body in a [`ConstraintNetwork`].
///
/// Handles are plain indices into the network's body table and are only
/// meaningful for the network that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub(crate) usize);

impl BodyHandle {
    /// The underlying index into [`ConstraintNetwork::bodies`].
    pub fn index(self) -> usize {
        self.0
    }
}

/// A mass-spring-rod system: an ordered body table, an ordered constraint
/// list, and the initial position of every body for [`reset`](Self::reset).
///
/// Bodies and constraints are appended through the validated `add_*`
/// operations; invalid parameters fail with a [`ConfigError`] and leave the
/// network unchanged.
#[derive(Debug, Default)]
pub struct ConstraintNetwork {
    bodies: Vec<Body>,
    constraints: Vec<Constraint>,
    initial_positions: Vec<Vec2>,
}

impl ConstraintNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an immovable anchor, recording its position as initial state.
    pub fn add_fixed(&mut self, position: Vec2) -> BodyHandle {
        self.push_body(Body::fixed(position))
    }

    /// Add a moving point mass, recording its position as initial state.
    pub fn add_dynamic(&mut self, position: Vec2, mass: f32) -> Result<BodyHandle, ConfigError> {
        if !(mass > 0.0) || !mass.is_finite() {
            return Err(ConfigError::InvalidMass(mass));
        }
        Ok(self.push_body(Body::dynamic(position, mass)))
    }

    fn push_body(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len());
        self.initial_positions.push(body.position);
        self.bodies.push(body);
        handle
    }

    /// Connect two bodies with a damped spring acting at their centers.
    pub fn add_spring(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
        params: SpringParams,
    ) -> Result<(), ConfigError> {
        self.check_endpoints(a, b)?;
        check_spring_params(&params)?;
        self.constraints
            .push(Constraint::Spring(DampedSpring::new(a.0, b.0, params)));
        Ok(())
    }

    /// Connect two bodies with a damped spring acting at fixed offsets from
    /// their centers. The stock topologies all use zero offsets; see
    /// [`add_spring`](Self::add_spring).
    pub fn add_spring_with_anchors(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
        anchor_a: Vec2,
        anchor_b: Vec2,
        params: SpringParams,
    ) -> Result<(), ConfigError> {
        self.check_endpoints(a, b)?;
        check_spring_params(&params)?;
        for anchor in [anchor_a, anchor_b] {
            if !anchor.is_finite() {
                return Err(ConfigError::InvalidAnchorOffset(anchor.x, anchor.y));
            }
        }
        let mut spring = DampedSpring::new(a.0, b.0, params);
        spring.anchor_a = anchor_a;
        spring.anchor_b = anchor_b;
        self.constraints.push(Constraint::Spring(spring));
        Ok(())
    }

    /// Connect two bodies with a rigid rod, capturing the rod length from
    /// their current separation.
    pub fn add_rod(&mut self, a: BodyHandle, b: BodyHandle) -> Result<(), ConfigError> {
        self.check_endpoints(a, b)?;
        let length = self.bodies[a.0].position.distance(self.bodies[b.0].position);
        if length == 0.0 {
            return Err(ConfigError::CoincidentBodies);
        }
        self.constraints
            .push(Constraint::Rod(RigidRod::new(a.0, b.0, length)));
        Ok(())
    }

    /// Connect two bodies with a rigid rod of an explicit length.
    pub fn add_rod_with_length(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
        length: f32,
    ) -> Result<(), ConfigError> {
        self.check_endpoints(a, b)?;
        if !(length > 0.0) || !length.is_finite() {
            return Err(ConfigError::InvalidRodLength(length));
        }
        self.constraints
            .push(Constraint::Rod(RigidRod::new(a.0, b.0, length)));
        Ok(())
    }

    fn check_endpoints(&self, a: BodyHandle, b: BodyHandle) -> Result<(), ConfigError> {
        for handle in [a, b] {
            if handle.0 >= self.bodies.len() {
                return Err(ConfigError::BodyOutOfBounds {
                    index: handle.0,
                    count: self.bodies.len(),
                });
            }
        }
        if a == b {
            return Err(ConfigError::SelfConstraint(a.0));
        }
        Ok(())
    }

    pub fn body(&self, handle: BodyHandle) -> &Body {
        &self.bodies[handle.0]
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> &mut Body {
        &mut self.bodies[handle.0]
    }

    /// All bodies, in insertion order. Read access for the rendering layer.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// All constraints, in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Handles of all dynamic bodies, in insertion order.
    pub fn dynamic_handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(_, body)| body.kind == BodyKind::Dynamic)
            .map(|(index, _)| BodyHandle(index))
    }

    /// Restore every body to its recorded initial position and zero every
    /// dynamic body's velocity. Constraints are untouched.
    pub fn reset(&mut self) {
        for (body, &initial) in self.bodies.iter_mut().zip(&self.initial_positions) {
            body.set_position(initial);
            body.set_velocity(Vec2::ZERO);
        }
    }

    /// Constraint list and mutable body table, for the stepping passes.
    pub(crate) fn parts_mut(&mut self) -> (&[Constraint], &mut [Body]) {
        (&self.constraints, &mut self.bodies)
    }
}

pub(crate) fn check_spring_params(params: &SpringParams) -> Result<(), ConfigError> {
    if !(params.rest_length >= 0.0) || !params.rest_length.is_finite() {
        return Err(ConfigError::InvalidRestLength(params.rest_length));
    }
    if !(params.stiffness >= 0.0) || !params.stiffness.is_finite() {
        return Err(ConfigError::InvalidStiffness(params.stiffness));
    }
    if !(params.damping >= 0.0) || !params.damping.is_finite() {
        return Err(ConfigError::InvalidDamping(params.damping));
    }
    Ok(())
}
