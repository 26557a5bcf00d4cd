//! Picking and dragging bodies with an external pointer.
//!
//! The controller mutates positions directly through `set_position`; it
//! never touches velocities, so releasing a body leaves it with whatever
//! velocity the last integration produced.

use glam::Vec2;

use crate::network::{BodyHandle, ConstraintNetwork};

/// Tracks at most one held body and the pointer position it was last
/// dragged to.
#[derive(Debug, Default)]
pub struct InteractionController {
    held: Option<BodyHandle>,
    last_point: Vec2,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dynamic body nearest to `point`, or `None` for an empty network.
    ///
    /// Nearest-distance picking: no radius cutoff, fixed anchors are never
    /// returned. Ties go to the earlier body.
    pub fn find_nearest(&self, network: &ConstraintNetwork, point: Vec2) -> Option<BodyHandle> {
        network.dynamic_handles().min_by(|&a, &b| {
            let da = network.body(a).position.distance_squared(point);
            let db = network.body(b).position.distance_squared(point);
            da.total_cmp(&db)
        })
    }

    /// The nearest dynamic body whose distance to `point` is within
    /// `radius` (circular-extent picking).
    pub fn find_within(
        &self,
        network: &ConstraintNetwork,
        point: Vec2,
        radius: f32,
    ) -> Option<BodyHandle> {
        self.find_nearest(network, point)
            .filter(|&handle| network.body(handle).position.distance(point) <= radius)
    }

    /// Take hold of `body`. A previously held body is released.
    pub fn begin_drag(&mut self, body: BodyHandle, grab_point: Vec2) {
        self.held = Some(body);
        self.last_point = grab_point;
    }

    /// Displace the held body by the pointer movement since the last update
    /// (relative displacement, preserving the offset between the grab point
    /// and the body center). No-op when nothing is held.
    pub fn update_drag(&mut self, network: &mut ConstraintNetwork, point: Vec2) {
        if let Some(held) = self.held {
            let displacement = point - self.last_point;
            let body = network.body_mut(held);
            let position = body.position + displacement;
            body.set_position(position);
            self.last_point = point;
        }
    }

    /// Release the held body, returning its handle. Velocity is left as the
    /// last integration set it.
    pub fn end_drag(&mut self) -> Option<BodyHandle> {
        self.held.take()
    }

    /// The currently held body, if any.
    pub fn held(&self) -> Option<BodyHandle> {
        self.held
    }
}
