//! Topology builders for the stock mass-spring arrangements.
//!
//! Each builder validates its configuration up front, then wires bodies and
//! constraints into a [`ConstraintNetwork`] and returns the handles of what
//! it built. Placement uses linspace semantics: `n` samples inclusive of
//! both endpoints, equal spacing.

use glam::Vec2;

use crate::constraint::SpringParams;
use crate::error::ConfigError;
use crate::network::{check_spring_params, BodyHandle, ConstraintNetwork};

/// Link type used between bodies when building a topology.
#[derive(Debug, Clone)]
pub enum LinkSpec {
    /// Damped spring with explicit parameters.
    Spring(SpringParams),
    /// Rigid rod whose length is captured from the built geometry.
    Rod,
}

impl LinkSpec {
    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            LinkSpec::Spring(params) => check_spring_params(params),
            LinkSpec::Rod => Ok(()),
        }
    }

    fn add(
        &self,
        network: &mut ConstraintNetwork,
        a: BodyHandle,
        b: BodyHandle,
    ) -> Result<(), ConfigError> {
        match self {
            LinkSpec::Spring(params) => network.add_spring(a, b, *params),
            LinkSpec::Rod => network.add_rod(a, b),
        }
    }
}

/// Configuration for [`build_hanging_chain`]: a row of fixed anchors, one
/// moving point hanging `drop` below each, neighbors optionally linked.
///
/// `horizontal: None` gives the pendulum-chain arrangement (independent
/// vertical links, no neighbor coupling); `Some` couples each point to the
/// next with `point_count - 1` links.
#[derive(Debug, Clone)]
pub struct HangingChainConfig {
    pub left_anchor: Vec2,
    pub right_anchor: Vec2,
    pub point_count: usize,
    /// Vertical offset of the moving points below the anchor row. Negative
    /// places them above.
    pub drop: f32,
    pub point_mass: f32,
    pub vertical: LinkSpec,
    pub horizontal: Option<LinkSpec>,
}

impl HangingChainConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        check_anchor_row(self.left_anchor, self.right_anchor)?;
        if self.point_count < 2 {
            return Err(ConfigError::TooFewPoints {
                min: 2,
                got: self.point_count,
            });
        }
        if self.drop == 0.0 || !self.drop.is_finite() {
            return Err(ConfigError::InvalidDrop(self.drop));
        }
        if !(self.point_mass > 0.0) || !self.point_mass.is_finite() {
            return Err(ConfigError::InvalidMass(self.point_mass));
        }
        self.vertical.validate()?;
        if let Some(horizontal) = &self.horizontal {
            horizontal.validate()?;
        }
        Ok(())
    }
}

/// Handles produced by [`build_hanging_chain`], anchors and points left to
/// right.
#[derive(Debug)]
pub struct BuiltChain {
    pub network: ConstraintNetwork,
    pub anchors: Vec<BodyHandle>,
    pub points: Vec<BodyHandle>,
}

/// Build a hanging chain: `point_count` anchors linspaced between the two
/// anchor coordinates, a moving point under each, one vertical link per
/// pair and `point_count - 1` horizontal links when configured.
pub fn build_hanging_chain(config: &HangingChainConfig) -> Result<BuiltChain, ConfigError> {
    config.validate()?;

    let mut network = ConstraintNetwork::new();
    let mut anchors = Vec::with_capacity(config.point_count);
    let mut points = Vec::with_capacity(config.point_count);

    let y = config.left_anchor.y;
    for i in 0..config.point_count {
        let x = linspace(config.left_anchor.x, config.right_anchor.x, config.point_count, i);
        let anchor = network.add_fixed(Vec2::new(x, y));
        let point = network.add_dynamic(Vec2::new(x, y + config.drop), config.point_mass)?;
        config.vertical.add(&mut network, anchor, point)?;

        if let (Some(horizontal), Some(&previous)) = (&config.horizontal, points.last()) {
            horizontal.add(&mut network, previous, point)?;
        }

        anchors.push(anchor);
        points.push(point);
    }

    Ok(BuiltChain {
        network,
        anchors,
        points,
    })
}

/// Configuration for [`build_rope`]: a run of moving points strung between
/// two fixed edge anchors by consecutive damped springs.
#[derive(Debug, Clone)]
pub struct RopeConfig {
    pub left_anchor: Vec2,
    pub right_anchor: Vec2,
    /// Moving points strictly between the anchors.
    pub interior_count: usize,
    pub point_mass: f32,
    pub stiffness: f32,
    pub damping: f32,
    /// Subtracted from the built inter-point spacing to pre-tension the
    /// rope: `rest = spacing - tension_delta`. A delta outside
    /// `[0, spacing)` falls back to `rest = 0.5 * spacing`.
    pub tension_delta: f32,
}

impl RopeConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        check_anchor_row(self.left_anchor, self.right_anchor)?;
        if self.interior_count < 1 {
            return Err(ConfigError::TooFewPoints {
                min: 1,
                got: self.interior_count,
            });
        }
        if !(self.point_mass > 0.0) || !self.point_mass.is_finite() {
            return Err(ConfigError::InvalidMass(self.point_mass));
        }
        if !self.tension_delta.is_finite() {
            return Err(ConfigError::InvalidTensionDelta(self.tension_delta));
        }
        check_spring_params(&SpringParams::new(0.0, self.stiffness, self.damping))
    }
}

/// Handles produced by [`build_rope`]: edge anchors plus the interior
/// points left to right.
#[derive(Debug)]
pub struct BuiltRope {
    pub network: ConstraintNetwork,
    pub left_anchor: BodyHandle,
    pub right_anchor: BodyHandle,
    pub points: Vec<BodyHandle>,
}

impl BuiltRope {
    /// The central interior point, the designated pendant attachment.
    pub fn midpoint(&self) -> BodyHandle {
        self.points[self.points.len() / 2]
    }
}

/// Build a rope: `interior_count` points linspaced strictly between the
/// anchors, every consecutive pair (anchor-point, point-point, point-anchor)
/// joined by a spring whose rest length follows the pre-tension policy.
pub fn build_rope(config: &RopeConfig) -> Result<BuiltRope, ConfigError> {
    config.validate()?;

    let mut network = ConstraintNetwork::new();
    let left_anchor = network.add_fixed(config.left_anchor);
    let right_anchor = network.add_fixed(config.right_anchor);

    // interior_count + 2 linspace samples; the end samples are the anchors.
    let samples = config.interior_count + 2;
    let spacing =
        (config.right_anchor.x - config.left_anchor.x) / (samples - 1) as f32;
    let rest_length = pre_tensioned_rest(spacing, config.tension_delta);
    let params = SpringParams::new(rest_length, config.stiffness, config.damping);

    let mut points = Vec::with_capacity(config.interior_count);
    let mut previous = left_anchor;
    for i in 1..=config.interior_count {
        let x = linspace(config.left_anchor.x, config.right_anchor.x, samples, i);
        let point = network.add_dynamic(Vec2::new(x, config.left_anchor.y), config.point_mass)?;
        network.add_spring(previous, point, params)?;
        points.push(point);
        previous = point;
    }
    network.add_spring(previous, right_anchor, params)?;

    Ok(BuiltRope {
        network,
        left_anchor,
        right_anchor,
        points,
    })
}

/// Configuration for [`attach_pendant`]: a sub-chain hanging from an
/// existing body, ending in a heavier weight.
///
/// The weight is placed `drop` above the attachment (the stock demos start
/// the load above the rope and let gravity pull it through); springs start
/// at rest, so all initial tension comes from the weight falling.
#[derive(Debug, Clone)]
pub struct PendantConfig {
    /// Intermediate points between the attachment and the weight.
    pub link_count: usize,
    /// Distance from the attachment to the weight at build time.
    pub drop: f32,
    pub point_mass: f32,
    pub weight_mass: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl PendantConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.drop == 0.0 || !self.drop.is_finite() {
            return Err(ConfigError::InvalidDrop(self.drop));
        }
        if !(self.point_mass > 0.0) || !self.point_mass.is_finite() {
            return Err(ConfigError::InvalidMass(self.point_mass));
        }
        if !(self.weight_mass > 0.0) || !self.weight_mass.is_finite() {
            return Err(ConfigError::InvalidMass(self.weight_mass));
        }
        check_spring_params(&SpringParams::new(0.0, self.stiffness, self.damping))
    }
}

/// Handles produced by [`attach_pendant`]: intermediate points from the
/// attachment outward, then the terminal weight.
#[derive(Debug)]
pub struct AttachedPendant {
    pub points: Vec<BodyHandle>,
    pub weight: BodyHandle,
}

/// Grow a pendant sub-chain from `attachment`: `link_count` intermediate
/// points plus a terminal weight, linspaced from the attachment position to
/// `drop` above it, consecutive pairs joined by springs at their built
/// spacing.
///
/// `link_count == 0` degenerates to a single attachment-weight spring.
pub fn attach_pendant(
    network: &mut ConstraintNetwork,
    attachment: BodyHandle,
    config: &PendantConfig,
) -> Result<AttachedPendant, ConfigError> {
    if attachment.index() >= network.body_count() {
        return Err(ConfigError::BodyOutOfBounds {
            index: attachment.index(),
            count: network.body_count(),
        });
    }
    config.validate()?;

    let origin = network.body(attachment).position;
    let samples = config.link_count + 2;
    let spacing = config.drop.abs() / (samples - 1) as f32;
    let params = SpringParams::new(spacing, config.stiffness, config.damping);

    let mut points = Vec::with_capacity(config.link_count);
    let mut previous = attachment;
    for i in 1..samples {
        let y = linspace(origin.y, origin.y - config.drop, samples, i);
        let is_weight = i == samples - 1;
        let mass = if is_weight {
            config.weight_mass
        } else {
            config.point_mass
        };
        let point = network.add_dynamic(Vec2::new(origin.x, y), mass)?;
        network.add_spring(previous, point, params)?;
        if !is_weight {
            points.push(point);
        }
        previous = point;
    }

    Ok(AttachedPendant {
        points,
        weight: previous,
    })
}

/// Rest length for a freshly built spring under the pre-tension policy:
/// `spacing - delta`, falling back to half the spacing when the delta is
/// negative or at least the spacing itself.
pub fn pre_tensioned_rest(spacing: f32, delta: f32) -> f32 {
    if (0.0..spacing).contains(&delta) {
        spacing - delta
    } else {
        0.5 * spacing
    }
}

/// The `i`-th of `samples` equally spaced values from `start` to `end`,
/// endpoints inclusive.
fn linspace(start: f32, end: f32, samples: usize, i: usize) -> f32 {
    start + (end - start) * i as f32 / (samples - 1) as f32
}

fn check_anchor_row(left: Vec2, right: Vec2) -> Result<(), ConfigError> {
    if !left.is_finite() || !right.is_finite() {
        return Err(ConfigError::InvalidAnchor);
    }
    if left.x >= right.x {
        return Err(ConfigError::AnchorsNotOrdered {
            left: left.x,
            right: right.x,
        });
    }
    if left.y != right.y {
        return Err(ConfigError::AnchorsNotAligned {
            left: left.y,
            right: right.y,
        });
    }
    Ok(())
}
