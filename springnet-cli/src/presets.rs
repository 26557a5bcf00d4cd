//! The stock demo systems, one constructor per original arrangement.
//!
//! Each preset reproduces one of the historical demo configurations:
//! the same anchor coordinates, counts, masses, spring coefficients,
//! gravity, and stepping cadence, minus the window that used to draw them.

use glam::Vec2;
use springnet_core::{
    attach_pendant, build_hanging_chain, build_rope, ConstraintNetwork, HangingChainConfig,
    LinkSpec, PendantConfig, RopeConfig, SimulationConfig, SpringParams,
};

/// A demo system ready to run: the network, its simulation configuration,
/// and the frame time step the demo used.
pub struct Preset {
    pub network: ConstraintNetwork,
    pub config: SimulationConfig,
    pub dt: f32,
}

/// Row of rod pendulums with spring-coupled bobs: five anchors from
/// (100, 100) to (700, 100), bobs hanging 200 below on rods, neighbors
/// joined by springs (rest 100, stiffness 10, damping 5). Gravity (0, 100).
pub fn coupled_oscillators(points: usize) -> Result<Preset, springnet_core::ConfigError> {
    let chain = build_hanging_chain(&HangingChainConfig {
        left_anchor: Vec2::new(100.0, 100.0),
        right_anchor: Vec2::new(700.0, 100.0),
        point_count: points,
        drop: 200.0,
        point_mass: 1.0,
        vertical: LinkSpec::Rod,
        horizontal: Some(LinkSpec::Spring(SpringParams::new(100.0, 10.0, 5.0))),
    })?;
    Ok(Preset {
        network: chain.network,
        config: SimulationConfig::new().with_gravity(Vec2::new(0.0, 100.0)),
        dt: 1.0 / 60.0,
    })
}

/// Seven uncoupled rod pendulums: anchors from (250, 100) to (650, 100),
/// balls of mass 40 on rods of length 300, no neighbor links.
/// Gravity (0, 200).
pub fn newton_pendulum(points: usize) -> Result<Preset, springnet_core::ConfigError> {
    let chain = build_hanging_chain(&HangingChainConfig {
        left_anchor: Vec2::new(250.0, 100.0),
        right_anchor: Vec2::new(650.0, 100.0),
        point_count: points,
        drop: 300.0,
        point_mass: 40.0,
        vertical: LinkSpec::Rod,
        horizontal: None,
    })?;
    Ok(Preset {
        network: chain.network,
        config: SimulationConfig::new().with_gravity(Vec2::new(0.0, 200.0)),
        dt: 1.0 / 60.0,
    })
}

/// Pre-tensioned rope between (30, 120) and (770, 120) with a loaded
/// pendant chain hanging from its midpoint. The rope distributes a total
/// mass of 8 over its points; the pendant ends in a weight of mass 30
/// placed 150 above the midpoint, which gravity pulls through the rope.
/// Gravity (0, 100).
pub fn loaded_rope(base_points: usize) -> Result<Preset, springnet_core::ConfigError> {
    let rope_stiffness = 7.0 * base_points as f32;
    let rope_damping = 0.05;
    let mut rope = build_rope(&RopeConfig {
        left_anchor: Vec2::new(30.0, 120.0),
        right_anchor: Vec2::new(770.0, 120.0),
        interior_count: base_points + 1,
        point_mass: 8.0 / base_points as f32,
        stiffness: rope_stiffness,
        damping: rope_damping,
        tension_delta: 150.0,
    })?;
    let midpoint = rope.midpoint();
    attach_pendant(
        &mut rope.network,
        midpoint,
        &PendantConfig {
            link_count: 3,
            drop: 150.0,
            point_mass: 1.0,
            weight_mass: 30.0,
            stiffness: rope_stiffness / 2.0,
            damping: rope_damping / 2.0,
        },
    )?;
    Ok(Preset {
        network: rope.network,
        config: SimulationConfig::new().with_gravity(Vec2::new(0.0, 100.0)),
        dt: 1.0 / 60.0,
    })
}

/// One loaded point of mass 7 at (400, 100) between anchors at (200, 100)
/// and (600, 100), held by two springs of rest length 100. Gravity (0, 10),
/// ten sub-steps per frame as in the original script.
pub fn two_springs() -> Result<Preset, springnet_core::ConfigError> {
    let rope = build_rope(&RopeConfig {
        left_anchor: Vec2::new(200.0, 100.0),
        right_anchor: Vec2::new(600.0, 100.0),
        interior_count: 1,
        point_mass: 7.0,
        stiffness: 0.2,
        damping: 0.05,
        tension_delta: 100.0,
    })?;
    Ok(Preset {
        network: rope.network,
        config: SimulationConfig::new()
            .with_gravity(Vec2::new(0.0, 10.0))
            .with_sub_steps(10),
        dt: 1.0 / 60.0,
    })
}

/// A single spring pendulum: pivot at (400, 100), unit-mass point released
/// at (450, 100) on a spring of rest length 200 (stiffness 0.2,
/// damping 0.05). Gravity (0, 10), ten sub-steps per frame.
pub fn spring_pendulum() -> Result<Preset, springnet_core::ConfigError> {
    let mut network = ConstraintNetwork::new();
    let pivot = network.add_fixed(Vec2::new(400.0, 100.0));
    let point = network.add_dynamic(Vec2::new(450.0, 100.0), 1.0)?;
    network.add_spring(pivot, point, SpringParams::new(200.0, 0.2, 0.05))?;
    Ok(Preset {
        network,
        config: SimulationConfig::new()
            .with_gravity(Vec2::new(0.0, 10.0))
            .with_sub_steps(10),
        dt: 1.0 / 60.0,
    })
}
