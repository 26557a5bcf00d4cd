//! Tests for fixed-step simulation: gravity, sub-steps, validation

use glam::Vec2;
use springnet_core::tests::test_helpers::{approx_eq_vec2, pivot_bob_spring};
use springnet_core::{
    ConfigError, ConstraintNetwork, SimulationConfig, Simulator, SpringParams, StepError,
};

fn free_body_network() -> ConstraintNetwork {
    let mut network = ConstraintNetwork::new();
    network
        .add_dynamic(Vec2::ZERO, 2.0)
        .expect("mass is valid");
    network
}

#[test]
fn test_gravity_accelerates_dynamic_bodies() {
    let mut network = free_body_network();
    let config = SimulationConfig::new().with_gravity(Vec2::new(0.0, 10.0));
    let mut simulator = Simulator::new(config).expect("config is valid");

    // One step of dt = 0.5: v = g*dt = (0, 5), x = v*dt = (0, 2.5).
    // Gravity scales with mass and divides back out in integration.
    simulator.step(&mut network, 0.5).expect("step");

    let body = &network.bodies()[0];
    assert!(approx_eq_vec2(body.velocity, Vec2::new(0.0, 5.0), 1e-5));
    assert!(approx_eq_vec2(body.position, Vec2::new(0.0, 2.5), 1e-5));
}

#[test]
fn test_non_positive_dt_is_rejected() {
    let mut network = free_body_network();
    let mut simulator = Simulator::new(SimulationConfig::new()).expect("config is valid");

    assert!(matches!(
        simulator.step(&mut network, 0.0),
        Err(StepError::InvalidTimeStep(_))
    ));
    assert!(matches!(
        simulator.step(&mut network, -1.0),
        Err(StepError::InvalidTimeStep(_))
    ));
    assert!(matches!(
        simulator.step(&mut network, f32::NAN),
        Err(StepError::InvalidTimeStep(_))
    ));
    assert!(matches!(
        simulator.step(&mut network, f32::INFINITY),
        Err(StepError::InvalidTimeStep(_))
    ));

    // Rejected steps do not advance the simulation.
    assert_eq!(simulator.steps_taken(), 0);
    assert!(!simulator.has_started());
    assert_eq!(network.bodies()[0].position, Vec2::ZERO);
}

#[test]
fn test_step_counter_tracks_completed_steps() {
    let mut network = free_body_network();
    let mut simulator = Simulator::new(SimulationConfig::new()).expect("config is valid");

    assert!(!simulator.has_started());
    for _ in 0..3 {
        simulator.step(&mut network, 1.0 / 60.0).expect("step");
    }
    assert!(simulator.has_started());
    assert_eq!(simulator.steps_taken(), 3);
}

#[test]
fn test_sub_steps_match_manual_subdivision() {
    let params = SpringParams::new(100.0, 5.0, 0.3);
    let gravity = Vec2::new(0.0, 10.0);
    let dt = 1.0 / 60.0;

    // One frame at 10 sub-steps against ten undivided frames of dt/10:
    // identical arithmetic, identical trajectories.
    let (mut subdivided, _, bob_a) =
        pivot_bob_spring(Vec2::ZERO, Vec2::new(130.0, 0.0), params);
    let config = SimulationConfig::new().with_gravity(gravity).with_sub_steps(10);
    let mut sim_a = Simulator::new(config).expect("config is valid");
    sim_a.step(&mut subdivided, dt).expect("step");

    let (mut manual, _, bob_b) = pivot_bob_spring(Vec2::ZERO, Vec2::new(130.0, 0.0), params);
    let config = SimulationConfig::new().with_gravity(gravity);
    let mut sim_b = Simulator::new(config).expect("config is valid");
    for _ in 0..10 {
        sim_b.step(&mut manual, dt / 10.0).expect("step");
    }

    assert_eq!(
        subdivided.body(bob_a).position,
        manual.body(bob_b).position
    );
    assert_eq!(
        subdivided.body(bob_a).velocity,
        manual.body(bob_b).velocity
    );
}

#[test]
fn test_spring_at_rest_is_in_equilibrium() {
    let params = SpringParams::new(100.0, 5.0, 0.3);
    let (mut network, _, bob) = pivot_bob_spring(Vec2::ZERO, Vec2::new(100.0, 0.0), params);
    let mut simulator = Simulator::new(SimulationConfig::new()).expect("config is valid");

    // No gravity, spring exactly at rest, zero velocity: nothing moves.
    for _ in 0..50 {
        simulator.step(&mut network, 1.0 / 60.0).expect("step");
    }

    assert_eq!(network.body(bob).position, Vec2::new(100.0, 0.0));
    assert_eq!(network.body(bob).velocity, Vec2::ZERO);
}

#[test]
fn test_fixed_bodies_never_move() {
    let params = SpringParams::new(50.0, 5.0, 0.3);
    let (mut network, pivot, _) = pivot_bob_spring(Vec2::new(4.0, 8.0), Vec2::new(120.0, 0.0), params);
    let config = SimulationConfig::new().with_gravity(Vec2::new(0.0, 100.0));
    let mut simulator = Simulator::new(config).expect("config is valid");

    for _ in 0..200 {
        simulator.step(&mut network, 1.0 / 60.0).expect("step");
    }

    assert_eq!(network.body(pivot).position, Vec2::new(4.0, 8.0));
    assert_eq!(network.body(pivot).velocity, Vec2::ZERO);
}

#[test]
fn test_damped_oscillation_decays() {
    // A bob released at rest, stretched 20 past the 100 rest length.
    // With damping the peak stretch over the second half of the run must
    // fall below the peak over the first half.
    let params = SpringParams::new(100.0, 5.0, 0.5);
    let (mut network, pivot, bob) = pivot_bob_spring(Vec2::ZERO, Vec2::new(120.0, 0.0), params);
    let mut simulator = Simulator::new(SimulationConfig::new()).expect("config is valid");

    let mut early_peak: f32 = 0.0;
    let mut late_peak: f32 = 0.0;
    for step in 0..2400 {
        simulator.step(&mut network, 1.0 / 60.0).expect("step");
        let stretch = (network
            .body(pivot)
            .position
            .distance(network.body(bob).position)
            - 100.0)
            .abs();
        if step < 1200 {
            early_peak = early_peak.max(stretch);
        } else {
            late_peak = late_peak.max(stretch);
        }
    }

    assert!(
        late_peak < early_peak,
        "amplitude grew: early {} late {}",
        early_peak,
        late_peak
    );
    assert!(early_peak > 1.0, "the bob never oscillated");
}

#[test]
fn test_undamped_spring_keeps_oscillating() {
    let params = SpringParams::new(100.0, 5.0, 0.0);
    let (mut network, pivot, bob) = pivot_bob_spring(Vec2::ZERO, Vec2::new(120.0, 0.0), params);
    let mut simulator = Simulator::new(SimulationConfig::new()).expect("config is valid");

    let mut late_peak: f32 = 0.0;
    for step in 0..2400 {
        simulator.step(&mut network, 1.0 / 60.0).expect("step");
        if step >= 1200 {
            let stretch = (network
                .body(pivot)
                .position
                .distance(network.body(bob).position)
                - 100.0)
                .abs();
            late_peak = late_peak.max(stretch);
        }
    }

    assert!(late_peak > 10.0, "undamped oscillation died out at {}", late_peak);
}

#[test]
fn test_zero_sub_steps_is_rejected() {
    let config = SimulationConfig::new().with_sub_steps(0);
    assert_eq!(Simulator::new(config).err(), Some(ConfigError::InvalidSubSteps));
}

#[test]
fn test_zero_rod_iterations_is_rejected() {
    let config = SimulationConfig::new().with_rod_iterations(0);
    assert_eq!(
        Simulator::new(config).err(),
        Some(ConfigError::InvalidRodIterations)
    );
}

#[test]
fn test_non_finite_gravity_is_rejected() {
    let config = SimulationConfig::new().with_gravity(Vec2::new(f32::NAN, 0.0));
    assert!(matches!(
        Simulator::new(config),
        Err(ConfigError::InvalidGravity(..))
    ));
}
