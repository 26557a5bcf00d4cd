//! Unit tests for body state and semi-implicit Euler integration

use glam::Vec2;
use springnet_core::tests::test_helpers::{approx_eq_f32, approx_eq_vec2};
use springnet_core::Body;

#[test]
fn test_dynamic_integration_order() {
    let mut body = Body::dynamic(Vec2::ZERO, 2.0);
    body.apply_force(Vec2::new(4.0, -2.0));

    // Semi-implicit Euler: v += (f/m)*dt first, then x += v*dt.
    // v = (4,-2)/2 * 0.5 = (1, -0.5); x = (1,-0.5) * 0.5 = (0.5, -0.25)
    body.integrate(0.5);

    assert!(approx_eq_vec2(body.velocity, Vec2::new(1.0, -0.5), 1e-6));
    assert!(approx_eq_vec2(body.position, Vec2::new(0.5, -0.25), 1e-6));
}

#[test]
fn test_accumulator_cleared_by_integrate() {
    let mut body = Body::dynamic(Vec2::ZERO, 2.0);
    body.apply_force(Vec2::new(4.0, -2.0));
    body.integrate(0.5);

    // Second step with no new force: velocity must not change again,
    // position coasts by v*dt = (0.5, -0.25).
    body.integrate(0.5);

    assert!(approx_eq_vec2(body.velocity, Vec2::new(1.0, -0.5), 1e-6));
    assert!(approx_eq_vec2(body.position, Vec2::new(1.0, -0.5), 1e-6));
}

#[test]
fn test_forces_accumulate_within_step() {
    let mut body = Body::dynamic(Vec2::ZERO, 1.0);
    body.apply_force(Vec2::new(1.0, 0.0));
    body.apply_force(Vec2::new(2.0, 3.0));

    assert!(approx_eq_vec2(
        body.accumulated_force(),
        Vec2::new(3.0, 3.0),
        1e-6
    ));
}

#[test]
fn test_fixed_body_ignores_forces() {
    let mut body = Body::fixed(Vec2::new(10.0, 20.0));
    body.apply_force(Vec2::new(100.0, 100.0));

    assert_eq!(body.accumulated_force(), Vec2::ZERO);

    body.integrate(1.0);
    assert_eq!(body.position, Vec2::new(10.0, 20.0));
    assert_eq!(body.velocity, Vec2::ZERO);
}

#[test]
fn test_fixed_body_keeps_zero_velocity() {
    let mut body = Body::fixed(Vec2::ZERO);
    body.set_velocity(Vec2::new(5.0, 5.0));

    assert_eq!(body.velocity, Vec2::ZERO);
}

#[test]
fn test_fixed_body_moves_only_by_set_position() {
    let mut body = Body::fixed(Vec2::ZERO);
    body.set_position(Vec2::new(3.0, 4.0));

    assert_eq!(body.position, Vec2::new(3.0, 4.0));
}

#[test]
fn test_inv_mass() {
    let body = Body::dynamic(Vec2::ZERO, 4.0);
    assert!(approx_eq_f32(body.inv_mass(), 0.25, 1e-6));

    let anchor = Body::fixed(Vec2::ZERO);
    assert_eq!(anchor.inv_mass(), 0.0);
}

#[test]
fn test_zero_force_zero_velocity_is_stationary() {
    let mut body = Body::dynamic(Vec2::new(7.0, 7.0), 1.0);
    for _ in 0..100 {
        body.integrate(1.0 / 60.0);
    }

    assert_eq!(body.position, Vec2::new(7.0, 7.0));
    assert_eq!(body.velocity, Vec2::ZERO);
}
