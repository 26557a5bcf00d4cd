//! Error types for network construction and stepping.

use thiserror::Error;

/// Errors raised while validating a builder configuration or mutating a
/// [`ConstraintNetwork`](crate::network::ConstraintNetwork).
///
/// Construction fails fast: a builder that returns one of these has added
/// nothing to the caller's world.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("point count must be at least {min}, got {got}")]
    TooFewPoints { min: usize, got: usize },

    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f32),

    #[error("rest length must be non-negative and finite, got {0}")]
    InvalidRestLength(f32),

    #[error("stiffness must be non-negative and finite, got {0}")]
    InvalidStiffness(f32),

    #[error("damping must be non-negative and finite, got {0}")]
    InvalidDamping(f32),

    #[error("rod length must be positive and finite, got {0}")]
    InvalidRodLength(f32),

    #[error("anchor offset must be finite, got ({0}, {1})")]
    InvalidAnchorOffset(f32, f32),

    #[error("left anchor x ({left}) must be less than right anchor x ({right})")]
    AnchorsNotOrdered { left: f32, right: f32 },

    #[error("anchors must share a y coordinate, got {left} and {right}")]
    AnchorsNotAligned { left: f32, right: f32 },

    #[error("anchor coordinates must be finite")]
    InvalidAnchor,

    #[error("drop distance must be non-zero and finite, got {0}")]
    InvalidDrop(f32),

    #[error("tension delta must be finite, got {0}")]
    InvalidTensionDelta(f32),

    #[error("body index {index} out of bounds (body count {count})")]
    BodyOutOfBounds { index: usize, count: usize },

    #[error("constraint endpoints must differ, got body {0} on both ends")]
    SelfConstraint(usize),

    #[error("bodies are coincident, rod length cannot be captured")]
    CoincidentBodies,

    #[error("gravity vector must be finite, got ({0}, {1})")]
    InvalidGravity(f32, f32),

    #[error("sub-step count must be at least 1")]
    InvalidSubSteps,

    #[error("rod iteration count must be at least 1")]
    InvalidRodIterations,
}

/// Errors raised by [`Simulator::step`](crate::simulator::Simulator::step).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepError {
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f32),
}
