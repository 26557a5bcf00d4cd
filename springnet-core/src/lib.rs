//! Mass-spring-rod network simulation.
//!
//! A minimal 2D physics core for the systems the stock demos wire up:
//! point masses and fixed anchors, damped springs, rigid rods, chained and
//! branching topologies, pointer dragging, and reset. Rendering, windowing,
//! and input polling stay outside; an external layer reads body positions
//! and constraint endpoints after each step and feeds pointer events to the
//! [`InteractionController`].

pub mod body;
pub mod builder;
pub mod config;
pub mod constraint;
pub mod error;
pub mod interaction;
pub mod network;
pub mod simulator;

pub use body::{Body, BodyKind};
pub use builder::{
    attach_pendant, build_hanging_chain, build_rope, AttachedPendant, BuiltChain, BuiltRope,
    HangingChainConfig, LinkSpec, PendantConfig, RopeConfig,
};
pub use config::SimulationConfig;
pub use constraint::{Constraint, DampedSpring, RigidRod, SpringParams};
pub use error::{ConfigError, StepError};
pub use interaction::InteractionController;
pub use network::{BodyHandle, ConstraintNetwork};
pub use simulator::Simulator;

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
