//! Simulation configuration.

use glam::Vec2;

use crate::error::ConfigError;

/// Configuration for [`Simulator`](crate::simulator::Simulator).
///
/// All knobs the original demos hard-coded in module scope live here and
/// are supplied at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Uniform gravity acceleration applied to every dynamic body.
    pub gravity: Vec2,
    /// Fixed sub-steps each `step(dt)` is subdivided into. The stock demos
    /// use 1 or 10.
    pub sub_steps: usize,
    /// Rod correction passes per sub-step. One pass is the stock
    /// approximation; more passes tighten long rod chains.
    pub rod_iterations: usize,
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self {
            gravity: Vec2::ZERO,
            sub_steps: 1,
            rod_iterations: 1,
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps;
        self
    }

    pub fn with_rod_iterations(mut self, rod_iterations: usize) -> Self {
        self.rod_iterations = rod_iterations;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidGravity(self.gravity.x, self.gravity.y));
        }
        if self.sub_steps == 0 {
            return Err(ConfigError::InvalidSubSteps);
        }
        if self.rod_iterations == 0 {
            return Err(ConfigError::InvalidRodIterations);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
