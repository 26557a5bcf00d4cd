//! Fixed-step advancement of a constraint network.

use crate::config::SimulationConfig;
use crate::constraint::Constraint;
use crate::error::{ConfigError, StepError};
use crate::network::ConstraintNetwork;

/// Advances a [`ConstraintNetwork`] by fixed time steps.
///
/// Each step runs, per sub-step and in deterministic insertion order:
/// gravity accumulation, spring force accumulation, integration, then the
/// configured number of rod correction passes.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
    steps_taken: u64,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            steps_taken: 0,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Completed calls to [`step`](Self::step).
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Whether the simulator has left its idle state and stepped at least
    /// once.
    pub fn has_started(&self) -> bool {
        self.steps_taken > 0
    }

    /// Advance the network by `dt`, internally subdivided into the
    /// configured sub-steps.
    pub fn step(&mut self, network: &mut ConstraintNetwork, dt: f32) -> Result<(), StepError> {
        if !(dt > 0.0) || !dt.is_finite() {
            return Err(StepError::InvalidTimeStep(dt));
        }

        let sub_dt = dt / self.config.sub_steps as f32;
        for _ in 0..self.config.sub_steps {
            self.sub_step(network, sub_dt);
        }
        self.steps_taken += 1;
        Ok(())
    }

    fn sub_step(&self, network: &mut ConstraintNetwork, dt: f32) {
        let gravity = self.config.gravity;
        let (constraints, bodies) = network.parts_mut();

        for body in bodies.iter_mut() {
            if body.is_dynamic() {
                body.apply_force(gravity * body.mass);
            }
        }

        for constraint in constraints {
            if let Constraint::Spring(spring) = constraint {
                spring.apply(bodies);
            }
        }

        for body in bodies.iter_mut() {
            body.integrate(dt);
        }

        for _ in 0..self.config.rod_iterations {
            for constraint in constraints {
                if let Constraint::Rod(rod) = constraint {
                    rod.solve(bodies);
                }
            }
        }
    }
}
