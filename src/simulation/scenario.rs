//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - the body registry at t = 0 (`BodyRegistry`)
//! - the integrator with its force set and clock (`Integrator`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems

use bevy::prelude::Resource;
use log::info;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::clock::SimulationClock;
use crate::simulation::error::SimError;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::Integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::BodyRegistry;

/// Bevy resource representing a fully-initialized simulation scenario
///
/// The registry is owned here and lent to the integrator on every step,
/// the viewer only ever reads it
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub registry: BodyRegistry,
    pub integrator: Integrator,
}

impl Scenario {
    /// Newtonian gravity from `parameters` over an existing registry
    pub fn new(registry: BodyRegistry, parameters: Parameters, clock: SimulationClock) -> Self {
        let forces = AccelSet::new().with(NewtonianGravity::from_parameters(&parameters));

        Self {
            parameters,
            registry,
            integrator: Integrator::new(forces, clock),
        }
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Bodies: map `BodyConfig` -> registry entries, in file order
        let mut registry = BodyRegistry::new();
        for bc in &cfg.bodies {
            registry.create(bc.m, bc.position()?, bc.velocity()?)?;
        }

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            degenerate: p_cfg.degenerate.to_policy()?,
        };

        let clock = SimulationClock::new(cfg.clock.scale_index, cfg.clock.paused);

        info!(
            "scenario: {} bodies, G = {:e}, {:?}, scale {} per second{}",
            registry.len(),
            parameters.G,
            parameters.degenerate,
            clock.scale_label(),
            if clock.is_paused() { " (paused)" } else { "" },
        );

        Ok(Self::new(registry, parameters, clock))
    }

    /// Step the owned registry by `real_seconds` of wall-clock time
    pub fn advance(&mut self, real_seconds: f64) -> Result<(), SimError> {
        let Scenario {
            registry,
            integrator,
            ..
        } = self;
        integrator.advance(registry, real_seconds)
    }
}
