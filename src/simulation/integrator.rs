//! Fixed-form leapfrog integrator driven by wall-clock frame deltas
//!
//! `leapfrog_step` advances a registry by a simulated `dt`.
//! `Integrator` wraps it with the pause flag and the time-scale table.

use log::trace;

use super::clock::SimulationClock;
use super::error::SimError;
use super::forces::AccelSet;
use super::states::{BodyRegistry, NVec3};

/// Advance every body by `dt` simulated years using one force evaluation.
///
/// x_n+1 = x_n + dt * (v_n + a_n * dt / 2)
/// v_n+1 = v_n + dt * a_n
///
/// All accelerations are taken from the positions at the start of the step.
/// If the force set fails, no body is touched.
pub fn leapfrog_step(registry: &mut BodyRegistry, forces: &AccelSet, dt: f64) -> Result<(), SimError> {
    let n = registry.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    // a_n for every body, from the unmodified state
    let mut acc = vec![NVec3::zeros(); n];
    forces.accumulate_accels(registry, &mut acc)?;

    for (b, a) in registry.bodies_mut().iter_mut().zip(acc.iter()) {
        // position uses v_n, so it goes first
        b.x += dt * (b.v + *a * dt / 2.0);
        b.v += *a * dt;
    }

    Ok(())
}

/// Steps a registry once per frame at the clock's current time scale
pub struct Integrator {
    pub forces: AccelSet,
    pub clock: SimulationClock,
}

impl Integrator {
    pub fn new(forces: AccelSet, clock: SimulationClock) -> Self {
        Self { forces, clock }
    }

    /// Advance `registry` by `real_seconds` of wall-clock time.
    /// Paused clocks make this a no-op.
    pub fn advance(&self, registry: &mut BodyRegistry, real_seconds: f64) -> Result<(), SimError> {
        if !real_seconds.is_finite() || real_seconds < 0.0 {
            return Err(SimError::InvalidElapsed(real_seconds));
        }
        if self.clock.is_paused() {
            return Ok(());
        }

        let dt = self.clock.years_per_second() * real_seconds;
        trace!("advance: {real_seconds} s real -> dt = {dt:e} yr ({} bodies)", registry.len());

        leapfrog_step(registry, &self.forces, dt)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.clock.set_paused(paused);
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn set_scale_index(&mut self, index: i64) {
        self.clock.set_scale_index(index);
    }

    pub fn scale_label(&self) -> &'static str {
        self.clock.scale_label()
    }
}
