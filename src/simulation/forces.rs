//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait, the set that sums its terms, and
//! direct Newtonian gravity

use log::warn;

use crate::simulation::error::SimError;
use crate::simulation::params::{DegeneratePolicy, Parameters};
use crate::simulation::states::{BodyRegistry, NVec3};

/// Collection of acceleration terms.
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
#[derive(Default)]
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `registry`
    /// - `out[i]` is set to the sum of contributions for the i-th body of `registry.all()`
    /// - on error `out` holds partial sums and must not be applied
    pub fn accumulate_accels(&self, registry: &BodyRegistry, out: &mut [NVec3]) -> Result<(), SimError> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(registry, out)?;
        }
        Ok(())
    }
}

/// Acceleration source operating on a [`BodyRegistry`].
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, registry: &BodyRegistry, out: &mut [NVec3]) -> Result<(), SimError>;
}

/// Newtonian gravity, direct all-pairs sum.
///
/// O(n^2) per evaluation. Fine for tens of bodies, it does not scale to
/// large systems (no tree or grid approximation).
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub degenerate: DegeneratePolicy,
}

impl NewtonianGravity {
    pub fn from_parameters(p: &Parameters) -> Self {
        Self {
            G: p.G,
            degenerate: p.degenerate,
        }
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, registry: &BodyRegistry, out: &mut [NVec3]) -> Result<(), SimError> {
        let bodies = registry.bodies();

        for (i, bi) in bodies.iter().enumerate() {
            for (j, bj) in bodies.iter().enumerate() {
                if i == j {
                    continue;
                }

                // points from i to j, i is pulled along +r
                let r = bj.x - bi.x;
                let dist = r.norm();

                let dist = match self.degenerate {
                    // coincident bodies exert no pull under a floor
                    DegeneratePolicy::Floor { .. } if dist == 0.0 => continue,
                    DegeneratePolicy::Floor { min_separation } => dist.max(min_separation),
                    DegeneratePolicy::Reject => dist,
                };

                // a_i += G * m_j * r / |r|^3
                let coef = self.G * bj.mass() / (dist * dist * dist);
                let pull = coef * r;

                // zero |r|^3 gives inf/NaN, tiny |r|^3 overflows to inf
                if !coef.is_finite() || !pull.iter().all(|a| a.is_finite()) {
                    warn!("degenerate separation {dist:e} AU between bodies {} and {}", bi.id(), bj.id());
                    return Err(SimError::DegenerateGeometry {
                        first: bi.id(),
                        second: bj.id(),
                        separation: dist,
                    });
                }

                out[i] += pull;
            }
        }

        Ok(())
    }
}
