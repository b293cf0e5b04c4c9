//! Physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G` in AU^3 / (M_E * yr^2)
//! - how the gravity term treats (near-)coincident bodies

/// Gravitational constant in AU^3 / (Earth mass * year^2)
pub const G_SOLAR: f64 = 1.1857e-4;

/// What the gravity term does when two bodies (nearly) coincide
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DegeneratePolicy {
    /// Fail the step on exactly zero separation, nothing is mutated
    Reject,
    /// Never use a distance below `min_separation` in |r|^3
    Floor { min_separation: f64 },
}

impl Default for DegeneratePolicy {
    fn default() -> Self {
        DegeneratePolicy::Reject
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub degenerate: DegeneratePolicy, // zero-distance handling
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: G_SOLAR,
            degenerate: DegeneratePolicy::default(),
        }
    }
}
